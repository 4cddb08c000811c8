//! Floating icons, cursor trail and preloader.

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::contract::{self, class};
use crate::effects::{self, PreloaderSchedule};
use crate::trail::{self, Pointer, TrailQueue};
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

pub(crate) fn mount_floating_icons(page: &Page, config: &Rc<SiteConfig>) {
    for (index, icon) in dom::query_all(&page.document, contract::FLOATING_ICON)
        .iter()
        .enumerate()
    {
        let timing = effects::icon_timing(index, &config.effects);
        dom::set_style(icon, "animation-delay", &timing.delay);
        dom::set_style(icon, "animation-duration", &timing.duration);
    }
}

// ============================================================================
// Cursor trail
// ============================================================================

struct TrailLoop {
    document: Document,
    body: HtmlElement,
    pointer: Rc<Cell<Pointer>>,
    dots: RefCell<TrailQueue<Element>>,
    max_opacity: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

impl TrailLoop {
    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            this.frame.borrow_mut().take();
            this.tick();
            this.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let dot = match self.document.create_element("div") {
            Ok(dot) => dot,
            Err(err) => {
                log::warn!("could not create trail dot: {err:?}");
                return;
            }
        };
        dot.set_class_name(class::CURSOR_TRAIL);
        dom::set_attr(&dot, "style", &trail::dot_style(self.pointer.get(), self.max_opacity));
        if let Err(err) = self.body.append_child(&dot) {
            log::warn!("could not attach trail dot: {err:?}");
            return;
        }

        let mut dots = self.dots.borrow_mut();
        if let Some(evicted) = dots.push(dot) {
            evicted.remove();
        }
        for (dot, opacity) in dots.with_opacity() {
            dom::set_style(dot, "opacity", &opacity.to_string());
        }
    }
}

pub(crate) fn mount_trail(page: &Page, config: &Rc<SiteConfig>) {
    if !trail::trail_enabled(dom::viewport_width(&page.window), &config.trail) {
        log::debug!("viewport too narrow for the cursor trail");
        return;
    }
    let Some(body) = page.document.body() else {
        return;
    };

    let pointer = Rc::new(Cell::new(Pointer::default()));
    let last = Rc::clone(&pointer);
    EventListener::new(&page.document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            last.set(Pointer {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        }
    })
    .forget();

    let trail = Rc::new(TrailLoop {
        document: page.document.clone(),
        body,
        pointer,
        dots: RefCell::new(TrailQueue::new(&config.trail)),
        max_opacity: config.trail.max_opacity,
        frame: RefCell::new(None),
    });
    trail.schedule();
}

// ============================================================================
// Preloader
// ============================================================================

pub(crate) fn mount_preloader(page: &Page, config: &Rc<SiteConfig>) {
    let Some(preloader) = dom::query(&page.document, contract::PRELOADER) else {
        return;
    };
    let schedule = PreloaderSchedule::new(&config.preloader);
    if page.document.ready_state() == "complete" {
        dismiss_preloader(preloader, schedule);
    } else {
        EventListener::once(&page.window, "load", move |_| {
            dismiss_preloader(preloader, schedule);
        })
        .forget();
    }
}

fn dismiss_preloader(preloader: Element, schedule: PreloaderSchedule) {
    Timeout::new(dom::millis(schedule.fade_after), move || {
        dom::set_style(&preloader, "opacity", "0");
        Timeout::new(dom::millis(schedule.hide_after), move || {
            dom::set_style(&preloader, "display", "none");
        })
        .forget();
    })
    .forget();
}
