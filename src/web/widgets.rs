//! Self-contained widgets: typing text, theme toggle, project filter and
//! testimonials carousel.

use super::{Page, dom};
use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::contract::{self, attr, class};
use crate::filter::{CardTransition, Filter, FilterBoard};
use crate::theme::{MemoryStore, PreferenceStore, Theme, ThemeToggle};
use crate::typing::TypingCycler;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, Storage};

// ============================================================================
// Typing text
// ============================================================================

pub(crate) fn mount_typing(page: &Page, config: &Rc<SiteConfig>) {
    let Some(target) = dom::query(&page.document, contract::TYPING_TEXT) else {
        return;
    };
    let Some(cycler) = TypingCycler::new(&config.typing) else {
        log::warn!("no phrases to type");
        return;
    };
    schedule_typing(target, cycler, config.typing.start_delay_ms);
}

fn schedule_typing(target: Element, mut cycler: TypingCycler, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let frame = cycler.step();
        target.set_text_content(Some(&frame.text));
        schedule_typing(target, cycler, dom::millis(frame.next_delay));
    })
    .forget();
}

// ============================================================================
// Theme
// ============================================================================

/// `localStorage`, with an in-memory fallback when it is unavailable or a
/// write is refused (private browsing, quota).
struct LocalStore {
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    fn open(page: &Page) -> Self {
        let storage = match page.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self {
            storage,
            fallback: MemoryStore::default(),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.fallback.get(key).or_else(|| {
            self.storage
                .as_ref()
                .and_then(|storage| storage.get_item(key).ok().flatten())
        })
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            match storage.set_item(key, value) {
                Ok(()) => return,
                Err(err) => log::warn!("could not persist {key}: {err:?}"),
            }
        }
        self.fallback.set(key, value);
    }
}

pub(crate) fn mount_theme(page: &Page) {
    let Some(body) = page.document.body() else {
        return;
    };
    let mut toggle = ThemeToggle::load(LocalStore::open(page));
    dom::set_attr(&body, attr::THEME, toggle.current().as_str());

    let Some(button) = dom::query(&page.document, contract::THEME_TOGGLE) else {
        return;
    };
    let icon = dom::query(&button, contract::THEME_ICON);
    render_icon(icon.as_ref(), toggle.current());

    EventListener::new(&button, "click", move |_| {
        let theme = toggle.toggle();
        dom::set_attr(&body, attr::THEME, theme.as_str());
        render_icon(icon.as_ref(), theme);
    })
    .forget();
}

fn render_icon(icon: Option<&Element>, theme: Theme) {
    if let Some(icon) = icon {
        icon.set_class_name(theme.icon_class());
    }
}

// ============================================================================
// Project filter
// ============================================================================

pub(crate) fn mount_filter(page: &Page, config: &Rc<SiteConfig>) {
    let buttons = Rc::new(dom::query_all(&page.document, contract::FILTER_BUTTON));
    if buttons.is_empty() {
        return;
    }
    let cards = Rc::new(dom::query_all(&page.document, contract::PROJECT_CARD));
    let board = Rc::new(RefCell::new(FilterBoard::default()));

    for (index, button) in buttons.iter().enumerate() {
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let board = Rc::clone(&board);
        let config = Rc::clone(config);
        EventListener::new(button, "click", move |_| {
            let filter = Filter::parse(buttons[index].get_attribute(attr::FILTER).as_deref());
            let categories: Vec<Option<String>> = cards
                .iter()
                .map(|card| card.get_attribute(attr::CATEGORY))
                .collect();
            let categories: Vec<Option<&str>> =
                categories.iter().map(Option::as_deref).collect();
            let plan = board
                .borrow_mut()
                .select(index, &filter, &categories, &config.filter);

            for (i, button) in buttons.iter().enumerate() {
                dom::set_class(button, class::ACTIVE, i == plan.active_button);
            }
            for (card, transition) in cards.iter().zip(&plan.cards) {
                apply_transition(card, transition, plan.generation, &board);
            }
        })
        .forget();
    }
}

/// Immediate half of a card transition now, deferred half later unless a
/// newer click has superseded it.
fn apply_transition(
    card: &Element,
    transition: &CardTransition,
    generation: u64,
    board: &Rc<RefCell<FilterBoard>>,
) {
    let card = card.clone();
    let board = Rc::clone(board);
    match *transition {
        CardTransition::Show { delay } => {
            dom::set_style(&card, "display", "block");
            Timeout::new(dom::millis(delay), move || {
                if board.borrow().is_current(generation) {
                    dom::set_style(&card, "opacity", "1");
                    dom::set_style(&card, "transform", "scale(1)");
                }
            })
            .forget();
        }
        CardTransition::Hide { delay, scale } => {
            dom::set_style(&card, "opacity", "0");
            dom::set_style(&card, "transform", &format!("scale({scale})"));
            Timeout::new(dom::millis(delay), move || {
                if board.borrow().is_current(generation) {
                    dom::set_style(&card, "display", "none");
                }
            })
            .forget();
        }
    }
}

// ============================================================================
// Testimonials carousel
// ============================================================================

pub(crate) fn mount_carousel(page: &Page, config: &Rc<SiteConfig>) {
    if dom::query(&page.document, contract::TESTIMONIALS_SLIDER).is_none() {
        return;
    }
    let slides = Rc::new(dom::query_all(&page.document, contract::TESTIMONIAL));
    let Some(carousel) = Carousel::new(slides.len()) else {
        return;
    };
    render_slides(&slides, &carousel);
    let carousel = Rc::new(RefCell::new(carousel));

    let controls: [(&str, fn(&mut Carousel) -> usize); 2] = [
        (contract::SLIDER_NEXT, Carousel::next_slide),
        (contract::SLIDER_PREV, Carousel::prev_slide),
    ];
    for (selector, advance) in controls {
        let Some(control) = dom::query(&page.document, selector) else {
            continue;
        };
        let slides = Rc::clone(&slides);
        let carousel = Rc::clone(&carousel);
        EventListener::new(&control, "click", move |_| {
            let mut carousel = carousel.borrow_mut();
            advance(&mut carousel);
            render_slides(&slides, &carousel);
        })
        .forget();
    }

    let interval = dom::millis(Carousel::interval(&config.carousel));
    Interval::new(interval, move || {
        let mut carousel = carousel.borrow_mut();
        carousel.next_slide();
        render_slides(&slides, &carousel);
    })
    .forget();
}

fn render_slides(slides: &[Element], carousel: &Carousel) {
    for (i, slide) in slides.iter().enumerate() {
        let display = if carousel.is_visible(i) { "block" } else { "none" };
        dom::set_style(slide, "display", display);
    }
}
