//! One scroll listener, one layout read per frame, five observers.

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::contract::{self, attr, class};
use crate::nav::{self, NavbarStyle, SectionSpan};
use crate::scroll::{self, ScrollDispatcher, ScrollMetrics};
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) fn mount(page: &Page, config: &Rc<SiteConfig>) {
    let mut dispatcher = observers(page, config);
    if dispatcher.observer_count() == 0 {
        return;
    }

    dispatcher.flush(&dom::scroll_metrics(&page.window, &page.document));
    let dispatcher = Rc::new(RefCell::new(dispatcher));
    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    let page = page.clone();
    let window = page.window.clone();
    EventListener::new(&window, "scroll", move |_| {
        if !dispatcher.borrow_mut().request_frame() {
            return;
        }
        let dispatcher = Rc::clone(&dispatcher);
        let slot = Rc::clone(&pending);
        let page = page.clone();
        let handle = request_animation_frame(move |_| {
            slot.borrow_mut().take();
            let metrics = dom::scroll_metrics(&page.window, &page.document);
            dispatcher.borrow_mut().flush(&metrics);
        });
        *pending.borrow_mut() = Some(handle);
    })
    .forget();
}

/// A dispatcher with every scroll observer whose elements exist on the page.
fn observers(page: &Page, config: &Rc<SiteConfig>) -> ScrollDispatcher {
    let mut dispatcher = ScrollDispatcher::new();
    subscribe_navbar(&mut dispatcher, page, config);
    subscribe_active_link(&mut dispatcher, page, config);
    subscribe_back_to_top(&mut dispatcher, page, config);
    subscribe_parallax(&mut dispatcher, page, config);
    subscribe_progress(&mut dispatcher, page);
    dispatcher
}

fn subscribe_navbar(dispatcher: &mut ScrollDispatcher, page: &Page, config: &Rc<SiteConfig>) {
    let Some(navbar) = dom::query(&page.document, contract::NAVBAR) else {
        return;
    };
    let config = Rc::clone(config);
    dispatcher.subscribe(move |metrics: &ScrollMetrics| {
        let (background, shadow) =
            NavbarStyle::for_scroll(metrics.scroll_y, &config.nav).css(&config.nav);
        dom::set_style(&navbar, "background", background);
        dom::set_style(&navbar, "box-shadow", shadow);
    });
}

fn subscribe_active_link(dispatcher: &mut ScrollDispatcher, page: &Page, config: &Rc<SiteConfig>) {
    let sections = dom::query_all(&page.document, contract::SECTION);
    let links = dom::query_all(&page.document, contract::NAV_LINK);
    if sections.is_empty() || links.is_empty() {
        return;
    }
    let lookahead = config.nav.section_lookahead;
    dispatcher.subscribe(move |metrics: &ScrollMetrics| {
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|section| SectionSpan {
                id: section.get_attribute(attr::ID).unwrap_or_default(),
                top: dom::offset_top(section),
                height: dom::client_height(section),
            })
            .collect();
        let current = nav::active_section(&spans, metrics.scroll_y, lookahead);
        for link in &links {
            let href = link.get_attribute(attr::HREF).unwrap_or_default();
            dom::set_class(link, class::ACTIVE, nav::link_is_active(&href, current));
        }
    });
}

fn subscribe_back_to_top(dispatcher: &mut ScrollDispatcher, page: &Page, config: &Rc<SiteConfig>) {
    let Some(button) = dom::query(&page.document, contract::BACK_TO_TOP) else {
        return;
    };
    let window = page.window.clone();
    EventListener::new(&button, "click", move |_| dom::smooth_scroll_to(&window, 0.0)).forget();

    let threshold = config.back_to_top.threshold;
    dispatcher.subscribe(move |metrics: &ScrollMetrics| {
        dom::set_class(
            &button,
            class::SHOW,
            scroll::back_to_top_visible(metrics.scroll_y, threshold),
        );
    });
}

fn subscribe_parallax(dispatcher: &mut ScrollDispatcher, page: &Page, config: &Rc<SiteConfig>) {
    let Some(hero) = dom::query(&page.document, contract::HERO) else {
        return;
    };
    let rate = config.effects.parallax_rate;
    dispatcher.subscribe(move |metrics: &ScrollMetrics| {
        dom::set_style(
            &hero,
            "transform",
            &scroll::parallax_transform(metrics.scroll_y, rate),
        );
    });
}

fn subscribe_progress(dispatcher: &mut ScrollDispatcher, page: &Page) {
    let Some(bar) = dom::query(&page.document, contract::SCROLL_PROGRESS) else {
        return;
    };
    dispatcher.subscribe(move |metrics: &ScrollMetrics| {
        dom::set_style(&bar, "width", &format!("{}%", metrics.progress_percent()));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::fixture::{Fixture, has_class};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn at(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            ..ScrollMetrics::default()
        }
    }

    fn two_sections() -> Fixture {
        Fixture::new(
            r##"<nav>
                <a class="nav-link" href="#first">First</a>
                <a class="nav-link" href="#second">Second</a>
            </nav>
            <section id="first" style="height: 400px; margin: 0"></section>
            <section id="second" style="height: 400px; margin: 0"></section>"##,
        )
    }

    #[wasm_bindgen_test]
    fn link_of_the_section_in_view_is_active() {
        let fixture = two_sections();
        let config = Rc::new(SiteConfig::default());
        let mut dispatcher = observers(&fixture.page, &config);
        let links = fixture.all(contract::NAV_LINK);
        let second = fixture.get("#second");

        dispatcher.flush(&at(dom::offset_top(&second)));
        assert!(!has_class(&links[0], class::ACTIVE));
        assert!(has_class(&links[1], class::ACTIVE));
    }

    #[wasm_bindgen_test]
    fn active_link_clears_past_the_last_section() {
        let fixture = two_sections();
        let config = Rc::new(SiteConfig::default());
        let mut dispatcher = observers(&fixture.page, &config);
        let links = fixture.all(contract::NAV_LINK);
        let second = fixture.get("#second");

        dispatcher.flush(&at(dom::offset_top(&second)));
        assert!(has_class(&links[1], class::ACTIVE));

        let below = dom::offset_top(&second) + dom::client_height(&second);
        dispatcher.flush(&at(below));
        assert!(links.iter().all(|link| !has_class(link, class::ACTIVE)));
    }
}
