//! Mobile menu and smooth anchor scrolling.

use super::{Page, dom};
use crate::config::SiteConfig;
use crate::contract::{self, attr, class};
use crate::nav::{self, MenuState};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;

pub(crate) fn mount_menu(page: &Page) {
    let (Some(hamburger), Some(menu)) = (
        dom::query(&page.document, contract::HAMBURGER),
        dom::query(&page.document, contract::NAV_MENU),
    ) else {
        return;
    };
    let state = Rc::new(Cell::new(MenuState::default()));
    let targets = Rc::new([hamburger.clone(), menu]);

    {
        let state = Rc::clone(&state);
        let targets = Rc::clone(&targets);
        EventListener::new(&hamburger, "click", move |_| {
            let mut menu = state.get();
            menu.toggle();
            state.set(menu);
            render_menu(&targets[..], menu);
        })
        .forget();
    }

    for link in dom::query_all(&page.document, contract::NAV_LINK) {
        let state = Rc::clone(&state);
        let targets = Rc::clone(&targets);
        EventListener::new(&link, "click", move |_| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            render_menu(&targets[..], menu);
        })
        .forget();
    }
}

fn render_menu(targets: &[Element], menu: MenuState) {
    for target in targets {
        dom::set_class(target, class::ACTIVE, menu.is_open());
    }
}

pub(crate) fn mount_anchors(page: &Page, config: &Rc<SiteConfig>) {
    for anchor in dom::query_all(&page.document, contract::ANCHOR_LINK) {
        let page = page.clone();
        let config = Rc::clone(config);
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute(attr::HREF).unwrap_or_default();
                let Some(id) = nav::anchor_target_id(&href) else {
                    return;
                };
                let Some(target) = page.document.get_element_by_id(id) else {
                    log::debug!("anchor {href:?} points at nothing");
                    return;
                };
                let top = nav::anchor_scroll_top(dom::offset_top(&target), &config.nav);
                dom::smooth_scroll_to(&page.window, top);
            },
        )
        .forget();
    }
}
