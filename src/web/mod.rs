//! Browser binding.
//!
//! Compiled only for `wasm32`. The pure modules decide what the page should
//! look like; this layer looks elements up, listens for events, runs timers
//! and writes the results back into the DOM.
//!
//! Each component mounts independently. A component whose elements are
//! missing logs at debug level and stays inert; the rest of the page keeps
//! working.

mod contact;
mod dom;
mod effects;
mod logger;
mod nav;
mod observer;
mod reveal;
mod scroll;
mod widgets;

#[cfg(test)]
mod fixture;

use crate::config::{self, SiteConfig};
use crate::contract;
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Handles to the global window and document, cloned into listeners.
#[derive(Clone)]
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

/// Module entry point, run by the wasm-bindgen loader.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    logger::init(log::LevelFilter::Warn);
    let Some(page) = Page::current() else {
        log::error!("no window or document; nothing to mount");
        return;
    };
    if page.document.ready_state() == "loading" {
        let document = page.document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| mount_all(&page)).forget();
    } else {
        mount_all(&page);
    }
}

/// Close the success modal. Exported for inline `onclick` handlers.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    contact::close_modal();
}

fn mount_all(page: &Page) {
    let config = Rc::new(load_config(page));
    log::set_max_level(config.logging.level.to_level_filter());

    widgets::mount_typing(page, &config);
    nav::mount_menu(page);
    nav::mount_anchors(page, &config);
    scroll::mount(page, &config);
    reveal::mount_skills(page, &config);
    reveal::mount_counters(page, &config);
    reveal::mount_cards(page, &config);
    contact::mount(page, &config);
    effects::mount_floating_icons(page, &config);
    effects::mount_trail(page, &config);
    widgets::mount_theme(page);
    widgets::mount_filter(page, &config);
    reveal::mount_lazy_images(page);
    widgets::mount_carousel(page, &config);
    effects::mount_preloader(page, &config);
    log::info!("portfolio interactions mounted");
}

/// Read the inline TOML config document, falling back to stock defaults.
fn load_config(page: &Page) -> SiteConfig {
    let Some(source) = dom::query(&page.document, contract::CONFIG_SCRIPT)
        .and_then(|script| script.text_content())
    else {
        return SiteConfig::default();
    };
    match config::config_from_str(&source) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring inline config: {err}");
            SiteConfig::default()
        }
    }
}
