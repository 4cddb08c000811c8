//! Guarded DOM access.
//!
//! Lookups never fail loudly: a selector with no match is a debug line and a
//! `None`, a selector the browser rejects is a warning. Style and class
//! writes on the wrong element type are skipped.

use crate::scroll::ScrollMetrics;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

/// Anything that can run `querySelector`.
pub(crate) trait Scope {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

pub(crate) fn query(scope: &impl Scope, selector: &str) -> Option<Element> {
    match scope.select(selector) {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            log::debug!("no element matches {selector:?}");
            None
        }
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            None
        }
    }
}

/// Every match, in document order.
pub(crate) fn query_all(scope: &impl Scope, selector: &str) -> Vec<Element> {
    let nodes = match scope.select_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    if elements.is_empty() {
        log::debug!("no elements match {selector:?}");
    }
    elements
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("could not set {property}: {err:?}");
    }
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("could not update class {class:?}: {err:?}");
    }
}

pub(crate) fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::warn!("could not set {name}: {err:?}");
    }
}

/// `offsetTop`, or 0 for non-HTML elements.
pub(crate) fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |html| f64::from(html.offset_top()))
}

/// `clientHeight`.
pub(crate) fn client_height(element: &Element) -> f64 {
    f64::from(element.client_height())
}

pub(crate) fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// One layout read for the scroll observers.
pub(crate) fn scroll_metrics(window: &Window, document: &Document) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y: window.page_y_offset().unwrap_or(0.0),
        document_height: document
            .body()
            .map_or(0.0, |body| f64::from(body.scroll_height())),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        viewport_width: viewport_width(window),
    }
}

pub(crate) fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Timer delay in whole milliseconds, saturating.
pub(crate) fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
