//! DOM fixtures for the binding's browser tests.
//!
//! Run with: `wasm-pack test --headless --chrome -- --lib`

use super::{Page, dom};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Markup mounted under `<body>` for one test, removed on drop.
pub(crate) struct Fixture {
    pub page: Page,
    root: Element,
}

impl Fixture {
    pub fn new(html: &str) -> Self {
        let page = Page::current().expect("test runs in a browser");
        let root = page.document.create_element("div").unwrap();
        root.set_inner_html(html);
        page.document.body().unwrap().append_child(&root).unwrap();
        Self { page, root }
    }

    pub fn get(&self, selector: &str) -> Element {
        dom::query(&self.root, selector).unwrap_or_else(|| panic!("fixture has no {selector}"))
    }

    pub fn all(&self, selector: &str) -> Vec<Element> {
        dom::query_all(&self.root, selector)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// Inline style value as the browser reports it back.
pub(crate) fn style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// A bubbling click, as a user would produce.
pub(crate) fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

/// Dispatch a plain event of `kind` at `element`.
pub(crate) fn fire(element: &Element, kind: &str) {
    let event = Event::new(kind).unwrap();
    element.dispatch_event(&event).unwrap();
}
