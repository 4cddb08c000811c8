//! Fire-once visibility observation.

use crate::reveal::RevealSpec;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Call `on_visible` the first time each target crosses `spec.threshold`,
/// then stop watching that target.
pub(crate) fn observe_once(
    targets: &[Element],
    spec: RevealSpec,
    mut on_visible: impl FnMut(Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(spec.threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(err) => log::warn!("IntersectionObserver unavailable: {err:?}"),
    }
}
