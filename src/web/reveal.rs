//! Visibility-driven effects: skill bars, counters, cards and lazy images.

use super::{Page, dom, observer};
use crate::config::SiteConfig;
use crate::contract::{self, attr, class};
use crate::lazy;
use crate::reveal::{self, CardStyle, CounterAnimation, CounterTarget, RevealSpec};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

pub(crate) fn mount_skills(page: &Page, config: &Rc<SiteConfig>) {
    let Some(section) = dom::query(&page.document, contract::SKILLS_SECTION) else {
        return;
    };
    let document = page.document.clone();
    let delay = dom::millis(reveal::skill_delay(&config.reveal));
    observer::observe_once(
        &[section],
        RevealSpec::skills(&config.reveal),
        move |_| {
            let document = document.clone();
            Timeout::new(delay, move || {
                for bar in dom::query_all(&document, contract::SKILL_PROGRESS) {
                    match reveal::skill_width(bar.get_attribute(attr::WIDTH).as_deref()) {
                        Some(width) => dom::set_style(&bar, "width", &width),
                        None => log::debug!("skill bar without a numeric {}", attr::WIDTH),
                    }
                }
            })
            .forget();
        },
    );
}

pub(crate) fn mount_counters(page: &Page, config: &Rc<SiteConfig>) {
    let counters = dom::query_all(&page.document, contract::STAT_NUMBER);
    let steps = config.reveal.counter_steps;
    let tick = dom::millis(CounterAnimation::tick_interval(&config.reveal));
    observer::observe_once(
        &counters,
        RevealSpec::counters(&config.reveal),
        move |counter| {
            let text = counter.text_content().unwrap_or_default();
            let Some(target) = CounterTarget::parse(&text) else {
                log::debug!("counter text {text:?} has no number");
                return;
            };
            run_counter(counter, CounterAnimation::new(target, steps), tick);
        },
    );
}

fn run_counter(counter: Element, mut animation: CounterAnimation, tick: u32) {
    Timeout::new(tick, move || {
        let Some(frame) = animation.next() else {
            return;
        };
        counter.set_text_content(Some(&frame));
        run_counter(counter, animation, tick);
    })
    .forget();
}

pub(crate) fn mount_cards(page: &Page, config: &Rc<SiteConfig>) {
    let cards = dom::query_all(&page.document, contract::REVEAL_CARDS);
    for card in &cards {
        apply_card_style(card, &CardStyle::hidden(&config.reveal));
    }
    observer::observe_once(&cards, RevealSpec::cards(&config.reveal), |card| {
        apply_card_style(&card, &CardStyle::revealed());
    });
}

fn apply_card_style(card: &Element, style: &CardStyle) {
    dom::set_style(card, "opacity", style.opacity);
    dom::set_style(card, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        dom::set_style(card, "transition", transition);
    }
}

pub(crate) fn mount_lazy_images(page: &Page) {
    let images = dom::query_all(&page.document, contract::LAZY_IMAGE);
    observer::observe_once(&images, RevealSpec::any_pixel(), |element| {
        let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        let deferred = image.get_attribute(attr::DEFERRED_SRC);
        let Some(src) = lazy::promoted_source(deferred.as_deref()) else {
            log::debug!("image with empty {}", attr::DEFERRED_SRC);
            return;
        };
        let loaded = element.clone();
        EventListener::once(image, "load", move |_| {
            dom::set_class(&loaded, class::LAZY, false);
        })
        .forget();
        image.set_src(src);
    });
}
