//! # Portfolio Interactions
//!
//! The client-side behavior of a single-page developer portfolio, compiled
//! to WebAssembly: typing headline, sticky navigation, scroll-triggered
//! reveals, a validated contact form, theme switching, project filtering, a
//! testimonials carousel and a handful of cosmetic effects.
//!
//! # Architecture: Pure Core, Thin Binding
//!
//! Every behavior is split in two:
//!
//! ```text
//! core module   (all targets)   state machines + pure functions, unit tested
//! web::*        (wasm32 only)   element lookup, listeners, timers, DOM writes
//! ```
//!
//! The core decides *what* the page should look like given a scroll offset, a
//! click or a timer tick; the binding measures, schedules and applies. This
//! keeps the logic testable with plain `cargo test` on the host, without a
//! browser. The binding itself is covered by `wasm-bindgen-test` cases run
//! with `wasm-pack test --headless --chrome -- --lib`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Inline/`config.toml` loading, validation, merging, theme CSS |
//! | [`contract`] | Selectors, classes and attributes the page must provide |
//! | [`typing`] | Typing-text cycler |
//! | [`nav`] | Mobile menu, navbar style, active link, anchor offsets |
//! | [`scroll`] | Frame-coalesced scroll dispatch, progress, back-to-top, parallax |
//! | [`reveal`] | Skill bars, counters and card reveal on first visibility |
//! | [`form`] | Contact form validation, simulated send, success modal |
//! | [`theme`] | Light/dark preference with pluggable persistence |
//! | [`filter`] | Project category filter with superseding clicks |
//! | [`carousel`] | Cyclic testimonials slider |
//! | [`trail`] | Bounded cursor trail |
//! | [`lazy`] | Deferred image sources |
//! | [`effects`] | Floating icon stagger, preloader schedule |
//! | [`markup`] | Maud rendering: sending label, reference page |
//! | [`scaffold`] | Writes a reference site to disk |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Scroll Listener
//!
//! Five behaviors follow the scroll position. They subscribe to a single
//! [`scroll::ScrollDispatcher`]; a burst of scroll events costs one animation
//! frame and one layout read, however many events the browser fires.
//!
//! ## Config in the Page
//!
//! The bundle reads its settings from a `<script type="application/toml">`
//! element rather than from compiled-in constants, so one build serves any
//! number of sites. Missing or broken config falls back to the stock
//! defaults with a console warning; the page never goes dead over a typo.
//!
//! ## Missing Elements Are Normal
//!
//! Every component looks up its own elements and quietly stays inert when
//! they are absent. A page without a testimonials slider still gets a
//! working contact form.

pub mod carousel;
pub mod config;
pub mod contract;
pub mod effects;
pub mod filter;
pub mod form;
pub mod lazy;
pub mod markup;
pub mod nav;
pub mod output;
pub mod reveal;
pub mod scaffold;
pub mod scroll;
pub mod theme;
pub mod trail;
pub mod typing;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
