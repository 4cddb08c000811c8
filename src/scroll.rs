//! Coalesced scroll dispatch and the scroll-driven readouts.
//!
//! Several behaviors react to scrolling: navbar style, active link,
//! back-to-top visibility, hero parallax and the progress bar. Rather than
//! each registering its own listener and re-reading layout on every event,
//! they subscribe to one [`ScrollDispatcher`]. A burst of scroll events
//! requests a single animation frame; in that frame the binding reads
//! [`ScrollMetrics`] once and the dispatcher hands them to every observer.

use std::fmt;

/// Layout measurements taken once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// `window.pageYOffset`.
    pub scroll_y: f64,
    /// `document.body.scrollHeight`.
    pub document_height: f64,
    /// `window.innerHeight`.
    pub viewport_height: f64,
    /// `window.innerWidth`.
    pub viewport_width: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable distance already traversed, in `[0, 100]`.
    ///
    /// Pages shorter than the viewport report 0.
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

/// Back-to-top button visibility: shown strictly above the threshold.
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Hero vertical offset for a scroll position.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// CSS `transform` for the hero at a scroll position.
pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    // `+ 0.0` folds -0 into 0 so the top of the page renders `translateY(0px)`.
    format!("translateY({}px)", parallax_offset(scroll_y, rate) + 0.0)
}

type Observer = Box<dyn FnMut(&ScrollMetrics)>;

/// Fans one per-frame measurement out to every scroll observer.
#[derive(Default)]
pub struct ScrollDispatcher {
    observers: Vec<Observer>,
    frame_pending: bool,
}

impl fmt::Debug for ScrollDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollDispatcher")
            .field("observers", &self.observers.len())
            .field("frame_pending", &self.frame_pending)
            .finish()
    }
}

impl ScrollDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&ScrollMetrics) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Record a scroll event.
    ///
    /// Returns `true` only for the first event since the last flush: that is
    /// the one that must schedule a frame. Later events in the same burst are
    /// absorbed.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Deliver one measurement to every observer and re-arm for the next burst.
    pub fn flush(&mut self, metrics: &ScrollMetrics) {
        self.frame_pending = false;
        for observer in &mut self.observers {
            observer(metrics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
            viewport_width: 1280.0,
        }
    }

    #[test]
    fn progress_is_fraction_of_scrollable_distance() {
        assert_eq!(metrics(0.0).progress_percent(), 0.0);
        assert_eq!(metrics(1000.0).progress_percent(), 50.0);
        assert_eq!(metrics(2000.0).progress_percent(), 100.0);
    }

    #[test]
    fn progress_clamps_overscroll_and_short_pages() {
        assert_eq!(metrics(2400.0).progress_percent(), 100.0);
        assert_eq!(metrics(-50.0).progress_percent(), 0.0);
        let short = ScrollMetrics {
            document_height: 600.0,
            ..metrics(0.0)
        };
        assert_eq!(short.progress_percent(), 0.0);
    }

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(500.0, 500.0));
        assert!(back_to_top_visible(501.0, 500.0));
    }

    #[test]
    fn parallax_moves_hero_up_at_half_speed() {
        assert_eq!(parallax_offset(200.0, -0.5), -100.0);
        assert_eq!(parallax_transform(200.0, -0.5), "translateY(-100px)");
        assert_eq!(parallax_transform(0.0, -0.5), "translateY(0px)");
    }

    #[test]
    fn burst_of_events_requests_one_frame() {
        let mut dispatcher = ScrollDispatcher::new();
        assert!(dispatcher.request_frame());
        assert!(!dispatcher.request_frame());
        assert!(!dispatcher.request_frame());
        dispatcher.flush(&metrics(10.0));
        assert!(dispatcher.request_frame());
    }

    #[test]
    fn flush_notifies_every_observer_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = ScrollDispatcher::new();
        for name in ["nav", "progress", "parallax"] {
            let seen = Rc::clone(&seen);
            dispatcher.subscribe(move |m| seen.borrow_mut().push((name, m.scroll_y)));
        }
        assert_eq!(dispatcher.observer_count(), 3);

        dispatcher.request_frame();
        dispatcher.flush(&metrics(42.0));
        assert_eq!(
            *seen.borrow(),
            vec![("nav", 42.0), ("progress", 42.0), ("parallax", 42.0)]
        );
    }
}
