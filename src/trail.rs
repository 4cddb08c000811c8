//! Cursor trail: a bounded FIFO of dots following the pointer.
//!
//! Every animation frame pushes one marker at the pointer position. Once the
//! queue is over capacity the oldest marker is evicted and handed back to the
//! caller to remove from the page. Opacity rises linearly with recency: the
//! marker at rank `i` (0 = oldest) of `n` gets `(i + 1) / n × max_opacity`.
//!
//! The queue is generic over the marker so the browser binding can store
//! elements and tests can store plain values.

use crate::config::TrailConfig;
use std::collections::VecDeque;

/// Whether the trail runs at all: desktop-width viewports only.
pub fn trail_enabled(viewport_width: f64, config: &TrailConfig) -> bool {
    viewport_width > config.min_viewport_width
}

/// Last known pointer position in client coordinates. Starts at the origin
/// until the first move.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Inline style of a freshly spawned dot, centered on the pointer.
pub fn dot_style(pointer: Pointer, max_opacity: f64) -> String {
    format!(
        "position: fixed; left: {x}px; top: {y}px; width: 4px; height: 4px; \
         background: linear-gradient(45deg, #667eea, #764ba2); border-radius: 50%; \
         pointer-events: none; z-index: 9999; opacity: {max_opacity}; \
         transform: translate(-50%, -50%); transition: opacity 0.3s ease;",
        x = pointer.x,
        y = pointer.y,
    )
}

#[derive(Debug, Clone)]
pub struct TrailQueue<T> {
    markers: VecDeque<T>,
    capacity: usize,
    max_opacity: f64,
}

impl<T> TrailQueue<T> {
    pub fn new(config: &TrailConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            markers: VecDeque::with_capacity(capacity + 1),
            capacity,
            max_opacity: config.max_opacity,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Append a marker; returns the evicted oldest marker if over capacity.
    pub fn push(&mut self, marker: T) -> Option<T> {
        self.markers.push_back(marker);
        if self.markers.len() > self.capacity {
            self.markers.pop_front()
        } else {
            None
        }
    }

    /// Every marker, oldest first, with its opacity.
    pub fn with_opacity(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        let n = self.markers.len() as f64;
        self.markers
            .iter()
            .enumerate()
            .map(move |(i, m)| (m, (i + 1) as f64 / n * self.max_opacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> TrailQueue<u32> {
        TrailQueue::new(&TrailConfig::default())
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut q = queue();
        for i in 0..50 {
            q.push(i);
            assert!(q.len() <= 10);
        }
        assert_eq!(q.len(), 10);
    }

    #[test]
    fn eleventh_push_evicts_first() {
        let mut q = queue();
        for i in 1..=10 {
            assert_eq!(q.push(i), None);
        }
        assert_eq!(q.push(11), Some(1));
        assert_eq!(q.push(12), Some(2));
        let oldest = q.with_opacity().next().map(|(m, _)| *m);
        assert_eq!(oldest, Some(3));
    }

    #[test]
    fn opacity_scales_with_recency() {
        let mut q = queue();
        for i in 0..4 {
            q.push(i);
        }
        let opacities: Vec<f64> = q.with_opacity().map(|(_, o)| o).collect();
        let expected = [0.175, 0.35, 0.525, 0.7];
        for (got, want) in opacities.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    fn single_marker_is_fully_opaque() {
        let mut q = queue();
        q.push(7);
        let (_, o) = q.with_opacity().next().unwrap();
        assert!((o - 0.7).abs() < 1e-9);
    }

    #[test]
    fn dot_is_placed_at_pointer() {
        let style = dot_style(Pointer { x: 12.0, y: 340.5 }, 0.7);
        assert!(style.contains("left: 12px;"));
        assert!(style.contains("top: 340.5px;"));
        assert!(style.contains("opacity: 0.7;"));
        assert!(style.starts_with("position: fixed;"));
    }

    #[test]
    fn desktop_only() {
        let config = TrailConfig::default();
        assert!(!trail_enabled(768.0, &config));
        assert!(trail_enabled(769.0, &config));
        assert!(!trail_enabled(375.0, &config));
    }
}
