//! Testimonials carousel: one slide visible, cyclic in both directions.

use crate::config::CarouselConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// A carousel over `len` slides starting at slide 0, or `None` when
    /// there is nothing to show.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_slide(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev_slide(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Whether slide `i` is the visible one.
    pub fn is_visible(&self, i: usize) -> bool {
        i == self.index
    }

    pub fn interval(config: &CarouselConfig) -> Duration {
        Duration::from_millis(config.interval_ms.into())
    }
}
