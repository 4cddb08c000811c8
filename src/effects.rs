//! Cosmetic effects applied once or on a timer: floating icon stagger and
//! the preloader fade. Parallax lives with the other scroll readouts in
//! [`crate::scroll`]; the cursor trail has its own module.

use crate::config::{EffectsConfig, PreloaderConfig};
use std::time::Duration;

/// CSS animation timing for the floating icon at `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct IconTiming {
    pub delay: String,
    pub duration: String,
}

/// Each icon starts a little later and floats a little slower than the one
/// before it.
pub fn icon_timing(index: usize, config: &EffectsConfig) -> IconTiming {
    let i = index as f64;
    IconTiming {
        delay: format!("{}s", i * config.icon_delay_step_s),
        duration: format!("{}s", config.icon_base_duration_s + i),
    }
}

/// Preloader schedule after window `load`: fade out, then leave layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloaderSchedule {
    /// From `load` to opacity 0.
    pub fade_after: Duration,
    /// From the fade to `display: none`.
    pub hide_after: Duration,
}

impl PreloaderSchedule {
    pub fn new(config: &PreloaderConfig) -> Self {
        Self {
            fade_after: Duration::from_millis(config.fade_delay_ms.into()),
            hide_after: Duration::from_millis(config.hide_delay_ms.into()),
        }
    }
}
