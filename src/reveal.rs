//! Scroll-triggered reveal engine.
//!
//! Three independent visibility observers, all fire-once (an element is
//! unobserved after its first intersection and never re-hidden):
//!
//! | Observer | Target | Threshold | Effect |
//! |----------|--------|-----------|--------|
//! | Skill bars | `#skills` | 0.5 | every `.skill-progress` width ← `data-width`% after a short delay |
//! | Counters | each `.stat-number` | 0.5 | count up from 0 to the displayed number |
//! | Cards | project/about/skill cards | 0.1 | slide up and fade in |
//!
//! Thresholds and timings come from [`RevealConfig`].

use crate::config::RevealConfig;
use std::time::Duration;

/// One observer instance: how much of the element must be visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub threshold: f64,
}

impl RevealSpec {
    pub fn skills(config: &RevealConfig) -> Self {
        Self {
            threshold: config.skill_threshold,
        }
    }

    pub fn counters(config: &RevealConfig) -> Self {
        Self {
            threshold: config.counter_threshold,
        }
    }

    pub fn cards(config: &RevealConfig) -> Self {
        Self {
            threshold: config.card_threshold,
        }
    }

    /// Default observer options (any pixel visible), used by the lazy loader.
    pub fn any_pixel() -> Self {
        Self { threshold: 0.0 }
    }
}

// ============================================================================
// Skill bars
// ============================================================================

/// Width to give a skill bar from its `data-width` attribute.
///
/// Bars whose attribute is missing, not a number, negative or not finite
/// are left alone.
pub fn skill_width(data_width: Option<&str>) -> Option<String> {
    let raw = data_width?.trim();
    raw.parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .map(|_| format!("{raw}%"))
}

pub fn skill_delay(config: &RevealConfig) -> Duration {
    Duration::from_millis(config.skill_delay_ms.into())
}

// ============================================================================
// Cards
// ============================================================================

/// Inline styles of a reveal card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub transform: String,
    pub opacity: &'static str,
    pub transition: Option<String>,
}

impl CardStyle {
    /// Applied when observation starts: pushed down, transparent, animated.
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            transform: format!("translateY({}px)", config.card_offset_px),
            opacity: "0",
            transition: Some(config.card_transition.clone()),
        }
    }

    /// Applied on first intersection. The transition set while hidden stays.
    pub fn revealed() -> Self {
        Self {
            transform: "translateY(0)".to_string(),
            opacity: "1",
            transition: None,
        }
    }
}

// ============================================================================
// Counters
// ============================================================================

/// A stat counter's displayed text split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    /// Numeric value to count up to.
    pub value: f64,
    /// Everything in the text that is not a digit or `.`, in order.
    pub suffix: String,
    /// Whether the text had a decimal point; selects two-decimal rendering.
    pub is_float: bool,
}

impl CounterTarget {
    /// Parse displayed text such as `"50+"`, `"98%"` or `"4.9"`.
    ///
    /// The target is the leading number of the text once every character
    /// other than digits and `.` is dropped, so `"1.5.2k"` counts to `1.5`.
    /// Text without a number yields `None` and stays untouched.
    pub fn parse(text: &str) -> Option<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let suffix: String = text
            .chars()
            .filter(|c| !(c.is_ascii_digit() || *c == '.'))
            .collect();
        let value = leading_number(&numeric)?;
        Some(Self {
            value,
            suffix,
            is_float: text.contains('.'),
        })
    }

    /// Render a value the way the counter displays it.
    pub fn render(&self, value: f64) -> String {
        if self.is_float {
            format!("{value:.2}{}", self.suffix)
        } else {
            format!("{}{}", value.floor() as i64, self.suffix)
        }
    }
}

/// Longest prefix of digits with at most one decimal point, as a number.
fn leading_number(digits: &str) -> Option<f64> {
    let mut seen_dot = false;
    let end = digits
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Count-up animation frames for one counter.
///
/// Yields `steps` rendered strings; frame `k` shows `target × k / steps` and
/// the last frame shows the target exactly. The sequence never decreases and
/// never exceeds the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: CounterTarget,
    steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn tick_interval(config: &RevealConfig) -> Duration {
        Duration::from_millis(config.counter_tick_ms.into())
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Raw value shown at the current step.
    pub fn current_value(&self) -> f64 {
        if self.is_finished() {
            self.target.value
        } else {
            self.target.value * f64::from(self.step) / f64::from(self.steps)
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        Some(self.target.render(self.current_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Counter parsing
    // =========================================================================

    #[test]
    fn parse_integer_with_suffix() {
        let t = CounterTarget::parse("50+").unwrap();
        assert_eq!(t.value, 50.0);
        assert_eq!(t.suffix, "+");
        assert!(!t.is_float);
    }

    #[test]
    fn parse_float_and_percent() {
        let t = CounterTarget::parse("4.9").unwrap();
        assert_eq!(t.value, 4.9);
        assert!(t.is_float);

        let t = CounterTarget::parse("98%").unwrap();
        assert_eq!(t.suffix, "%");
    }

    #[test]
    fn parse_collects_every_non_numeric_character_into_suffix() {
        let t = CounterTarget::parse("$1,200k").unwrap();
        assert_eq!(t.value, 1200.0);
        assert_eq!(t.suffix, "$,k");
    }

    #[test]
    fn parse_takes_leading_number_only() {
        let t = CounterTarget::parse("1.5.2").unwrap();
        assert_eq!(t.value, 1.5);
        assert_eq!(t.suffix, "");
    }

    #[test]
    fn parse_without_number_is_none() {
        assert!(CounterTarget::parse("many").is_none());
        assert!(CounterTarget::parse("").is_none());
        assert!(CounterTarget::parse(".").is_none());
    }

    // =========================================================================
    // Counter animation
    // =========================================================================

    #[test]
    fn animation_ends_exactly_on_target() {
        let target = CounterTarget::parse("150+").unwrap();
        let frames: Vec<String> = CounterAnimation::new(target, 100).collect();
        assert_eq!(frames.len(), 100);
        assert_eq!(frames.last().unwrap(), "150+");
        assert_eq!(frames[0], "1+");
    }

    #[test]
    fn float_animation_renders_two_decimals() {
        let target = CounterTarget::parse("4.9").unwrap();
        let frames: Vec<String> = CounterAnimation::new(target, 100).collect();
        assert_eq!(frames.last().unwrap(), "4.90");
        assert_eq!(frames[49], "2.45");
    }

    #[test]
    fn animation_is_monotonic_and_bounded() {
        for text in ["7", "99.5%", "1000+", "3"] {
            let target = CounterTarget::parse(text).unwrap();
            let goal = target.value;
            let mut anim = CounterAnimation::new(target, 100);
            let mut last = 0.0;
            while anim.next().is_some() {
                let v = anim.current_value();
                assert!(v >= last, "{text}: {v} < {last}");
                assert!(v <= goal, "{text}: {v} > {goal}");
                last = v;
            }
            assert_eq!(last, goal);
        }
    }

    #[test]
    fn zero_target_finishes() {
        let target = CounterTarget::parse("0").unwrap();
        let frames: Vec<String> = CounterAnimation::new(target, 3).collect();
        assert_eq!(frames, vec!["0", "0", "0"]);
    }

    #[test]
    fn animation_stops_after_final_frame() {
        let mut anim = CounterAnimation::new(CounterTarget::parse("2").unwrap(), 2);
        assert_eq!(anim.next().as_deref(), Some("1"));
        assert_eq!(anim.next().as_deref(), Some("2"));
        assert!(anim.is_finished());
        assert_eq!(anim.next(), None);
    }

    // =========================================================================
    // Skill bars and cards
    // =========================================================================

    #[test]
    fn skill_width_from_attribute() {
        assert_eq!(skill_width(Some("85")).as_deref(), Some("85%"));
        assert_eq!(skill_width(Some(" 72.5 ")).as_deref(), Some("72.5%"));
        assert_eq!(skill_width(Some("wide")), None);
        assert_eq!(skill_width(None), None);
    }

    #[test]
    fn skill_width_rejects_non_finite_and_negative() {
        for raw in ["NaN", "inf", "-infinity", "-5"] {
            assert_eq!(skill_width(Some(raw)), None, "{raw}");
        }
        assert_eq!(skill_width(Some("0")).as_deref(), Some("0%"));
    }

    #[test]
    fn card_styles() {
        let config = RevealConfig::default();
        let hidden = CardStyle::hidden(&config);
        assert_eq!(hidden.transform, "translateY(50px)");
        assert_eq!(hidden.opacity, "0");
        assert_eq!(hidden.transition.as_deref(), Some("all 0.6s ease"));
        assert_eq!(CardStyle::revealed().transform, "translateY(0)");
    }

    #[test]
    fn observer_thresholds_follow_config() {
        let config = RevealConfig::default();
        assert_eq!(RevealSpec::skills(&config).threshold, 0.5);
        assert_eq!(RevealSpec::counters(&config).threshold, 0.5);
        assert_eq!(RevealSpec::cards(&config).threshold, 0.1);
    }
}
