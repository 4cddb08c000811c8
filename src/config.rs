//! Interaction configuration.
//!
//! Every timing constant, threshold, color and phrase the page behaviors use
//! lives here. Configuration is layered: the stock defaults below are
//! overridden by an optional user document, which only needs the keys it
//! wants to change.
//!
//! ## Where the Config Comes From
//!
//! - **Browser**: an inline element on the page, read once at start:
//!
//!   ```html
//!   <script type="application/toml" id="portfolio-config">
//!   [typing]
//!   phrases = ["Rust Developer", "Photographer"]
//!   </script>
//!   ```
//!
//! - **CLI**: a `config.toml` in the directory given by `--config`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [typing]
//! phrases = ["MERN Stack Developer", "AI Enthusiast", "UI/UX Designer",
//!            "Problem Solver", "Tech Innovator"]
//! type_delay_ms = 100       # Per character while typing
//! delete_delay_ms = 50      # Per character while deleting
//! pause_ms = 2000           # Hold on the full phrase
//! next_phrase_ms = 500      # Hold on the empty line before the next phrase
//! start_delay_ms = 1000     # First step after document ready
//!
//! [nav]
//! scrolled_threshold = 100  # scrollY above which the navbar turns solid
//! section_lookahead = 100   # Sections activate this many px before their top
//! header_offset = 80        # Anchor scrolls stop this many px above the target
//!
//! [back_to_top]
//! threshold = 500
//!
//! [reveal]
//! skill_threshold = 0.5
//! counter_threshold = 0.5
//! card_threshold = 0.1
//! counter_steps = 100
//! counter_tick_ms = 20
//!
//! [form]
//! submit_delay_ms = 2000
//!
//! [carousel]
//! interval_ms = 5000
//!
//! [trail]
//! capacity = 10
//! min_viewport_width = 768
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page interaction configuration.
///
/// All fields have defaults matching the stock portfolio page. User documents
/// need only specify the values they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Typing-text cycler phrases and pacing.
    pub typing: TypingConfig,
    /// Navbar styling, active-link lookahead and anchor offset.
    pub nav: NavConfig,
    /// Back-to-top visibility threshold.
    pub back_to_top: BackToTopConfig,
    /// Skill bar, counter and card reveal settings.
    pub reveal: RevealConfig,
    /// Contact form colors and simulated send latency.
    pub form: FormConfig,
    /// Project filter transition timing.
    pub filter: FilterConfig,
    /// Testimonials auto-advance.
    pub carousel: CarouselConfig,
    /// Cursor trail length and desktop breakpoint.
    pub trail: TrailConfig,
    /// Parallax and floating icon settings.
    pub effects: EffectsConfig,
    /// Preloader fade-out timing.
    pub preloader: PreloaderConfig,
    /// Light and dark theme colors.
    pub colors: ColorConfig,
    /// Browser console log level.
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.phrases.is_empty() {
            return Err(ConfigError::Validation(
                "typing.phrases must not be empty".into(),
            ));
        }
        if self.typing.phrases.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Validation(
                "typing.phrases must not contain empty phrases".into(),
            ));
        }
        for (name, value) in [
            ("reveal.skill_threshold", self.reveal.skill_threshold),
            ("reveal.counter_threshold", self.reveal.counter_threshold),
            ("reveal.card_threshold", self.reveal.card_threshold),
            ("trail.max_opacity", self.trail.max_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!("{name} must be 0-1")));
            }
        }
        if self.reveal.counter_steps == 0 {
            return Err(ConfigError::Validation(
                "reveal.counter_steps must be non-zero".into(),
            ));
        }
        if self.trail.capacity == 0 {
            return Err(ConfigError::Validation(
                "trail.capacity must be at least 1".into(),
            ));
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Typing-text cycler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Phrases typed out in order, cycling forever.
    pub phrases: Vec<String>,
    /// Delay between characters while typing.
    pub type_delay_ms: u32,
    /// Delay between characters while deleting.
    pub delete_delay_ms: u32,
    /// Pause on a fully typed phrase before deleting starts.
    pub pause_ms: u32,
    /// Pause on the empty line before the next phrase starts.
    pub next_phrase_ms: u32,
    /// Delay from document ready to the first character.
    pub start_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "MERN Stack Developer",
                "AI Enthusiast",
                "UI/UX Designer",
                "Problem Solver",
                "Tech Innovator",
            ]
            .map(String::from)
            .to_vec(),
            type_delay_ms: 100,
            delete_delay_ms: 50,
            pause_ms: 2000,
            next_phrase_ms: 500,
            start_delay_ms: 1000,
        }
    }
}

/// Navigation controller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// `scrollY` above which the navbar switches to the solid style.
    pub scrolled_threshold: f64,
    /// Sections count as current this many pixels before their top edge.
    pub section_lookahead: f64,
    /// Height of the fixed header subtracted from anchor scroll targets.
    pub header_offset: f64,
    pub solid_background: String,
    pub solid_shadow: String,
    pub translucent_background: String,
    pub translucent_shadow: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            section_lookahead: 100.0,
            header_offset: 80.0,
            solid_background: "rgba(255, 255, 255, 0.98)".to_string(),
            solid_shadow: "0 2px 20px rgba(0, 0, 0, 0.15)".to_string(),
            translucent_background: "rgba(255, 255, 255, 0.95)".to_string(),
            translucent_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackToTopConfig {
    /// `scrollY` above which the button is shown.
    pub threshold: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { threshold: 500.0 }
    }
}

/// Scroll-triggered reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction of `#skills` that starts the skill bars.
    pub skill_threshold: f64,
    /// Extra delay before skill bar widths are applied.
    pub skill_delay_ms: u32,
    /// Visible fraction of a counter that starts its animation.
    pub counter_threshold: f64,
    /// Number of ticks a counter takes to reach its target.
    pub counter_steps: u32,
    /// Interval between counter ticks.
    pub counter_tick_ms: u32,
    /// Visible fraction of a card that reveals it.
    pub card_threshold: f64,
    /// Vertical offset cards slide in from.
    pub card_offset_px: f64,
    /// CSS transition applied to cards before they are revealed.
    pub card_transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            skill_threshold: 0.5,
            skill_delay_ms: 200,
            counter_threshold: 0.5,
            counter_steps: 100,
            counter_tick_ms: 20,
            card_threshold: 0.1,
            card_offset_px: 50.0,
            card_transition: "all 0.6s ease".to_string(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Simulated network latency of a send.
    pub submit_delay_ms: u32,
    /// Border and message color of a failing field.
    pub error_color: String,
    /// Border color restored when a failing field gains focus.
    pub focus_color: String,
    /// Border color every field gets after a successful send.
    pub idle_border_color: String,
    /// Text shown next to the spinner while sending.
    pub sending_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            error_color: "#e74c3c".to_string(),
            focus_color: "#667eea".to_string(),
            idle_border_color: "#e9ecef".to_string(),
            sending_label: "Sending...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Delay between `display: block` and the fade/scale in.
    pub show_delay_ms: u32,
    /// Delay between the fade/scale out and `display: none`.
    pub hide_delay_ms: u32,
    /// Scale hidden cards shrink to.
    pub hidden_scale: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            hide_delay_ms: 300,
            hidden_scale: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Auto-advance period.
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

/// Cursor trail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Maximum number of dots kept on screen.
    pub capacity: usize,
    /// The trail only starts on viewports strictly wider than this.
    pub min_viewport_width: f64,
    /// Opacity of the newest dot; older dots fade linearly below it.
    pub max_opacity: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            min_viewport_width: 768.0,
            max_opacity: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    /// Hero offset per pixel scrolled (negative moves it up).
    pub parallax_rate: f64,
    /// Animation delay added per floating icon index, in seconds.
    pub icon_delay_step_s: f64,
    /// Animation duration of the first floating icon, in seconds.
    pub icon_base_duration_s: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_rate: -0.5,
            icon_delay_step_s: 0.5,
            icon_base_duration_s: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreloaderConfig {
    /// Delay after window `load` before the fade starts.
    pub fade_delay_ms: u32,
    /// Delay after the fade starts before the preloader is removed from layout.
    pub hide_delay_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 1000,
            hide_delay_ms: 500,
        }
    }
}

/// Color configuration for light and dark themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light theme color scheme.
    pub light: ColorScheme,
    /// Dark theme color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and section background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text color.
    pub text_muted: String,
    /// Accent used for links, focus rings and the progress bar.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f8f9fa".to_string(),
            text: "#333333".to_string(),
            text_muted: "#666666".to_string(),
            accent: "#667eea".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1a1a2e".to_string(),
            surface: "#16213e".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#aaaaaa".to_string(),
            accent: "#764ba2".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level forwarded to the browser console.
    pub level: LogLevel,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so a user
///   `phrases` list replaces the stock list rather than extending it.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Parse an inline config document and resolve it over the stock defaults.
///
/// Blank documents resolve to the defaults.
pub fn config_from_str(source: &str) -> Result<SiteConfig, ConfigError> {
    if source.trim().is_empty() {
        return resolve_config(stock_defaults_value(), None);
    }
    let overlay: toml::Value = toml::from_str(source)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Interactions Configuration
# ====================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# In the browser, paste the keys you want to change into the page's
#   <script type="application/toml" id="portfolio-config"> element.
# For the CLI, save them as config.toml in the --config directory.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Typing text
# ---------------------------------------------------------------------------
[typing]
# Phrases typed out and deleted in turn, cycling forever.
phrases = [
    "MERN Stack Developer",
    "AI Enthusiast",
    "UI/UX Designer",
    "Problem Solver",
    "Tech Innovator",
]
type_delay_ms = 100
delete_delay_ms = 50
# Hold on a fully typed phrase.
pause_ms = 2000
# Hold on the empty line before the next phrase.
next_phrase_ms = 500
start_delay_ms = 1000

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[nav]
# The navbar turns solid once scrolled past this many pixels.
scrolled_threshold = 100.0
# A section becomes current this many pixels before its top reaches the viewport top.
section_lookahead = 100.0
# Anchor links stop this many pixels above their target (fixed header height).
header_offset = 80.0
solid_background = "rgba(255, 255, 255, 0.98)"
solid_shadow = "0 2px 20px rgba(0, 0, 0, 0.15)"
translucent_background = "rgba(255, 255, 255, 0.95)"
translucent_shadow = "0 2px 20px rgba(0, 0, 0, 0.1)"

[back_to_top]
threshold = 500.0

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Thresholds are the visible fraction (0-1) of the element.
skill_threshold = 0.5
skill_delay_ms = 200
counter_threshold = 0.5
counter_steps = 100
counter_tick_ms = 20
card_threshold = 0.1
card_offset_px = 50.0
card_transition = "all 0.6s ease"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[form]
# Simulated send latency; no request is made.
submit_delay_ms = 2000
error_color = "#e74c3c"
focus_color = "#667eea"
idle_border_color = "#e9ecef"
sending_label = "Sending..."

# ---------------------------------------------------------------------------
# Project filter
# ---------------------------------------------------------------------------
[filter]
show_delay_ms = 100
hide_delay_ms = 300
hidden_scale = 0.8

[carousel]
interval_ms = 5000

# ---------------------------------------------------------------------------
# Cursor trail (desktop only)
# ---------------------------------------------------------------------------
[trail]
capacity = 10
min_viewport_width = 768.0
max_opacity = 0.7

[effects]
parallax_rate = -0.5
icon_delay_step_s = 0.5
icon_base_duration_s = 6.0

[preloader]
fade_delay_ms = 1000
hide_delay_ms = 500

# ---------------------------------------------------------------------------
# Colors - applied through the body's data-theme attribute
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f8f9fa"
text = "#333333"
text_muted = "#666666"
accent = "#667eea"

[colors.dark]
background = "#1a1a2e"
surface = "#16213e"
text = "#eeeeee"
text_muted = "#aaaaaa"
accent = "#764ba2"

# ---------------------------------------------------------------------------
# Logging (browser console)
# ---------------------------------------------------------------------------
[logging]
# off | error | warn | info | debug | trace
level = "warn"
"##
}

/// Generate CSS custom properties for both themes.
///
/// Light colors sit on `:root`; dark colors apply when the theme toggle sets
/// `data-theme="dark"` on the body.
pub fn generate_theme_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-accent: {light_accent};
}}

[data-theme="dark"] {{
    --color-bg: {dark_bg};
    --color-surface: {dark_surface};
    --color-text: {dark_text};
    --color-text-muted: {dark_text_muted};
    --color-accent: {dark_accent};
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_accent = colors.dark.accent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_config_dir;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_stock_phrases() {
        let config = SiteConfig::default();
        assert_eq!(config.typing.phrases.len(), 5);
        assert_eq!(config.typing.phrases[0], "MERN Stack Developer");
    }

    #[test]
    fn default_config_has_stock_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.typing.type_delay_ms, 100);
        assert_eq!(config.typing.delete_delay_ms, 50);
        assert_eq!(config.form.submit_delay_ms, 2000);
        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.reveal.counter_steps, 100);
        assert_eq!(config.trail.capacity, 10);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[form]
error_color = "#ff0000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.form.error_color, "#ff0000");
        // Defaults preserved
        assert_eq!(config.form.focus_color, "#667eea");
        assert_eq!(config.nav.header_offset, 80.0);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#101010".to_string();

        let css = generate_theme_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #101010"));
    }

    #[test]
    fn generate_css_keys_dark_scheme_on_data_theme() {
        let css = generate_theme_css(&ColorConfig::default());
        assert!(css.contains(r#"[data-theme="dark"]"#));
        assert!(css.contains("--color-accent: #764ba2"));
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: SiteConfig = toml::from_str("[logging]\nlevel = \"debug\"").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.logging.level.to_level_filter(),
            log::LevelFilter::Debug
        );
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.back_to_top.threshold, 500.0);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = setup_config_dir(
            r#"
[typing]
phrases = ["Rust Developer"]
"#,
        );

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.typing.phrases, vec!["Rust Developer".to_string()]);
        // Unspecified values should be defaults
        assert_eq!(config.typing.pause_ms, 2000);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = setup_config_dir("this is not valid toml [[[");

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn config_from_str_blank_is_defaults() {
        let config = config_from_str("  \n").unwrap();
        assert_eq!(config.nav.scrolled_threshold, 100.0);
    }

    #[test]
    fn config_from_str_overrides() {
        let config = config_from_str("[carousel]\ninterval_ms = 8000").unwrap();
        assert_eq!(config.carousel.interval_ms, 8000);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"pause_ms = 2000"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"pause_ms = 900"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("pause_ms").unwrap().as_integer(), Some(900));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str(
            r#"
[typing]
phrases = ["a", "b", "c"]
pause_ms = 2000
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[typing]
phrases = ["z"]
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let typing = merged.get("typing").unwrap();
        assert_eq!(typing.get("phrases").unwrap().as_array().unwrap().len(), 1);
        assert_eq!(typing.get("pause_ms").unwrap().as_integer(), Some(2000));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.dark]
background = "#000"
text = "#fff"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.dark]
background = "#111"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let dark = merged.get("colors").unwrap().get("dark").unwrap();
        assert_eq!(dark.get("background").unwrap().as_str(), Some("#111"));
        assert_eq!(dark.get("text").unwrap().as_str(), Some("#fff"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[typing]\npause = 90");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[typin]\npause_ms = 90");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = setup_config_dir("[trail]\nlength = 4\n");
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_phrase_list() {
        let mut config = SiteConfig::default();
        config.typing.phrases.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("typing.phrases"));
    }

    #[test]
    fn validate_rejects_empty_phrase() {
        let mut config = SiteConfig::default();
        config.typing.phrases.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_threshold_bounds() {
        let mut config = SiteConfig::default();
        config.reveal.card_threshold = 1.0;
        assert!(config.validate().is_ok());
        config.reveal.card_threshold = 0.0;
        assert!(config.validate().is_ok());
        config.reveal.card_threshold = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reveal.card_threshold"));
    }

    #[test]
    fn validate_rejects_zero_counts() {
        let mut config = SiteConfig::default();
        config.trail.capacity = 0;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.reveal.counter_steps = 0;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.carousel.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = setup_config_dir("[typing]\nphrases = []\n");
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.typing.phrases, defaults.typing.phrases);
        assert_eq!(config.nav.solid_shadow, defaults.nav.solid_shadow);
        assert_eq!(config.reveal.card_transition, defaults.reveal.card_transition);
        assert_eq!(config.form.sending_label, defaults.form.sending_label);
        assert_eq!(config.colors.dark.background, defaults.colors.dark.background);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for section in [
            "typing",
            "nav",
            "back_to_top",
            "reveal",
            "form",
            "filter",
            "carousel",
            "trail",
            "effects",
            "preloader",
            "colors",
            "logging",
        ] {
            assert!(val.get(section).is_some(), "missing section {section}");
        }
    }
}
