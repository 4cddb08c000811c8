//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Config
//!     Source: site/config.toml
//! Typing
//!     001 MERN Stack Developer
//!     002 AI Enthusiast
//!     Pace: 100ms type, 50ms delete, 2000ms hold
//! Scroll
//!     Navbar solid above 100px, back-to-top above 500px
//! Reveal
//!     Skills at 50%, counters at 50% (100 steps), cards at 10%
//! Form
//!     Simulated send: 2000ms
//! Carousel
//!     Advances every 5000ms
//! Trail
//!     10 dots, viewports wider than 768px
//! ```
//!
//! ## Scaffold
//!
//! ```text
//! Wrote site/index.html
//! Wrote site/config.toml
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::scaffold::ScaffoldReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round())
}

/// Summary of a resolved config. `source` is the file it came from, if any.
pub fn format_check_output(config: &SiteConfig, source: Option<&Path>) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Config".to_string());
    match source {
        Some(path) => lines.push(format!("{}Source: {}", indent(1), path.display())),
        None => lines.push(format!("{}Source: stock defaults", indent(1))),
    }

    lines.push("Typing".to_string());
    for (i, phrase) in config.typing.phrases.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), phrase));
    }
    lines.push(format!(
        "{}Pace: {}ms type, {}ms delete, {}ms hold",
        indent(1),
        config.typing.type_delay_ms,
        config.typing.delete_delay_ms,
        config.typing.pause_ms
    ));

    lines.push("Scroll".to_string());
    lines.push(format!(
        "{}Navbar solid above {}px, back-to-top above {}px",
        indent(1),
        config.nav.scrolled_threshold,
        config.back_to_top.threshold
    ));

    lines.push("Reveal".to_string());
    lines.push(format!(
        "{}Skills at {}, counters at {} ({} steps), cards at {}",
        indent(1),
        percent(config.reveal.skill_threshold),
        percent(config.reveal.counter_threshold),
        config.reveal.counter_steps,
        percent(config.reveal.card_threshold)
    ));

    lines.push("Form".to_string());
    lines.push(format!(
        "{}Simulated send: {}ms",
        indent(1),
        config.form.submit_delay_ms
    ));

    lines.push("Carousel".to_string());
    lines.push(format!(
        "{}Advances every {}ms",
        indent(1),
        config.carousel.interval_ms
    ));

    lines.push("Trail".to_string());
    lines.push(format!(
        "{}{} dots, viewports wider than {}px",
        indent(1),
        config.trail.capacity,
        config.trail.min_viewport_width
    ));

    lines
}

pub fn print_check_output(config: &SiteConfig, source: Option<&Path>) {
    for line in format_check_output(config, source) {
        println!("{}", line);
    }
}

pub fn format_scaffold_output(report: &ScaffoldReport) -> Vec<String> {
    report
        .written
        .iter()
        .map(|path| format!("Wrote {}", path.display()))
        .collect()
}

pub fn print_scaffold_output(report: &ScaffoldReport) {
    for line in format_scaffold_output(report) {
        println!("{}", line);
    }
}
