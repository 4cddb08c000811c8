//! Navigation controller: mobile menu, navbar styling, active-link
//! highlighting and smooth anchor scrolling.
//!
//! Everything here is a function of the scroll position or of a click; the
//! browser binding feeds it measurements and applies the results.

use crate::config::NavConfig;

/// Open/closed state of the mobile menu. The hamburger control and the menu
/// always share it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any navigation link click.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Page scrolled past the threshold: opaque background, stronger shadow.
    Solid,
    /// Near the top of the page.
    Translucent,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64, config: &NavConfig) -> Self {
        if scroll_y > config.scrolled_threshold {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        }
    }

    /// `(background, box-shadow)` CSS values.
    pub fn css<'a>(self, config: &'a NavConfig) -> (&'a str, &'a str) {
        match self {
            NavbarStyle::Solid => (&config.solid_background, &config.solid_shadow),
            NavbarStyle::Translucent => {
                (&config.translucent_background, &config.translucent_shadow)
            }
        }
    }
}

/// Vertical placement of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The id of the section the scroll position falls in.
///
/// A section owns `[top - lookahead, top - lookahead + height)`. When spans
/// overlap the later section in document order wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - lookahead;
            scroll_y >= start && scroll_y < start + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a navigation link with `href` points at `section_id`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Whether a navigation link should carry the active class.
///
/// With no current section, no link is active.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    current.is_some_and(|id| link_targets(href, id))
}

/// The element id a same-page link points at.
///
/// `None` for a bare `#` or a link that is not a fragment.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Scroll position for an anchor jump, leaving room for the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, config: &NavConfig) -> f64 {
    target_offset_top - config.header_offset
}
