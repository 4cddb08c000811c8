//! The DOM contract: element ids, classes and attributes the page must carry.
//!
//! The browser binding looks elements up only through these names, and the
//! scaffold page is rendered from them, so the two cannot drift apart.

pub const TYPING_TEXT: &str = ".typing-text";

pub const NAVBAR: &str = ".navbar";
pub const HAMBURGER: &str = ".hamburger";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINK: &str = ".nav-link";
pub const ANCHOR_LINK: &str = r##"a[href^="#"]"##;
pub const SECTION: &str = "section[id]";

pub const SKILLS_SECTION: &str = "#skills";
pub const SKILL_PROGRESS: &str = ".skill-progress";
pub const STAT_NUMBER: &str = ".stat-number";
pub const REVEAL_CARDS: &str = ".project-card, .about-card, .skill-item";

pub const BACK_TO_TOP: &str = "#backToTop";

pub const CONTACT_FORM: &str = "#contactForm";
pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
pub const FORM_FIELDS: &str = ".form-group input, .form-group textarea";
pub const ERROR_MESSAGE: &str = ".error-message";
pub const SUCCESS_MODAL: &str = "#successModal";
pub const MODAL_CLOSE: &str = "[data-modal-close]";

pub const THEME_TOGGLE: &str = "#themeToggle";
pub const THEME_ICON: &str = "i";

pub const FILTER_BUTTON: &str = ".filter-btn";
pub const PROJECT_CARD: &str = ".project-card";

pub const LAZY_IMAGE: &str = "img[data-src]";

pub const SCROLL_PROGRESS: &str = ".scroll-progress";

pub const TESTIMONIALS_SLIDER: &str = ".testimonials-slider";
pub const TESTIMONIAL: &str = ".testimonial";
pub const SLIDER_PREV: &str = ".slider-prev";
pub const SLIDER_NEXT: &str = ".slider-next";

pub const HERO: &str = ".hero";
pub const FLOATING_ICON: &str = ".floating-icon";
pub const PRELOADER: &str = ".preloader";

pub const CONFIG_SCRIPT: &str = "#portfolio-config";

/// Classes toggled or created by the behaviors.
pub mod class {
    pub const ACTIVE: &str = "active";
    pub const SHOW: &str = "show";
    pub const LAZY: &str = "lazy";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const CURSOR_TRAIL: &str = "cursor-trail";
}

/// Attributes read or written by the behaviors.
pub mod attr {
    pub const THEME: &str = "data-theme";
    pub const WIDTH: &str = "data-width";
    pub const FILTER: &str = "data-filter";
    pub const CATEGORY: &str = "data-category";
    pub const DEFERRED_SRC: &str = "data-src";
    pub const HREF: &str = "href";
    pub const ID: &str = "id";
}

/// Strip the leading `.` or `#` from a simple selector, for rendering.
///
/// Compound selectors are returned unchanged.
pub fn bare_name(selector: &str) -> &str {
    selector
        .strip_prefix('.')
        .or_else(|| selector.strip_prefix('#'))
        .unwrap_or(selector)
}
