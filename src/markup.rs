//! HTML rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time checked, auto-escaped
//! markup: the submit button's sending label, and the reference page the
//! `scaffold` command writes. Every id and class on that page comes from
//! [`crate::contract`], so the page is a living description of what the
//! browser binding expects to find.

use crate::config::{self, SiteConfig};
use crate::contract::{self, bare_name};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inner HTML of the submit button while a send is in flight.
pub fn sending_label(label: &str) -> String {
    html! {
        i.fas.fa-spinner.fa-spin {}
        " " (label)
    }
    .into_string()
}

/// Bootstraps the wasm bundle produced by `wasm-pack build --target web`.
/// `closeModal` is published on `window` for inline handlers.
const LOADER_JS: &str = r#"import init, { closeModal } from "./pkg/portfolio_interactions.js";
init().then(() => { window.closeModal = closeModal; });"#;

struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Commerce Platform",
        category: "web",
        image: "img/commerce.webp",
    },
    Project {
        title: "Resume Screener",
        category: "ai",
        image: "img/screener.webp",
    },
    Project {
        title: "Habit Tracker",
        category: "mobile",
        image: "img/habits.webp",
    },
    Project {
        title: "Chat Assistant",
        category: "ai",
        image: "img/assistant.webp",
    },
];

const SKILLS: [(&str, u32); 4] = [
    ("React", 90),
    ("Node.js", 85),
    ("MongoDB", 80),
    ("Python", 75),
];

const STATS: [(&str, &str); 3] = [
    ("50+", "Projects Completed"),
    ("3.5", "Years Experience"),
    ("98%", "Client Satisfaction"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Delivered ahead of schedule and explained every trade-off.", "Product Lead"),
    ("Our conversion rate doubled after the redesign.", "Store Owner"),
    ("Clean code, clear docs, easy handover.", "CTO"),
];

const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Whether `text` can sit inside a `<script>` element as raw text.
///
/// A closing `</script` (any case) would end the element early, and `<!--`
/// switches the parser into escaped script data.
pub fn embeds_in_script(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    !lower.contains("</script") && !lower.contains("<!--")
}

/// Renders the reference single-page portfolio.
///
/// The resolved config is embedded as the inline config document, and the
/// theme colors as CSS custom properties. Callers check `config_toml` with
/// [`embeds_in_script`] first.
pub fn render_scaffold_page(config: &SiteConfig, config_toml: &str) -> Markup {
    let css = config::generate_theme_css(&config.colors);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Portfolio" }
                style { (PreEscaped(css)) }
                script type="application/toml" id=(bare_name(contract::CONFIG_SCRIPT)) {
                    (PreEscaped(config_toml))
                }
            }
            body data-theme="light" {
                div class=(bare_name(contract::PRELOADER)) {}
                div class=(bare_name(contract::SCROLL_PROGRESS)) {}
                (navbar())
                (hero())
                (about())
                (skills())
                (projects())
                (testimonials())
                (contact())
                (success_modal())
                button id=(bare_name(contract::BACK_TO_TOP)) aria-label="Back to top" {
                    i.fas.fa-arrow-up {}
                }
                script type="module" { (PreEscaped(LOADER_JS)) }
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        nav class=(bare_name(contract::NAVBAR)) {
            a.logo href="#home" { "Portfolio" }
            ul class=(bare_name(contract::NAV_MENU)) {
                @for (id, label) in SECTIONS {
                    li { a class=(bare_name(contract::NAV_LINK)) href={ "#" (id) } { (label) } }
                }
            }
            button id=(bare_name(contract::THEME_TOGGLE)) aria-label="Toggle theme" {
                i.fas.fa-moon {}
            }
            div class=(bare_name(contract::HAMBURGER)) {
                span.bar {}
                span.bar {}
                span.bar {}
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section id="home" class=(bare_name(contract::HERO)) {
            h1 { "Hi, I'm a " span class=(bare_name(contract::TYPING_TEXT)) {} }
            div.floating-icons {
                @for icon in ["fa-react", "fa-node-js", "fa-python", "fa-js"] {
                    i class={ (bare_name(contract::FLOATING_ICON)) " fab " (icon) } {}
                }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        section id="about" {
            div.about-card { p { "I build products end to end." } }
            div.about-card {
                @for (value, label) in STATS {
                    div.stat {
                        span class=(bare_name(contract::STAT_NUMBER)) { (value) }
                        span.stat-label { (label) }
                    }
                }
            }
        }
    }
}

fn skills() -> Markup {
    html! {
        section id=(bare_name(contract::SKILLS_SECTION)) {
            @for (name, width) in SKILLS {
                div.skill-item {
                    span.skill-name { (name) }
                    div.skill-bar {
                        div class=(bare_name(contract::SKILL_PROGRESS)) data-width=(width) {}
                    }
                }
            }
        }
    }
}

fn projects() -> Markup {
    html! {
        section id="projects" {
            div.filters {
                button class={ (bare_name(contract::FILTER_BUTTON)) " active" } data-filter="all" { "All" }
                @for category in ["web", "ai", "mobile"] {
                    button class=(bare_name(contract::FILTER_BUTTON)) data-filter=(category) { (category) }
                }
            }
            div.projects-grid {
                @for project in &PROJECTS {
                    div class=(bare_name(contract::PROJECT_CARD)) data-category=(project.category) {
                        img.lazy data-src=(project.image) alt=(project.title);
                        h3 { (project.title) }
                    }
                }
            }
        }
    }
}

fn testimonials() -> Markup {
    html! {
        section id="testimonials" {
            div class=(bare_name(contract::TESTIMONIALS_SLIDER)) {
                @for (quote, author) in TESTIMONIALS {
                    blockquote class=(bare_name(contract::TESTIMONIAL)) {
                        p { (quote) }
                        cite { (author) }
                    }
                }
                button class=(bare_name(contract::SLIDER_PREV)) aria-label="Previous" { "‹" }
                button class=(bare_name(contract::SLIDER_NEXT)) aria-label="Next" { "›" }
            }
        }
    }
}

fn contact() -> Markup {
    html! {
        section id="contact" {
            form id=(bare_name(contract::CONTACT_FORM)) novalidate {
                div.form-group { input id="name" name="name" type="text" placeholder="Your Name"; }
                div.form-group { input id="email" name="email" type="email" placeholder="Your Email"; }
                div.form-group { input id="subject" name="subject" type="text" placeholder="Subject"; }
                div.form-group { textarea id="message" name="message" rows="5" placeholder="Your Message" {} }
                button type="submit" { i.fas.fa-paper-plane {} " Send Message" }
            }
        }
    }
}

fn success_modal() -> Markup {
    html! {
        div.modal id=(bare_name(contract::SUCCESS_MODAL)) {
            div.modal-content {
                h3 { "Message Sent!" }
                p { "Thanks for reaching out. I'll get back to you soon." }
                button data-modal-close { "Close" }
            }
        }
    }
}
