//! Shared test utilities for the portfolio-interactions test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_config_dir("[carousel]\ninterval_ms = 3000\n");
//! let config = load_config(tmp.path()).unwrap();
//!
//! let form = contact_form("Ada", "ada@example.com", "Hi", "Hello");
//! assert!(validate(&form).is_empty());
//! ```

use std::fs;
use tempfile::TempDir;

use crate::form::ContactForm;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp directory holding `config.toml` with `contents`.
pub fn setup_config_dir(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), contents).unwrap();
    tmp
}

/// Form values as they would be read at submit time.
pub fn contact_form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

/// A form that passes validation.
pub fn valid_contact_form() -> ContactForm {
    contact_form(
        "Ada Lovelace",
        "ada@example.com",
        "Collaboration",
        "Shall we build an engine?",
    )
}
