//! Contact form: validation, error display plan, simulated send, success modal.
//!
//! Validation is a pure function from the four field values to a map of
//! error messages. Displaying those errors is a separate step driven by a
//! [`FormView`], which always describes the complete state of every field so
//! applying it twice gives the same page. Sending is simulated: the
//! [`SubmitFlow`] holds the button's label while a fixed delay elapses; no
//! request is ever made.

use crate::config::FormConfig;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id (and form control name) of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Field → message for every failing field.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Check every field and collect all failures.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    if form.subject.trim().is_empty() {
        errors.insert(Field::Subject, "Subject is required");
    }

    if form.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required");
    }

    errors
}

// ============================================================================
// Error display
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    /// No message; border left as it is.
    Clean,
    /// Message shown under the field, border in the error color.
    Failed { message: &'static str },
}

/// Full display state of the form after a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<(Field, FieldView)>,
}

impl FormView {
    pub fn from_errors(errors: &FieldErrors) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let view = match errors.get(&field) {
                    Some(&message) => FieldView::Failed { message },
                    None => FieldView::Clean,
                };
                (field, view)
            })
            .collect();
        Self { fields }
    }

    pub fn failed(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().filter_map(|(field, view)| match view {
            FieldView::Failed { message } => Some((*field, *message)),
            FieldView::Clean => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Inline style of an error message node.
pub fn error_message_style(config: &FormConfig) -> [(&'static str, String); 3] {
    [
        ("color", config.error_color.clone()),
        ("font-size", "0.8rem".to_string()),
        ("margin-top", "0.5rem".to_string()),
    ]
}

// ============================================================================
// Simulated send
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; show these errors.
    Rejected(FieldErrors),
    /// A send is already in flight; nothing to do.
    Busy,
    /// Button switched to the sending label; call [`SubmitFlow::finish`]
    /// after `delay`.
    Sending { delay: Duration },
}

/// The submit button's lifecycle across one simulated send.
#[derive(Debug, Clone, Default)]
pub struct SubmitFlow {
    original_label: Option<String>,
}

impl SubmitFlow {
    pub fn is_sending(&self) -> bool {
        self.original_label.is_some()
    }

    /// Handle a submit with the form's current values and the button's
    /// current label markup.
    pub fn submit(
        &mut self,
        form: &ContactForm,
        current_label: &str,
        config: &FormConfig,
    ) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }
        let errors = validate(form);
        if !errors.is_empty() {
            return SubmitOutcome::Rejected(errors);
        }
        self.original_label = Some(current_label.to_string());
        SubmitOutcome::Sending {
            delay: Duration::from_millis(config.submit_delay_ms.into()),
        }
    }

    /// Complete the send and hand back the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        self.original_label.take()
    }
}

// ============================================================================
// Success modal
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click inside the modal closes it only when it lands on the overlay
    /// itself, not on the content box.
    pub fn click(&mut self, on_overlay: bool) -> bool {
        if on_overlay {
            self.close();
        }
        !self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{contact_form, valid_contact_form};

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn empty_name_and_bad_email() {
        let errors = validate(&contact_form("", "bad", "x", "y"));
        let expected: FieldErrors = [
            (Field::Name, "Name is required"),
            (Field::Email, "Please enter a valid email"),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&contact_form("Ada", "a@b.co", "Hi", "Hello")).is_empty());
    }

    #[test]
    fn all_fields_reported_together() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Subject], "Subject is required");
        assert_eq!(errors[&Field::Message], "Message is required");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&contact_form("  ", " \t", "\n", "   "));
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.co", "  first.last@mail.example.org ", "x@y.z"] {
            assert!(EMAIL_PATTERN.is_match(ok.trim()), "{ok}");
        }
        for bad in ["a@b", "@b.co", "a@.co", "a b@c.de", "a@@b.co", "a@b."] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert!(validate(&contact_form("A", "  a@b.co  ", "s", "m")).is_empty());
    }

    // =========================================================================
    // View
    // =========================================================================

    #[test]
    fn view_lists_every_field_in_form_order() {
        let view = FormView::from_errors(&validate(&contact_form("", "a@b.co", "", "m")));
        let ids: Vec<&str> = view.fields.iter().map(|(f, _)| f.id()).collect();
        assert_eq!(ids, ["name", "email", "subject", "message"]);
        let failed: Vec<Field> = view.failed().map(|(f, _)| f).collect();
        assert_eq!(failed, [Field::Name, Field::Subject]);
        assert!(view.has_errors());
    }

    #[test]
    fn view_is_recomputed_not_accumulated() {
        let first = FormView::from_errors(&validate(&contact_form("", "", "", "")));
        let second = FormView::from_errors(&validate(&contact_form("A", "", "s", "m")));
        assert_eq!(first.failed().count(), 4);
        assert_eq!(second.failed().collect::<Vec<_>>(), [(Field::Email, "Email is required")]);
    }

    #[test]
    fn error_style_uses_configured_color() {
        let style = error_message_style(&FormConfig::default());
        assert_eq!(style[0], ("color", "#e74c3c".to_string()));
    }

    // =========================================================================
    // Submit flow
    // =========================================================================

    #[test]
    fn invalid_submit_is_rejected_without_sending() {
        let mut flow = SubmitFlow::default();
        let outcome = flow.submit(&contact_form("", "", "", ""), "Send", &FormConfig::default());
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 4));
        assert!(!flow.is_sending());
    }

    #[test]
    fn valid_submit_waits_then_restores_label() {
        let mut flow = SubmitFlow::default();
        let form = valid_contact_form();
        let outcome = flow.submit(&form, "Send Message", &FormConfig::default());
        assert_eq!(
            outcome,
            SubmitOutcome::Sending {
                delay: Duration::from_millis(2000)
            }
        );
        assert!(flow.is_sending());
        assert_eq!(flow.finish().as_deref(), Some("Send Message"));
        assert!(!flow.is_sending());
        assert_eq!(flow.finish(), None);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut flow = SubmitFlow::default();
        let form = valid_contact_form();
        flow.submit(&form, "Send", &FormConfig::default());
        assert_eq!(
            flow.submit(&form, "<i></i> Sending...", &FormConfig::default()),
            SubmitOutcome::Busy
        );
        assert_eq!(flow.finish().as_deref(), Some("Send"));
    }

    // =========================================================================
    // Modal
    // =========================================================================

    #[test]
    fn modal_closes_on_overlay_click_only() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(!modal.click(false));
        assert!(modal.is_open());
        assert!(modal.click(true));
        assert!(!modal.is_open());
    }
}
