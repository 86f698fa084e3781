use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    None,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub message: String,
    pub severity: Severity,
}

impl FormStatus {
    pub fn color(&self) -> &'static str {
        match self.severity {
            Severity::None => "",
            Severity::Error => "red",
        }
    }
}

impl From<ValidationError> for FormStatus {
    fn from(error: ValidationError) -> Self {
        Self {
            message: error.to_string(),
            severity: Severity::Error,
        }
    }
}

/// Where accepted contact messages go. Only the local sink ships; nothing leaves the page.
pub trait MessageSink {
    fn deliver(&mut self, form: FormState);
}

#[derive(Debug, Default)]
pub struct LocalSink;

impl MessageSink for LocalSink {
    fn deliver(&mut self, form: FormState) {
        info!("Contact message accepted locally from {}", form.email);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(ValidationError),
}

pub struct ContactForm<K: MessageSink> {
    fields: FormState,
    status: FormStatus,
    sink: K,
}

impl<K: MessageSink> ContactForm<K> {
    pub fn new(sink: K) -> Self {
        Self {
            fields: FormState::default(),
            status: FormStatus::default(),
            sink,
        }
    }

    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn update(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
    }

    /// Rejections keep every field as typed. Acceptance clears the status and the fields;
    /// the caller is responsible for showing the confirmation alert.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.fields.validate() {
            Err(error) => {
                debug!("Contact form rejected: {}", error);
                self.status = error.into();
                SubmitOutcome::Rejected(error)
            }
            Ok(()) => {
                self.status = FormStatus::default();
                self.sink.deliver(std::mem::take(&mut self.fields));
                SubmitOutcome::Accepted
            }
        }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &K {
        &self.sink
    }
}

/// Identifies one scheduled dismissal. Only the ticket from the latest trigger can hide the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertState {
    visible: bool,
    generation: u64,
}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn trigger(&mut self) -> AlertTicket {
        self.visible = true;
        self.generation += 1;
        AlertTicket(self.generation)
    }

    /// Returns whether this expiry actually hid the alert.
    pub fn expire(&mut self, ticket: AlertTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<FormState>,
    }

    impl MessageSink for RecordingSink {
        fn deliver(&mut self, form: FormState) {
            self.delivered.push(form);
        }
    }

    fn form_with(name: &str, email: &str, message: &str) -> ContactForm<RecordingSink> {
        let mut form = ContactForm::new(RecordingSink::default());
        form.update(FormField::Name, name.to_string());
        form.update(FormField::Email, email.to_string());
        form.update(FormField::Message, message.to_string());
        form
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana @example.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn empty_submit_asks_for_all_fields() {
        let mut form = form_with("", "", "");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(ValidationError::MissingFields)
        );
        assert_eq!(form.status().message, "Please fill all fields.");
        assert_eq!(form.status().color(), "red");
        assert_eq!(form.fields(), &FormState::default());
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut form = form_with("Ana", "not-an-email", "");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(ValidationError::MissingFields)
        );
    }

    #[test]
    fn bad_email_keeps_fields() {
        let mut form = form_with("Ana", "not-an-email", "hi");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected(ValidationError::InvalidEmail)
        );
        assert_eq!(form.status().message, "Please enter a valid email.");
        assert_eq!(form.fields().name, "Ana");
        assert_eq!(form.fields().email, "not-an-email");
        assert_eq!(form.fields().message, "hi");
        assert!(form.sink().delivered.is_empty());
    }

    #[test]
    fn valid_submit_clears_fields_and_status() {
        let mut form = form_with("Ana", "not-an-email", "hi");
        form.submit();
        form.update(FormField::Email, "ana@example.com".to_string());

        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert_eq!(form.status(), &FormStatus::default());
        assert_eq!(form.fields(), &FormState::default());
        assert_eq!(form.sink().delivered.len(), 1);
        assert_eq!(form.sink().delivered[0].email, "ana@example.com");
    }

    #[test]
    fn retrigger_replaces_pending_dismissal() {
        let mut alert = AlertState::default();
        let first = alert.trigger();
        let second = alert.trigger();
        assert!(alert.is_visible());

        // The first window elapsing must not hide the re-shown alert.
        assert!(!alert.expire(first));
        assert!(alert.is_visible());

        assert!(alert.expire(second));
        assert!(!alert.is_visible());
        assert!(!alert.expire(second));
    }

    #[test]
    fn manual_dismiss_then_late_expiry_does_nothing() {
        let mut alert = AlertState::default();
        let ticket = alert.trigger();
        alert.dismiss();
        assert!(!alert.is_visible());
        assert!(!alert.expire(ticket));
        assert!(!alert.is_visible());
    }
}
