//! Contact form state
//!
//! The form moves through `Editing → Sending → Sent | Failed → Editing`.
//! - Validation failures stay in `Editing` and are reported per field.
//! - A second submit while `Sending` is refused; nothing is queued.
//! - `Sent` clears the fields when its display time is over.
//! - `Failed` keeps the fields so the user can resubmit.
//!
//! Status-reset timers and delivery results carry the submission ticket, so
//! a late signal from an older submission never touches a newer one.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::delivery::OutgoingMessage;
use crate::error::DeliveryError;

/// Minimum message length, counted after trimming
pub const MIN_MESSAGE_CHARS: usize = 10;

/// `local@domain.tld` shape, no whitespace
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("This field is required"),
            FieldError::InvalidEmail => f.write_str("Please enter a valid email address"),
            FieldError::TooShort { min } => write!(f, "Please write at least {} characters", min),
        }
    }
}

/// Field-level validation errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, FieldError)>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, err)| *err)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, field: Field, error: FieldError) {
        self.entries.push((field, error));
    }

    fn clear_field(&mut self, field: Field) {
        self.entries.retain(|(f, _)| *f != field);
    }
}

/// Raw input as typed by the user
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

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Check every field and build the message for `destination`
    pub fn validate(&self, destination: &str) -> Result<OutgoingMessage, FieldErrors> {
        let mut errors = FieldErrors::default();

        for field in Field::ALL {
            let value = self.value(field).trim();
            if value.is_empty() {
                errors.push(field, FieldError::Required);
                continue;
            }
            match field {
                Field::Email if !EMAIL_SHAPE.is_match(value) => {
                    errors.push(field, FieldError::InvalidEmail);
                }
                Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
                    errors.push(field, FieldError::TooShort { min: MIN_MESSAGE_CHARS });
                }
                _ => {}
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OutgoingMessage {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            to_email: destination.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Invalid(FieldErrors),
    /// A delivery for this form is still running
    InFlight,
    /// The success or error view is up; the form is not shown
    ShowingStatus,
}

/// What the caller should do after a submit was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub message: OutgoingMessage,
}

#[derive(Debug)]
pub struct ContactState {
    form: ContactForm,
    errors: FieldErrors,
    status: FormStatus,
    ticket: u64,
    destination: String,
}

impl ContactState {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            status: FormStatus::Editing,
            ticket: 0,
            destination: destination.into(),
        }
    }

    /// Update one field; ignored unless the form is editable
    pub fn edit(&mut self, field: Field, value: String) {
        if self.status != FormStatus::Editing {
            return;
        }
        self.form.set(field, value);
        self.errors.clear_field(field);
    }

    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        match self.status {
            FormStatus::Sending => return Err(SubmitError::InFlight),
            FormStatus::Sent | FormStatus::Failed => return Err(SubmitError::ShowingStatus),
            FormStatus::Editing => {}
        }

        let message = match self.form.validate(&self.destination) {
            Ok(message) => message,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "contact form invalid");
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };

        self.errors = FieldErrors::default();
        self.status = FormStatus::Sending;
        self.ticket += 1;

        Ok(Submission {
            ticket: self.ticket,
            message,
        })
    }

    /// Apply a delivery outcome.
    /// Returns the ticket to schedule the status reset with.
    pub fn delivered(&mut self, ticket: u64, result: &Result<(), DeliveryError>) -> Option<u64> {
        if ticket != self.ticket || self.status != FormStatus::Sending {
            return None;
        }

        self.status = match result {
            Ok(()) => FormStatus::Sent,
            Err(_) => FormStatus::Failed,
        };
        Some(ticket)
    }

    /// The status view's display time is over
    pub fn status_elapsed(&mut self, ticket: u64) {
        if ticket != self.ticket {
            return;
        }

        match self.status {
            FormStatus::Sent => {
                self.form = ContactForm::default();
                self.status = FormStatus::Editing;
            }
            FormStatus::Failed => {
                self.status = FormStatus::Editing;
            }
            FormStatus::Editing | FormStatus::Sending => {}
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::tests::RecordingDelivery;
    use crate::delivery::{deliver, MessageDelivery};
    use std::sync::Arc;

    fn filled(state: &mut ContactState) {
        state.edit(Field::Name, "Ada Lovelace".into());
        state.edit(Field::Email, "ada@example.com".into());
        state.edit(Field::Subject, "New project".into());
        state.edit(Field::Message, "Let's build an engine together.".into());
    }

    /// Submit, run the delivery, and apply its outcome like the app does
    async fn submit_through(
        state: &mut ContactState,
        delivery: Arc<dyn MessageDelivery>,
    ) -> Result<u64, SubmitError> {
        let submission = state.submit()?;
        let (ticket, result) = deliver(delivery, submission.ticket, submission.message).await;
        Ok(state.delivered(ticket, &result).expect("ticket is current"))
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let form = ContactForm::default();
        let errors = form.validate("to@example.com").unwrap_err();
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last@studio.example.org"] {
            assert!(EMAIL_SHAPE.is_match(good), "{}", good);
        }
        for bad in ["not-an-email", "a@b", "@b.com", "a b@c.com", "a@b.c d"] {
            assert!(!EMAIL_SHAPE.is_match(bad), "{}", bad);
        }
    }

    #[test]
    fn test_short_message_is_rejected() {
        let mut state = ContactState::new("to@example.com");
        filled(&mut state);
        state.edit(Field::Message, "  hi there ".into());

        let err = state.submit().unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.get(Field::Message), Some(FieldError::TooShort { min: 10 }));
        assert_eq!(errors.fields().count(), 1);
    }

    #[tokio::test]
    async fn test_bad_email_flags_only_email_and_never_delivers() {
        let recording = RecordingDelivery::new(Ok(()));
        let mut state = ContactState::new("to@example.com");
        filled(&mut state);
        state.edit(Field::Email, "not-an-email".into());

        let err = submit_through(&mut state, recording.clone()).await.unwrap_err();

        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(state.errors(), &errors);
        assert_eq!(state.status(), FormStatus::Editing);
        assert_eq!(recording.calls(), 0);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut state = ContactState::new("to@example.com");
        let _ = state.submit();
        assert!(state.errors().get(Field::Name).is_some());

        state.edit(Field::Name, "Ada".into());
        assert!(state.errors().get(Field::Name).is_none());
        assert!(state.errors().get(Field::Email).is_some());
    }

    #[tokio::test]
    async fn test_success_shows_status_then_clears_form() {
        let recording = RecordingDelivery::new(Ok(()));
        let mut state = ContactState::new("studio@example.com");
        filled(&mut state);

        let ticket = submit_through(&mut state, recording.clone()).await.unwrap();
        assert_eq!(state.status(), FormStatus::Sent);
        assert_eq!(recording.sent.lock().unwrap()[0].to_email, "studio@example.com");

        state.status_elapsed(ticket);
        assert_eq!(state.status(), FormStatus::Editing);
        assert_eq!(state.form(), &ContactForm::default());
    }

    #[tokio::test]
    async fn test_failure_shows_error_then_returns_to_form_with_input() {
        let recording = RecordingDelivery::new(Err(DeliveryError::Transport("offline".into())));
        let mut state = ContactState::new("studio@example.com");
        filled(&mut state);
        let before = state.form().clone();

        let ticket = submit_through(&mut state, recording.clone()).await.unwrap();
        assert_eq!(state.status(), FormStatus::Failed);
        assert_eq!(recording.calls(), 1);

        // Not editable while the error view is up
        state.edit(Field::Name, "Someone else".into());
        assert_eq!(state.form(), &before);

        state.status_elapsed(ticket);
        assert_eq!(state.status(), FormStatus::Editing);
        assert_eq!(state.form(), &before);

        // Resubmission works
        assert!(state.submit().is_ok());
    }

    #[test]
    fn test_double_submit_is_refused_while_in_flight() {
        let mut state = ContactState::new("to@example.com");
        filled(&mut state);

        let first = state.submit().unwrap();
        assert_eq!(state.submit(), Err(SubmitError::InFlight));
        assert_eq!(state.status(), FormStatus::Sending);

        assert_eq!(state.delivered(first.ticket, &Ok(())), Some(first.ticket));
        assert_eq!(state.submit(), Err(SubmitError::ShowingStatus));
    }

    #[test]
    fn test_stale_signals_are_ignored() {
        let mut state = ContactState::new("to@example.com");
        filled(&mut state);

        let first = state.submit().unwrap();
        state.delivered(first.ticket, &Err(DeliveryError::Transport("x".into())));
        state.status_elapsed(first.ticket);

        let second = state.submit().unwrap();
        // A duplicate result for the first submission changes nothing
        assert_eq!(state.delivered(first.ticket, &Ok(())), None);
        assert_eq!(state.status(), FormStatus::Sending);

        state.delivered(second.ticket, &Ok(()));
        state.status_elapsed(first.ticket);
        assert_eq!(state.status(), FormStatus::Sent);
    }
}
