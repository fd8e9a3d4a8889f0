use std::time::Duration;

use thiserror::Error;

/// Simulated delivery time before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the confirmation stays up before the form comes back.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Your Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All three fields are required; whitespace does not count.
    pub fn validate(&self) -> Result<(), ContactError> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
            .map_or(Ok(()), |f| Err(ContactError::MissingField(f)))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionPhase {
    pub fn is_submitting(self) -> bool {
        self == SubmissionPhase::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionPhase::Submitted
    }
}

/// Client-side submission flow: idle → submitting → submitted → idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub phase: SubmissionPhase,
}

impl ContactFlow {
    /// Accept the current form for sending.
    pub fn begin(&mut self) -> Result<(), ContactError> {
        if self.phase.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.form.validate()?;
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// Delivery finished: show the confirmation and clear the fields.
    pub fn complete(&mut self) {
        if self.phase.is_submitting() {
            self.phase = SubmissionPhase::Submitted;
            self.form.clear();
        }
    }

    /// Confirmation window elapsed.
    pub fn expire(&mut self) {
        if self.phase.is_submitted() {
            self.phase = SubmissionPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.email = "   ".to_string();
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );

        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut flow = ContactFlow {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        assert_eq!(flow.begin(), Ok(()));
        assert_eq!(flow.phase, SubmissionPhase::Submitting);
        // double submit while in flight is refused
        assert_eq!(flow.begin(), Err(ContactError::Busy));

        flow.complete();
        assert_eq!(flow.phase, SubmissionPhase::Submitted);
        assert_eq!(flow.form, ContactForm::default());

        flow.expire();
        assert_eq!(flow.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_invalid_submit_leaves_phase() {
        let mut flow = ContactFlow::default();
        flow.form.name = "Ada".to_string();
        assert!(flow.begin().is_err());
        assert_eq!(flow.phase, SubmissionPhase::Idle);
        assert_eq!(flow.form.name, "Ada");
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut flow = ContactFlow {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        flow.complete();
        assert_eq!(flow.phase, SubmissionPhase::Idle);
        assert_eq!(flow.form, filled());
        flow.expire();
        assert_eq!(flow.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ContactError::MissingField(ContactField::Message).to_string(),
            "Your Message is required"
        );
    }
}
