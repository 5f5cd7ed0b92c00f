use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ORDER: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    Required(ContactField),
    #[error("Enter a valid email address")]
    InvalidEmail,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::Required(field) => *field,
            ContactError::InvalidEmail => ContactField::Email,
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .expect("invalid email regex")
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub active_field: ContactField,
    pub errors: Vec<ContactError>,
    /// Set between a valid submit and its completion; input is ignored meanwhile.
    pub submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            active_field: ContactField::Name,
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn next_field(&mut self) {
        let idx = ContactField::ORDER.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = ContactField::ORDER[(idx + 1) % ContactField::ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let len = ContactField::ORDER.len();
        let idx = ContactField::ORDER.iter().position(|f| *f == self.active_field).unwrap_or(0);
        self.active_field = ContactField::ORDER[(idx + len - 1) % len];
    }

    pub fn input_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        let field = self.active_field;
        self.value_mut(field).push(c);
        self.errors.retain(|e| e.field() != field);
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        let field = self.active_field;
        self.value_mut(field).pop();
        self.errors.retain(|e| e.field() != field);
    }

    pub fn error_for(&self, field: ContactField) -> Option<&ContactError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn validate(&self) -> Result<ContactMessage, Vec<ContactError>> {
        let mut errors: Vec<ContactError> = ContactField::ORDER
            .iter()
            .filter(|field| self.value(**field).trim().is_empty())
            .map(|field| ContactError::Required(*field))
            .collect();

        let email = self.email.trim();
        if !email.is_empty() && !email_pattern().is_match(email) {
            errors.push(ContactError::InvalidEmail);
        }

        if errors.is_empty() {
            Ok(ContactMessage {
                name: self.name.trim().to_string(),
                email: email.to_string(),
                subject: self.subject.trim().to_string(),
                message: self.message.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }

    /// Starts a submission. Returns the message when the form is valid and
    /// no submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(message) => {
                self.errors.clear();
                self.submitting = true;
                Some(message)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.subject = "Hello".to_string();
        form.message = "Nice calendar".to_string();
        form
    }

    #[test]
    fn every_field_is_required() {
        let errors = ContactForm::new().validate().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].to_string(), "Name is required");
    }

    #[test]
    fn bad_email_is_an_email_error() {
        let mut form = filled();
        form.email = "ada.example.com".to_string();

        let errors = form.validate().unwrap_err();

        assert_eq!(errors, vec![ContactError::InvalidEmail]);
        assert_eq!(errors[0].field(), ContactField::Email);
    }

    #[test]
    fn submit_locks_form_until_finished() {
        let mut form = filled();

        assert!(form.begin_submit().is_some());
        assert!(form.submitting);
        assert!(form.begin_submit().is_none());

        form.input_char('x');
        assert_eq!(form.message, "Nice calendar");

        form.finish_submit();
        assert!(!form.submitting);
        assert!(form.name.is_empty());
    }

    #[test]
    fn invalid_submit_does_not_lock() {
        let mut form = filled();
        form.subject.clear();

        assert!(form.begin_submit().is_none());
        assert!(!form.submitting);
        assert!(form.error_for(ContactField::Subject).is_some());
    }
}
