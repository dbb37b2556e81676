use std::collections::HashMap;

use crate::config::RelayConfig;

use super::submit::SubmitError;
use super::validate::{
    validate_email, validate_message, validate_name, validate_phone, validate_subject, FieldError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    /// Form field name on the wire and the input's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Subject => validate_subject(value),
            Field::Message => validate_message(value),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    /// Confirmation banner is up until dismissed.
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    values: HashMap<Field, String>,
    errors: HashMap<Field, FieldError>,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Typing into a field replaces its value and drops its stale error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Validate one field (on blur) and store or clear its error.
    pub fn check(&mut self, field: Field) -> bool {
        match field.validate(self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// Validates every field. Entered values are kept either way.
    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .iter()
            .fold(true, |ok, &field| self.check(field) && ok)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inputs and the submit button are disabled while a request is out.
    pub fn is_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Validates and, when everything passes, switches to `Submitting` and
    /// returns the request to send. `None` while another submission is in
    /// flight or when a field is invalid.
    pub fn begin_submit(&mut self, config: &RelayConfig) -> Option<RelayRequest> {
        if self.is_disabled() || !self.validate_all() {
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(RelayRequest::from_form(self, config))
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.values.clear();
                self.errors.clear();
                self.status = FormStatus::Succeeded;
            }
            Err(e) => {
                log::warn!("Contact form submission failed: {}", e);
                self.status = FormStatus::Failed(super::submit::user_message(&e));
            }
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        if self.status == FormStatus::Succeeded {
            self.status = FormStatus::Idle;
        }
    }
}

/// Body of one relay POST: the five user fields plus the relay's control
/// fields. `botcheck` is the honeypot and always goes out empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayRequest {
    pairs: Vec<(&'static str, String)>,
}

impl RelayRequest {
    pub fn from_form(form: &ContactForm, config: &RelayConfig) -> Self {
        let mut pairs: Vec<(&'static str, String)> = Field::ALL
            .iter()
            .map(|&f| (f.key(), form.value(f).trim().to_string()))
            .collect();
        pairs.push(("access_key", config.access_key.clone()));
        pairs.push(("from_name", config.from_name.clone()));
        pairs.push(("botcheck", String::new()));
        Self { pairs }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada Lovelace");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "New website");
        form.set(Field::Message, "We would like a scroll-heavy landing page.");
        form
    }

    #[test]
    fn errors_are_per_field_and_keep_values() {
        let mut form = filled();
        form.set(Field::Email, "ada@example");
        assert!(!form.validate_all());
        assert_eq!(form.error(Field::Email), Some(&FieldError::EmailInvalid));
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.value(Field::Email), "ada@example");

        form.set(Field::Email, "ada@example.com");
        assert_eq!(form.error(Field::Email), None);
        assert!(form.validate_all());
    }

    #[test]
    fn invalid_form_does_not_start_submitting() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(&RelayConfig::default()), None);
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(form.error(Field::Message).is_some());
        assert!(form.error(Field::Phone).is_none());
    }

    #[test]
    fn request_carries_user_and_control_fields() {
        let config = RelayConfig {
            access_key: "key-123".to_string(),
            from_name: "Iconiqa Website".to_string(),
        };
        let mut form = filled();
        let request = form.begin_submit(&config).unwrap();
        assert!(form.is_disabled());
        assert_eq!(
            request.keys().collect::<Vec<_>>(),
            vec!["name", "email", "phone", "subject", "message", "access_key", "from_name", "botcheck"]
        );
        assert_eq!(request.get("access_key"), Some("key-123"));

        let body = request.encode();
        assert!(body.starts_with("name=Ada%20Lovelace&email=ada%40example.com&phone=&"));
        assert!(body.ends_with("from_name=Iconiqa%20Website&botcheck="));

        // A second click while in flight is ignored.
        assert_eq!(form.begin_submit(&config), None);
    }

    #[test]
    fn failure_keeps_values_and_shows_message() {
        let mut form = filled();
        form.begin_submit(&RelayConfig::default());
        form.finish(Err(SubmitError::Timeout));
        assert!(matches!(form.status(), FormStatus::Failed(msg) if msg.contains("timed out")));
        assert!(!form.is_disabled());
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn confirmation_dismisses_to_idle() {
        let mut form = filled();
        form.begin_submit(&RelayConfig::default());
        form.finish(Ok(()));
        assert_eq!(form.status(), &FormStatus::Succeeded);
        form.dismiss_confirmation();
        assert_eq!(form.status(), &FormStatus::Idle);
    }
}
