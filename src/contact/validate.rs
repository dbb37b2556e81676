use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-(). ]{7,20}$").expect("phone pattern compiles"));

/// Inline message shown under a field. The `Display` text is what the user
/// sees.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name.")]
    NameRequired,
    #[error("Name must be between 2 and 100 characters.")]
    NameLength,
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please enter a valid phone number.")]
    PhoneInvalid,
    #[error("Please enter a subject.")]
    SubjectRequired,
    #[error("Subject must be between 3 and 150 characters.")]
    SubjectLength,
    #[error("Please enter a message.")]
    MessageRequired,
    #[error("Message must be between 10 and 1000 characters.")]
    MessageLength,
}

fn within(value: &str, min: usize, max: usize) -> bool {
    let n = value.chars().count();
    n >= min && n <= max
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if !within(value, 2, 100) {
        return Err(FieldError::NameLength);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Optional. When given it needs at least seven digits.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !PHONE_RE.is_match(value) || digits < 7 {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

pub fn validate_subject(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::SubjectRequired);
    }
    if !within(value, 3, 150) {
        return Err(FieldError::SubjectLength);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if !within(value, 10, 1000) {
        return Err(FieldError::MessageLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_a_tld() {
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b.c"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("first.last@studio.co.uk"), Ok(()));
        assert_eq!(validate_email("   "), Err(FieldError::EmailRequired));
    }

    #[test]
    fn message_length_is_bounded() {
        assert_eq!(validate_message("short"), Err(FieldError::MessageLength));
        assert_eq!(validate_message(&"a".repeat(1001)), Err(FieldError::MessageLength));
        assert_eq!(validate_message(&"a".repeat(1000)), Ok(()));
        assert_eq!(validate_message("  hello there  "), Ok(()));
    }

    #[test]
    fn phone_is_optional_but_checked() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
        assert_eq!(validate_phone("12-34"), Err(FieldError::PhoneInvalid));
        assert_eq!(validate_phone("+-()+-() .."), Err(FieldError::PhoneInvalid));
        assert_eq!(validate_phone("555 CALL NOW"), Err(FieldError::PhoneInvalid));
    }

    #[test]
    fn name_and_subject_lengths() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("A"), Err(FieldError::NameLength));
        assert_eq!(validate_name("Ada"), Ok(()));
        assert_eq!(validate_subject("Hi"), Err(FieldError::SubjectLength));
        assert_eq!(validate_subject("New site"), Ok(()));
    }

    #[test]
    fn messages_read_as_sentences() {
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email address.");
    }
}
