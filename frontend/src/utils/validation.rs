//! Client-side checks for the contact form.
//!
//! Each field is checked on its own; a failure in one never stops the
//! others from being checked. The `Display` text of [`FieldError`] is the
//! message shown under the field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Indian mobile numbers: ten digits, leading 6-9.
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Plan,
    Message,
}

impl Field {
    pub const VALIDATED: [Field; 4] = [Field::Name, Field::Email, Field::Mobile, Field::Plan];

    /// Value of the `name` attribute on the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Plan => "plan",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter a valid name (at least 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    #[error("Please select a preferred plan")]
    NoPlanSelected,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().chars().count() < 2 {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_mobile(value: &str) -> Result<(), FieldError> {
    if !MOBILE_RE.is_match(value) {
        return Err(FieldError::InvalidMobile);
    }
    Ok(())
}

pub fn validate_plan(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::NoPlanSelected);
    }
    Ok(())
}

/// Runs the check for `field` against `value`. Free text is never rejected.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Mobile => validate_mobile(value),
        Field::Plan => validate_plan(value),
        Field::Message => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_characters_after_trim() {
        assert_eq!(validate_name("A"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("  A  "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name(""), Err(FieldError::NameTooShort));
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(" Jordan Lee ").is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("j@x.com").is_ok());
        assert!(validate_email("first.last@mail.example.in").is_ok());
        for bad in ["bad", "", "a@b", "a b@x.com", "a@@x.com", "@x.com", "a@.com "] {
            assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "{bad:?}");
        }
    }

    #[test]
    fn mobile_is_ten_digits_starting_six_to_nine() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("6000000000").is_ok());
        for bad in ["12345", "5876543210", "98765432100", "987654321", "98765 43210", ""] {
            assert_eq!(validate_mobile(bad), Err(FieldError::InvalidMobile), "{bad:?}");
        }
    }

    #[test]
    fn mobile_rejects_non_ascii_digits() {
        assert!(validate_mobile("९८७६५४३२१०").is_err());
    }

    #[test]
    fn plan_must_be_chosen() {
        assert_eq!(validate_plan(""), Err(FieldError::NoPlanSelected));
        assert!(validate_plan("Basic").is_ok());
    }

    #[test]
    fn messages_match_inline_copy() {
        assert_eq!(
            FieldError::InvalidMobile.to_string(),
            "Please enter a valid 10-digit mobile number"
        );
        assert_eq!(FieldError::NoPlanSelected.to_string(), "Please select a preferred plan");
    }

    #[test]
    fn free_text_is_never_rejected() {
        assert!(validate_field(Field::Message, "").is_ok());
    }
}
