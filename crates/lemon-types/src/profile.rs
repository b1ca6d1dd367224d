//! User profile and its field validation.
//!
//! The profile is stored as one JSON blob; field names are camelCase so that
//! blobs written by earlier app versions load unchanged.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("name pattern"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+0?1\s)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").expect("phone pattern")
});

/// Persisted user profile with notification preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Local image URI; `None` shows the initials placeholder.
    pub avatar_image: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

/// A single failed profile field check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFieldError {
    #[error("First name is required.")]
    FirstNameRequired,
    #[error("First name is invalid.")]
    FirstNameInvalid,
    #[error("Last name is invalid.")]
    LastNameInvalid,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Email is invalid.")]
    EmailInvalid,
    #[error("Phone number is invalid.")]
    PhoneInvalid,
}

/// Letters only, at least one.
pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// North-American formats, with or without a `+1` prefix.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Check the two fields collected during onboarding.
pub fn validate_onboarding(first_name: &str, email: &str) -> Vec<ProfileFieldError> {
    let mut errors = Vec::new();
    check_first_name(first_name, &mut errors);
    check_email(email, &mut errors);
    errors
}

fn check_first_name(first_name: &str, errors: &mut Vec<ProfileFieldError>) {
    if first_name.is_empty() {
        errors.push(ProfileFieldError::FirstNameRequired);
    } else if !validate_name(first_name) {
        errors.push(ProfileFieldError::FirstNameInvalid);
    }
}

fn check_email(email: &str, errors: &mut Vec<ProfileFieldError>) {
    if email.is_empty() {
        errors.push(ProfileFieldError::EmailRequired);
    } else if !validate_email(email) {
        errors.push(ProfileFieldError::EmailInvalid);
    }
}

impl UserProfile {
    /// Profile created at the end of onboarding.
    pub fn onboarded(first_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            email: email.to_string(),
            ..Self::default()
        }
    }

    /// Every failing field, in form order. Empty means the profile can be saved.
    pub fn validate(&self) -> Vec<ProfileFieldError> {
        let mut errors = Vec::new();
        check_first_name(&self.first_name, &mut errors);
        if !self.last_name.is_empty() && !validate_name(&self.last_name) {
            errors.push(ProfileFieldError::LastNameInvalid);
        }
        check_email(&self.email, &mut errors);
        if !self.phone_number.is_empty() && !validate_phone(&self.phone_number) {
            errors.push(ProfileFieldError::PhoneInvalid);
        }
        errors
    }

    /// Upper-cased initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|s| s.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Tilly"));
        assert!(!validate_name(""));
        assert!(!validate_name("Tilly2"));
        assert!(!validate_name("Mary Ann"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("tilly@littlelemon.com"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(validate_email("admin@[192.168.0.1]"));
        assert!(!validate_email("tilly@"));
        assert!(!validate_email("tilly.littlelemon.com"));
        assert!(!validate_email("tilly@host"));
    }

    #[test]
    fn test_validate_phone() {
        for phone in [
            "1234567890",
            "123-456-7890",
            "(123) 456-7890",
            "123 456 7890",
            "123.456.7890",
            "+1 (123) 456-7890",
        ] {
            assert!(validate_phone(phone), "{phone} should be accepted");
        }
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("+44 20 7946 0958"));
    }

    #[test]
    fn test_profile_validate() {
        let mut profile = UserProfile::onboarded("Tilly", "tilly@littlelemon.com");
        assert!(profile.validate().is_empty());

        profile.first_name.clear();
        profile.last_name = "O'Neil".into();
        profile.email = "nope".into();
        profile.phone_number = "555".into();
        assert_eq!(
            profile.validate(),
            vec![
                ProfileFieldError::FirstNameRequired,
                ProfileFieldError::LastNameInvalid,
                ProfileFieldError::EmailInvalid,
                ProfileFieldError::PhoneInvalid,
            ]
        );
    }

    #[test]
    fn test_validate_onboarding() {
        assert!(validate_onboarding("Tilly", "tilly@littlelemon.com").is_empty());
        assert_eq!(
            validate_onboarding("", ""),
            vec![
                ProfileFieldError::FirstNameRequired,
                ProfileFieldError::EmailRequired
            ]
        );
    }

    #[test]
    fn test_initials() {
        let mut profile = UserProfile::onboarded("tilly", "t@l.com");
        assert_eq!(profile.initials(), "T");
        profile.last_name = "lemon".into();
        assert_eq!(profile.initials(), "TL");
    }

    #[test]
    fn test_blob_is_camel_case() {
        let profile = UserProfile::onboarded("Tilly", "tilly@littlelemon.com");
        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["firstName"], "Tilly");
        assert_eq!(json["specialOffers"], false);

        // Older blobs may omit fields entirely.
        let parsed: UserProfile =
            serde_json::from_str(r#"{"firstName":"Tilly","email":"t@l.com"}"#).expect("parse");
        assert_eq!(parsed.first_name, "Tilly");
        assert!(!parsed.newsletter);
        assert_eq!(parsed.avatar_image, None);
    }
}
