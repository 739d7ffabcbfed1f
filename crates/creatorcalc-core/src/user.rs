use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

const MIN_PASSWORD_LEN: usize = 6;

/// The single role string carried by a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Creator,
    Brand,
    Agency,
}

impl UserRole {
    /// Resolves a role label case-insensitively; unknown labels yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<UserRole> {
        match raw.trim().to_lowercase().as_str() {
            "creator" => Some(UserRole::Creator),
            "brand" => Some(UserRole::Brand),
            "agency" => Some(UserRole::Agency),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Creator => write!(f, "creator"),
            UserRole::Brand => write!(f, "brand"),
            UserRole::Agency => write!(f, "agency"),
        }
    }
}

/// User row as stored by the identity provider. Passive transfer shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    #[must_use]
    pub fn new(email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, alias = "confirmPassword")]
    pub confirm_password: String,
    pub role: Option<UserRole>,
}

/// Field name → message for each failed signup check, keyed alphabetically.
pub type SignupErrors = BTreeMap<&'static str, String>;

/// Checks a signup form before it is handed to the identity provider.
///
/// An empty map means the form is acceptable. A missing role defaults to
/// `creator` upstream and is not an error.
#[must_use]
pub fn validate_signup(form: &SignupForm) -> SignupErrors {
    let mut errors = SignupErrors::new();

    if form.email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    if form.password != form.confirm_password {
        errors.insert("confirm_password", "Passwords do not match".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "maya@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            role: Some(UserRole::Creator),
        }
    }

    #[test]
    fn valid_signup_has_no_errors() {
        assert!(validate_signup(&valid_form()).is_empty());
    }

    #[test]
    fn missing_email_is_required_error() {
        let form = SignupForm {
            email: String::new(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = SignupForm {
            email: "maya@example".to_string(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn short_password_is_rejected() {
        let form = SignupForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let form = SignupForm {
            confirm_password: "hunter23".to_string(),
            ..valid_form()
        };
        let errors = validate_signup(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("confirm_password"));
    }

    #[test]
    fn errors_iterate_alphabetically() {
        let form = SignupForm {
            email: String::new(),
            password: "abc".to_string(),
            confirm_password: "xyz".to_string(),
            role: None,
        };
        let keys: Vec<&str> = validate_signup(&form).into_keys().collect();
        assert_eq!(keys, vec!["confirm_password", "email", "password"]);
    }

    #[test]
    fn role_parse_accepts_known_roles() {
        assert_eq!(UserRole::parse("Brand"), Some(UserRole::Brand));
        assert_eq!(UserRole::parse("agency"), Some(UserRole::Agency));
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn user_record_timestamps_start_equal() {
        let user = UserRecord::new("maya@example.com", UserRole::Agency);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.role, UserRole::Agency);
    }
}
