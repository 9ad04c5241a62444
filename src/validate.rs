//! Form validation in front of the registry. The store trusts whatever it
//! receives; every create/update request passes through here first, and a
//! rejected form never reaches the core.

use roster::model::StudentFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate(fields: &StudentFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if fields.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(&fields.email) {
        errors.push(FieldError::new("email", "Email is invalid"));
    }

    if fields.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    } else if fields.phone.len() != 10 || !fields.phone.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("phone", "Phone number must be 10 digits"));
    }

    if fields.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if fields.password.len() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    if fields.confirm_password.is_empty() {
        errors.push(FieldError::new(
            "confirm_password",
            "Confirm password is required",
        ));
    } else if fields.password != fields.confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    if fields.language.is_empty() {
        errors.push(FieldError::new("language", "Language is required"));
    }
    if fields.gender.is_empty() {
        errors.push(FieldError::new("gender", "Gender is required"));
    }
    if fields.dob.is_empty() {
        errors.push(FieldError::new("dob", "Date of birth is required"));
    }

    errors
}

/// Shape check only: something@something.something, no whitespace.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
