//! Pure field-constraint evaluation shared by the sign-in and registration
//! screens. Rules run in a fixed order and the first failure wins; the
//! same email grammar applies everywhere.

use std::sync::OnceLock;

use regex::Regex;
use shared::{
    domain::{Credentials, RegistrationRequest},
    error::ValidationError,
};

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\\.,;:\s@"]+\.)+[^<>()\[\]\\.,;:\s@"]{2,})$"#,
        )
        .expect("email regex must compile")
    })
}

/// Conventional address grammar: dot-separated unquoted atoms or a quoted
/// local part, then one or more dot-separated domain labels with a final
/// label of at least two characters. Case-insensitive.
pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sign-in rule set: completeness, then email shape.
pub fn validate_login(credentials: &Credentials) -> Result<(), ValidationError> {
    if is_blank(&credentials.email) || is_blank(&credentials.password) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&credentials.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Registration rule set: completeness, email shape, password length,
/// confirmation match (exact, case-sensitive).
pub fn validate_registration(request: &RegistrationRequest) -> Result<(), ValidationError> {
    if is_blank(&request.full_name)
        || is_blank(&request.email)
        || is_blank(&request.password)
        || is_blank(&request.confirm_password)
    {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&request.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::WeakPassword);
    }
    if request.password != request.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
