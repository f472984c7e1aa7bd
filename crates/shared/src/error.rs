use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side validation failures. The `Display` strings are the exact
/// user-facing messages the screens show; exactly one is surfaced per
/// submit attempt (first failing rule wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password should be at least 6 characters.")]
    WeakPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Rejection from the remote authentication collaborator. Surfaced in the
/// same user-visible error slot as validation failures; never retried
/// automatically.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteAuthError {
    pub message: String,
}

impl RemoteAuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
