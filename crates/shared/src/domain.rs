use serde::{Deserialize, Serialize};

/// Login form payload. Both fields must be non-empty (trimmed) before a
/// submission is attempted; the validator enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// The credentials forwarded to the remote collaborator once the
    /// registration form validates.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Login,
    Register,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }
}

/// Declarative screen-transition instruction handed to the router
/// collaborator. The core never performs navigation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "route", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Discard the current screen from history and show `route`.
    Replace(Route),
    /// Stack `route` on top of the current screen.
    Push(Route),
}
