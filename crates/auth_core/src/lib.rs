use std::time::Duration;

use async_trait::async_trait;
use shared::{
    domain::{Credentials, NavigationIntent},
    error::RemoteAuthError,
};
use tracing::warn;

pub mod lifecycle;
pub mod login;
pub mod register;
pub mod validator;

pub use login::{LoginController, LoginSnapshot};
pub use register::{RegistrationController, RegistrationSnapshot};

/// Delay of the stub collaborator backing the sign-in screen.
pub const LOGIN_ATTEMPT_DELAY: Duration = Duration::from_millis(900);
/// Delay of the stub collaborator backing the registration screen.
pub const REGISTRATION_ATTEMPT_DELAY: Duration = Duration::from_millis(1000);

/// Remote authentication collaborator. The submission lifecycle does not
/// know whether the delay behind `attempt` is real network latency or a
/// stub; it only reacts to the resolution, which must happen exactly once.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn attempt(&self, credentials: &Credentials) -> Result<(), RemoteAuthError>;
}

/// Stand-in for a real authentication backend: resolves successfully after
/// a fixed delay and performs no actual authentication.
pub struct FixedDelayAuthenticator {
    delay: Duration,
}

impl FixedDelayAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn for_login() -> Self {
        Self::new(LOGIN_ATTEMPT_DELAY)
    }

    pub fn for_registration() -> Self {
        Self::new(REGISTRATION_ATTEMPT_DELAY)
    }
}

#[async_trait]
impl Authenticator for FixedDelayAuthenticator {
    async fn attempt(&self, _credentials: &Credentials) -> Result<(), RemoteAuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Navigation-stack host. `Replace` discards the current screen from
/// history, `Push` stacks a new one; the controllers only produce intents.
pub trait Router: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}

/// Null router for controllers constructed before a navigation host is
/// wired up.
pub struct MissingRouter;

impl Router for MissingRouter {
    fn navigate(&self, intent: NavigationIntent) {
        warn!(?intent, "router unavailable; dropping navigation intent");
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
