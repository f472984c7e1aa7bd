//! Registration screen controller. Shares the sign-in controller's
//! lifecycle and guard contract; success routes to the sign-in screen
//! rather than auto-authenticating.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::Serialize;
use shared::domain::{NavigationIntent, RegistrationRequest, Route};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    lifecycle::{SubmissionLifecycle, SubmissionState},
    validator, Authenticator, MissingRouter, Router,
};

#[derive(Debug, Default)]
struct RegistrationState {
    lifecycle: SubmissionLifecycle,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationSnapshot {
    pub state: SubmissionState,
    pub error: Option<String>,
}

impl RegistrationSnapshot {
    pub fn loading(&self) -> bool {
        self.state.is_submitting()
    }
}

pub struct RegistrationController {
    authenticator: Arc<dyn Authenticator>,
    router: Arc<dyn Router>,
    inner: Mutex<RegistrationState>,
    detached: AtomicBool,
}

impl RegistrationController {
    pub fn new(authenticator: Arc<dyn Authenticator>, router: Arc<dyn Router>) -> Arc<Self> {
        Arc::new(Self {
            authenticator,
            router,
            inner: Mutex::new(RegistrationState::default()),
            detached: AtomicBool::new(false),
        })
    }

    pub fn new_without_router(authenticator: Arc<dyn Authenticator>) -> Arc<Self> {
        Self::new(authenticator, Arc::new(MissingRouter))
    }

    /// Same shape as the sign-in `submit` with the full registration rule
    /// set. On success the router receives `Replace("/login")` so the new
    /// account signs in explicitly.
    pub async fn submit(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) {
        let request = RegistrationRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };

        {
            let mut state = self.inner.lock().await;
            if state.lifecycle.is_in_flight() {
                debug!("register: submit ignored while an attempt is in flight");
                return;
            }
            state.error = None;
            if let Err(err) = validator::validate_registration(&request) {
                debug!(%err, "register: rejected by validator");
                state.error = Some(err.to_string());
                return;
            }
            state.lifecycle.begin();
        }

        let outcome = self.authenticator.attempt(&request.credentials()).await;

        let mut state = self.inner.lock().await;
        if self.detached.load(Ordering::SeqCst) {
            debug!("register: dropping late resolution after detach");
            return;
        }
        match outcome {
            Ok(()) => {
                state.lifecycle.resolve_success();
                drop(state);
                info!("register: signup succeeded; routing to sign-in");
                self.router
                    .navigate(NavigationIntent::Replace(Route::Login));
            }
            Err(err) => {
                let reason = err.to_string();
                state.lifecycle.resolve_failure(reason.clone());
                state.error = Some(reason);
            }
        }
    }

    /// "Already have an account?" link.
    pub fn open_login(&self) {
        self.router.navigate(NavigationIntent::Replace(Route::Login));
    }

    /// Call on unmount; late resolutions are discarded.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> RegistrationSnapshot {
        let state = self.inner.lock().await;
        RegistrationSnapshot {
            state: state.lifecycle.state().clone(),
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/register_tests.rs"]
mod tests;
