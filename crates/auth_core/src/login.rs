//! Sign-in screen controller: validation, submission lifecycle, and the
//! navigation intent emitted on success.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::Serialize;
use shared::{
    domain::{Credentials, NavigationIntent, Route},
    error::ValidationError,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    lifecycle::{SubmissionLifecycle, SubmissionState},
    validator, Authenticator, MissingRouter, Router,
};

// The sign-in screen words its completeness message differently from the
// shared taxonomy's display text.
fn error_text(err: ValidationError) -> String {
    match err {
        ValidationError::MissingFields => "Please enter email and password.".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Default)]
struct LoginState {
    lifecycle: SubmissionLifecycle,
    error: Option<String>,
    remember: bool,
    show_password: bool,
}

/// Presentation-facing snapshot; the UI layer re-renders from these values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginSnapshot {
    pub state: SubmissionState,
    pub error: Option<String>,
    pub remember: bool,
    pub show_password: bool,
}

impl LoginSnapshot {
    pub fn loading(&self) -> bool {
        self.state.is_submitting()
    }
}

pub struct LoginController {
    authenticator: Arc<dyn Authenticator>,
    router: Arc<dyn Router>,
    inner: Mutex<LoginState>,
    detached: AtomicBool,
}

impl LoginController {
    pub fn new(authenticator: Arc<dyn Authenticator>, router: Arc<dyn Router>) -> Arc<Self> {
        Arc::new(Self {
            authenticator,
            router,
            inner: Mutex::new(LoginState::default()),
            detached: AtomicBool::new(false),
        })
    }

    /// Controller without a navigation host; intents are dropped with a
    /// warning.
    pub fn new_without_router(authenticator: Arc<dyn Authenticator>) -> Arc<Self> {
        Self::new(authenticator, Arc::new(MissingRouter))
    }

    /// Clears the previous error, validates, and runs at most one remote
    /// attempt. Ignored while a previous attempt is in flight. On success
    /// the router receives `Replace("/")`; on rejection the reason lands
    /// in the error slot and a fresh `submit` may retry.
    pub async fn submit(&self, email: &str, password: &str) {
        let credentials = Credentials::new(email, password);

        {
            let mut state = self.inner.lock().await;
            if state.lifecycle.is_in_flight() {
                debug!("login: submit ignored while an attempt is in flight");
                return;
            }
            state.error = None;
            if let Err(err) = validator::validate_login(&credentials) {
                debug!(%err, "login: rejected by validator");
                state.error = Some(error_text(err));
                return;
            }
            state.lifecycle.begin();
        }

        let outcome = self.authenticator.attempt(&credentials).await;

        let mut state = self.inner.lock().await;
        if self.detached.load(Ordering::SeqCst) {
            debug!("login: dropping late resolution after detach");
            return;
        }
        match outcome {
            Ok(()) => {
                state.lifecycle.resolve_success();
                drop(state);
                info!("login: authentication succeeded");
                self.router.navigate(NavigationIntent::Replace(Route::Home));
            }
            Err(err) => {
                let reason = err.to_string();
                state.lifecycle.resolve_failure(reason.clone());
                state.error = Some(reason);
            }
        }
    }

    /// Inert preference flag; nothing is persisted.
    pub async fn toggle_remember(&self) {
        let mut state = self.inner.lock().await;
        state.remember = !state.remember;
    }

    /// Inert presentation flag; the stored password value is never masked
    /// here.
    pub async fn toggle_password_visibility(&self) {
        let mut state = self.inner.lock().await;
        state.show_password = !state.show_password;
    }

    /// "Sign Up" link: stacks the registration screen.
    pub fn open_registration(&self) {
        self.router
            .navigate(NavigationIntent::Push(Route::Register));
    }

    /// Call on unmount. Any in-flight attempt's eventual resolution is
    /// discarded without touching state or the router.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> LoginSnapshot {
        let state = self.inner.lock().await;
        LoginSnapshot {
            state: state.lifecycle.state().clone(),
            error: state.error.clone(),
            remember: state.remember,
            show_password: state.show_password,
        }
    }
}

#[cfg(test)]
#[path = "tests/login_tests.rs"]
mod tests;
