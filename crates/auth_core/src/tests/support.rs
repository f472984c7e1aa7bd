//! Test collaborators shared by the controller tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use shared::{
    domain::{Credentials, NavigationIntent},
    error::RemoteAuthError,
};
use tokio::sync::Notify;

use crate::{Authenticator, Router};

pub(crate) struct RecordingRouter {
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingRouter {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            intents: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn intents(&self) -> Vec<NavigationIntent> {
        self.intents.lock().expect("router intents").clone()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents.lock().expect("router intents").push(intent);
    }
}

/// Resolves immediately, counting attempts.
#[derive(Default)]
pub(crate) struct CountingAuthenticator {
    attempts: AtomicUsize,
}

impl CountingAuthenticator {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for CountingAuthenticator {
    async fn attempt(&self, _credentials: &Credentials) -> Result<(), RemoteAuthError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Always rejects with the given message.
pub(crate) struct FailingAuthenticator {
    message: String,
    attempts: AtomicUsize,
}

impl FailingAuthenticator {
    pub(crate) fn new(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            message: message.into(),
            attempts: AtomicUsize::new(0),
        })
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for FailingAuthenticator {
    async fn attempt(&self, _credentials: &Credentials) -> Result<(), RemoteAuthError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(RemoteAuthError::new(self.message.clone()))
    }
}

/// Blocks each attempt until the test releases the gate.
pub(crate) struct GatedAuthenticator {
    attempts: AtomicUsize,
    gate: Notify,
}

impl GatedAuthenticator {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
            gate: Notify::new(),
        })
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl Authenticator for GatedAuthenticator {
    async fn attempt(&self, _credentials: &Credentials) -> Result<(), RemoteAuthError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(())
    }
}
