use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// In-memory session state holding the bearer token.
///
/// Cloning shares the same token, so the client and the UI always agree
/// on whether a user is signed in.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    signed_in: Arc<watch::Sender<bool>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        let (signed_in, _) = watch::channel(token.is_some());
        Self {
            token: Arc::new(RwLock::new(token)),
            signed_in: Arc::new(signed_in),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().map(|t| t.clone()).unwrap_or(None)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Receiver that observes every sign-in / sign-out transition
    pub fn watch_signed_in(&self) -> watch::Receiver<bool> {
        self.signed_in.subscribe()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
        self.signed_in.send_replace(true);
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        self.signed_in.send_replace(false);
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}
