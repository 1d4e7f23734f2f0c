//! Credential sources for authenticated requests.
//!
//! Token acquisition and refresh are the host application's job. The client
//! only asks a [`CredentialSource`] for the current bearer token when a
//! request needs one, and refuses to build the request when none is available.

use std::sync::RwLock;

use chrono::Utc;

use crate::Token;

/// Tokens this close to expiry are treated as already expired, so a request
/// does not leave with a token that lapses in flight.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Supplies the bearer token attached to authenticated requests.
pub trait CredentialSource: Send + Sync {
    /// Current access token, or `None` when the user is not signed in.
    fn bearer_token(&self) -> Option<String>;
}

impl Token {
    /// Whether the token has passed its expiry timestamp.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    /// Whether the token expires within `margin_secs` from now.
    pub fn expires_within(&self, margin_secs: i64) -> bool {
        Utc::now().timestamp() >= self.expires_at.saturating_sub(margin_secs)
    }
}

impl CredentialSource for Token {
    fn bearer_token(&self) -> Option<String> {
        if self.access_token.is_empty() || self.expires_within(EXPIRY_MARGIN_SECS) {
            tracing::debug!("Stored token is empty or about to expire");
            return None;
        }
        Some(self.access_token.clone())
    }
}

/// Never yields a token. Suitable for clients that only call public endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A token slot the host can replace after signing in or refreshing.
#[derive(Debug, Default)]
pub struct SharedToken {
    inner: RwLock<Option<Token>>,
}

impl SharedToken {
    pub fn new(token: Option<Token>) -> Self {
        Self {
            inner: RwLock::new(token),
        }
    }

    pub fn set(&self, token: Token) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(token);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

impl CredentialSource for SharedToken {
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(|t| t.bearer_token()))
    }
}
