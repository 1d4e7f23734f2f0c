//! Trakt media-tracking client library.
//!
//! Provides typed access to the Trakt REST API (check-ins, people,
//! shows, sync) on top of a pluggable HTTP transport and credential source.

pub mod api;
pub mod auth;
pub mod call;
pub mod config;
pub mod transport;

use serde::{Deserialize, Serialize};

pub use api::TraktClient;
pub use auth::{CredentialSource, NoCredentials, SharedToken};
pub use call::{Call, spawn_call};
pub use config::ClientConfig;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, ReqwestTransport, Transport};

/// OAuth token data.
///
/// Acquisition and refresh happen outside this crate; the caller hands
/// the current token in through a [`CredentialSource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_at: i64,
}

/// Unified error type for the trakt-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TraktError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication required: no valid token")]
    AuthRequired,

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Request cancelled")]
    Cancelled,
}

impl TraktError {
    /// HTTP status of the response that caused this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TraktError::UnexpectedStatus { status, .. } => Some(*status),
            TraktError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
