//! Trakt REST API client.
//!
//! Provides typed access to the check-in, people, shows and sync endpoints
//! with automatic `trakt-api-key` / `trakt-api-version` header injection and
//! a Bearer token on every request flagged as authenticated.

mod checkin;
mod history;
mod people;
mod ratings;
mod request;
mod shows;
mod sync;
mod watchlist;

#[cfg(test)]
pub(crate) mod mock;

pub mod models;

pub use models::{
    ActivityTimestamps, CastAndCrew, CastMember, CollectedEpisode, CollectedItem, CollectedSeason,
    CreditCast, CreditCrew, Credits, CrewDepartments, CrewMember, Episode, Extended, HistoryItem,
    Ids, JsonObject, LastActivities, ListItem, Movie, NotFoundItems, Person, PlaybackProgress,
    RatedItem, Season, Show, SyncCounts, SyncResult, TrendingShow, WatchedEpisode, WatchedMovie,
    WatchedSeason, WatchedShow, WatchedType,
};

use std::sync::Arc;

use url::Url;

use request::{path_segment, status, sync_body};

use crate::auth::CredentialSource;
use crate::config::ClientConfig;
use crate::transport::{ReqwestTransport, Transport};
use crate::TraktError;

/// Trakt API client.
///
/// Cheap to clone; clones share the transport and credential source.
pub struct TraktClient<T = ReqwestTransport> {
    transport: Arc<T>,
    credentials: Arc<dyn CredentialSource>,
    config: ClientConfig,
    base: Url,
}

impl<T> Clone for TraktClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            credentials: Arc::clone(&self.credentials),
            config: self.config.clone(),
            base: self.base.clone(),
        }
    }
}

impl TraktClient<ReqwestTransport> {
    /// Create a client backed by a default reqwest transport.
    pub fn new(
        config: ClientConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, TraktError> {
        Self::with_transport(config, credentials, ReqwestTransport::new())
    }
}

impl<T: Transport> TraktClient<T> {
    pub fn with_transport(
        config: ClientConfig,
        credentials: Arc<dyn CredentialSource>,
        transport: T,
    ) -> Result<Self, TraktError> {
        // Url::join replaces the last segment unless the base ends with '/'.
        let mut root = config.base_url.trim().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        let base = Url::parse(&root)?;

        Ok(Self {
            transport: Arc::new(transport),
            credentials,
            config,
            base,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
