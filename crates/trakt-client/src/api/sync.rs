use std::fmt::Display;

use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get the timestamps at which each category of the user's data last changed.
    ///
    /// Compare against locally cached values to decide what needs re-syncing.
    pub async fn last_activities(&self) -> Result<LastActivities, TraktError> {
        self.get_json("sync/last_activities", true).await
    }

    /// Get paused playback progress, optionally restricted to movies or episodes.
    pub async fn get_playback_progress(
        &self,
        kind: WatchedType,
    ) -> Result<Vec<PlaybackProgress>, TraktError> {
        self.get_json(&format!("sync/playback/{kind}"), true).await
    }

    /// Remove a playback item. An unknown id comes back as 404.
    pub async fn remove_playback_item(&self, id: impl Display) -> Result<(), TraktError> {
        let id = path_segment(id)?;
        self.delete(&format!("sync/playback/{id}"), status::NO_CONTENT)
            .await
    }

    /// Get every collected item of the given type.
    pub async fn get_collection(
        &self,
        kind: WatchedType,
    ) -> Result<Vec<CollectedItem>, TraktError> {
        self.get_json(&format!("sync/collection/{kind}"), true).await
    }

    /// Add items to the user's collection.
    ///
    /// A show without seasons or episodes collects all of its episodes;
    /// seasons collect all of their episodes. Resending an item updates it.
    pub async fn add_to_collection(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<SyncResult, TraktError> {
        let body = sync_body(movies, shows, episodes);
        let resp = self
            .post_json("sync/collection", &body, status::CREATED)
            .await?;
        Ok(serde_json::from_str(&resp)?)
    }

    pub async fn remove_from_collection(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<SyncResult, TraktError> {
        let body = sync_body(movies, shows, episodes);
        let resp = self
            .post_json("sync/collection/remove", &body, status::OK)
            .await?;
        Ok(serde_json::from_str(&resp)?)
    }

    /// Get every show the user has watched, with per-episode play counts.
    pub async fn get_watched_shows(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchedShow>, TraktError> {
        self.get_json(&format!("sync/watched/shows?extended={extended}"), true)
            .await
    }

    pub async fn get_watched_movies(
        &self,
        extended: Extended,
    ) -> Result<Vec<WatchedMovie>, TraktError> {
        self.get_json(&format!("sync/watched/movies?extended={extended}"), true)
            .await
    }
}
