use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get watched movies and episodes, most recent first.
    ///
    /// The type and id are appended to `sync/history` as-is, without
    /// separators, so `(Some(Movies), Some(42))` requests
    /// `sync/historymovies42`. Use [`TraktClient::get_item_history`] for the
    /// `sync/history/{type}/{id}` form.
    pub async fn get_history(
        &self,
        kind: Option<WatchedType>,
        trakt_id: Option<u64>,
    ) -> Result<Vec<HistoryItem>, TraktError> {
        let mut path = String::from("sync/history");
        if let Some(kind) = kind {
            path.push_str(kind.as_str());
        }
        if let Some(id) = trakt_id {
            path.push_str(&id.to_string());
        }

        self.get_json(&path, true).await
    }

    /// Get the watch history of a single item.
    ///
    /// A valid id with no history yields an empty list.
    pub async fn get_item_history(
        &self,
        kind: WatchedType,
        trakt_id: u64,
    ) -> Result<Vec<HistoryItem>, TraktError> {
        self.get_json(&format!("sync/history/{kind}/{trakt_id}"), true)
            .await
    }

    /// Add items to the user's watch history.
    pub async fn add_to_history(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<(), TraktError> {
        let body = sync_body(movies, shows, episodes);
        self.post_json("sync/history", &body, status::CREATED)
            .await
            .map(|_| ())
    }

    /// Remove watches, scrobbles and check-ins from the user's history.
    pub async fn remove_from_history(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<(), TraktError> {
        let body = sync_body(movies, shows, episodes);
        self.post_json("sync/history/remove", &body, status::OK)
            .await
            .map(|_| ())
    }
}
