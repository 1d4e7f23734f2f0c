use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get watchlist items of one type.
    ///
    /// Items leave the watchlist automatically once watched. The service
    /// returns every type; entries of other types are dropped here.
    pub async fn get_watchlist(&self, watch_type: WatchedType) -> Result<Vec<ListItem>, TraktError> {
        let items: Vec<ListItem> = self.get_json("sync/watchlist", true).await?;
        Ok(items
            .into_iter()
            .filter(|item| item.item_type == watch_type.item_type())
            .collect())
    }

    /// Add items to the watchlist.
    ///
    /// A show on its own adds just the show; listed seasons are added in full.
    pub async fn add_to_watchlist(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<(), TraktError> {
        let body = sync_body(movies, shows, episodes);
        self.post_json("sync/watchlist", &body, status::CREATED)
            .await
            .map(|_| ())
    }

    pub async fn remove_from_watchlist(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<SyncResult, TraktError> {
        let body = sync_body(movies, shows, episodes);
        let resp = self
            .post_json("sync/watchlist/remove", &body, status::OK)
            .await?;
        Ok(serde_json::from_str(&resp)?)
    }
}
