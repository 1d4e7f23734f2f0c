use std::fmt::Display;

use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get the shows being watched right now, most watchers first.
    pub async fn get_trending_shows(
        &self,
        page: u32,
        limit: u32,
        extended: Extended,
    ) -> Result<Vec<TrendingShow>, TraktError> {
        let path = format!("shows/trending?page={page}&limit={limit}&extended={extended}");
        self.get_json(&path, false).await
    }

    /// Get the cast and crew of a show.
    pub async fn get_show_people(
        &self,
        id: impl Display,
        extended: Extended,
    ) -> Result<CastAndCrew, TraktError> {
        self.get_people(WatchedType::Shows, id, extended).await
    }

    /// Get the cast and crew of a movie.
    pub async fn get_movie_people(
        &self,
        id: impl Display,
        extended: Extended,
    ) -> Result<CastAndCrew, TraktError> {
        self.get_people(WatchedType::Movies, id, extended).await
    }

    async fn get_people(
        &self,
        kind: WatchedType,
        id: impl Display,
        extended: Extended,
    ) -> Result<CastAndCrew, TraktError> {
        let id = path_segment(id)?;
        self.get_json(&format!("{kind}/{id}/people?extended={extended}"), false)
            .await
    }
}
