use std::fmt::Display;

use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get a single person's details.
    pub async fn get_person_details(
        &self,
        id: impl Display,
        extended: Extended,
    ) -> Result<Person, TraktError> {
        let id = path_segment(id)?;
        self.get_json(&format!("people/{id}?extended={extended}"), false)
            .await
    }

    /// Get every movie where this person is in the cast or crew.
    ///
    /// Crew entries are grouped by department; each carries a `job` and the movie.
    pub async fn get_movie_credits(
        &self,
        id: impl Display,
        extended: Extended,
    ) -> Result<Credits, TraktError> {
        self.get_credits(WatchedType::Movies, id, extended).await
    }

    /// Get every show where this person is in the cast or crew.
    pub async fn get_show_credits(
        &self,
        id: impl Display,
        extended: Extended,
    ) -> Result<Credits, TraktError> {
        self.get_credits(WatchedType::Shows, id, extended).await
    }

    async fn get_credits(
        &self,
        kind: WatchedType,
        id: impl Display,
        extended: Extended,
    ) -> Result<Credits, TraktError> {
        let id = path_segment(id)?;
        self.get_json(&format!("people/{id}/{kind}?extended={extended}"), false)
            .await
    }
}
