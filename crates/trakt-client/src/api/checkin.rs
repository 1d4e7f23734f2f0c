use serde_json::Value;

use super::*;

impl<T: Transport> TraktClient<T> {
    /// Check into a movie or episode.
    ///
    /// Meant to follow an explicit user action. The item shows as watching on
    /// the site and switches to watched once its runtime has elapsed. When
    /// both are given only the movie is sent.
    ///
    /// A check-in already in progress yields `UnexpectedStatus` with status
    /// 409; its body carries the `expires_at` timestamp after which the user
    /// may check in again.
    pub async fn check_in(
        &self,
        movie: Option<&JsonObject>,
        episode: Option<&JsonObject>,
    ) -> Result<(), TraktError> {
        let body = self.checkin_body(movie, episode);
        self.post_json("checkin", &body, status::CREATED).await?;
        tracing::info!("Check-in started");
        Ok(())
    }

    /// Remove any active check-in. No item needs to be specified.
    pub async fn delete_active_checkins(&self) -> Result<(), TraktError> {
        self.delete("checkin", status::NO_CONTENT).await?;
        tracing::info!("Active check-ins removed");
        Ok(())
    }

    fn checkin_body(&self, movie: Option<&JsonObject>, episode: Option<&JsonObject>) -> JsonObject {
        let mut body = JsonObject::new();
        body.insert(
            "app_version".into(),
            Value::String(self.config.app_version.clone()),
        );
        body.insert(
            "app_date".into(),
            Value::String(self.config.app_date.clone()),
        );

        if let Some(movie) = movie {
            body.insert("movie".into(), Value::Object(movie.clone()));
        } else if let Some(episode) = episode {
            body.insert("episode".into(), Value::Object(episode.clone()));
        }
        body
    }
}
