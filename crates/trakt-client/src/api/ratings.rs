use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::*;

impl<T: Transport> TraktClient<T> {
    /// Get the user's ratings of one type, optionally only those equal to `rating`.
    pub async fn get_ratings(
        &self,
        kind: WatchedType,
        rating: Option<u8>,
    ) -> Result<Vec<RatedItem>, TraktError> {
        let mut path = format!("sync/ratings/{kind}");
        if let Some(rating) = rating {
            path.push_str(&format!("/{rating}"));
        }
        self.get_json(&path, true).await
    }

    /// Rate items. Every item gets the same `rating` and `rated_at`.
    ///
    /// The rating is expected between 1 and 10; the service rejects
    /// anything else.
    pub async fn add_ratings(
        &self,
        rating: u8,
        rated_at: DateTime<Utc>,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<SyncResult, TraktError> {
        let body = ratings_body(rating, rated_at, movies, shows, episodes);
        let resp = self
            .post_json("sync/ratings", &body, status::CREATED)
            .await?;
        Ok(serde_json::from_str(&resp)?)
    }

    pub async fn remove_ratings(
        &self,
        movies: &[JsonObject],
        shows: &[JsonObject],
        episodes: &[JsonObject],
    ) -> Result<SyncResult, TraktError> {
        let body = sync_body(movies, shows, episodes);
        let resp = self
            .post_json("sync/ratings/remove", &body, status::OK)
            .await?;
        Ok(serde_json::from_str(&resp)?)
    }
}

fn ratings_body(
    rating: u8,
    rated_at: DateTime<Utc>,
    movies: &[JsonObject],
    shows: &[JsonObject],
    episodes: &[JsonObject],
) -> Value {
    let rated_at = rated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let rate = |items: &[JsonObject]| -> Vec<JsonObject> {
        items
            .iter()
            .cloned()
            .map(|mut item| {
                item.insert("rated_at".into(), Value::String(rated_at.clone()));
                item.insert("rating".into(), Value::from(rating));
                item
            })
            .collect()
    };

    sync_body(&rate(movies), &rate(shows), &rate(episodes))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::api::mock::{MockTransport, authed};

    fn item(trakt: u64) -> JsonObject {
        json!({ "ids": { "trakt": trakt } }).as_object().cloned().unwrap()
    }

    #[test]
    fn every_item_gets_the_same_rating() {
        let rated_at = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
        let body = ratings_body(8, rated_at, &[item(1), item(2)], &[], &[]);

        for movie in body["movies"].as_array().unwrap() {
            assert_eq!(movie["rating"], 8);
            assert_eq!(movie["rated_at"], "2016-01-01T00:00:00Z");
        }
        assert_eq!(body["movies"][1]["ids"]["trakt"], 2);
        assert_eq!(body["shows"], json!([]));
        assert_eq!(body["episodes"], json!([]));
    }

    #[test]
    fn rating_overrides_existing_fields() {
        let rated_at = Utc.with_ymd_and_hms(2020, 5, 17, 12, 30, 0).unwrap();
        let mut show = item(3);
        show.insert("rating".into(), json!(2));

        let body = ratings_body(10, rated_at, &[], &[show], &[item(4)]);
        assert_eq!(body["shows"][0]["rating"], 10);
        assert_eq!(body["episodes"][0]["rated_at"], "2020-05-17T12:30:00Z");
    }

    #[tokio::test]
    async fn add_ratings_posts_and_decodes() {
        let client = authed(MockTransport::new().reply(201, r#"{"added": {"movies": 2}}"#));
        let rated_at = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();

        let result = client
            .add_ratings(8, rated_at, &[item(1), item(2)], &[], &[])
            .await
            .unwrap();
        assert_eq!(result.added.unwrap().movies, 2);

        let req = client.transport().last_request();
        assert_eq!(req.path(), "sync/ratings");
        let body = req.json_body().unwrap();
        assert_eq!(body["movies"][0]["rating"], 8);
        assert_eq!(body["movies"][1]["rated_at"], "2016-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn out_of_range_rating_is_left_to_the_service() {
        let client = authed(MockTransport::new().reply(422, r#"{"error": "invalid rating"}"#));
        let err = client
            .add_ratings(11, Utc::now(), &[item(1)], &[], &[])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn get_ratings_filter_segment() {
        let body = r#"[{
            "rated_at": "2014-09-01T09:10:11.000Z",
            "rating": 10,
            "type": "movie",
            "movie": { "title": "Batman Begins", "year": 2005, "ids": { "trakt": 1 } }
        }]"#;
        let client = authed(MockTransport::new().reply(200, body).reply(200, "[]"));

        let items = client.get_ratings(WatchedType::Movies, Some(10)).await.unwrap();
        assert_eq!(items[0].rating, 10);
        assert_eq!(client.transport().last_request().path(), "sync/ratings/movies/10");

        client.get_ratings(WatchedType::Episodes, None).await.unwrap();
        assert_eq!(client.transport().last_request().path(), "sync/ratings/episodes");
    }

    #[tokio::test]
    async fn remove_ratings_expects_200() {
        let client = authed(MockTransport::new().reply(200, r#"{"deleted": {"shows": 1}}"#));
        let result = client.remove_ratings(&[], &[item(5)], &[]).await.unwrap();
        assert_eq!(result.deleted.unwrap().shows, 1);
        assert_eq!(client.transport().last_request().path(), "sync/ratings/remove");
    }
}
