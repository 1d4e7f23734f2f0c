//! HTTP transport seam.
//!
//! Requests and responses are plain data. The client builds an [`ApiRequest`],
//! a [`Transport`] performs the round-trip, and the endpoint interprets the
//! returned [`ApiResponse`]. Non-2xx statuses come back as data so each
//! endpoint can decide which codes it accepts.

use std::future::Future;

use reqwest::header::HeaderMap;
use url::Url;

use crate::TraktError;

/// HTTP methods used by the Trakt API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    /// The request path relative to the API root, without the leading slash.
    pub fn path(&self) -> &str {
        self.url.path().trim_start_matches('/')
    }

    /// Parse the body back into JSON. Mostly useful for inspecting requests.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

/// Raw response as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Performs a single request/response round-trip.
///
/// Implementations must return `Ok` for every response that was received,
/// whatever its status. `Err` is reserved for network-level failures.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TraktError>> + Send;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, connection pool).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TraktError> {
        let mut builder = self
            .http
            .request(request.method.into(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::api::mock::valid_token;
    use crate::api::{Extended, TraktClient};
    use crate::config::ClientConfig;

    #[test]
    fn path_strips_leading_slash_and_query() {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: Url::parse("https://api.trakt.tv/people/12?extended=full").unwrap(),
            headers: HeaderMap::new(),
            body: None,
        };
        assert_eq!(request.path(), "people/12");
        assert_eq!(request.url.query(), Some("extended=full"));
        assert!(request.json_body().is_none());
    }

    #[test]
    fn method_maps_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    fn client_for(server: &mockito::Server) -> TraktClient<ReqwestTransport> {
        let config = ClientConfig {
            base_url: server.url(),
            ..ClientConfig::new("test-client")
        };
        TraktClient::with_transport(config, Arc::new(valid_token()), ReqwestTransport::new())
            .unwrap()
    }

    #[tokio::test]
    async fn conflict_status_comes_back_as_data() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/checkin")
            .with_status(409)
            .with_body(r#"{"expires_at":"2014-10-15T22:21:29.000Z"}"#)
            .create_async()
            .await;

        let request = ApiRequest {
            method: HttpMethod::Post,
            url: Url::parse(&format!("{}/checkin", server.url())).unwrap(),
            headers: HeaderMap::new(),
            body: Some("{}".into()),
        };
        let resp = ReqwestTransport::new().send(request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.status, 409);
        assert!(resp.body.contains("expires_at"));
    }

    #[tokio::test]
    async fn headers_and_body_reach_the_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/sync/history")
            .match_header("content-type", "application/json")
            .match_header("trakt-api-version", "2")
            .match_header("trakt-api-key", "test-client")
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(json!({
                "movies": [{ "ids": { "trakt": 28 } }],
                "shows": [],
                "episodes": []
            })))
            .with_status(201)
            .with_body(r#"{"added": {"movies": 1}}"#)
            .create_async()
            .await;

        let movie = json!({ "ids": { "trakt": 28 } });
        let movie = movie.as_object().unwrap().clone();
        client_for(&server)
            .add_to_history(&[movie], &[], &[])
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn check_in_conflict_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/checkin")
            .match_header("authorization", "Bearer test-token")
            .with_status(409)
            .with_body(r#"{"expires_at":"2014-10-15T22:21:29.000Z"}"#)
            .create_async()
            .await;

        let movie = json!({ "title": "Guardians of the Galaxy", "ids": { "trakt": 28 } });
        let err = client_for(&server)
            .check_in(movie.as_object(), None)
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.status(), Some(409));
        assert!(matches!(err, TraktError::UnexpectedStatus { ref body, .. } if body.contains("expires_at")));
    }

    #[tokio::test]
    async fn public_request_omits_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/people/bryan-cranston")
            .match_query(Matcher::UrlEncoded("extended".into(), "min".into()))
            .match_header("trakt-api-key", "test-client")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"name": "Bryan Cranston", "ids": {"trakt": 297737}}"#)
            .create_async()
            .await;

        let person = client_for(&server)
            .get_person_details("bryan-cranston", Extended::Min)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(person.ids.trakt, 297737);
    }
}
