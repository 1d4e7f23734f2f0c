use std::fmt::Display;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::*;
use crate::transport::{ApiRequest, HttpMethod};

/// Status codes the Trakt API uses to signal success.
pub(super) mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
}

impl<T: Transport> TraktClient<T> {
    /// Build a request for `path` relative to the API root.
    ///
    /// Fails with [`TraktError::AuthRequired`] before any network activity
    /// when `requires_auth` is set and no bearer token is available.
    pub fn build_request(
        &self,
        path: &str,
        requires_auth: bool,
        method: HttpMethod,
    ) -> Result<ApiRequest, TraktError> {
        let url = self.base.join(path)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "trakt-api-version",
            HeaderValue::from_str(&self.config.api_version)?,
        );
        headers.insert(
            "trakt-api-key",
            HeaderValue::from_str(&self.config.client_id)?,
        );

        if requires_auth {
            let token = self
                .credentials
                .bearer_token()
                .ok_or(TraktError::AuthRequired)?;
            let bearer = format!("Bearer {token}");
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
        }

        Ok(ApiRequest {
            method,
            url,
            headers,
            body: None,
        })
    }

    /// Send a request and return the body when the status matches `expected`.
    pub(super) async fn dispatch(
        &self,
        request: ApiRequest,
        expected: u16,
    ) -> Result<String, TraktError> {
        let method = request.method.as_str();
        let url = request.url.to_string();
        tracing::debug!(method, url = %url, "Sending Trakt request");

        let resp = self.transport.send(request).await?;

        if resp.status != expected {
            tracing::warn!(
                status = resp.status,
                expected,
                url = %url,
                "Unexpected Trakt response status"
            );
            return Err(TraktError::UnexpectedStatus {
                status: resp.status,
                body: resp.body,
            });
        }

        Ok(resp.body)
    }

    /// GET `path`, expecting 200 and a JSON body decodable as `R`.
    pub(super) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        requires_auth: bool,
    ) -> Result<R, TraktError> {
        let request = self.build_request(path, requires_auth, HttpMethod::Get)?;
        let body = self.dispatch(request, status::OK).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Authenticated POST with a JSON body. Returns the raw response body.
    pub(super) async fn post_json(
        &self,
        path: &str,
        body: &impl Serialize,
        expected: u16,
    ) -> Result<String, TraktError> {
        let mut request = self.build_request(path, true, HttpMethod::Post)?;
        request.body = Some(serde_json::to_string(body)?);
        self.dispatch(request, expected).await
    }

    /// Authenticated DELETE. Only the status code matters.
    pub(super) async fn delete(&self, path: &str, expected: u16) -> Result<(), TraktError> {
        let request = self.build_request(path, true, HttpMethod::Delete)?;
        self.dispatch(request, expected).await.map(|_| ())
    }
}

/// Percent-encode a caller-supplied id as exactly one path segment.
///
/// `/`, `?`, `#` and `%` are escaped so the id cannot leave its endpoint.
/// Empty and dot segments are refused outright.
pub(super) fn path_segment(value: impl Display) -> Result<String, TraktError> {
    let raw = value.to_string();
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(TraktError::InvalidPathSegment(raw));
    }

    let mut scratch = Url::parse("http://segment.invalid/")?;
    scratch
        .path_segments_mut()
        .map_err(|()| TraktError::InvalidPathSegment(raw.clone()))?
        .pop_if_empty()
        .push(&raw);
    Ok(scratch.path().trim_start_matches('/').to_string())
}

/// The `{movies, shows, episodes}` body shared by every bulk sync endpoint.
pub(super) fn sync_body(
    movies: &[JsonObject],
    shows: &[JsonObject],
    episodes: &[JsonObject],
) -> Value {
    json!({
        "movies": movies,
        "shows": shows,
        "episodes": episodes,
    })
}
