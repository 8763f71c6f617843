//! # hd-client
//!
//! HTTP client for the help-desk REST backend.
//!
//! Every request goes to `{base_url}/api/...` and carries
//! `Authorization: Bearer <token>` once a token is set. Endpoints are grouped
//! by resource:
//! - `auth`: login and logout
//! - `tickets`: ticket CRUD, close, stats and status listings
//! - `replies`: reply threads and multipart reply upload
//! - `users`: user directory and self-registration
//! - `reports`: binary report download

pub mod auth;
pub mod replies;
pub mod reports;
pub mod tickets;
pub mod users;

mod error;
mod http;

pub use error::ClientError;
pub use replies::{AttachmentUpload, ReplyUpload};

use std::time::Duration;

use hd_config::ApiConfig;
use reqwest::{Method, RequestBuilder};

/// HTTP client bound to one backend and, optionally, one session token.
#[derive(Debug, Clone)]
pub struct HelpdeskClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HelpdeskClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: None,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Replace (or clear) the bearer token used for subsequent requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `/api/{path}`.
    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, authenticated = self.token.is_some(), "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        http::check_response(builder.send().await?).await
    }
}

/// Percent-encode one path segment (ids, statuses).
fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HelpdeskClient {
        HelpdeskClient::new(&ApiConfig {
            base_url: "http://localhost:8000/".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_are_rooted_under_api() {
        let client = client();
        assert_eq!(client.url("called"), "http://localhost:8000/api/called");
        assert_eq!(client.url("/users/1"), "http://localhost:8000/api/users/1");
    }

    #[test]
    fn blank_token_is_ignored() {
        let client = client().with_token(Some("  ".into()));
        assert!(client.token().is_none());
        let client = client.with_token(Some("tok".into()));
        assert_eq!(client.token(), Some("tok"));
    }

    #[test]
    fn segments_are_encoded() {
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
    }
}
