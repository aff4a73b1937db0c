//! Thin client for the Sentry management API (`<host>/api/0/`).
//!
//! Every call is a single authenticated request. Non-2xx answers become
//! [`Error::Status`] carrying the URL, the status and the `detail` message the
//! API returned. There is no retry, pagination or caching here.

pub mod error;
pub mod models;
mod organizations;
mod projects;

pub use self::error::{Error, Result};
pub use self::models::{ClientKey, Dsn, Organization, Project, Team};

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_PATH: &str = "api/0/";

fn sentry_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Build the API endpoint (`<host>/api/0/`) for a Sentry instance.
/// # Errors
/// Returns an error if `host` cannot be parsed, has no host, or uses an unsupported scheme.
pub fn endpoint_url(host: &str) -> Result<Url> {
    let mut url = Url::parse(host.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::InvalidHost(format!("unsupported scheme {scheme}")));
        }
    }

    if url.host_str().is_none() {
        return Err(Error::InvalidHost("no host specified".to_string()));
    }

    // join() replaces the last path segment unless the base ends with '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    let endpoint = url.join(API_PATH)?;

    debug!("endpoint URL: {}", endpoint);

    Ok(endpoint)
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    token: SecretString,
}

impl Client {
    /// Create a client bound to `endpoint` (see [`endpoint_url`]).
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, token: SecretString, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // Sentry routes require the trailing slash.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidHost(format!("{} cannot be a base URL", self.endpoint)))?
            .pop_if_empty()
            .extend(segments)
            .push("");

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = self.http.get(url.clone());
        self.send(request, &url).await
    }

    async fn post<T, B>(&self, url: Url, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(url.clone()).json(payload);
        self.send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let response = request
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(Error::Status {
                url: url.to_string(),
                status,
                detail: sentry_error_message(&body),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::net::TcpListener;

    pub const TOKEN: &str = "sntrys_test_token";

    pub fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    pub fn client(uri: &str) -> Result<Client> {
        Client::new(
            endpoint_url(uri)?,
            SecretString::from(TOKEN.to_string()),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn endpoint_url_appends_api_path() -> Result<()> {
        let url = endpoint_url("https://sentry.io")?;
        assert_eq!(url.as_str(), "https://sentry.io/api/0/");
        Ok(())
    }

    #[test]
    fn endpoint_url_handles_trailing_slash() -> Result<()> {
        let url = endpoint_url("http://sentry.local:9000/")?;
        assert_eq!(url.as_str(), "http://sentry.local:9000/api/0/");
        Ok(())
    }

    #[test]
    fn endpoint_url_keeps_sub_path() -> Result<()> {
        let url = endpoint_url("https://example.com/sentry")?;
        assert_eq!(url.as_str(), "https://example.com/sentry/api/0/");
        Ok(())
    }

    #[test]
    fn endpoint_url_rejects_unsupported_scheme() {
        let err = endpoint_url("ftp://example.com").err();
        assert!(matches!(err, Some(Error::InvalidHost(ref msg)) if msg.contains("unsupported scheme")));
    }

    #[test]
    fn endpoint_url_rejects_missing_scheme() {
        assert!(matches!(endpoint_url("sentry.io"), Err(Error::Url(_))));
    }

    #[test]
    fn url_encodes_segments_with_trailing_slash() -> Result<()> {
        let client = client("https://sentry.io")?;
        let url = client.url(&["projects", "acme", "web", "keys"])?;
        assert_eq!(url.as_str(), "https://sentry.io/api/0/projects/acme/web/keys/");
        Ok(())
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(
            sentry_error_message(r#"{"detail": "The requested resource does not exist"}"#),
            "The requested resource does not exist"
        );
        assert_eq!(
            sentry_error_message("<html>bad gateway</html>\n"),
            "<html>bad gateway</html>"
        );
        assert_eq!(
            sentry_error_message(r#"{"slug": ["already taken"]}"#),
            r#"{"slug": ["already taken"]}"#
        );
    }
}
