//! Thin HTTP client
//!
//! Wraps reqwest with the headers and query assembly every endpoint needs.
//! Returns the raw response so callers can apply their own status policy;
//! `get_json` is the convenience path for endpoints where any non-2xx is a
//! hard failure.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Media type the REST API expects
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GET-only HTTP client carrying credential and endpoint configuration
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from a config
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request, returning the raw response
    ///
    /// Transport failures surface as errors; the response status is not
    /// inspected here.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.build_url(path);

        let mut req = self.client.get(&url).header("Accept", ACCEPT_HEADER);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("token {token}"));
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        debug!("GET {url}");
        let response = req.send().await?;
        Ok(response)
    }

    /// Make a GET request and parse the JSON body
    ///
    /// Any non-2xx status is a hard failure carrying the response body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(path, query).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let parsed: T = response.json().await.map_err(Error::Http)?;
        Ok(parsed)
    }

    /// Build the full URL for a path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("has_token", &self.config.has_token())
            .finish_non_exhaustive()
    }
}
