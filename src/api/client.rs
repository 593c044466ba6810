//! Graph API HTTP client.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Thin HTTP client over the Graph REST API.
///
/// Requests carry their parameters (including the access token) in the URL,
/// so the client itself is stateless.
pub struct GraphClient {
    client: Client,
}

impl GraphClient {
    /// Create a new API client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Perform a GET and deserialize the JSON body.
    ///
    /// Network failures and non-2xx responses become [`Error::Transport`]
    /// carrying the failing URL; an unparseable body becomes [`Error::Api`].
    pub async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Transport {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let text = response.text().await.map_err(|e| Error::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse response from {}: {} - Response: {}",
                url, e, text
            ))
        })
    }

    /// Open a streaming download for a media URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Download(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "{}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}
