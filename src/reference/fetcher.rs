//! Reference fetching from disk or over HTTP

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::reference::error::FetchError;
use crate::reference::source::{ReferenceSource, is_url};

/// [`ReferenceSource`] backed by the local filesystem and an HTTP client
pub struct ReferenceFetcher {
    client: reqwest::Client,
}

impl ReferenceFetcher {
    /// Creates a new ReferenceFetcher whose HTTP requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching reference from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Reference server returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    async fn fetch_file(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Reading reference from {}", path);
        tokio::fs::read(path).await.map_err(|source| FetchError::Io {
            path: Path::new(path).to_path_buf(),
            source,
        })
    }
}

#[async_trait::async_trait]
impl ReferenceSource for ReferenceFetcher {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        if is_url(reference) {
            self.fetch_url(reference).await
        } else {
            self.fetch_file(reference).await
        }
    }
}
