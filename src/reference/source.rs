//! Trait for loading reference go.mod content

#[cfg(test)]
use mockall::automock;

use crate::reference::error::FetchError;

/// Trait for resolving a reference locator (local path or URL) to bytes
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetches the raw content behind `reference`
    ///
    /// # Arguments
    /// * `reference` - A local file path, or an `http://` / `https://` URL
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError>;
}

/// Returns true if the reference should be downloaded rather than read from disk
pub fn is_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Name used for the reference in messages and parse errors.
/// URLs and paths are both shown as given.
pub fn display_name(reference: &str) -> &str {
    reference
}
