use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch URL: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to fetch URL: HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
