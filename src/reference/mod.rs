//! Reference resolution: turns a path or URL into go.mod bytes

pub mod error;
pub mod fetcher;
pub mod source;

pub use error::FetchError;
pub use fetcher::ReferenceFetcher;
pub use source::{ReferenceSource, display_name, is_url};
