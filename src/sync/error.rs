use thiserror::Error;

use crate::parser::traits::EditError;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to update {module}: {source}")]
    Dependency {
        module: String,
        #[source]
        source: EditError,
    },

    #[error("failed to update Go version: {0}")]
    GoVersion(#[source] EditError),
}
