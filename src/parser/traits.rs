//! Manifest trait definition

#[cfg(test)]
use mockall::automock;

use crate::parser::types::Requirement;

/// Structured, editable view of a module manifest.
///
/// Implementations own the requirement list and its layout; callers only
/// read requirements and request edits through this trait.
#[cfg_attr(test, automock)]
pub trait Manifest {
    /// Requirements in declared order, one entry per module path
    fn requirements(&self) -> Vec<Requirement>;

    /// Value of the toolchain-version (`go`) directive, if present
    fn go_version(&self) -> Option<String>;

    /// Set the version of `path`, adding a new requirement if it is missing
    fn add_or_update_requirement(&mut self, path: &str, version: &str) -> Result<(), EditError>;

    /// Set the toolchain-version directive, adding it if it is missing
    fn set_go_version(&mut self, version: &str) -> Result<(), EditError>;

    /// Render the manifest back to text
    fn format(&self) -> String;
}

/// Error type for parsing operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Directive keyword not part of the grammar
    #[error("{file}:{line}: unknown directive: {directive}")]
    UnknownDirective {
        file: String,
        line: usize,
        directive: String,
    },

    /// Invalid syntax in the file
    #[error("{file}:{line}: {message}")]
    InvalidSyntax {
        file: String,
        line: usize,
        message: String,
    },
}

/// Error type for edits requested through [`Manifest`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("malformed module path {0:?}")]
    InvalidModulePath(String),

    #[error("invalid module version {version:?} for {path}")]
    InvalidVersion { path: String, version: String },

    #[error("invalid go version {0:?}: must match format 1.23.0")]
    InvalidGoVersion(String),
}
