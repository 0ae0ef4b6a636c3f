//! Common types for parsers

/// A single dependency requirement declared in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Module path (e.g., "golang.org/x/text")
    pub path: String,
    /// Version as written in the manifest (e.g., "v0.14.0")
    pub version: String,
    /// Marked with a trailing `// indirect` comment
    pub indirect: bool,
}

impl Requirement {
    pub fn new(path: &str, version: &str) -> Self {
        Self {
            path: path.to_string(),
            version: version.to_string(),
            indirect: false,
        }
    }
}
