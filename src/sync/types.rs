//! Result types for check and sync runs

use indexmap::IndexMap;
use serde::Serialize;

/// Module path -> version, in manifest-declared order
pub type VersionMap = IndexMap<String, String>;

/// A single dependency version update applied by sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    pub module: String,
    pub old_version: String,
    pub new_version: String,
}

/// Update of the `go` directive applied by sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoVersionChange {
    /// Empty when the target had no `go` directive
    pub old_version: String,
    pub new_version: String,
}

/// Outcome of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    /// Changes in the order they were applied
    pub dependency_changes: Vec<VersionChange>,
    pub go_version_change: Option<GoVersionChange>,
}

impl SyncResult {
    /// Number of dependency changes plus the `go` directive change
    pub fn total(&self) -> usize {
        self.dependency_changes.len() + usize::from(self.go_version_change.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A version difference reported by check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMismatch {
    pub module: String,
    pub target_version: String,
    /// Empty when `only_in_target` is set
    pub reference_version: String,
    /// The module is required by the target but not by the reference
    pub only_in_target: bool,
}

/// Difference between the `go` directives reported by check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoVersionMismatch {
    pub target_version: String,
    pub reference_version: String,
}

/// Outcome of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub dependency_mismatches: Vec<VersionMismatch>,
    pub go_version_mismatch: Option<GoVersionMismatch>,
}

impl CheckResult {
    /// Number of dependency mismatches plus the `go` directive mismatch
    pub fn total(&self) -> usize {
        self.dependency_mismatches.len() + usize::from(self.go_version_mismatch.is_some())
    }

    /// True when target and reference agree
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
