//! Reconciliation engine for go.mod versions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│ Version map │────▶│    Diff     │
//! │  (go.mod)   │     │  (builder)  │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                   │       │
//!        │ edits                             ▼       ▼
//!        │                          ┌────────────┐ ┌─────────┐
//!        └──────────────────────────│ Reconciler │ │ Checker │
//!                                   │   (sync)   │ │ (check) │
//!                                   └────────────┘ └─────────┘
//! ```
//!
//! # Modules
//!
//! - [`version_map`]: Projects a manifest's requirements into a [`VersionMap`]
//! - [`diff`]: Classifies target requirements against the reference
//! - [`reconciler`]: Applies reference versions onto the target
//! - [`checker`]: Reports differences without editing
//! - [`types`]: Changes, mismatches and results
//! - [`error`]: Error type for sync

pub mod checker;
pub mod diff;
pub mod error;
pub mod reconciler;
pub mod types;
pub mod version_map;

pub use checker::check_versions;
pub use error::SyncError;
pub use reconciler::sync_versions;
pub use types::{
    CheckResult, GoVersionChange, GoVersionMismatch, SyncResult, VersionChange, VersionMap,
    VersionMismatch,
};
pub use version_map::build_version_map;
