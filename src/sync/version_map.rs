//! Projection of a manifest's requirement list into a [`VersionMap`]

use crate::parser::traits::Manifest;
use crate::sync::types::VersionMap;

/// Build a map of module path to version from a manifest.
///
/// Indirect requirements are included. Duplicate paths are already
/// resolved by the manifest, so every path appears once.
pub fn build_version_map<M: Manifest + ?Sized>(manifest: &M) -> VersionMap {
    manifest
        .requirements()
        .into_iter()
        .map(|req| (req.path, req.version))
        .collect()
}
