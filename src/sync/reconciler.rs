//! Sync: apply reference versions onto the target manifest

use tracing::debug;

use crate::parser::traits::Manifest;
use crate::sync::diff::{compare_for_sync, compare_go_versions};
use crate::sync::error::SyncError;
use crate::sync::types::{GoVersionChange, SyncResult, VersionChange};
use crate::sync::version_map::build_version_map;

/// Apply `changes` to the target in order, stopping at the first failure
pub fn apply_version_changes<M: Manifest + ?Sized>(
    target: &mut M,
    changes: &[VersionChange],
) -> Result<(), SyncError> {
    for change in changes {
        target
            .add_or_update_requirement(&change.module, &change.new_version)
            .map_err(|source| SyncError::Dependency {
                module: change.module.clone(),
                source,
            })?;
        debug!(
            "Updated {}: {} -> {}",
            change.module, change.old_version, change.new_version
        );
    }
    Ok(())
}

/// Bring the target's shared dependencies and `go` directive in line with
/// the reference, editing `target` in place.
///
/// Dependencies only the target or only the reference requires are left
/// alone. On error the target may be partially edited and should be
/// discarded rather than written.
pub fn sync_versions<T, R>(target: &mut T, reference: &R) -> Result<SyncResult, SyncError>
where
    T: Manifest + ?Sized,
    R: Manifest + ?Sized,
{
    let ref_versions = build_version_map(reference);
    let target_versions = build_version_map(&*target);
    let dependency_changes = compare_for_sync(&target_versions, &ref_versions);

    if !dependency_changes.is_empty() {
        apply_version_changes(target, &dependency_changes)?;
    }

    let target_go = target.go_version();
    let ref_go = reference.go_version();
    let go_version_change = match compare_go_versions(target_go.as_deref(), ref_go.as_deref()) {
        Some((old_version, new_version)) => {
            target
                .set_go_version(&new_version)
                .map_err(SyncError::GoVersion)?;
            debug!("Updated go directive: {:?} -> {}", old_version, new_version);
            Some(GoVersionChange {
                old_version,
                new_version,
            })
        }
        None => None,
    };

    Ok(SyncResult {
        dependency_changes,
        go_version_change,
    })
}
