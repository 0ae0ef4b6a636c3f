//! Check: report version differences without editing anything

use crate::parser::traits::Manifest;
use crate::sync::diff::{compare_for_check, compare_go_versions};
use crate::sync::types::{CheckResult, GoVersionMismatch};
use crate::sync::version_map::build_version_map;

/// Compare target against reference.
/// If `strict` is true, dependencies that only the target requires are
/// reported too.
pub fn check_versions<T, R>(target: &T, reference: &R, strict: bool) -> CheckResult
where
    T: Manifest + ?Sized,
    R: Manifest + ?Sized,
{
    let ref_versions = build_version_map(reference);
    let target_versions = build_version_map(target);

    let target_go = target.go_version();
    let ref_go = reference.go_version();

    CheckResult {
        dependency_mismatches: compare_for_check(&target_versions, &ref_versions, strict),
        go_version_mismatch: compare_go_versions(target_go.as_deref(), ref_go.as_deref()).map(
            |(target_version, reference_version)| GoVersionMismatch {
                target_version,
                reference_version,
            },
        ),
    }
}
