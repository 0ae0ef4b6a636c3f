//! Comparison of version maps
//!
//! Both sync and check walk the target's requirements in declared order and
//! classify each one against the reference. Modules that only the reference
//! requires are never reported: neither mode adds dependencies to the target.

use crate::sync::types::{VersionChange, VersionMap, VersionMismatch};

/// How a target requirement relates to the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison<'a> {
    /// Same version in both manifests
    Match,
    /// Reference requires a different version
    Differs(&'a str),
    /// Reference does not require the module
    OnlyInTarget,
}

/// Classify one target requirement against the reference map
pub fn classify<'a>(module: &str, target_version: &str, reference: &'a VersionMap) -> Comparison<'a> {
    match reference.get(module) {
        Some(ref_version) if ref_version == target_version => Comparison::Match,
        Some(ref_version) => Comparison::Differs(ref_version),
        None => Comparison::OnlyInTarget,
    }
}

/// Changes that bring the target's shared dependencies to the reference versions
pub fn compare_for_sync(target: &VersionMap, reference: &VersionMap) -> Vec<VersionChange> {
    target
        .iter()
        .filter_map(|(module, version)| match classify(module, version, reference) {
            Comparison::Differs(ref_version) => Some(VersionChange {
                module: module.clone(),
                old_version: version.clone(),
                new_version: ref_version.to_string(),
            }),
            Comparison::Match | Comparison::OnlyInTarget => None,
        })
        .collect()
}

/// Mismatches between target and reference.
/// With `strict`, modules missing from the reference are reported as well.
pub fn compare_for_check(
    target: &VersionMap,
    reference: &VersionMap,
    strict: bool,
) -> Vec<VersionMismatch> {
    target
        .iter()
        .filter_map(|(module, version)| match classify(module, version, reference) {
            Comparison::Match => None,
            Comparison::Differs(ref_version) => Some(VersionMismatch {
                module: module.clone(),
                target_version: version.clone(),
                reference_version: ref_version.to_string(),
                only_in_target: false,
            }),
            Comparison::OnlyInTarget if strict => Some(VersionMismatch {
                module: module.clone(),
                target_version: version.clone(),
                reference_version: String::new(),
                only_in_target: true,
            }),
            Comparison::OnlyInTarget => None,
        })
        .collect()
}

/// Compare `go` directives, returning `(target, reference)` when they differ.
///
/// A missing reference directive never produces a difference. A missing
/// target directive is reported as an empty string.
pub fn compare_go_versions(target: Option<&str>, reference: Option<&str>) -> Option<(String, String)> {
    let target = target.unwrap_or_default();
    let reference = reference.unwrap_or_default();

    if !reference.is_empty() && reference != target {
        Some((target.to_string(), reference.to_string()))
    } else {
        None
    }
}
