//! `gomodsync check`

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::commands::{OutputFormat, load_reference, load_target};
use crate::reference::source::ReferenceSource;
use crate::sync::checker::check_versions;
use crate::sync::types::CheckResult;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// go.mod file to check
    pub target: PathBuf,
    /// Path or URL of the go.mod holding the desired versions
    pub reference: String,
    /// Also report dependencies missing from the reference
    pub strict: bool,
    /// List every mismatch
    pub verbose: bool,
    pub format: OutputFormat,
}

/// Compare the target file with the reference and report mismatches.
/// An empty result means every version matches.
pub async fn run<W: Write>(
    options: &CheckOptions,
    source: &dyn ReferenceSource,
    out: &mut W,
) -> anyhow::Result<CheckResult> {
    let target = load_target(&options.target)?;
    let reference = load_reference(&options.reference, source).await?;

    let result = check_versions(&target, &reference, options.strict);
    let total = result.total();
    info!("{} mismatch(es) found in {}", total, options.target.display());

    if options.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(result);
    }

    if total == 0 {
        writeln!(out, "✓ All versions match (dependencies and Go version)!")?;
        return Ok(result);
    }

    if options.verbose {
        writeln!(out, "✗ Found {} version mismatch(es):\n", total)?;

        if let Some(mismatch) = &result.go_version_mismatch {
            writeln!(
                out,
                "  go: {} != {}",
                mismatch.target_version, mismatch.reference_version
            )?;
        }

        for mismatch in &result.dependency_mismatches {
            if mismatch.only_in_target {
                writeln!(
                    out,
                    "  {}: {} (not in reference)",
                    mismatch.module, mismatch.target_version
                )?;
            } else {
                writeln!(
                    out,
                    "  {}: {} != {}",
                    mismatch.module, mismatch.target_version, mismatch.reference_version
                )?;
            }
        }
    } else {
        writeln!(out, "✗ Version check failed: {} mismatch(es) found", total)?;
        writeln!(out, "Run with --verbose to see details")?;
    }

    Ok(result)
}
