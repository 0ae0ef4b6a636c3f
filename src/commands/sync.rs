//! `gomodsync sync`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::info;

use crate::commands::{OutputFormat, load_reference, load_target};
use crate::parser::traits::Manifest;
use crate::reference::source::ReferenceSource;
use crate::sync::reconciler::sync_versions;
use crate::sync::types::SyncResult;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// go.mod file to rewrite
    pub target: PathBuf,
    /// Path or URL of the go.mod holding the desired versions
    pub reference: String,
    /// Report changes without writing the target
    pub dry_run: bool,
    /// List every change
    pub verbose: bool,
    pub format: OutputFormat,
}

/// Sync the target file with the reference and report what changed
pub async fn run<W: Write>(
    options: &SyncOptions,
    source: &dyn ReferenceSource,
    out: &mut W,
) -> anyhow::Result<SyncResult> {
    let mut target = load_target(&options.target)?;
    let reference = load_reference(&options.reference, source).await?;

    let result = sync_versions(&mut target, &reference).context("Failed to sync versions")?;
    let total = result.total();
    info!("{} change(s) computed for {}", total, options.target.display());

    if options.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else if total == 0 {
        writeln!(
            out,
            "✓ No version differences found. Target file is already in sync."
        )?;
        return Ok(result);
    } else if options.verbose {
        writeln!(out, "Changes to be made:\n")?;
        if let Some(change) = &result.go_version_change {
            writeln!(out, "  go: {} -> {}", change.old_version, change.new_version)?;
        }
        for change in &result.dependency_changes {
            writeln!(
                out,
                "  {}: {} -> {}",
                change.module, change.old_version, change.new_version
            )?;
        }
        writeln!(out)?;
    }

    if total == 0 {
        return Ok(result);
    }

    let formatted = target.format();

    if options.dry_run {
        if options.format == OutputFormat::Text {
            writeln!(
                out,
                "Dry-run mode: {} change(s) identified but not applied.",
                total
            )?;
            if options.verbose {
                writeln!(out, "\nPreview of updated go.mod:")?;
                writeln!(out, "---")?;
                writeln!(out, "{}", formatted)?;
            }
        }
        return Ok(result);
    }

    write_preserving_permissions(&options.target, formatted.as_bytes())?;
    info!("Wrote {}", options.target.display());

    if options.format == OutputFormat::Text {
        writeln!(
            out,
            "✓ Successfully updated {} ({} change(s) applied)",
            options.target.display(),
            total
        )?;
    }

    Ok(result)
}

/// Replace the file at `path` with `contents`, keeping its permissions.
/// Symlinks are followed so the file they point to is the one rewritten.
/// The new content is written to a sibling temp file and renamed over it.
fn write_preserving_permissions(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let resolved = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve target file {}", path.display()))?;
    let permissions = std::fs::metadata(&resolved)
        .with_context(|| format!("Failed to stat target file {}", resolved.display()))?
        .permissions();

    let dir = resolved.parent().unwrap_or_else(|| Path::new("/"));

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents)
        .context("Failed to write target file")?;
    tmp.as_file()
        .set_permissions(permissions)
        .context("Failed to set target file permissions")?;
    tmp.persist(&resolved)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write target file {}", resolved.display()))?;

    Ok(())
}
