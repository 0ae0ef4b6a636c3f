//! CLI operations
//!
//! Each command writes its report to a caller-supplied writer and returns
//! the engine result, leaving exit codes to the binary.
//!
//! - [`sync`]: Rewrite the target go.mod with reference versions
//! - [`check`]: Report differences between target and reference
//! - [`version`]: Print build metadata

pub mod check;
pub mod sync;
pub mod version;

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::parser::go_mod::{GoModFile, parse_go_mod};
use crate::reference::source::{ReferenceSource, display_name};

/// How a command reports its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Serialized result as JSON
    Json,
}

/// Read and parse the target go.mod
fn load_target(path: &Path) -> anyhow::Result<GoModFile> {
    let name = path.display().to_string();
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read target file {}", name))?;
    parse_go_mod(&name, &data).context("Failed to parse target file")
}

/// Fetch and parse the reference go.mod (from URL or local path)
async fn load_reference(
    reference: &str,
    source: &dyn ReferenceSource,
) -> anyhow::Result<GoModFile> {
    let data = source
        .fetch(reference)
        .await
        .context("Failed to fetch reference")?;
    debug!("Fetched {} bytes from {}", data.len(), display_name(reference));
    parse_go_mod(display_name(reference), &data).context("Failed to parse reference")
}
