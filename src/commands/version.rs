//! `gomodsync version`

use std::io::Write;

use crate::config::BuildInfo;

pub fn run<W: Write>(info: &BuildInfo, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "gomodsync version {}", info.version)?;
    writeln!(out, "  commit: {}", info.commit)?;
    writeln!(out, "  built:  {}", info.date)
}
