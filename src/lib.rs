//! Check and synchronize go.mod dependency versions against a reference go.mod.
//!
//! - [`parser`]: go.mod parsing and format-preserving edits
//! - [`sync`]: Version comparison, sync and check
//! - [`reference`]: Loading the reference from a path or URL
//! - [`commands`]: CLI operations

pub mod commands;
pub mod config;
pub mod logging;
pub mod parser;
pub mod reference;
pub mod sync;
