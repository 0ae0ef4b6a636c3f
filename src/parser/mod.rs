//! Parser layer
//! - traits.rs: Manifest trait and error definitions
//! - types.rs: Common types (Requirement)
//! - go_mod.rs: go.mod parser and editor

pub mod go_mod;
pub mod traits;
pub mod types;

pub use go_mod::{GoModFile, parse_go_mod};
pub use traits::{EditError, Manifest, ParseError};
pub use types::Requirement;
