//! Application layer - Use cases that coordinate the query building blocks.
//!
//! This layer sits between the CLI commands and the package metadata
//! collaborators: it drives the scans and returns rendered lines.

mod list;
mod search;

pub use list::ListAction;
pub use search::{ScanFailure, SearchAction, SearchOutcome};
