//! Command entry points invoked by the CLI.
//!
//! Each command takes the shared [`QueryContext`] and prints its report to
//! standard output.

mod context;
mod list;
mod paths;
mod search;
mod show;

pub use context::{DEFAULT_COLUMNS, QueryContext};
pub use list::{list, list_manual};
pub use paths::default_root;
pub use search::search;
pub use show::show;
