//! Error kinds raised by the query commands.

use std::path::PathBuf;

use thiserror::Error;

/// Accepted values for the `list` state argument, as shown to the user.
pub const ACCEPTED_STATES: &str = "config-files, half-unpacked, unpacked, installed [default]";

#[derive(Debug, Error)]
pub enum QueryError {
    /// A metadata record lacks its identity or description.
    #[error("malformed package record: {0}")]
    MalformedRecord(String),

    #[error("invalid state `{0}'. Accepted values: {}", ACCEPTED_STATES)]
    InvalidStateToken(String),

    #[error("{what} is unavailable at {}", .path.display())]
    CollaboratorUnavailable { what: &'static str, path: PathBuf },

    /// Some repositories could not be read; results from the others were kept.
    #[error("failed to read {failed} of {total} repositories")]
    PartialScan { failed: usize, total: usize },
}
