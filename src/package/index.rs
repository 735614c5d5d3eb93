use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QueryError;
use crate::runtime::Runtime;

use super::{PackageMetadata, RawRecord};

/// An ordered collection of package records, as stored in `pkgdb.json` and
/// in every repository's `index.json`.
///
/// Records keep their on-disk order, which is the order in which they were
/// registered. Each entry stays an untyped JSON value until it is read, so a
/// record with a wrong-typed field only invalidates itself.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PackageIndex {
    #[serde(default)]
    pub packages: Vec<serde_json::Value>,
}

impl PackageIndex {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        let index: PackageIndex = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse package index {}", path.display()))?;
        Ok(index)
    }

    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self {
            packages: records
                .into_iter()
                .filter_map(|record| serde_json::to_value(record).ok())
                .collect(),
        }
    }

    /// Iterate over the records in order, validating each one.
    ///
    /// Malformed records are yielded as errors so the caller can skip them
    /// without aborting the scan.
    pub fn records(&self) -> impl Iterator<Item = Result<PackageMetadata, QueryError>> + '_ {
        self.packages.iter().map(|value| {
            let raw = RawRecord::deserialize(value)
                .map_err(|e| QueryError::MalformedRecord(e.to_string()))?;
            PackageMetadata::try_from(&raw)
        })
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
