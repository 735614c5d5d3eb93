//! Repository pool and per-repository package indices.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::QueryError;
use crate::runtime::Runtime;

use super::PackageIndex;

/// File name of the pool configuration under the metadata root.
pub const POOL_FILE: &str = "repositories.json";

/// File name of a repository's index inside the repository directory.
pub const INDEX_FILE: &str = "index.json";

/// A single repository, identified by the directory holding its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub location: PathBuf,
}

impl Repository {
    pub fn new(location: PathBuf) -> Self {
        Self { location }
    }

    pub fn index_path(&self) -> PathBuf {
        self.location.join(INDEX_FILE)
    }

    /// Read this repository's index.
    #[tracing::instrument(skip(self, runtime), fields(repository = %self.location.display()))]
    pub fn load_index<R: Runtime>(&self, runtime: &R) -> Result<PackageIndex> {
        let path = self.index_path();
        if !runtime.exists(&path) {
            return Err(QueryError::CollaboratorUnavailable {
                what: "repository index",
                path,
            }
            .into());
        }
        PackageIndex::load(runtime, &path)
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct PoolConfig {
    #[serde(default)]
    repositories: Vec<PathBuf>,
}

/// Ordered collection of repositories consulted during search.
///
/// Order is priority order: the first repository is searched first.
#[derive(Debug, Clone, Default)]
pub struct RepositoryPool {
    repositories: Vec<Repository>,
}

impl RepositoryPool {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }

    /// Build the pool for `root`.
    ///
    /// Explicit `overrides` replace the configured pool. Otherwise the pool is
    /// read from `<root>/repositories.json`; a missing file means an empty
    /// pool. Relative locations are resolved against `root`.
    #[tracing::instrument(skip(runtime))]
    pub fn open<R: Runtime>(runtime: &R, root: &Path, overrides: &[PathBuf]) -> Result<Self> {
        let locations = if !overrides.is_empty() {
            overrides.to_vec()
        } else {
            let path = root.join(POOL_FILE);
            if !runtime.exists(&path) {
                debug!("No repository pool configured at {:?}", path);
                return Ok(Self::default());
            }
            let content = runtime.read_to_string(&path)?;
            let config: PoolConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse repository pool {}", path.display()))?;
            config.repositories
        };

        let repositories = locations
            .into_iter()
            .map(|location| {
                if location.is_absolute() {
                    Repository::new(location)
                } else {
                    Repository::new(root.join(location))
                }
            })
            .collect::<Vec<_>>();
        debug!("Repository pool has {} repositories", repositories.len());

        Ok(Self { repositories })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter()
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}
