use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    package::{ProvidesResolver, Registry, RepositoryPool},
    runtime::Runtime,
};

use super::paths::default_root;

/// Width used when `--columns`, the terminal and `COLUMNS` all give none.
pub const DEFAULT_COLUMNS: usize = 80;

/// Everything a query command needs, created once per process.
pub struct QueryContext<R: Runtime> {
    pub runtime: R,
    pub root: PathBuf,
    pub repositories: Vec<PathBuf>,
    pub max_columns: usize,
    pub resolver: ProvidesResolver,
}

impl<R: Runtime> QueryContext<R> {
    pub fn new(
        runtime: R,
        root: Option<PathBuf>,
        repositories: Vec<PathBuf>,
        columns: Option<usize>,
    ) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root(&runtime)?,
        };
        debug!("Using metadata root: {:?}", root);

        let max_columns = columns.unwrap_or_else(|| terminal_columns(&runtime));
        debug!("Formatting for {} columns", max_columns);

        Ok(Self {
            runtime,
            root,
            repositories,
            max_columns,
            resolver: ProvidesResolver,
        })
    }

    /// Open the local registry; `None` when nothing is installed.
    pub fn open_registry(&self) -> Result<Option<Registry>> {
        Registry::open(&self.runtime, &self.root)
    }

    pub fn open_pool(&self) -> Result<RepositoryPool> {
        RepositoryPool::open(&self.runtime, &self.root, &self.repositories)
    }
}

/// Width of the output: the terminal itself, then `COLUMNS`, then 80.
fn terminal_columns<R: Runtime>(runtime: &R) -> usize {
    runtime
        .terminal_columns()
        .or_else(|| {
            runtime
                .env_var("COLUMNS")
                .ok()
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|&columns| columns > 0)
        })
        .unwrap_or(DEFAULT_COLUMNS)
}
