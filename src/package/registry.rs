//! Local registry of installed packages.

use anyhow::Result;
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::QueryError;
use crate::runtime::Runtime;

use super::{PackageIndex, PackageMetadata, pkgname};

/// File name of the registry under the metadata root.
pub const REGISTRY_FILE: &str = "pkgdb.json";

/// The set of packages known to the local package database.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    index: PackageIndex,
    identities: HashSet<String>,
}

impl Registry {
    /// Path of the registry file for the given metadata root.
    pub fn path(root: &Path) -> PathBuf {
        root.join(REGISTRY_FILE)
    }

    /// Open the registry under `root`.
    ///
    /// Returns `None` when no registry exists, i.e. nothing was ever installed.
    #[tracing::instrument(skip(runtime))]
    pub fn open<R: Runtime>(runtime: &R, root: &Path) -> Result<Option<Self>> {
        let path = Self::path(root);
        if !runtime.exists(&path) {
            debug!("No registry at {:?}", path);
            return Ok(None);
        }
        let index = PackageIndex::load(runtime, &path)?;
        debug!("Loaded {} registry record(s) from {:?}", index.len(), path);
        Ok(Some(Self::from_index(index)))
    }

    pub fn from_index(index: PackageIndex) -> Self {
        let identities = index
            .records()
            .filter_map(Result::ok)
            .map(|meta| meta.identity)
            .collect();
        Self { index, identities }
    }

    /// Iterate over every registered package in registration order.
    pub fn packages(&self) -> impl Iterator<Item = Result<PackageMetadata, QueryError>> + '_ {
        self.index.records()
    }

    /// Whether a package with exactly this identity is registered.
    pub fn contains(&self, identity: &str) -> bool {
        self.identities.contains(identity)
    }

    /// Look up a registered package by identity or by package name.
    pub fn find(&self, name: &str) -> Option<PackageMetadata> {
        self.packages()
            .filter_map(Result::ok)
            .find(|meta| meta.identity == name || pkgname(&meta.identity) == name)
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
