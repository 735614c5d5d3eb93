//! Package metadata module
//!
//! This module provides read-only access to package metadata: the local
//! registry of installed packages, the pool of repository indices, and the
//! virtual-package resolver.

mod index;
mod meta;
mod provides;
mod registry;
mod repository;

pub use index::PackageIndex;
pub use meta::{InstallState, PackageMetadata, RawRecord};
pub use provides::{ProvidesResolver, VirtualResolver, pkgname};
pub use registry::{REGISTRY_FILE, Registry};
pub use repository::{INDEX_FILE, POOL_FILE, Repository, RepositoryPool};

#[cfg(test)]
pub use provides::MockVirtualResolver;
