use crate::query::compile_glob;

use super::PackageMetadata;

/// Resolves whether a package provides a virtual package.
#[cfg_attr(test, mockall::automock)]
pub trait VirtualResolver {
    fn provides_virtual(&self, record: &PackageMetadata, pattern: &str) -> bool;
}

/// Resolver backed by the `provides` list carried by each record.
///
/// A provided entry such as `shell-0_1` matches the pattern `shell-0_1`
/// (exact), `shell` (package name) and any glob matching the entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvidesResolver;

impl VirtualResolver for ProvidesResolver {
    fn provides_virtual(&self, record: &PackageMetadata, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let glob = compile_glob(pattern);
        record.provides.iter().any(|provided| {
            provided == pattern
                || pkgname(provided) == pattern
                || glob.as_ref().is_some_and(|g| g.matches(provided))
        })
    }
}

/// Package name part of a `name-version` string.
///
/// Strings without a version separator are returned unchanged.
pub fn pkgname(pkgver: &str) -> &str {
    match pkgver.rsplit_once('-') {
        Some((name, _version)) if !name.is_empty() => name,
        _ => pkgver,
    }
}
