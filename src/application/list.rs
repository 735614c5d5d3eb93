//! List action - renders packages from the local registry.

use log::debug;

use crate::package::{PackageMetadata, Registry};
use crate::query::{StateFilter, format};

/// List action - queries installed packages
pub struct ListAction<'a> {
    registry: &'a Registry,
}

impl<'a> ListAction<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Render every registered package accepted by `filter`.
    ///
    /// The column width comes from the whole registry, not only the packages
    /// that pass the filter, so output lines up across different listings.
    pub fn list_packages(&self, filter: StateFilter) -> Vec<String> {
        let records: Vec<PackageMetadata> = self.valid_records().collect();
        let width = format::alignment_width(records.iter().map(|m| m.identity.as_str()));

        records
            .iter()
            .filter(|meta| filter.includes(meta))
            .map(|meta| format::listing_line(&meta.identity, &meta.description, width))
            .collect()
    }

    /// Identities of packages that were installed explicitly rather than as
    /// a dependency.
    pub fn list_manual(&self) -> Vec<String> {
        self.valid_records()
            .filter(|meta| !meta.automatic_install)
            .map(|meta| meta.identity.clone())
            .collect()
    }

    fn valid_records(&self) -> impl Iterator<Item = PackageMetadata> + '_ {
        self.registry.packages().filter_map(|record| match record {
            Ok(meta) => Some(meta),
            Err(e) => {
                debug!("Skipping registry record: {}", e);
                None
            }
        })
    }
}
