//! Search action - scans the repository pool for packages matching patterns.

use log::{debug, warn};
use std::path::PathBuf;

use crate::error::QueryError;
use crate::package::{Registry, RepositoryPool, VirtualResolver};
use crate::query::{PatternMatcher, ResultCollector, format};
use crate::runtime::Runtime;

/// A repository that was skipped because its index could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub location: PathBuf,
    pub reason: String,
}

/// Rendered search results plus a summary of the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub lines: Vec<String>,
    pub matches: usize,
    pub repositories: usize,
    /// Skipped repositories, in pool order.
    pub failures: Vec<ScanFailure>,
}

impl SearchOutcome {
    /// Fails when any repository could not be read.
    pub fn status(&self) -> Result<(), QueryError> {
        if !self.failures.is_empty() {
            return Err(QueryError::PartialScan {
                failed: self.failures.len(),
                total: self.repositories,
            });
        }
        Ok(())
    }
}

/// Search action - queries every repository index in the pool
pub struct SearchAction<'a, R: Runtime, V: VirtualResolver> {
    runtime: &'a R,
    pool: &'a RepositoryPool,
    registry: Option<&'a Registry>,
    resolver: &'a V,
    max_columns: usize,
}

impl<'a, R: Runtime, V: VirtualResolver> SearchAction<'a, R, V> {
    pub fn new(
        runtime: &'a R,
        pool: &'a RepositoryPool,
        registry: Option<&'a Registry>,
        resolver: &'a V,
        max_columns: usize,
    ) -> Self {
        Self {
            runtime,
            pool,
            registry,
            resolver,
            max_columns,
        }
    }

    /// Match every record of every repository against every pattern.
    ///
    /// Repositories are scanned in pool order. One that cannot be read is
    /// recorded in [`SearchOutcome::failures`] and skipped; results from the
    /// others are kept.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, patterns: &[String]) -> SearchOutcome {
        let matcher = PatternMatcher::new(self.resolver);
        let mut collector = ResultCollector::new();
        let mut failures = Vec::new();

        for repo in self.pool.iter() {
            let index = match repo.load_index(self.runtime) {
                Ok(index) => index,
                Err(e) => {
                    warn!("Skipping repository {:?}: {:#}", repo.location, e);
                    failures.push(ScanFailure {
                        location: repo.location.clone(),
                        reason: format!("{:#}", e),
                    });
                    continue;
                }
            };
            debug!(
                "Searching {} record(s) in {:?}",
                index.len(),
                repo.location
            );

            for record in index.records() {
                let record = match record {
                    Ok(record) => record,
                    Err(e) => {
                        debug!("Skipping record in {:?}: {}", repo.location, e);
                        continue;
                    }
                };
                for pattern in patterns {
                    if matcher.matches(&record, pattern) {
                        collector.collect(&record.identity, &record.description);
                    }
                }
            }
        }

        debug!("Found {} match(es)", collector.count());

        let lines = format::render(
            collector.results(),
            |identity| self.registry.is_some_and(|r| r.contains(identity)),
            self.max_columns,
        );

        SearchOutcome {
            lines,
            matches: collector.count(),
            repositories: self.pool.len(),
            failures,
        }
    }
}
