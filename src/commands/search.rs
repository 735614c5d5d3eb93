use anyhow::Result;
use log::{debug, warn};

use crate::{application::SearchAction, runtime::Runtime};

use super::context::QueryContext;

/// Search the repository pool for packages matching any of `patterns`
#[tracing::instrument(skip(ctx))]
pub fn search<R: Runtime>(ctx: &QueryContext<R>, patterns: &[String]) -> Result<()> {
    let pool = ctx.open_pool()?;
    if pool.is_empty() {
        warn!("No repositories configured under {:?}", ctx.root);
    }
    let registry = ctx.open_registry()?;

    let action = SearchAction::new(
        &ctx.runtime,
        &pool,
        registry.as_ref(),
        &ctx.resolver,
        ctx.max_columns,
    );
    let outcome = action.search(patterns);
    debug!(
        "{} match(es) across {} repositories",
        outcome.matches, outcome.repositories
    );

    for line in &outcome.lines {
        println!("{}", line);
    }
    for failure in &outcome.failures {
        eprintln!(
            "Failed to read repository {}: {}",
            failure.location.display(),
            failure.reason
        );
    }

    outcome.status()?;
    Ok(())
}
