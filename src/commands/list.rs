use anyhow::Result;
use log::debug;

use crate::{application::ListAction, query::StateFilter, runtime::Runtime};

use super::context::QueryContext;

/// List registered packages in the given state (installed by default)
#[tracing::instrument(skip(ctx))]
pub fn list<R: Runtime>(ctx: &QueryContext<R>, state: Option<&str>) -> Result<()> {
    // Reject a bad state before touching the registry
    let filter = StateFilter::parse(state)?;
    debug!("Listing packages with filter {:?}", filter);

    let Some(registry) = ctx.open_registry()? else {
        println!("No packages currently installed.");
        return Ok(());
    };

    for line in ListAction::new(&registry).list_packages(filter) {
        println!("{}", line);
    }

    Ok(())
}

/// List packages installed explicitly
#[tracing::instrument(skip(ctx))]
pub fn list_manual<R: Runtime>(ctx: &QueryContext<R>) -> Result<()> {
    let Some(registry) = ctx.open_registry()? else {
        println!("No packages currently installed.");
        return Ok(());
    };

    for identity in ListAction::new(&registry).list_manual() {
        println!("{}", identity);
    }

    Ok(())
}
