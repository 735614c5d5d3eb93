use anyhow::Result;
use clap::Parser;
use pkgq::commands::{self, QueryContext};
use std::path::PathBuf;

/// pkgq - package query tool
///
/// Search repository indices and list packages from the local package
/// database.
///
/// Examples:
///   pkgq search editor        # Packages whose name or description mention "editor"
///   pkgq search 'python3-*'   # Packages whose full name matches a glob
///   pkgq list unpacked        # Registered packages left unpacked
#[derive(Parser, Debug)]
#[command(author, version = env!("PKGQ_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Metadata root directory (overrides defaults; also via PKGQ_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "PKGQ_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub root: Option<PathBuf>,

    /// Repository to search instead of the configured pool (repeatable, in priority order)
    #[arg(long = "repository", value_name = "PATH", global = true)]
    pub repositories: Vec<PathBuf>,

    /// Width used to truncate search results (defaults to the terminal, then $COLUMNS, then 80)
    #[arg(long = "columns", value_name = "N", global = true)]
    pub columns: Option<usize>,

    /// Enable debug output
    #[arg(long = "debug", short = 'd', global = true)]
    pub debug: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List registered packages in a given state
    List(ListArgs),

    /// List packages that were installed explicitly, not as dependencies
    ListManual,

    /// Search repositories for packages matching any pattern
    Search(SearchArgs),

    /// Show information about an installed package
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// One of: installed (default), unpacked, half-unpacked, config-files
    #[arg(value_name = "STATE")]
    pub state: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Glob, substring or virtual package name
    #[arg(value_name = "PATTERN", required = true, num_args = 1..)]
    pub patterns: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Package name or name-version
    #[arg(value_name = "PKG")]
    pub package: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let ctx = QueryContext::new(
        pkgq::runtime::RealRuntime,
        cli.root,
        cli.repositories,
        cli.columns,
    )?;

    match cli.command {
        Commands::List(args) => commands::list(&ctx, args.state.as_deref())?,
        Commands::ListManual => commands::list_manual(&ctx)?,
        Commands::Search(args) => commands::search(&ctx, &args.patterns)?,
        Commands::Show(args) => commands::show(&ctx, &args.package)?,
    }
    Ok(())
}
