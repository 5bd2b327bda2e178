//! cmdseq CLI
//!
//! Runs sequences of built-in commands after checking their execution order

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cmdseq_core::logging_facility::{self, Profile};

mod catalog;
mod commands;
mod config;

use config::CliConfig;

/// Filter used unless `-v`, the config file or `RUST_LOG` says otherwise
const QUIET_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "cmdseq")]
#[command(about = "cmdseq - Priority-ordered command sequencing", long_about = None)]
struct Cli {
    /// Config file (default: ./cmdseq.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile, overrides the config file
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    /// Use the logging profile's default filter instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve, validate and run commands in the given order
    Run(commands::run::RunArgs),
    /// Resolve and validate without running anything
    Check(commands::check::CheckArgs),
    /// List built-in commands by priority
    List(commands::list::ListArgs),
    /// Replay the demonstration requests
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load(cli.config.as_deref())?;

    let profile = cli.log_profile.unwrap_or(config.logging.profile);
    let filter = match (&config.logging.filter, cli.verbose) {
        (Some(filter), _) => Some(filter.as_str()),
        (None, true) => None,
        (None, false) => Some(QUIET_FILTER),
    };
    init_logging(profile, filter);

    let registry = catalog::build_registry(config.registry.on_duplicate)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &registry),
        Commands::Check(args) => commands::check::execute(args, &registry),
        Commands::List(args) => commands::list::execute(args, &registry),
        Commands::Demo(args) => commands::demo::execute(args, &registry),
    }
}

fn init_logging(profile: Profile, filter: Option<&str>) {
    logging_facility::init_with_filter(profile, filter);
    tracing::debug!(
        ?profile,
        filter = filter.unwrap_or(profile.default_filter()),
        "logging initialized"
    );
}
