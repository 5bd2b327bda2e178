//! Check command
//!
//! Usage: cmdseq check [NAMES]...
//!
//! Resolves and validates a request without running any action.

use clap::Args;
use cmdseq_core::{plan, ExError, Registry};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Command names, in the order they would run
    pub names: Vec<String>,
}

/// Execute check command
pub fn execute(args: CheckArgs, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let commands = plan(registry, &args.names).map_err(ExError::from)?;

    let names: Vec<&str> = commands.iter().map(|c| c.name()).collect();
    println!("✓ Valid: {}", names.join(", "));
    Ok(())
}
