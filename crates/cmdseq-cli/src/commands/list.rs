//! List command
//!
//! Usage: cmdseq list [--json]

use clap::Args;
use cmdseq_core::{CommandInfo, Registry};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the catalog as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let infos: Vec<CommandInfo> = registry
        .commands_by_priority()
        .into_iter()
        .map(|c| c.info())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{:>8}  {:<12}  INDEPENDENT", "PRIORITY", "NAME");
    for info in &infos {
        println!(
            "{:>8}  {:<12}  {}",
            info.priority,
            info.name,
            if info.independent { "yes" } else { "no" }
        );
    }
    Ok(())
}
