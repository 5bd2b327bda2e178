//! Run command
//!
//! Usage: cmdseq run [NAMES]...

use clap::Args;
use cmdseq_core::{ExError, Invocation, Registry};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command names, in the order they should run
    pub names: Vec<String>,
}

/// Execute run command
pub fn execute(args: RunArgs, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let mut invocation = Invocation::new(args.names);

    match invocation.run(registry) {
        Ok(report) => {
            println!(
                "✓ Ran {} command(s): {}",
                report.executed.len(),
                report.executed.join(", ")
            );
            Ok(())
        }
        Err(err) => {
            let err = ExError::from(err).with_request_id(invocation.request_id().clone());
            if !err.kind().is_pre_execution() && !invocation.executed().is_empty() {
                eprintln!(
                    "Already ran (not rolled back): {}",
                    invocation.executed().join(", ")
                );
            }
            Err(Box::new(err))
        }
    }
}
