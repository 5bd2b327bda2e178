//! Demo command
//!
//! Usage: cmdseq demo
//!
//! Replays a fixed set of requests against the catalog: a valid
//! two-command sequence, a lone independent command, then an unknown name.
//! Stops with an error at the first failing request.

use clap::Args;
use cmdseq_core::{ExError, Invocation, Registry};

/// Requests replayed by the demo, in order
pub const DEMO_REQUESTS: [&[&str]; 3] = [&["build", "test"], &["revert"], &["no_command"]];

#[derive(Debug, Args)]
pub struct DemoArgs {}

/// Execute demo command
pub fn execute(_args: DemoArgs, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    for names in DEMO_REQUESTS {
        println!("> {}", names.join(" "));

        let mut invocation = Invocation::new(names.iter().copied());
        match invocation.run(registry) {
            Ok(report) => println!(
                "✓ Ran {} command(s): {}",
                report.executed.len(),
                report.executed.join(", ")
            ),
            Err(err) => {
                let request_id = invocation.request_id().clone();
                return Err(Box::new(ExError::from(err).with_request_id(request_id)));
            }
        }
    }

    Ok(())
}
