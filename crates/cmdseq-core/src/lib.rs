//! cmdseq core - command registry and execution-order validation
//!
//! This crate provides:
//! - The `Command` capability and a closure-backed `CommandDescriptor`
//! - An explicit `Registry` with a configurable duplicate-name policy
//! - Name resolution that preserves request order
//! - Order validation (independence exclusivity, non-decreasing priority)
//! - Fail-fast execution and the per-request `Invocation` state machine
//! - The structured error and logging facilities shared by the CLI
//!
//! # Example
//!
//! ```
//! use cmdseq_core::{CommandDescriptor, Invocation, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register(CommandDescriptor::new("build", 2, || Ok(()))).unwrap();
//! registry.register(CommandDescriptor::new("test", 3, || Ok(()))).unwrap();
//!
//! let report = Invocation::new(["build", "test"]).run(&registry).unwrap();
//! assert_eq!(report.executed, vec!["build", "test"]);
//! ```

pub mod errors;
pub mod executor;
pub mod invocation;
pub mod logging_facility;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use errors::{ActionError, CmdSeqError, ExError, ExErrorKind, Result};
pub use executor::{execute, execute_with_context, plan, ExecutionReport};
pub use invocation::{ExecutionState, Invocation};
pub use model::{ActionResult, Command, CommandDescriptor, CommandInfo, CommandRef, Priority};
pub use registry::{DuplicatePolicy, Registry};
pub use resolver::resolve;
pub use rules::validate_order;

#[doc(hidden)]
pub mod __macro_support {
    pub use cmdseq_core_types::schema;
    pub use tracing;
}
