//! Command execution
//!
//! The executor is the only entry point that combines validation with
//! running actions: nothing runs unless the whole list validates, and the
//! first failing action stops the sequence. There is no rollback; actions
//! that already ran stay done.

use std::time::Instant;

use cmdseq_core_types::schema::{OP_EXECUTE, OP_RUN_ACTION};
use cmdseq_core_types::{RequestContext, RequestId};
use serde::{Deserialize, Serialize};

use crate::errors::{CmdSeqError, Result};
use crate::model::CommandRef;
use crate::registry::Registry;
use crate::resolver::resolve;
use crate::rules::validate_order;
use crate::{log_op_end, log_op_error, log_op_start};

/// Outcome of a successful execution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub request_id: RequestId,
    /// Names of the commands run, in the order they ran
    pub executed: Vec<String>,
    pub duration_ms: u64,
}

/// Validate and run a resolved command list with a fresh request context
///
/// # Errors
///
/// Returns a validation error (nothing ran) or `ActionFailed` (every
/// command before the failing one ran).
pub fn execute(commands: &[CommandRef]) -> Result<ExecutionReport> {
    execute_with_context(commands, &RequestContext::new())
}

/// Validate and run a resolved command list under the caller's context
///
/// # Errors
///
/// Same as [`execute`].
pub fn execute_with_context(
    commands: &[CommandRef],
    ctx: &RequestContext,
) -> Result<ExecutionReport> {
    let mut executed = Vec::with_capacity(commands.len());
    run_request(ctx, commands.len(), &mut executed, |executed| {
        validate_order(commands)?;
        run_actions(commands, ctx, executed)
    })
}

/// Resolve and validate without running anything
///
/// # Errors
///
/// Returns `UnknownCommand` or any validation error.
pub fn plan<S>(registry: &Registry, names: &[S]) -> Result<Vec<CommandRef>>
where
    S: AsRef<str>,
{
    let commands = resolve(registry, names)?;
    validate_order(&commands)?;
    Ok(commands)
}

/// Run each action once, in list order, stopping at the first failure
///
/// `executed` receives the name of every command whose action completed,
/// so callers can report what was not undone after a failure.
pub(crate) fn run_actions(
    commands: &[CommandRef],
    ctx: &RequestContext,
    executed: &mut Vec<String>,
) -> Result<()> {
    for command in commands {
        let start = Instant::now();
        log_op_start!(
            OP_RUN_ACTION,
            request_id = %ctx.request_id,
            command = command.name(),
            priority = command.priority()
        );

        if let Err(source) = command.run() {
            let err = CmdSeqError::ActionFailed {
                command: command.name().to_string(),
                source,
            };
            log_op_error!(
                OP_RUN_ACTION,
                err.clone(),
                duration_ms = elapsed_ms(start),
                request_id = %ctx.request_id,
                command = command.name()
            );
            return Err(err);
        }

        log_op_end!(
            OP_RUN_ACTION,
            duration_ms = elapsed_ms(start),
            request_id = %ctx.request_id,
            command = command.name()
        );
        executed.push(command.name().to_string());
    }

    Ok(())
}

/// Wrap one execution request in its `execute` start/end/error events
///
/// `body` receives `executed` and pushes the name of every command that
/// completed. Both [`execute_with_context`] and `Invocation::run` go through
/// here so the request boundary is logged the same way.
pub(crate) fn run_request<F>(
    ctx: &RequestContext,
    requested_len: usize,
    executed: &mut Vec<String>,
    body: F,
) -> Result<ExecutionReport>
where
    F: FnOnce(&mut Vec<String>) -> Result<()>,
{
    let start = Instant::now();
    log_op_start!(
        OP_EXECUTE,
        request_id = %ctx.request_id,
        requested_len = requested_len
    );

    let outcome = body(executed);
    let duration_ms = elapsed_ms(start);

    match outcome {
        Ok(()) => {
            log_op_end!(
                OP_EXECUTE,
                duration_ms = duration_ms,
                request_id = %ctx.request_id,
                executed_len = executed.len()
            );
            Ok(ExecutionReport {
                request_id: ctx.request_id.clone(),
                executed: executed.clone(),
                duration_ms,
            })
        }
        Err(err) => {
            log_op_error!(
                OP_EXECUTE,
                err.clone(),
                duration_ms = duration_ms,
                request_id = %ctx.request_id,
                executed_len = executed.len()
            );
            Err(err)
        }
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
