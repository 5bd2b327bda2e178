use crate::errors::{CmdSeqError, Result};
use crate::model::CommandRef;

use super::invariants;

/// Decide whether a resolved command list may run together, in this order
///
/// 1. An empty list is rejected.
/// 2. A single command is always valid, even an independent one.
/// 3. With two or more commands, no command may be independent; every
///    offending name is reported.
/// 4. Priorities must be non-decreasing in list order; the first adjacent
///    pair that breaks this is reported.
///
/// Validation is pure: the same list always yields the same verdict and
/// error payload.
///
/// # Errors
///
/// Returns `EmptyCommandSet`, `IndependenceConflict` or `InvalidOrder`.
pub fn validate_order(commands: &[CommandRef]) -> Result<()> {
    if commands.is_empty() {
        return Err(CmdSeqError::EmptyCommandSet);
    }

    if commands.len() == 1 {
        return Ok(());
    }

    let independent = invariants::find_independent(commands);
    if !independent.is_empty() {
        return Err(CmdSeqError::IndependenceConflict {
            commands: independent,
        });
    }

    match invariants::find_order_violations(commands).into_iter().next() {
        Some(violation) => Err(CmdSeqError::InvalidOrder {
            before: violation.before,
            before_priority: violation.before_priority,
            after: violation.after,
            after_priority: violation.after_priority,
        }),
        None => Ok(()),
    }
}
