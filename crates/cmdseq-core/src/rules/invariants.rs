//! Invariant finders over a resolved command list
//!
//! Each finder reports every violation it sees; `validation` decides which
//! one becomes the returned error.

use crate::model::{CommandRef, Priority};

/// Adjacent pair whose priorities decrease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    /// Index of the earlier command of the pair
    pub index: usize,
    pub before: String,
    pub before_priority: Priority,
    pub after: String,
    pub after_priority: Priority,
}

/// Names of all independent commands, in list order, duplicates kept
pub fn find_independent(commands: &[CommandRef]) -> Vec<String> {
    commands
        .iter()
        .filter(|c| c.independent())
        .map(|c| c.name().to_string())
        .collect()
}

/// Every adjacent pair where `priority[i] > priority[i + 1]`
///
/// Equal priorities are not a violation.
pub fn find_order_violations(commands: &[CommandRef]) -> Vec<OrderViolation> {
    commands
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].priority() > pair[1].priority())
        .map(|(index, pair)| OrderViolation {
            index,
            before: pair[0].name().to_string(),
            before_priority: pair[0].priority(),
            after: pair[1].name().to_string(),
            after_priority: pair[1].priority(),
        })
        .collect()
}
