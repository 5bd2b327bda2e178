//! Name resolution
//!
//! Maps requested command names onto registered commands, keeping the
//! caller's order and any duplicates.

use crate::errors::{CmdSeqError, Result};
use crate::model::CommandRef;
use crate::registry::Registry;

/// Resolve names to commands, all-or-nothing
///
/// # Errors
///
/// Returns `UnknownCommand` for the first name not present in the registry;
/// no partial result is returned.
pub fn resolve<S>(registry: &Registry, names: &[S]) -> Result<Vec<CommandRef>>
where
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            registry
                .lookup(name)
                .cloned()
                .ok_or_else(|| CmdSeqError::UnknownCommand {
                    name: name.to_string(),
                })
        })
        .collect()
}
