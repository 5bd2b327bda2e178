use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

/// Sequencing weight of a command; lower runs earlier
pub type Priority = i64;

/// Outcome of running a command's action
pub type ActionResult = std::result::Result<(), ActionError>;

/// Shared handle to a registered command
pub type CommandRef = Arc<dyn Command>;

/// Capability every runnable command exposes
///
/// A command is identified by its `name`, sequenced by its `priority` and
/// may be marked `independent`, meaning it can only ever be requested on
/// its own. Implementations must not change any of these values after
/// construction; the registry relies on them being stable.
pub trait Command: Send + Sync {
    /// Unique key within a registry
    fn name(&self) -> &str;

    /// Relative sequencing weight
    fn priority(&self) -> Priority;

    /// Whether this command must run alone
    fn independent(&self) -> bool {
        false
    }

    /// Perform the command's side effect
    ///
    /// # Errors
    ///
    /// Returns the action's own failure. The executor stops the sequence and
    /// propagates it wrapped in `CmdSeqError::ActionFailed`.
    fn run(&self) -> ActionResult;

    /// Snapshot of the identity and ordering metadata
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name().to_string(),
            priority: self.priority(),
            independent: self.independent(),
        }
    }
}

impl fmt::Debug for dyn Command + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .field("independent", &self.independent())
            .finish()
    }
}

/// Plain-data view of a command, without its action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    pub priority: Priority,
    pub independent: bool,
}
