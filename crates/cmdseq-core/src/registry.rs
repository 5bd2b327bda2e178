//! Command registry
//!
//! Authoritative name → command mapping, populated once by the startup
//! routine and read by the resolver afterwards. Registration takes
//! `&mut self` and lookups take `&self`, so registration can never be
//! interleaved with a resolution on the same value.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{CmdSeqError, Result};
use crate::model::{Command, CommandRef};

/// What `register` does when a name is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Replace the existing entry (last registration wins)
    #[default]
    Overwrite,
    /// Fail with `DuplicateCommand` and keep the existing entry
    Reject,
}

/// In-memory command registry
#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, CommandRef>,
    policy: DuplicatePolicy,
}

impl Registry {
    /// Create an empty registry with the default `Overwrite` policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            commands: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a command, returning the shared handle stored in the registry
    ///
    /// # Errors
    ///
    /// - `InvalidDescriptor` if the command's name is empty.
    /// - `DuplicateCommand` if the name is taken and the policy is `Reject`.
    pub fn register<C>(&mut self, command: C) -> Result<CommandRef>
    where
        C: Command + 'static,
    {
        self.register_shared(Arc::new(command))
    }

    /// Register an already shared command
    ///
    /// # Errors
    ///
    /// Same as [`Registry::register`].
    pub fn register_shared(&mut self, command: CommandRef) -> Result<CommandRef> {
        let name = command.name().to_string();
        if name.is_empty() {
            return Err(CmdSeqError::InvalidDescriptor {
                reason: "command name cannot be empty".to_string(),
            });
        }

        if self.commands.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(CmdSeqError::DuplicateCommand { name });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(
                        command = %name,
                        "command re-registered, previous entry replaced"
                    );
                }
            }
        }

        tracing::debug!(
            command = %name,
            priority = command.priority(),
            independent = command.independent(),
            "command registered"
        );

        self.commands.insert(name, command.clone());
        Ok(command)
    }

    /// Look up a command by name
    pub fn lookup(&self, name: &str) -> Option<&CommandRef> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered names, sorted for deterministic output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All commands ordered by `(priority, name)`
    ///
    /// This is the order in which any subset of non-independent commands
    /// would pass validation.
    pub fn commands_by_priority(&self) -> Vec<&CommandRef> {
        let mut commands: Vec<&CommandRef> = self.commands.values().collect();
        commands.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| a.name().cmp(b.name()))
        });
        commands
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.names())
            .field("policy", &self.policy)
            .finish()
    }
}
