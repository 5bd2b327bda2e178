use std::fmt;

use super::command::{ActionResult, Command, Priority};

type Action = Box<dyn Fn() -> ActionResult + Send + Sync>;

/// Closure-backed command
///
/// Useful when a command's behaviour is supplied by the surrounding program
/// rather than by a dedicated type. Fields are private so a descriptor stays
/// immutable once built.
pub struct CommandDescriptor {
    name: String,
    priority: Priority,
    independent: bool,
    action: Action,
}

impl CommandDescriptor {
    /// Create a non-independent descriptor
    ///
    /// The name is not validated here; `Registry::register` rejects empty
    /// names.
    pub fn new<F>(name: impl Into<String>, priority: Priority, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            priority,
            independent: false,
            action: Box::new(action),
        }
    }

    /// Set the independence flag
    pub fn with_independent(mut self, independent: bool) -> Self {
        self.independent = independent;
        self
    }
}

impl Command for CommandDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn independent(&self) -> bool {
        self.independent
    }

    fn run(&self) -> ActionResult {
        (self.action)()
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("independent", &self.independent)
            .finish_non_exhaustive()
    }
}
