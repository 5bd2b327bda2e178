//! Built-in command catalog
//!
//! The fixed set of commands this binary knows about. Startup registers
//! every entry of [`CATALOG`] in a plain loop, so the registered set is
//! exactly what this table lists.

use std::io::Write;

use cmdseq_core::{ActionResult, Command, DuplicatePolicy, Priority, Registry, Result};

/// A catalog entry; its action prints `message` to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub priority: Priority,
    pub independent: bool,
    pub message: &'static str,
}

impl Command for Builtin {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn independent(&self) -> bool {
        self.independent
    }

    fn run(&self) -> ActionResult {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", self.message)?;
        Ok(())
    }
}

pub const CATALOG: [Builtin; 6] = [
    Builtin {
        name: "init",
        priority: 5,
        independent: false,
        message: "Initializing project...",
    },
    Builtin {
        name: "test",
        priority: 3,
        independent: false,
        message: "Running tests...",
    },
    Builtin {
        name: "build",
        priority: 2,
        independent: false,
        message: "Compiling sources...",
    },
    Builtin {
        name: "deploy",
        priority: 4,
        independent: true,
        message: "Deploying application...",
    },
    Builtin {
        name: "migrate",
        priority: 1,
        independent: true,
        message: "Running migration...",
    },
    Builtin {
        name: "revert",
        priority: 0,
        independent: true,
        message: "Reverting...",
    },
];

/// Build the registry holding every catalog entry
///
/// # Errors
///
/// Propagates registration failures; with the fixed catalog this only
/// happens if an entry is malformed, which is fatal at startup.
pub fn build_registry(policy: DuplicatePolicy) -> Result<Registry> {
    let mut registry = Registry::with_policy(policy);
    for builtin in CATALOG {
        registry.register(builtin)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let registry = build_registry(DuplicatePolicy::Reject).unwrap();
        assert_eq!(registry.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_matches_reference_table() {
        let registry = build_registry(DuplicatePolicy::Overwrite).unwrap();
        let expected = vec![
            ("revert", 0, true),
            ("migrate", 1, true),
            ("build", 2, false),
            ("test", 3, false),
            ("deploy", 4, true),
            ("init", 5, false),
        ];

        let actual: Vec<(&str, Priority, bool)> = registry
            .commands_by_priority()
            .into_iter()
            .map(|c| (c.name(), c.priority(), c.independent()))
            .collect();
        assert_eq!(actual, expected);
    }
}
