use std::sync::{Arc, Mutex};

use cmdseq_core::{ActionError, CommandDescriptor, Priority, Registry};

/// Shared record of which actions ran, in order
pub type Journal = Arc<Mutex<Vec<String>>>;

/// The reference command table: (name, priority, independent)
#[allow(dead_code)]
pub const REFERENCE_COMMANDS: [(&str, Priority, bool); 6] = [
    ("init", 5, false),
    ("test", 3, false),
    ("build", 2, false),
    ("deploy", 4, true),
    ("migrate", 1, true),
    ("revert", 0, true),
];

/// Create a descriptor whose action appends its name to `journal`
#[allow(dead_code)]
pub fn recording_command(
    journal: &Journal,
    name: &str,
    priority: Priority,
    independent: bool,
) -> CommandDescriptor {
    let journal = journal.clone();
    let label = name.to_string();
    CommandDescriptor::new(name, priority, move || {
        journal.lock().unwrap().push(label.clone());
        Ok(())
    })
    .with_independent(independent)
}

/// Create a descriptor whose action always fails with `message`
#[allow(dead_code)]
pub fn failing_command(name: &str, priority: Priority, message: &str) -> CommandDescriptor {
    let message = message.to_string();
    CommandDescriptor::new(name, priority, move || Err(ActionError::new(message.clone())))
}

/// Registry holding the reference commands, all recording into one journal
#[allow(dead_code)]
pub fn reference_registry() -> (Registry, Journal) {
    let journal = Journal::default();
    let mut registry = Registry::new();
    for (name, priority, independent) in REFERENCE_COMMANDS {
        registry
            .register(recording_command(&journal, name, priority, independent))
            .unwrap();
    }
    (registry, journal)
}

/// Names recorded so far
#[allow(dead_code)]
pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}
