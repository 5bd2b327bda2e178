/// Scenario 8: Duplicate Registration Policy
///
/// Pins both duplicate-name policies.
mod common;

use cmdseq_core::{CmdSeqError, DuplicatePolicy, Invocation, Registry};
use common::{journal_entries, recording_command, Journal};

#[test]
fn test_scenario_08_default_policy_is_overwrite() {
    assert_eq!(Registry::new().policy(), DuplicatePolicy::Overwrite);
}

#[test]
fn test_scenario_08_overwrite_last_registration_wins() {
    // GIVEN two commands registered under the same name
    let first = Journal::default();
    let second = Journal::default();
    let mut registry = Registry::new();
    registry
        .register(recording_command(&first, "build", 2, false))
        .unwrap();
    registry
        .register(recording_command(&second, "build", 7, true))
        .unwrap();

    // WHEN running it
    Invocation::new(["build"]).run(&registry).unwrap();

    // THEN the second registration is the one that ran
    assert!(journal_entries(&first).is_empty());
    assert_eq!(journal_entries(&second), vec!["build"]);
    assert_eq!(registry.lookup("build").unwrap().priority(), 7);
}

#[test]
fn test_scenario_08_reject_keeps_first_registration() {
    let first = Journal::default();
    let second = Journal::default();
    let mut registry = Registry::with_policy(DuplicatePolicy::Reject);
    registry
        .register(recording_command(&first, "build", 2, false))
        .unwrap();

    let err = registry
        .register(recording_command(&second, "build", 7, true))
        .unwrap_err();
    assert_eq!(
        err,
        CmdSeqError::DuplicateCommand {
            name: "build".to_string()
        }
    );

    Invocation::new(["build"]).run(&registry).unwrap();
    assert_eq!(journal_entries(&first), vec!["build"]);
    assert!(journal_entries(&second).is_empty());
}
