/// Scenario 6: Empty Command Set
mod common;

use cmdseq_core::{execute, CmdSeqError, ExecutionState, Invocation};
use common::reference_registry;

#[test]
fn test_scenario_06_empty_request_fails() {
    let (registry, _journal) = reference_registry();

    let mut inv = Invocation::new(Vec::<String>::new());
    let err = inv.run(&registry).unwrap_err();

    assert_eq!(err, CmdSeqError::EmptyCommandSet);
    assert_eq!(inv.state(), ExecutionState::Failed);
}

#[test]
fn test_scenario_06_execute_empty_slice_fails() {
    assert_eq!(execute(&[]).unwrap_err(), CmdSeqError::EmptyCommandSet);
}
