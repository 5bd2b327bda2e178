#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cmdseq_core::errors::CmdSeqError;
use cmdseq_core::logging_facility::test_capture::init_test_capture;
use cmdseq_core::{
    execute_with_context, log_op_end, log_op_error, log_op_start, resolve, Invocation,
};
use cmdseq_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMMAND, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_REQUEST_ID, OP_EXECUTE, OP_RUN_ACTION,
};
use cmdseq_core_types::RequestContext;
use common::reference_registry;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CmdSeqError::UnknownCommand {
        name: "nope".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_UNKNOWN_COMMAND"));
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, command = "build", priority = 2_i64);

    let events = capture.events();
    let start_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have start event");

    assert_eq!(start_event.field("command"), Some("build"));
    assert_eq!(start_event.field("priority"), Some("2"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_invocation_logs_one_boundary_pair_and_each_action() {
    let capture = init_test_capture();
    let (registry, _journal) = reference_registry();

    let mut inv = Invocation::new(["build", "test"]);
    inv.run(&registry).unwrap();
    let request_id = inv.request_id().to_string();

    let mine = |op: &str, event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some(op)
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_REQUEST_ID) == Some(request_id.as_str())
        })
    };

    assert_eq!(mine(OP_EXECUTE, EVENT_START), 1);
    assert_eq!(mine(OP_EXECUTE, EVENT_END), 1);
    assert_eq!(mine(OP_RUN_ACTION, EVENT_START), 2);
    assert_eq!(mine(OP_RUN_ACTION, EVENT_END), 2);

    let action_order: Vec<String> = capture
        .events()
        .iter()
        .filter(|e| {
            e.op.as_deref() == Some(OP_RUN_ACTION)
                && e.event.as_deref() == Some(EVENT_END)
                && e.field(FIELD_REQUEST_ID) == Some(request_id.as_str())
        })
        .filter_map(|e| e.field(FIELD_COMMAND).map(str::to_string))
        .collect();
    assert_eq!(action_order, vec!["build", "test"]);
}

#[test]
fn test_failed_invocation_logs_error_code() {
    let capture = init_test_capture();
    let (registry, _journal) = reference_registry();

    let mut inv = Invocation::new(["deploy", "build"]);
    assert!(inv.run(&registry).is_err());
    let request_id = inv.request_id().to_string();

    let error_event = capture
        .events()
        .into_iter()
        .find(|e| {
            e.op.as_deref() == Some(OP_EXECUTE)
                && e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.field(FIELD_REQUEST_ID) == Some(request_id.as_str())
        })
        .expect("Should have execute error event");

    assert_eq!(
        error_event.field(FIELD_ERR_CODE),
        Some("ERR_INDEPENDENCE_CONFLICT")
    );

    let failed_from = capture
        .events()
        .into_iter()
        .find(|e| {
            e.field(FIELD_REQUEST_ID) == Some(request_id.as_str()) && e.field("to") == Some("failed")
        })
        .and_then(|e| e.field("from").map(str::to_string));
    assert_eq!(failed_from.as_deref(), Some("validating"));
}

#[test]
fn test_error_event_uses_schema_field_keys() {
    let capture = init_test_capture();
    let op_name = "test_error_schema_keys_unique_5";

    log_op_error!(op_name, CmdSeqError::EmptyCommandSet, duration_ms = 7);

    let error_event = capture
        .events()
        .into_iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");

    assert_eq!(error_event.field(FIELD_DURATION_MS), Some("7"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("EmptyCommandSet"));
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_EMPTY_COMMAND_SET"));
}

#[test]
fn test_execute_and_invocation_log_identical_boundaries() {
    let capture = init_test_capture();
    let (registry, _journal) = reference_registry();

    let ctx = RequestContext::new();
    let commands = resolve(&registry, &["build", "test"]).unwrap();
    execute_with_context(&commands, &ctx).unwrap();

    let mut inv = Invocation::new(["build", "test"]);
    inv.run(&registry).unwrap();

    let boundary_keys = |request_id: &str, event: &str| {
        let found = capture
            .events()
            .into_iter()
            .find(|e| {
                e.op.as_deref() == Some(OP_EXECUTE)
                    && e.event.as_deref() == Some(event)
                    && e.field(FIELD_REQUEST_ID) == Some(request_id)
            })
            .expect("Should have execute boundary event");
        let mut keys: Vec<String> = found.fields.keys().cloned().collect();
        keys.sort();
        keys
    };

    let direct_id = ctx.request_id.to_string();
    let inv_id = inv.request_id().to_string();
    for event in [EVENT_START, EVENT_END] {
        assert_eq!(
            boundary_keys(&direct_id, event),
            boundary_keys(&inv_id, event)
        );
    }
}
