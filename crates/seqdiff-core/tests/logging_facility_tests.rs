#![allow(clippy::unwrap_used, clippy::expect_used)]

use seqdiff_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_A_LEN, FIELD_BLOCK_COUNT, FIELD_B_LEN,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_INDEXED, FIELD_PRUNED,
    FIELD_SPAN_COUNT, OP_DIFF_BLOCKS, OP_DIFF_NEW, OP_DIFF_SPANS,
};
use seqdiff_core::errors::DiffError;
use seqdiff_core::logging_facility::test_capture::init_test_capture;
use seqdiff_core::{log_op_end, log_op_error, log_op_start, Diff};

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

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, DiffError::InvalidTag { value: 9 }, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_TAG"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("InvalidTag"));
}

#[test]
fn test_spans_emit_start_and_end() {
    let capture = init_test_capture();
    // Lengths unique to this test so parallel tests do not interfere.
    let a: Vec<u32> = (0..17).collect();
    let b: Vec<u32> = (3..31).collect();

    let spans = Diff::new(&a, &b).spans();

    let starts: Vec<_> = capture
        .events_for(OP_DIFF_SPANS, EVENT_START)
        .into_iter()
        .filter(|e| e.field(FIELD_A_LEN) == Some("17") && e.field(FIELD_B_LEN) == Some("28"))
        .collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(
        starts[0].component(),
        Some("seqdiff_core::engine")
    );

    let span_count = spans.len().to_string();
    let ends = capture.count_events(|e| {
        e.is(OP_DIFF_SPANS, EVENT_END)
            && e.field(FIELD_SPAN_COUNT) == Some(span_count.as_str())
            && e.field(FIELD_DURATION_MS).is_some()
    });
    assert!(ends >= 1);
}

#[test]
fn test_construction_reports_index_stats() {
    let capture = init_test_capture();
    let mut b = vec![0u8; 233];
    b[0] = 1;
    let a = [0u8, 1];

    let _diff = Diff::new(&a, &b);

    let ends: Vec<_> = capture
        .events_for(OP_DIFF_NEW, EVENT_END)
        .into_iter()
        .filter(|e| e.field(FIELD_INDEXED) == Some("1") && e.field(FIELD_PRUNED) == Some("1"))
        .collect();
    assert!(!ends.is_empty(), "index stats missing from diff.new end event");
    assert!(capture
        .events_for(OP_DIFF_NEW, EVENT_START)
        .iter()
        .any(|e| e.field(FIELD_B_LEN) == Some("233")));
}

#[test]
fn test_blocks_emit_block_count() {
    let capture = init_test_capture();
    let a = ["x"; 41];
    let b = ["x"; 41];

    let blocks = Diff::new(&a, &b).blocks();
    assert_eq!(blocks.len(), 1);

    assert!(capture
        .events_for(OP_DIFF_BLOCKS, EVENT_START)
        .iter()
        .any(|e| e.field(FIELD_A_LEN) == Some("41")));
    assert!(capture
        .events_for(OP_DIFF_BLOCKS, EVENT_END)
        .iter()
        .any(|e| e.field(FIELD_BLOCK_COUNT) == Some("1")));
    assert!(capture.events_for(OP_DIFF_BLOCKS, EVENT_END_ERROR).is_empty());
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name, a_len = 1);
    log_op_end!(op_name, duration_ms = 0);

    let count = capture.count_events(|e| e.op() == Some(op_name));
    assert_eq!(count, 2, "Should have exactly one start and one end event");
}
