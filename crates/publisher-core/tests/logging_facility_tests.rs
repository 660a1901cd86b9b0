#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{fixture, item_and_latest, multi_edition_answer, sample_guide};
use publisher_core::errors::PublisherError;
use publisher_core::logging_facility::init_test_capture;
use publisher_core::ops::edition_ops;
use publisher_core::publisher_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use publisher_core::{log_op_end, log_op_error, log_op_start, translate};

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_1";

    let err = PublisherError::SlugNotFound {
        slug: "missing".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].field("err_code"), Some("ERR_NOT_FOUND"));
    assert_eq!(events[0].field("err_kind"), Some("NotFound"));
    assert_eq!(events[0].field("duration_ms"), Some("10"));
}

#[test]
fn test_start_and_end_pair() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_2";

    log_op_start!(op_name, content_item_id = "i1");
    log_op_end!(op_name, duration_ms = 42);

    assert_eq!(capture.find(op_name, EVENT_START).len(), 1);
    let end = capture.find(op_name, EVENT_END);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_translate_emits_start_and_end() {
    let capture = init_test_capture();
    let mut fx = fixture();
    let item_id = sample_guide(&mut fx);
    let (item, latest) = item_and_latest(&fx.store, &item_id);

    let _draft = translate(&item, &latest);

    let for_item = |event: &str| {
        capture
            .find("translate_edition", event)
            .into_iter()
            .filter(|e| e.field("content_item_id") == Some(item_id.as_str()))
            .collect::<Vec<_>>()
    };
    assert_eq!(for_item(EVENT_START).len(), 1);
    let end = for_item(EVENT_END);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].field("part_count"), Some("2"));
}

#[test]
fn test_rejected_save_logs_end_error() {
    let capture = init_test_capture();
    let mut fx = fixture();
    let item_id = multi_edition_answer(&mut fx);
    fx.store.get_content_item_mut(&item_id).unwrap().panopticon_id = None;

    let result = edition_ops::create_next_edition(&mut fx.store, &item_id, None);
    assert!(result.is_err());

    let starts = capture
        .find("save_edition", EVENT_START)
        .into_iter()
        .filter(|e| e.field("content_item_id") == Some(item_id.as_str()))
        .count();
    assert_eq!(starts, 1);

    let missing_id_errors = capture.count_events(|e| {
        e.op.as_deref() == Some("save_edition")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err_code") == Some("ERR_MISSING_EXTERNAL_ID")
    });
    assert!(missing_id_errors >= 1);
}

#[test]
fn test_build_next_edition_emits_start_and_end() {
    let capture = init_test_capture();
    let mut fx = fixture();
    let item_id = multi_edition_answer(&mut fx);

    let next = edition_ops::build_next_edition(&fx.store, &item_id, None).unwrap();

    let end: Vec<_> = capture
        .find("build_next_edition", EVENT_END)
        .into_iter()
        .filter(|e| e.field("content_item_id") == Some(item_id.as_str()))
        .collect();
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].field("version_number"), Some(next.version_number.to_string().as_str()));

    let missing = edition_ops::build_next_edition(&fx.store, "no-such-item", None);
    assert!(missing.is_err());
    capture.assert_event_exists("build_next_edition", EVENT_END_ERROR);
}
