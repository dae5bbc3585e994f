use std::error::Error;
use std::thread;

use error_trail::{ErrorBuilder, ErrorCode, ErrorRecord};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn minimal_factory_sets_message_only() {
    let err = ErrorRecord::new("disk full");

    assert_eq!(err.message(), "disk full");
    assert_eq!(err.code(), &ErrorCode::EMPTY);
    assert_eq!(err.code().to_string(), "");
    assert!(err.context().is_empty());
    assert!(err.cause().is_none());
    assert!(err.tags().is_empty());
    assert!(err.domain().is_none());
    assert!(err.render("F").contains("disk full"));
    assert!(err.render("C").contains("disk full"));
}

#[test]
fn minimal_factory_accepts_any_text_verbatim() {
    for text in ["", "plain", "with | pipes", "multi\nline", "ünïcödé", "{\"json\": 1}"] {
        let err = ErrorRecord::new(text);
        assert_eq!(err.message(), text);
        assert!(err.render("FULL").contains(text));
        assert!(err.render("CODE").contains(text));
    }
}

#[test]
fn zero_value_record_has_empty_message() {
    let err = ErrorRecord::default();
    assert_eq!(err.message(), "");
    assert!(err.code().is_empty());
    assert!(err.stack().is_empty());
}

#[test]
fn cause_chain_is_walkable() {
    let root = ErrorRecord::new("socket closed");
    let middle = ErrorBuilder::new().cause(root.clone()).error("query failed");
    let top = ErrorBuilder::with_code("API").cause(middle.clone()).error("request failed");

    let messages: Vec<&str> = top.chain().map(ErrorRecord::message).collect();
    assert_eq!(messages, vec!["request failed", "query failed", "socket closed"]);
    assert_eq!(top.depth(), 2);
    assert!(top.root_cause().ptr_eq(&root));
    assert_eq!(root.depth(), 0);
    assert!(root.root_cause().ptr_eq(&root));
}

#[test]
fn one_cause_can_be_shared_by_several_records() {
    let shared = ErrorRecord::new("config missing");
    let a = ErrorBuilder::new().cause(shared.clone()).error("service a failed");
    let b = ErrorBuilder::new().cause(shared.clone()).error("service b failed");

    assert!(a.cause().unwrap().ptr_eq(b.cause().unwrap()));
}

#[test]
fn source_exposes_the_cause() {
    let root = ErrorRecord::new("root");
    let top = ErrorBuilder::new().cause(root).error("top");

    let source = top.source().expect("cause as source");
    assert_eq!(source.to_string(), "root");
    assert!(source.source().is_none());
}

#[test]
fn equality_is_identity() {
    let a = ErrorRecord::new("same");
    let b = ErrorRecord::new("same");

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert!(a.same_message(&b));
}

#[test]
fn display_prints_message_and_alternate_prints_full_view() {
    let err = ErrorBuilder::with_code("E1").in_domain("db").error("boom");

    assert_eq!(format!("{err}"), "boom");
    assert_eq!(format!("{err:#}"), "[E1] boom | Domain: db");
}

#[test]
fn accessors_expose_every_field() {
    let err = ErrorBuilder::new()
        .public("Something went wrong")
        .hint("retry later")
        .owner("team-storage")
        .trace("trace-1")
        .span("span-9")
        .user_with("u-1", [("plan", "pro")])
        .tenant("t-1")
        .error("internal");

    assert_eq!(err.public_message(), Some("Something went wrong"));
    assert_eq!(err.hint(), Some("retry later"));
    assert_eq!(err.owner(), Some("team-storage"));
    assert_eq!(err.trace_id(), Some("trace-1"));
    assert_eq!(err.span_id(), Some("span-9"));
    assert_eq!(err.user().map(|u| u.id()), Some("u-1"));
    assert_eq!(err.user().unwrap().attributes().get("plan").unwrap().to_string(), "pro");
    assert_eq!(err.tenant().map(|t| t.id()), Some("t-1"));
    assert!(err.tenant().unwrap().attributes().is_empty());
}

#[test]
fn records_are_shareable_across_threads() {
    assert_send_sync::<ErrorRecord>();

    let err = ErrorBuilder::with_code("SHARED").with("n", 1).error("shared");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = err.clone();
            thread::spawn(move || err.render("C"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "[SHARED] shared");
    }
}

#[test]
fn timestamp_is_taken_at_construction() {
    let before = chrono::Utc::now();
    let err = ErrorRecord::new("t");
    let after = chrono::Utc::now();

    assert!(err.timestamp() >= before && err.timestamp() <= after);
}
