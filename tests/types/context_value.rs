use error_trail::{ContextMap, ContextValue};
use serde_json::json;

#[test]
fn insert_is_last_write_wins_and_keeps_position() {
    let mut map = ContextMap::new();
    map.insert("a", 1);
    map.insert("b", "two");
    let previous = map.insert("a", 3);

    assert_eq!(previous, Some(ContextValue::Integer(1)));
    assert_eq!(map.len(), 2);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&ContextValue::Integer(3)));
    assert_eq!(map.to_string(), "a=3, b=two");
}

#[test]
fn conversions_pick_the_closed_kinds() {
    assert_eq!(ContextValue::from("x"), ContextValue::Text("x".into()));
    assert_eq!(ContextValue::from(true), ContextValue::Bool(true));
    assert_eq!(ContextValue::from(7u8), ContextValue::Integer(7));
    assert_eq!(ContextValue::from(1.5), ContextValue::Float(1.5));
    assert_eq!(ContextValue::from(None::<i32>), ContextValue::Null);
    assert_eq!(ContextValue::from(Some("y")), ContextValue::Text("y".into()));
    assert_eq!(ContextValue::from(u64::MAX), ContextValue::Opaque(u64::MAX.to_string()));
    assert_eq!(ContextValue::from(5usize), ContextValue::Integer(5));
}

#[test]
fn opaque_values_use_display() {
    let addr: std::net::Ipv4Addr = "10.0.0.1".parse().unwrap();
    let value = ContextValue::opaque(addr);
    assert_eq!(value.to_string(), "10.0.0.1");
    assert_eq!(value.to_json(), json!("10.0.0.1"));
}

#[test]
fn nested_maps_render_and_convert() {
    let inner: ContextMap = [("id", 1)].into_iter().collect();
    let mut outer = ContextMap::new();
    outer.insert("user", inner);
    outer.insert("ok", false);

    assert_eq!(outer.to_string(), "user={id=1}, ok=false");
    assert_eq!(
        serde_json::Value::Object(outer.to_json()),
        json!({ "user": { "id": 1 }, "ok": false })
    );
}

#[test]
fn non_finite_floats_become_json_null() {
    assert_eq!(ContextValue::Float(f64::NAN).to_json(), serde_json::Value::Null);
    assert_eq!(ContextValue::Float(2.5).to_json(), json!(2.5));
}

#[test]
fn timestamps_render_as_iso_8601() {
    let ts = chrono::DateTime::parse_from_rfc3339("2024-03-01T10:20:30.456Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let value = ContextValue::from(ts);
    assert_eq!(value.to_string(), "2024-03-01T10:20:30.456Z");
    assert_eq!(value.to_json(), json!("2024-03-01T10:20:30.456Z"));
}
