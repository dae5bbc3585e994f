use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::types::ErrorRecord;

/// Builds the JSON view. Optional keys are omitted when empty; the cause is
/// its message only.
pub(crate) fn to_json(record: &ErrorRecord) -> Value {
    let mut object = Map::new();
    object.insert("code".into(), Value::String(record.code().to_string()));
    object.insert("message".into(), Value::String(record.message().to_owned()));
    object.insert(
        "timestamp".into(),
        Value::String(record.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    if let Some(domain) = record.domain() {
        object.insert("domain".into(), Value::String(domain.to_owned()));
    }
    if !record.tags().is_empty() {
        object.insert(
            "tags".into(),
            Value::Array(record.tags().iter().cloned().map(Value::String).collect()),
        );
    }
    if !record.context().is_empty() {
        object.insert("context".into(), Value::Object(record.context().to_json()));
    }
    if let Some(cause) = record.cause() {
        object.insert("cause".into(), Value::String(cause.message().to_owned()));
    }
    Value::Object(object)
}
