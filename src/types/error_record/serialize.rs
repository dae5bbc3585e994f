use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::ErrorRecord;

/// Structured form with every field; the cause is serialized recursively and
/// the duration as fractional milliseconds.
impl Serialize for ErrorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = &*self.inner;
        let mut state = serializer.serialize_struct("ErrorRecord", 16)?;
        state.serialize_field("code", &data.code)?;
        state.serialize_field("message", &data.message)?;
        state.serialize_field("timestamp", &data.timestamp)?;
        state.serialize_field("context", &data.context)?;
        state.serialize_field("cause", &data.cause)?;
        state.serialize_field("stack", &data.stack)?;
        state.serialize_field("domain", &data.domain)?;
        state.serialize_field("tags", &data.tags)?;
        state.serialize_field("public_message", &data.public_message)?;
        state.serialize_field("hint", &data.hint)?;
        state.serialize_field("owner", &data.owner)?;
        state.serialize_field("trace_id", &data.trace_id)?;
        state.serialize_field("span_id", &data.span_id)?;
        state.serialize_field(
            "duration_ms",
            &data.duration.map(|d| d.as_secs_f64() * 1000.0),
        )?;
        state.serialize_field("user", &data.user)?;
        state.serialize_field("tenant", &data.tenant)?;
        state.end()
    }
}
