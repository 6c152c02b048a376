//! Failure message resolution for non-success responses.

use common::HttpStatusCode;

use serde_json::{Map, Value};

/// Resolve the message for a failed response.
///
/// The body is parsed as JSON; anything that is not a JSON object counts as
/// an empty object. The first of `fields` holding a usable value wins:
/// non-empty strings are taken verbatim, other values (FastAPI's validation
/// `detail` array, for one) are rendered as compact JSON. `null`, `false`,
/// `0` and `""` count as absent. With no usable field the message is derived
/// from the status code.
pub fn resolve_error_message(
    body: &str,
    fields: &[&str],
    status: HttpStatusCode,
    reason: Option<&str>,
) -> String {
    let object = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    fields
        .iter()
        .find_map(|field| field_message(object.get(*field)?))
        .unwrap_or_else(|| status.describe(reason))
}

fn field_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
