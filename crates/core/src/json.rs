//! JSON payload helpers.
//!
//! Props and table cells are plain `serde_json` values. The workspace
//! enables `preserve_order`, so objects keep their insertion order and the
//! compact text form is stable for equal values.

use serde_json::{Map, Number, Value};

/// Ordered string-keyed JSON object.
pub type JsonObject = Map<String, Value>;

/// Ordered JSON array.
pub type JsonArray = Vec<Value>;

/// Builds a JSON number from a double.
///
/// JSON has no NaN or infinity, so non-finite values become `null`.
pub fn number(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Collects key/value pairs into an object, keeping their order.
pub fn object<I, K, V>(entries: I) -> JsonObject
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Compact text form of a value.
pub fn to_canonical_string(value: &Value) -> String {
    value.to_string()
}
