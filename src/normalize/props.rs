//! Loose access to GeoJSON `properties` values.

use serde_json::{Map, Value};

/// Whether a JSON value counts as "set": not null/false/zero/empty
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a property value as display text; strings are taken verbatim
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `properties` of a feature, or nothing when absent or not an object
pub(crate) fn properties(feature: &Value) -> Option<&Map<String, Value>> {
    feature.get("properties").and_then(Value::as_object)
}

/// First truthy value among `keys`, stringified
pub(crate) fn first_set(props: Option<&Map<String, Value>>, keys: &[&str]) -> Option<String> {
    let props = props?;
    keys.iter()
        .filter_map(|key| props.get(*key))
        .find(|value| is_truthy(value))
        .map(stringify)
}
