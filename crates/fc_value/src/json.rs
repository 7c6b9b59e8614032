//! Bridge between `Value` and `serde_json::Value`.
//!
//! Decoding is lossless for everything JSON can express. Encoding follows
//! the host's stringify rules:
//!
//! - `undefined` and functions are dropped from objects, become `null` in
//!   arrays, and have no encoding at top level
//! - non-finite numbers become `null`
//! - regular expressions and errors become `{}` (they have no own
//!   enumerable properties)
//! - dates become their millisecond timestamp, or `null` when invalid

use serde_json::{Map as JsonMap, Number};

use crate::{Map, Value};

/// Largest integer a double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

/// Encode a value, or `None` when it has no JSON form at top level.
pub fn to_json(value: &Value) -> Option<serde_json::Value> {
    fc_stack::ensure_sufficient_stack(|| match value {
        Value::Undefined | Value::Function(_) => None,
        Value::Null => Some(serde_json::Value::Null),
        Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
        Value::Number(n) => Some(encode_number(*n)),
        Value::Str(s) => Some(serde_json::Value::String(s.to_string())),
        Value::RegExp(_) | Value::Error(_) => Some(serde_json::Value::Object(JsonMap::new())),
        Value::Date(date) => Some(encode_number(date.millis())),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let entries = keys
                .into_iter()
                .filter_map(|key| to_json(&map[key]).map(|v| (key.clone(), v)))
                .collect::<JsonMap<String, serde_json::Value>>();
            Some(serde_json::Value::Object(entries))
        }
        Value::Array(items) => Some(serde_json::Value::Array(
            items
                .iter()
                .map(|item| to_json(item).unwrap_or(serde_json::Value::Null))
                .collect(),
        )),
    })
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "integral values within the safe range convert exactly"
)]
fn encode_number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0 encodes as 0
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
