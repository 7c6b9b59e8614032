//! JSON text in and out of `Value`.

use fc_value::{classify, to_json, Value};

use crate::UtilError;

/// Decode JSON text.
///
/// Empty input means "nothing", not an error, and yields `Undefined`.
pub fn parse_json(text: &str) -> Result<Value, UtilError> {
    if text.is_empty() {
        return Ok(Value::Undefined);
    }
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}

/// Encode a value as compact JSON text.
pub(crate) fn stringify(value: &Value) -> Result<String, UtilError> {
    let json = to_json(value).ok_or(UtilError::Unencodable {
        category: classify(value),
    })?;
    Ok(serde_json::to_string(&json)?)
}
