//! Shared helpers for unit tests.

use crate::Value;

/// Drop a value tree without recursing once per nesting level.
pub(crate) fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_values()),
            _ => {}
        }
    }
}

/// Object literal shorthand for tests.
pub(crate) fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::object(entries)
}

/// Number shorthand for tests.
pub(crate) fn num(n: i32) -> Value {
    Value::from(n)
}
