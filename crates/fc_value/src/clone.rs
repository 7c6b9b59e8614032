//! Deep clone.
//!
//! Atomic values come back as the same handle. Objects and arrays are rebuilt
//! container by container, so the result shares no composite structure with
//! the input. Every level runs under `ensure_sufficient_stack`, so cloning
//! itself never overflows the stack. Dropping the result still recurses per
//! level.

use fc_stack::ensure_sufficient_stack;

use crate::classify::{classify_with, Category, HostProfile};
use crate::Value;

/// Deep clone under the standard host profile.
#[inline]
pub fn deep_clone(value: &Value) -> Value {
    deep_clone_with(value, HostProfile::Standard)
}

/// Deep clone, classifying with the given host profile.
pub fn deep_clone_with(value: &Value, host: HostProfile) -> Value {
    ensure_sufficient_stack(|| match classify_with(value, host) {
        Category::Object => clone_object(value, host),
        Category::Array => clone_array(value, host),
        Category::String
        | Category::Number
        | Category::Boolean
        | Category::Null
        | Category::Undefined
        | Category::Function
        | Category::RegExp
        | Category::Date
        | Category::Error => value.clone(),
    })
}

fn clone_object(value: &Value, host: HostProfile) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, field)| (key.clone(), deep_clone_with(field, host)))
                .collect(),
        ),
        // Falsy Object-classified value (legacy null/undefined): nothing to traverse.
        other => other.clone(),
    }
}

fn clone_array(value: &Value, host: HostProfile) -> Value {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            out.extend(items.iter().map(|item| deep_clone_with(item, host)));
            Value::Array(out)
        }
        other => other.clone(),
    }
}
