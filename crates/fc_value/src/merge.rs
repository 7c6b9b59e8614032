//! Deep merge (`deepExtend`).
//!
//! Sources are applied to the target left to right. For every own key of a
//! source:
//!
//! | source field | target field              | result                          |
//! |--------------|---------------------------|---------------------------------|
//! | Object       | truthy Object             | merge in place, recursively     |
//! | Object       | anything else             | replaced by a clone of source   |
//! | Array        | anything                  | replaced by a clone of source   |
//! | atomic       | anything                  | replaced by the source handle   |
//!
//! Arrays are never merged element-wise. Sources are never modified.
//!
//! # Own Keys
//!
//! An object source contributes its entries. An array source contributes its
//! elements keyed by decimal index, the way the host enumerates them. Atomic
//! sources have no own keys.
//!
//! # Writable Targets
//!
//! Objects accept every key. Arrays accept decimal index keys, growing with
//! `undefined` holes up to the written index, and skip every other key.
//! Atomic targets hold no keys and are left as they are.

use fc_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::classify::{classify_with, Category, HostProfile};
use crate::clone::deep_clone_with;
use crate::value::array_index;
use crate::Value;

/// Largest index a host array can hold (2^32 - 2).
const MAX_ARRAY_INDEX: usize = 4_294_967_294;

/// Merge `sources` into `target` under the standard host profile.
///
/// Returns `target` itself. With no sources the target is untouched.
#[inline]
pub fn deep_extend<'t>(target: &'t mut Value, sources: &[&Value]) -> &'t mut Value {
    deep_extend_with(target, sources, HostProfile::Standard)
}

/// Merge `sources` into `target`, classifying with the given host profile.
#[tracing::instrument(level = "trace", skip_all, fields(sources = sources.len(), ?host))]
pub fn deep_extend_with<'t>(
    target: &'t mut Value,
    sources: &[&Value],
    host: HostProfile,
) -> &'t mut Value {
    for source in sources {
        merge_source(target, source, host);
    }
    target
}

fn merge_source(target: &mut Value, source: &Value, host: HostProfile) {
    ensure_sufficient_stack(|| match source {
        Value::Object(map) => {
            if !accepts_keys(target, map.len()) {
                return;
            }
            for (key, incoming) in map {
                merge_entry(target, key, incoming, host);
            }
        }
        Value::Array(items) => {
            if !accepts_keys(target, items.len()) {
                return;
            }
            for (index, incoming) in items.iter().enumerate() {
                merge_entry(target, &index.to_string(), incoming, host);
            }
        }
        _ => {}
    });
}

fn accepts_keys(target: &Value, incoming: usize) -> bool {
    match target {
        Value::Object(_) | Value::Array(_) => true,
        _ => {
            if incoming > 0 {
                debug!(
                    kind = target.type_name(),
                    keys = incoming,
                    "merge target cannot hold keys; source ignored"
                );
            }
            false
        }
    }
}

fn merge_entry(target: &mut Value, key: &str, incoming: &Value, host: HostProfile) {
    let Some(slot) = slot_mut(target, key) else {
        debug!(key, "array target has no slot for key; skipped");
        return;
    };

    match classify_with(incoming, host) {
        Category::Object => {
            if classify_with(slot, host) == Category::Object && slot.is_truthy() {
                merge_source(slot, incoming, host);
            } else {
                trace!(key, from = slot.type_name(), "replacing field with object clone");
                *slot = deep_clone_with(incoming, host);
            }
        }
        Category::Array => *slot = deep_clone_with(incoming, host),
        Category::String
        | Category::Number
        | Category::Boolean
        | Category::Null
        | Category::Undefined
        | Category::Function
        | Category::RegExp
        | Category::Date
        | Category::Error => *slot = incoming.clone(),
    }
}

/// Field of `target` named `key`, created as `undefined` when missing.
fn slot_mut<'t>(target: &'t mut Value, key: &str) -> Option<&'t mut Value> {
    match target {
        Value::Object(map) => Some(map.entry(key.to_owned()).or_default()),
        Value::Array(items) => {
            let index = array_index(key).filter(|&i| i <= MAX_ARRAY_INDEX)?;
            if index >= items.len() {
                items.resize(index + 1, Value::Undefined);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}
