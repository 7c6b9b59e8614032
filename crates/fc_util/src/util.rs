//! The `util` namespace.
//!
//! ```text
//! use fc_util::util;
//!
//! util::classify(&value);          // Category::Object
//! util::clone(&value);             // deep copy
//! util::deep_extend(&mut a, &[&b]);
//! util::guid();                    // "4b534c46-...."
//! ```

use fc_value::Value;

pub use crate::{mix_with, parse_json, process_error};
pub use fc_ident::{guid, uid};
pub use fc_value::{classify, deep_clone as clone, deep_extend, Category};

/// Version of this namespace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wrap a payload for a custom event: `{ data: value }`.
pub fn custom_data(data: Value) -> Value {
    Value::object([("data", data)])
}

#[cfg(test)]
mod tests;
