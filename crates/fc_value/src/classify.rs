//! Type classification.
//!
//! Every value maps to exactly one `Category`. The category decides how the
//! cloner and merger treat it: atomic categories are copied as handles,
//! composite categories are traversed.
//!
//! # Legacy Hosts
//!
//! Some legacy hosts report `null` and `undefined` with the same type tag as
//! a plain object. `HostProfile::Legacy` reproduces that so callers feeding
//! data captured from such hosts get identical merge results. Clone and merge
//! cope with it by treating a falsy Object-classified value as absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Value;

/// Closed set of value categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Function,
    RegExp,
    Date,
    Error,
    Object,
    Array,
}

/// Atomic flag per category, indexed by discriminant.
const ATOMIC: [bool; Category::COUNT] = [
    true,  // String
    true,  // Number
    true,  // Boolean
    true,  // Null
    true,  // Undefined
    true,  // Function
    true,  // RegExp
    true,  // Date
    true,  // Error
    false, // Object
    false, // Array
];

/// Host type tag per category, indexed by discriminant.
const TAGS: [&str; Category::COUNT] = [
    "[object String]",
    "[object Number]",
    "[object Boolean]",
    "[object Null]",
    "[object Undefined]",
    "[object Function]",
    "[object RegExp]",
    "[object Date]",
    "[object Error]",
    "[object Object]",
    "[object Array]",
];

impl Category {
    pub const COUNT: usize = 11;

    pub const ALL: [Category; Category::COUNT] = [
        Category::String,
        Category::Number,
        Category::Boolean,
        Category::Null,
        Category::Undefined,
        Category::Function,
        Category::RegExp,
        Category::Date,
        Category::Error,
        Category::Object,
        Category::Array,
    ];

    /// Indivisible to clone and merge.
    #[inline]
    pub fn is_atomic(self) -> bool {
        ATOMIC[self as usize]
    }

    /// Traversed by clone and merge.
    #[inline]
    pub fn is_composite(self) -> bool {
        !self.is_atomic()
    }

    /// Host type tag, e.g. `[object Array]`.
    #[inline]
    pub fn tag(self) -> &'static str {
        TAGS[self as usize]
    }

    /// Bare category name, e.g. `Array`.
    pub fn name(self) -> &'static str {
        let tag = self.tag();
        &tag["[object ".len()..tag.len() - 1]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which host's classification boundaries to reproduce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostProfile {
    /// `null` and `undefined` have their own categories.
    #[default]
    Standard,
    /// `null` and `undefined` classify as `Object`.
    Legacy,
}

impl FromStr for HostProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(HostProfile::Standard),
            "legacy" => Ok(HostProfile::Legacy),
            other => Err(format!("unknown host profile: {other}")),
        }
    }
}

/// Classify a value under the standard host profile.
#[inline]
pub fn classify(value: &Value) -> Category {
    classify_with(value, HostProfile::Standard)
}

/// Classify a value under the given host profile.
pub fn classify_with(value: &Value, host: HostProfile) -> Category {
    match value {
        Value::Null | Value::Undefined if host == HostProfile::Legacy => Category::Object,
        Value::Null => Category::Null,
        Value::Undefined => Category::Undefined,
        Value::Bool(_) => Category::Boolean,
        Value::Number(_) => Category::Number,
        Value::Str(_) => Category::String,
        Value::Function(_) => Category::Function,
        Value::RegExp(_) => Category::RegExp,
        Value::Date(_) => Category::Date,
        Value::Error(_) => Category::Error,
        Value::Object(_) => Category::Object,
        Value::Array(_) => Category::Array,
    }
}

#[cfg(test)]
mod tests;
