//! Untyped runtime values.
//!
//! # Heap Enforcement
//!
//! Atomic payloads that the host passes by reference (strings, functions,
//! regular expressions, errors) are stored in `Heap<T>`, whose constructor is
//! private to this module. All such values are built through `Value::`
//! factory methods:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let f = Value::function("id", |args| ...);       // OK
//! let s = Value::Str(Heap::new(...));              // ERROR: Heap::new is pub(super)
//! ```
//!
//! Copying a `Value` therefore never copies an atomic payload, only its
//! handle. `Object` and `Array` are owned containers: a value tree cannot
//! refer back to one of its own ancestors.
//!
//! # Nesting Depth
//!
//! Equality and `Display` grow the stack as they recurse. `Drop` does not:
//! the derived drop glue recurses once per level, so a tree nested deeper
//! than the thread stack allows must be taken apart iteratively before it
//! is dropped.

mod atoms;
mod heap;

use std::fmt;

use fc_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

pub use atoms::{DateValue, ErrorValue, FunctionValue, NativeFn, RegExpValue};
pub use heap::Heap;

/// Own keys of an object, mapped to their values.
///
/// Key order carries no meaning.
pub type Map = FxHashMap<String, Value>;

/// Runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    // Primitives
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Double-precision number.
    Number(f64),

    // Atomic heap types (shared on copy)
    /// String.
    Str(Heap<String>),
    /// Callable.
    Function(Heap<FunctionValue>),
    /// Regular expression literal.
    RegExp(Heap<RegExpValue>),
    /// Native error.
    Error(Heap<ErrorValue>),
    /// Date, copied by value.
    Date(DateValue),

    // Composites
    /// String-keyed mapping of own properties.
    Object(Map),
    /// Ordered, 0-indexed sequence.
    Array(Vec<Value>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a named function value.
    pub fn function(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Value::Function(Heap::new(FunctionValue::new(Some(name.into()), body)))
    }

    /// Create an anonymous function value.
    pub fn anonymous_function(body: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Value::Function(Heap::new(FunctionValue::new(None, body)))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Heap::new(RegExpValue {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    #[inline]
    pub fn date(millis: f64) -> Self {
        Value::Date(DateValue::from_millis(millis))
    }

    pub fn error(error: ErrorValue) -> Self {
        Value::Error(Heap::new(error))
    }

    /// Create an object from key/value pairs.
    ///
    /// ```text
    /// let point = Value::object([("x", Value::number(1)), ("y", Value::number(2))]);
    /// ```
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[inline]
    pub fn empty_object() -> Self {
        Value::Object(Map::default())
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

// Value Methods

impl Value {
    /// Host truthiness.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and `""` are falsy.
    /// Every object, array, function, regular expression, date and error is
    /// truthy, including empty containers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Function(_)
            | Value::RegExp(_)
            | Value::Error(_)
            | Value::Date(_)
            | Value::Object(_)
            | Value::Array(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Look up an own property: an object key, or a decimal array index.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => array_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Follow a dotted path (`"a.b.0"`) through nested own properties.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self, |current, segment| current.get(segment))
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::RegExp(_) => "regexp",
            Value::Error(_) => "error",
            Value::Date(_) => "date",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }
}

/// Parse a canonical decimal array index (`"0"`, `"12"`; not `"01"` or `"+1"`).
pub(crate) fn array_index(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Format a number the way the host prints it.
pub(crate) fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else if n == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else {
        write!(f, "{n}")
    }
}

// Trait Implementations

impl PartialEq for Value {
    /// Structural equality.
    ///
    /// Numbers compare with `NaN` equal to itself. Functions compare by
    /// identity; every other atomic compares by content.
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => {
                a.millis() == b.millis() || (!a.is_valid() && !b.is_valid())
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        })
    }
}

impl fmt::Display for Value {
    /// JSON-like rendering with object keys sorted for stable output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Function(func) => match func.name() {
                Some(name) => write!(f, "<function {name}>"),
                None => write!(f, "<function>"),
            },
            Value::RegExp(re) => write!(f, "{re}"),
            Value::Error(err) => write!(f, "{err}"),
            Value::Date(date) => {
                write!(f, "Date(")?;
                format_number(date.millis(), f)?;
                write!(f, ")")
            }
            Value::Object(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {}", map[key])?;
                }
                write!(f, "}}")
            }
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        })
    }
}

#[cfg(test)]
mod tests;
