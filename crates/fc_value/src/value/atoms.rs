//! Atomic payloads: functions, regular expressions, dates, and errors.
//!
//! None of these are traversed by clone or merge. Functions, regular
//! expressions and errors live behind `Heap` and are shared on copy; dates
//! are plain timestamps copied by value.

use std::fmt;

use super::Value;

/// Native callable signature.
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Callable value.
///
/// Equality between function values is identity of the `Heap` handle, not
/// anything about the closure, so this type has no `PartialEq`.
pub struct FunctionValue {
    name: Option<String>,
    body: Box<NativeFn>,
}

impl FunctionValue {
    pub fn new(
        name: Option<String>,
        body: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        FunctionValue {
            name,
            body: Box::new(body),
        }
    }

    /// Declared name, if the function was named.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "FunctionValue({name})"),
            None => write!(f, "FunctionValue(<anonymous>)"),
        }
    }
}

/// Regular expression literal: pattern source plus flags.
///
/// Matching is out of scope; the engine only carries the literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegExpValue {
    pub source: String,
    pub flags: String,
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Point in time as milliseconds since the Unix epoch.
///
/// `NaN` is an invalid date, as in the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateValue {
    millis: f64,
}

impl DateValue {
    #[inline]
    pub fn from_millis(millis: f64) -> Self {
        DateValue { millis }
    }

    #[inline]
    pub fn millis(self) -> f64 {
        self.millis
    }

    /// False for dates built from a non-finite timestamp.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.millis.is_finite()
    }
}

/// Native error object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    name: String,
    message: String,
    stack: Option<String>,
}

impl ErrorValue {
    /// Create an `Error` with the given message and no stack.
    pub fn new(message: impl Into<String>) -> Self {
        ErrorValue {
            name: "Error".to_string(),
            message: message.into(),
            stack: None,
        }
    }

    /// Replace the error name (`TypeError`, `RangeError`, ...).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a captured stack trace.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

#[cfg(test)]
mod tests;
