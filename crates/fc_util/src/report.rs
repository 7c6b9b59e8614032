//! Error reporting sink.
//!
//! Callers hand over whatever they caught: a native error, a wrapper holding
//! one, a batch, an error event, or anything else. [`process_error`] flattens
//! that into [`Report`]s, in this order of precedence:
//!
//! 1. an `Error` value reports its name, message and stack
//! 2. a value whose `error` field is an `Error` or an array is unwrapped
//! 3. an array reports each element
//! 4. an object with `type: "error"` reports `error.failType` and
//!    `error.reason`
//! 5. anything else is reported by its display text

use fc_value::Value;

/// One reportable failure.
#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    Native {
        name: String,
        message: String,
        stack: Option<String>,
    },
    Event {
        fail_type: Value,
        reason: Value,
    },
    Opaque(String),
}

/// Destination for reports.
pub trait ErrorSink {
    fn report(&mut self, report: Report);
}

impl ErrorSink for Vec<Report> {
    fn report(&mut self, report: Report) {
        self.push(report);
    }
}

/// Emits every report as a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&mut self, report: Report) {
        match report {
            Report::Native {
                name,
                message,
                stack,
            } => tracing::error!(%name, %message, stack = stack.as_deref(), "uncaught error"),
            Report::Event { fail_type, reason } => {
                tracing::error!(%fail_type, %reason, "error event");
            }
            Report::Opaque(text) => tracing::error!("{text}"),
        }
    }
}

/// Flatten an error-like value into `sink`.
pub fn process_error(error: &Value, sink: &mut dyn ErrorSink) {
    fc_stack::ensure_sufficient_stack(|| {
        if let Value::Error(native) = error {
            sink.report(Report::Native {
                name: native.name().to_string(),
                message: native.message().to_string(),
                stack: native.stack().map(str::to_string),
            });
            return;
        }

        if let Some(inner @ (Value::Error(_) | Value::Array(_))) = wrapped(error) {
            process_error(inner, sink);
            return;
        }

        if let Value::Array(items) = error {
            for item in items {
                process_error(item, sink);
            }
            return;
        }

        if is_error_event(error) {
            let field = |name: &str| {
                error
                    .get("error")
                    .and_then(|detail| detail.get(name))
                    .cloned()
                    .unwrap_or_default()
            };
            sink.report(Report::Event {
                fail_type: field("failType"),
                reason: field("reason"),
            });
            return;
        }

        let text = match error {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        };
        sink.report(Report::Opaque(text));
    });
}

/// [`process_error`] into a [`TracingSink`].
pub fn report_error(error: &Value) {
    process_error(error, &mut TracingSink);
}

fn wrapped(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => map.get("error"),
        _ => None,
    }
}

fn is_error_event(value: &Value) -> bool {
    matches!(value, Value::Object(_))
        && value.get("type").and_then(Value::as_str) == Some("error")
}
