use super::*;

#[test]
fn test_function_call_and_name() {
    let double = FunctionValue::new(Some("double".into()), |args| match args.first() {
        Some(Value::Number(n)) => Value::Number(n * 2.0),
        _ => Value::Undefined,
    });
    assert_eq!(double.name(), Some("double"));
    assert_eq!(double.call(&[Value::Number(21.0)]), Value::Number(42.0));
    assert_eq!(double.call(&[]), Value::Undefined);
    assert_eq!(format!("{double:?}"), "FunctionValue(double)");
}

#[test]
fn test_anonymous_function_debug() {
    let f = FunctionValue::new(None, |_| Value::Null);
    assert_eq!(f.name(), None);
    assert_eq!(format!("{f:?}"), "FunctionValue(<anonymous>)");
}

#[test]
fn test_regexp_display() {
    let re = RegExpValue {
        source: "^a+$".into(),
        flags: "gi".into(),
    };
    assert_eq!(re.to_string(), "/^a+$/gi");
}

#[test]
fn test_date_validity() {
    assert!(DateValue::from_millis(0.0).is_valid());
    assert!(!DateValue::from_millis(f64::NAN).is_valid());
    assert!((DateValue::from_millis(1_500.0).millis() - 1_500.0).abs() < f64::EPSILON);
}

#[test]
fn test_error_value_builders() {
    let err = ErrorValue::new("bad input")
        .with_name("TypeError")
        .with_stack("TypeError: bad input\n    at check");
    assert_eq!(err.name(), "TypeError");
    assert_eq!(err.message(), "bad input");
    assert_eq!(err.stack(), Some("TypeError: bad input\n    at check"));
    assert_eq!(err.to_string(), "TypeError: bad input");
    assert_eq!(ErrorValue::new("").to_string(), "Error");
}
