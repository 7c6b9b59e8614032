use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_truthy() {
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::number(0).is_truthy());
    assert!(!Value::Number(-0.0).is_truthy());
    assert!(!Value::Number(f64::NAN).is_truthy());
    assert!(!Value::string("").is_truthy());

    assert!(Value::number(1).is_truthy());
    assert!(Value::string("0").is_truthy());
    assert!(Value::empty_object().is_truthy());
    assert!(Value::array(vec![]).is_truthy());
    assert!(Value::date(0.0).is_truthy());
    assert!(Value::anonymous_function(|_| Value::Undefined).is_truthy());
}

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::array(vec![Value::number(1), Value::number(2)]);
    assert_eq!(list.as_array().map(<[Value]>::len), Some(2));

    let obj = Value::object([("a", Value::number(1))]);
    assert_eq!(obj.get("a"), Some(&Value::number(1)));
    assert_eq!(obj.get("b"), None);

    let err = Value::error(ErrorValue::new("boom"));
    assert_eq!(err.as_error().map(ErrorValue::message), Some("boom"));
}

#[test]
fn test_get_array_index() {
    let list = Value::array(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(list.get("1"), Some(&Value::from("b")));
    assert_eq!(list.get("2"), None);
    assert_eq!(list.get("01"), None);
    assert_eq!(list.get("-1"), None);
    assert_eq!(list.get("length"), None);
}

#[test]
fn test_pointer_walks_nested_properties() {
    let doc = Value::object([(
        "a",
        Value::object([("b", Value::array(vec![Value::from(10), Value::from(20)]))]),
    )]);
    assert_eq!(doc.pointer("a.b.1"), Some(&Value::from(20)));
    assert_eq!(doc.pointer("a.c"), None);
    assert_eq!(doc.pointer("a.b.1.x"), None);
}

#[test]
fn test_array_index_parsing() {
    assert_eq!(array_index("0"), Some(0));
    assert_eq!(array_index("42"), Some(42));
    assert_eq!(array_index("042"), None);
    assert_eq!(array_index("+1"), None);
    assert_eq!(array_index(""), None);
    assert_eq!(array_index("1.5"), None);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::number(42).to_string(), "42");
    assert_eq!(Value::Number(1.5).to_string(), "1.5");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::regexp("a.b", "g").to_string(), "/a.b/g");
    assert_eq!(Value::function("run", |_| Value::Null).to_string(), "<function run>");
    assert_eq!(
        Value::object([("b", Value::number(2)), ("a", Value::Null)]).to_string(),
        "{\"a\": null, \"b\": 2}"
    );
    assert_eq!(
        Value::array(vec![Value::Bool(true), Value::Undefined]).to_string(),
        "[true, undefined]"
    );
}

#[test]
fn test_value_equality() {
    assert_eq!(Value::number(1), Value::number(1));
    assert_ne!(Value::number(1), Value::string("1"));
    assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_ne!(Value::Null, Value::Undefined);
    assert_eq!(Value::date(f64::NAN), Value::date(f64::INFINITY));

    let left = Value::object([("x", Value::array(vec![Value::number(1)]))]);
    let right = Value::object([("x", Value::array(vec![Value::number(1)]))]);
    assert_eq!(left, right);
}

#[test]
fn test_function_equality_is_identity() {
    let f = Value::function("f", |_| Value::Null);
    let same = f.clone();
    let other = Value::function("f", |_| Value::Null);
    assert_eq!(f, same);
    assert_ne!(f, other);
}

#[test]
fn test_copy_shares_atomic_payload() {
    let s = Value::string("shared");
    let copy = s.clone();
    match (&s, &copy) {
        (Value::Str(a), Value::Str(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn test_deep_equality_and_display() {
    fn chain(depth: usize) -> Value {
        let mut value = Value::Null;
        for _ in 0..depth {
            value = Value::array(vec![value]);
        }
        value
    }

    let left = chain(100_000);
    let right = chain(100_000);
    assert!(left == right);
    assert_eq!(left.to_string().len(), 100_000 * 2 + "null".len());
    crate::testing::dismantle(left);
    crate::testing::dismantle(right);
}
