use super::*;
use crate::ErrorValue;

fn samples() -> Vec<(Value, Category)> {
    vec![
        (Value::string("s"), Category::String),
        (Value::number(1), Category::Number),
        (Value::Bool(false), Category::Boolean),
        (Value::Null, Category::Null),
        (Value::Undefined, Category::Undefined),
        (Value::function("f", |_| Value::Null), Category::Function),
        (Value::regexp("x", ""), Category::RegExp),
        (Value::date(0.0), Category::Date),
        (Value::error(ErrorValue::new("e")), Category::Error),
        (Value::empty_object(), Category::Object),
        (Value::array(vec![]), Category::Array),
    ]
}

#[test]
fn test_classify_every_variant() {
    for (value, expected) in samples() {
        assert_eq!(classify(&value), expected, "classifying {value}");
    }
}

#[test]
fn test_atomic_table() {
    let composite: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| c.is_composite())
        .collect();
    assert_eq!(composite, vec![Category::Object, Category::Array]);
    assert!(Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Object && *c != Category::Array)
        .all(Category::is_atomic));
}

#[test]
fn test_tags_and_names() {
    assert_eq!(Category::Array.tag(), "[object Array]");
    assert_eq!(Category::RegExp.name(), "RegExp");
    assert_eq!(Category::Undefined.to_string(), "Undefined");
    for category in Category::ALL {
        assert_eq!(category.tag(), format!("[object {}]", category.name()));
    }
}

#[test]
fn test_legacy_host_folds_nullish_into_object() {
    assert_eq!(classify_with(&Value::Null, HostProfile::Legacy), Category::Object);
    assert_eq!(
        classify_with(&Value::Undefined, HostProfile::Legacy),
        Category::Object
    );
    assert_eq!(
        classify_with(&Value::number(0), HostProfile::Legacy),
        Category::Number
    );
    assert_eq!(
        classify_with(&Value::array(vec![]), HostProfile::Legacy),
        Category::Array
    );
}

#[test]
fn test_host_profile_from_str() {
    assert_eq!("legacy".parse::<HostProfile>(), Ok(HostProfile::Legacy));
    assert_eq!(" Standard ".parse::<HostProfile>(), Ok(HostProfile::Standard));
    assert!("ie6".parse::<HostProfile>().is_err());
}

#[test]
fn test_host_profile_serde_names() {
    let json = serde_json::to_string(&HostProfile::Legacy).unwrap_or_default();
    assert_eq!(json, "\"legacy\"");
}
