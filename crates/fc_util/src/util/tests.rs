use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_custom_data_wraps_payload() {
    let payload = Value::object([("id", Value::number(1))]);
    assert_eq!(
        custom_data(payload.clone()),
        Value::object([("data", payload)])
    );
    assert_eq!(
        custom_data(Value::Undefined).get("data"),
        Some(&Value::Undefined)
    );
}

#[test]
fn test_version_is_set() {
    assert!(!VERSION.is_empty());
    assert_eq!(VERSION.split('.').count(), 3);
}

#[test]
fn test_namespace_round_trip() {
    let mut conf = parse_json(r#"{"retry": {"count": 1}, "hosts": ["a"]}"#).unwrap_or_default();
    assert_eq!(classify(&conf), Category::Object);

    let defaults = clone(&conf);
    let overrides = parse_json(r#"{"retry": {"delay": 50}, "hosts": ["b", "c"]}"#)
        .unwrap_or_default();
    deep_extend(&mut conf, &[&overrides]);

    assert_eq!(
        conf,
        parse_json(r#"{"retry": {"count": 1, "delay": 50}, "hosts": ["b", "c"]}"#)
            .unwrap_or_default()
    );
    assert_eq!(defaults.pointer("retry.delay"), None);
}

#[test]
fn test_namespace_identifiers() {
    assert!(fc_ident::is_guid(&guid()));
    assert!(uid().len() >= 17);
}
