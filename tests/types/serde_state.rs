use option_rail::chain;
use serde_json::json;

struct Outer {
    a: u32,
    b: Option<String>,
}

#[test]
fn present_proxy_serializes_value_and_flag() {
    let outer = Outer {
        a: 1,
        b: Some("test".into()),
    };
    let a = chain(&outer).attr(|o| &o.a);

    let serialized = serde_json::to_value(a).unwrap();
    assert_eq!(serialized, json!({ "value": 1, "present": true }));
}

#[test]
fn absent_proxy_serializes_null_value() {
    let outer = Outer { a: 1, b: None };
    let b = chain(&outer).try_attr(|o| o.b.as_ref());

    let serialized = serde_json::to_value(b).unwrap();
    assert_eq!(serialized, json!({ "value": null, "present": false }));
}

#[test]
fn root_proxy_serializes_with_false_flag() {
    let value = 42u32;
    let root = chain(&value);

    let serialized = serde_json::to_value(root).unwrap();
    assert_eq!(serialized, json!({ "value": 42, "present": false }));
}
