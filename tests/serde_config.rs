#![cfg(feature = "serde")]

use field_conditionals::{FieldDefinition, Markers, SaveFilter, Value, ValueMap};

#[test]
fn field_definitions_from_json() {
    let json = r#"[
        {"id": "has_pet"},
        {"id": "pet_kind", "attributes": {"data-conditional-id": "has_pet"}},
        {"id": "leash", "required": true, "attributes": {
            "data-conditional-id": "pet_kind",
            "data-conditional-value": "[\"dog\"]"
        }}
    ]"#;
    let fields: Vec<FieldDefinition> = serde_json::from_str(json).unwrap();

    assert_eq!(fields.len(), 3);
    assert!(fields[0].attributes.is_empty());
    assert!(fields[2].required);
    assert_eq!(fields[1], FieldDefinition::new("pet_kind").depends_on("has_pet"));

    let mut values: ValueMap =
        serde_json::from_str(r#"{"has_pet": "1", "pet_kind": "cat", "leash": "red"}"#).unwrap();
    SaveFilter::new().filter_values_to_save(&fields, &mut values);

    assert_eq!(values.get("pet_kind"), Some(&Value::from("cat")));
    assert!(!values.contains_key("leash"));
}

#[test]
fn value_map_json_shapes() {
    let values: ValueMap = serde_json::from_str(
        r#"{"n": null, "b": true, "i": 3, "f": 1.5, "s": "x", "l": [1, "a"], "m": {"k": 0}}"#,
    )
    .unwrap();

    assert_eq!(values.get("n"), Some(&Value::Null));
    assert_eq!(values.get("b"), Some(&Value::Bool(true)));
    assert_eq!(values.get("i"), Some(&Value::Int(3)));
    assert_eq!(values.get("f"), Some(&Value::Float(1.5)));
    assert_eq!(
        values.get("l"),
        Some(&Value::List(vec![Value::Int(1), Value::from("a")]))
    );
    assert!(matches!(values.get("m"), Some(Value::Map(_))));

    let back = serde_json::to_value(&values).unwrap();
    assert_eq!(back["i"], serde_json::json!(3));
    assert_eq!(back["l"], serde_json::json!([1, "a"]));
}

#[test]
fn markers_from_json() {
    let markers: Markers = serde_json::from_str(r#"{"conditional_id": "data-show-if"}"#).unwrap();
    assert_eq!(markers.conditional_id(), "data-show-if");
    assert_eq!(markers.conditional_value(), "data-conditional-value");

    let defaults: Markers = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, Markers::default());
}

#[test]
fn invalid_markers_rejected() {
    let result: Result<Markers, _> = serde_json::from_str(r#"{"conditional_id": ""}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("must not be empty"));

    let result: Result<Markers, _> = serde_json::from_str(
        r#"{"conditional_id": "data-x", "conditional_value": "data-x"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn markers_round_trip() {
    let markers = Markers::builder()
        .conditional_value("data-show-value")
        .build()
        .unwrap();
    let json = serde_json::to_string(&markers).unwrap();
    let back: Markers = serde_json::from_str(&json).unwrap();
    assert_eq!(back, markers);
}
