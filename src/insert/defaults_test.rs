use serde_json::json;

use crate::insert::{DefaultValues, InsertError};
use crate::test_helpers::factories::TableSchemaFactory;
use crate::types::ScalarValue;

#[test]
fn test_programmatic_table() {
    let mut defaults = DefaultValues::new();
    defaults.insert(2, ScalarValue::Int32(7));
    defaults.insert(3, ScalarValue::Null);

    assert_eq!(defaults.len(), 2);
    assert_eq!(defaults.get(2), Some(&ScalarValue::Int32(7)));
    assert_eq!(defaults.get(3), Some(&ScalarValue::Null));
    assert_eq!(defaults.get(0), None);
}

#[test]
fn test_from_json_resolves_names_and_types() {
    let schema = TableSchemaFactory::new()
        .with("id", "bigint")
        .with("city", "string")
        .with("day", "date")
        .with("fare", "double")
        .create();
    let defaults = DefaultValues::from_json(
        &schema,
        &json!({
            "city": "bergen",
            "day": "2021-03-02",
            "fare": null
        }),
    )
    .unwrap();

    assert_eq!(defaults.get(0), None);
    assert_eq!(
        defaults.get(1),
        Some(&ScalarValue::String("bergen".to_string()))
    );
    assert_eq!(
        defaults.get(2),
        Some(&ScalarValue::Date((121 << 16) | (2 << 8) | 2))
    );
    assert_eq!(defaults.get(3), Some(&ScalarValue::Null));
}

#[test]
fn test_from_json_rejects_unknown_column() {
    let schema = TableSchemaFactory::new().with("id", "bigint").create();
    assert_eq!(
        DefaultValues::from_json(&schema, &json!({"missing": 1})),
        Err(InsertError::UnknownColumn("missing".to_string()))
    );
}

#[test]
fn test_from_json_rejects_wrongly_typed_literal() {
    let schema = TableSchemaFactory::new().with("id", "bigint").create();
    assert!(matches!(
        DefaultValues::from_json(&schema, &json!({"id": "seven"})),
        Err(InsertError::DefaultMismatch { .. })
    ));
}

#[test]
fn test_from_json_rejects_non_object() {
    let schema = TableSchemaFactory::new().with("id", "bigint").create();
    assert!(matches!(
        DefaultValues::from_json(&schema, &json!([1, 2, 3])),
        Err(InsertError::InvalidDefaults(_))
    ));
}
