use crate::test_helpers::factories::{
    DefaultValuesFactory, InsertBatchFactory, TableSchemaFactory,
};
use crate::types::ScalarValue;

#[test]
fn builds_batch_with_default_schema() {
    let mut batch = InsertBatchFactory::new().create();
    assert_eq!(batch.schema().column_count(), 2);
    assert!(batch.new_row().is_ok());
}

#[test]
fn carries_custom_schema_and_defaults() {
    let schema = TableSchemaFactory::new()
        .with("id", "bigint")
        .with("city", "string")
        .create();
    let defaults = DefaultValuesFactory::new()
        .with(1, ScalarValue::String("oslo".to_string()))
        .create();
    let mut batch = InsertBatchFactory::new()
        .with_schema(schema)
        .with_defaults(defaults)
        .with_default_string_size(64)
        .create();

    let row = batch.new_row().unwrap();
    row.init(0).unwrap();
    row.append_i64(1).unwrap();
    assert!(row.is_complete());
}
