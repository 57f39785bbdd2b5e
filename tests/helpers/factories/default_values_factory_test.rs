use crate::test_helpers::factories::DefaultValuesFactory;
use crate::types::ScalarValue;

#[test]
fn builds_empty_table() {
    let defaults = DefaultValuesFactory::new().create();
    assert!(defaults.is_empty());
}

#[test]
fn inserts_typed_and_null_entries() {
    let defaults = DefaultValuesFactory::new()
        .with(1, ScalarValue::Int32(5))
        .with_null(2)
        .create();

    assert_eq!(defaults.len(), 2);
    assert_eq!(defaults.get(1), Some(&ScalarValue::Int32(5)));
    assert_eq!(defaults.get(2), Some(&ScalarValue::Null));
}

#[test]
fn later_entries_overwrite_earlier_ones() {
    let defaults = DefaultValuesFactory::new()
        .with(0, ScalarValue::Bool(false))
        .with(0, ScalarValue::Bool(true))
        .create();

    assert_eq!(defaults.get(0), Some(&ScalarValue::Bool(true)));
}
