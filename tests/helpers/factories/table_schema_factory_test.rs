use crate::schema::ColumnType;
use crate::test_helpers::factories::TableSchemaFactory;

#[test]
fn builds_columns_in_declaration_order() {
    let schema = TableSchemaFactory::new()
        .with("id", "bigint")
        .with("city", "string")
        .create();

    assert_eq!(schema.column_count(), 2);
    assert_eq!(schema.columns[0].col_type, ColumnType::Int64);
    assert_eq!(schema.position_of("city"), Some(1));
}

#[test]
fn sets_flags_with_helpers() {
    let schema = TableSchemaFactory::new()
        .with_indexed("city", "string")
        .with_time("at", "timestamp")
        .with_indexed_time("seen", "bigint")
        .create();

    assert!(schema.columns[0].indexed);
    assert!(schema.columns[1].is_time);
    assert!(schema.columns[2].indexed && schema.columns[2].is_time);
}

#[test]
fn unknown_type_falls_back_to_string() {
    let schema = TableSchemaFactory::new().with("mystery", "foobar").create();
    assert_eq!(schema.columns[0].col_type, ColumnType::String);
}

#[test]
fn adds_index_definitions() {
    let schema = TableSchemaFactory::new()
        .named("trips")
        .with("a", "int")
        .with("b", "int")
        .with_index("by_ba", &["b", "a"])
        .create();

    assert_eq!(schema.name, "trips");
    assert_eq!(schema.indexes[0].columns, vec!["b", "a"]);
    assert!(schema.validate().is_ok());
}
