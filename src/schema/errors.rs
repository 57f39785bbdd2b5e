use thiserror::Error;

/// Errors raised while validating table metadata or deriving the index
/// layout from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Table '{0}' declares no columns")]
    EmptyTable(String),

    #[error("Column name cannot be empty (position {0})")]
    EmptyColumnName(u32),

    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("Index '{0}' declares no columns")]
    EmptyIndex(String),

    #[error("Index '{index}' references unknown column '{column}'")]
    UnknownIndexColumn { index: String, column: String },
}
