pub mod errors;
pub mod types;

pub use errors::SchemaError;
pub use types::{ColumnSchema, ColumnType, IndexSpec, TableSchema};
