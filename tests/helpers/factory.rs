pub use super::factories::{DefaultValuesFactory, InsertBatchFactory, TableSchemaFactory};

pub struct Factory;

impl Factory {
    pub fn table_schema() -> TableSchemaFactory {
        TableSchemaFactory::new()
    }

    pub fn default_values() -> DefaultValuesFactory {
        DefaultValuesFactory::new()
    }

    pub fn insert_batch() -> InsertBatchFactory {
        InsertBatchFactory::new()
    }
}
