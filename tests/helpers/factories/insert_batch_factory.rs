use std::sync::Arc;

use super::TableSchemaFactory;
use crate::insert::{DefaultValues, InsertBatch};
use crate::schema::TableSchema;

pub struct InsertBatchFactory {
    schema: Option<TableSchema>,
    defaults: DefaultValues,
    default_string_size: u32,
}

impl InsertBatchFactory {
    pub fn new() -> Self {
        Self {
            schema: None,
            defaults: DefaultValues::new(),
            default_string_size: 32,
        }
    }

    pub fn with_schema(mut self, schema: TableSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_defaults(mut self, defaults: DefaultValues) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_default_string_size(mut self, size: u32) -> Self {
        self.default_string_size = size;
        self
    }

    pub fn create(self) -> InsertBatch {
        let schema = self.schema.unwrap_or_else(|| {
            TableSchemaFactory::new()
                .with("id", "bigint")
                .with("name", "string")
                .create()
        });
        InsertBatch::new(
            Arc::new(schema),
            Arc::new(self.defaults),
            self.default_string_size,
        )
        .expect("factory schema should be valid")
    }
}
