use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::insert::errors::InsertError;
use crate::schema::TableSchema;
use crate::types::ScalarValue;

/// The default value table: column position -> typed value, shared
/// read-only by every row of a batch. A `Null` entry means "default to
/// null", which is distinct from having no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultValues {
    values: HashMap<u32, ScalarValue>,
}

impl DefaultValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: u32, value: ScalarValue) {
        self.values.insert(pos, value);
    }

    /// Builds the table from a JSON object keyed by column name, typing
    /// each literal against the column's declared type.
    pub fn from_json(schema: &TableSchema, literals: &JsonValue) -> Result<Self, InsertError> {
        let object = literals
            .as_object()
            .ok_or_else(|| InsertError::InvalidDefaults(literals.to_string()))?;
        let mut values = HashMap::with_capacity(object.len());
        for (name, literal) in object {
            let pos = schema
                .position_of(name)
                .ok_or_else(|| InsertError::UnknownColumn(name.clone()))?;
            let col_type = schema.columns[pos as usize].col_type;
            values.insert(pos, ScalarValue::from_json(col_type, literal)?);
        }
        Ok(Self { values })
    }

    pub fn get(&self, pos: u32) -> Option<&ScalarValue> {
        self.values.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
