use std::sync::Arc;

use tracing::{debug, warn};

use crate::insert::defaults::DefaultValues;
use crate::insert::errors::InsertError;
use crate::insert::index_layout::IndexLayout;
use crate::insert::row::InsertRow;
use crate::schema::{SchemaError, TableSchema};

/// A batch of rows sharing one table's schema, index layout and default
/// values. At most one row may be in progress at a time; the index
/// layout is derived once here and shared by every row.
pub struct InsertBatch {
    schema: Arc<TableSchema>,
    layout: Arc<IndexLayout>,
    defaults: Arc<DefaultValues>,
    default_string_size: u32,
    rows: Vec<InsertRow>,
}

impl InsertBatch {
    pub fn new(
        schema: Arc<TableSchema>,
        defaults: Arc<DefaultValues>,
        default_string_size: u32,
    ) -> Result<Self, SchemaError> {
        schema.validate()?;
        let layout = Arc::new(IndexLayout::derive(&schema)?);
        Ok(Self {
            schema,
            layout,
            defaults,
            default_string_size,
            rows: Vec::new(),
        })
    }

    /// Hands out the next row encoder, uninitialized (the caller must
    /// still call `init`). Fails without touching the row list while
    /// the latest row is incomplete.
    pub fn new_row(&mut self) -> Result<&mut InsertRow, InsertError> {
        if self.rows.last().is_some_and(|row| !row.is_complete()) {
            warn!(target: "insert::batch", table = %self.schema.name, "new_row refused: previous row incomplete");
            return Err(InsertError::RowInProgress);
        }
        self.rows.push(InsertRow::new(
            Arc::clone(&self.schema),
            Arc::clone(&self.layout),
            Arc::clone(&self.defaults),
            self.default_string_size,
        ));
        debug!(target: "insert::batch", table = %self.schema.name, rows = self.rows.len(), "Created row");
        let idx = self.rows.len() - 1;
        Ok(&mut self.rows[idx])
    }

    pub fn rows(&self) -> &[InsertRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn layout(&self) -> &IndexLayout {
        &self.layout
    }
}
