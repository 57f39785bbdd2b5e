use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::codec::format::{self, EMPTY_TOKEN, NONE_TOKEN, NULL_TOKEN};
use crate::codec::{CodecError, RowBuilder};
use crate::insert::defaults::DefaultValues;
use crate::insert::errors::InsertError;
use crate::insert::index_layout::IndexLayout;
use crate::schema::TableSchema;
use crate::types::ScalarValue;

/// One row encoder. Drives the row builder column by column, records
/// dimension sources for indexed columns and collects time-column
/// values as a side effect of each append, and auto-fills runs of
/// defaulted columns after init and after every explicit append.
pub struct InsertRow {
    schema: Arc<TableSchema>,
    layout: Arc<IndexLayout>,
    defaults: Arc<DefaultValues>,
    default_string_size: u32,
    builder: RowBuilder,
    /// Indexed column position -> canonical string of its appended
    /// value. Seeded with the "never appended" sentinel.
    dimension_sources: HashMap<u32, String>,
    timestamps: Vec<i64>,
    dimensions: OnceCell<Vec<(String, u32)>>,
}

impl InsertRow {
    pub(crate) fn new(
        schema: Arc<TableSchema>,
        layout: Arc<IndexLayout>,
        defaults: Arc<DefaultValues>,
        default_string_size: u32,
    ) -> Self {
        let builder = RowBuilder::new(Arc::clone(&schema));
        let dimension_sources = layout.seed_sources();
        Self {
            schema,
            layout,
            defaults,
            default_string_size,
            builder,
            dimension_sources,
            timestamps: Vec::new(),
            dimensions: OnceCell::new(),
        }
    }

    /// Sizes the row from the caller's variable-length estimate plus the
    /// configured default string budget, binds the buffer, then fills
    /// any leading defaulted columns.
    pub fn init(&mut self, var_len_estimate: u32) -> Result<(), InsertError> {
        let estimate = var_len_estimate
            .checked_add(self.default_string_size)
            .ok_or(CodecError::SizeOverflow)?;
        let total = self.builder.compute_total_size(estimate)?;
        self.builder.bind(total)?;
        debug!(target: "insert::row", table = %self.schema.name, total, "Initialized row");
        self.fill_defaults()
    }

    pub fn append_bool(&mut self, val: bool) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Bool(val))?;
        self.fill_defaults()
    }

    pub fn append_i16(&mut self, val: i16) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Int16(val))?;
        self.fill_defaults()
    }

    pub fn append_i32(&mut self, val: i32) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Int32(val))?;
        self.fill_defaults()
    }

    pub fn append_i64(&mut self, val: i64) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Int64(val))?;
        self.fill_defaults()
    }

    pub fn append_float(&mut self, val: f32) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Float(val))?;
        self.fill_defaults()
    }

    pub fn append_double(&mut self, val: f64) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Double(val))?;
        self.fill_defaults()
    }

    /// Pre-packed date, see `format::pack_date`.
    pub fn append_date(&mut self, packed: i32) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Date(packed))?;
        self.fill_defaults()
    }

    /// Calendar date. Field validation happens before any state changes;
    /// an out-of-range field fails the append with cursor, dimensions
    /// and timestamps untouched.
    pub fn append_date_ymd(&mut self, year: u32, month: u32, day: u32) -> Result<(), InsertError> {
        let packed = format::pack_date(year, month, day)
            .ok_or(InsertError::InvalidDate { year, month, day })?;
        self.apply_value(ScalarValue::Date(packed))?;
        self.fill_defaults()
    }

    /// Milliseconds since the Unix epoch.
    pub fn append_timestamp(&mut self, millis: i64) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Timestamp(millis))?;
        self.fill_defaults()
    }

    pub fn append_string(&mut self, val: &str) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::String(val.to_string()))?;
        self.fill_defaults()
    }

    pub fn append_null(&mut self) -> Result<(), InsertError> {
        self.apply_value(ScalarValue::Null)?;
        self.fill_defaults()
    }

    pub fn append_pos(&self) -> u32 {
        self.builder.append_pos()
    }

    pub fn is_complete(&self) -> bool {
        self.builder.is_complete()
    }

    /// Time-column values collected so far, in append order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// The finished row bytes; `None` until the row is complete.
    pub fn row_data(&self) -> Option<&[u8]> {
        self.is_complete().then(|| self.builder.data())
    }

    /// Routing keys, one per index group in ascending group-id order:
    /// the group members' canonical sources joined with `|` in group
    /// member order. Computed lazily and memoized on first call.
    pub fn dimensions(&self) -> &[(String, u32)] {
        self.dimensions
            .get_or_init(|| {
                self.layout
                    .groups()
                    .iter()
                    .map(|(group, members)| {
                        let key = members
                            .iter()
                            .map(|pos| {
                                self.dimension_sources
                                    .get(pos)
                                    .map(String::as_str)
                                    .unwrap_or(NONE_TOKEN)
                            })
                            .collect::<Vec<_>>()
                            .join("|");
                        (key, *group)
                    })
                    .collect()
            })
            .as_slice()
    }

    /// While the cursor's column has a configured default, coerce it to
    /// the declared type and apply it like an explicit append. Stops at
    /// the first column without a default or when the row completes.
    fn fill_defaults(&mut self) -> Result<(), InsertError> {
        while !self.builder.is_complete() {
            let pos = self.builder.append_pos();
            let Some(default) = self.defaults.get(pos).cloned() else {
                break;
            };
            let col_type = self.schema.columns[pos as usize].col_type;
            let value = default
                .coerce(col_type)
                .ok_or_else(|| InsertError::DefaultMismatch {
                    expected: col_type,
                    value: format!("{default:?}"),
                })?;
            debug!(target: "insert::row", table = %self.schema.name, pos, "Filling defaulted column");
            self.apply_value(value)?;
        }
        Ok(())
    }

    /// Encodes one value at the cursor's column. The builder append runs
    /// first; dimension and timestamp state is only touched after it
    /// succeeds, so a failed append leaves no partial state.
    fn apply_value(&mut self, value: ScalarValue) -> Result<(), InsertError> {
        let pos = self.builder.append_pos();
        let indexed = self.layout.is_indexed(pos);
        let is_time = self
            .schema
            .column(pos)
            .map(|col| col.is_time)
            .unwrap_or(false);
        match value {
            ScalarValue::Null => {
                self.builder.append_null()?;
                if indexed {
                    self.set_source(pos, NULL_TOKEN.to_string());
                }
            }
            ScalarValue::Bool(v) => {
                self.builder.append_bool(v)?;
                if indexed {
                    self.set_source(pos, if v { "true" } else { "false" }.to_string());
                }
            }
            ScalarValue::Int16(v) => {
                self.builder.append_i16(v)?;
                if indexed {
                    self.set_source(pos, v.to_string());
                }
            }
            ScalarValue::Int32(v) => {
                self.builder.append_i32(v)?;
                if indexed {
                    self.set_source(pos, v.to_string());
                }
            }
            ScalarValue::Int64(v) => {
                self.builder.append_i64(v)?;
                if indexed {
                    self.set_source(pos, v.to_string());
                }
                if is_time {
                    self.timestamps.push(v);
                }
            }
            ScalarValue::Float(v) => {
                self.builder.append_f32(v)?;
            }
            ScalarValue::Double(v) => {
                self.builder.append_f64(v)?;
            }
            ScalarValue::Date(v) => {
                self.builder.append_date(v)?;
                if indexed {
                    self.set_source(pos, v.to_string());
                }
            }
            ScalarValue::Timestamp(v) => {
                self.builder.append_timestamp(v)?;
                if indexed {
                    self.set_source(pos, v.to_string());
                }
                if is_time {
                    self.timestamps.push(v);
                }
            }
            ScalarValue::String(s) => {
                self.builder.append_string(&s)?;
                if indexed {
                    let source = if s.is_empty() {
                        EMPTY_TOKEN.to_string()
                    } else {
                        s
                    };
                    self.set_source(pos, source);
                }
            }
        }
        Ok(())
    }

    fn set_source(&mut self, pos: u32, source: String) {
        self.dimension_sources.insert(pos, source);
    }
}
