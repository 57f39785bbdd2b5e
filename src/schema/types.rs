use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::schema::errors::SchemaError;

/// Column data types supported by the store.
/// - Fixed-width types occupy a static slot in the encoded row
/// - `String` values live in the variable-length tail region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Bool,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Date,
    Timestamp,
    String,
}

impl ColumnType {
    /// Parse one type name, accepting the aliases clients commonly send
    /// (e.g., "bigint" -> Int64, "varchar" -> String).
    pub fn from_primitive_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(ColumnType::Bool),
            "int16" | "smallint" => Some(ColumnType::Int16),
            "int32" | "int" | "integer" => Some(ColumnType::Int32),
            "int64" | "bigint" => Some(ColumnType::Int64),
            "float" | "float32" => Some(ColumnType::Float),
            "double" | "float64" => Some(ColumnType::Double),
            "date" => Some(ColumnType::Date),
            "timestamp" | "datetime" => Some(ColumnType::Timestamp),
            "string" | "str" | "text" | "varchar" => Some(ColumnType::String),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Int16 => "int16",
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::String => "string",
        }
    }

    /// Encoded width of a fixed slot; `None` for variable-length types.
    pub fn fixed_size(&self) -> Option<u32> {
        match self {
            ColumnType::Bool => Some(1),
            ColumnType::Int16 => Some(2),
            ColumnType::Int32 => Some(4),
            ColumnType::Int64 => Some(8),
            ColumnType::Float => Some(4),
            ColumnType::Double => Some(8),
            ColumnType::Date => Some(4),
            ColumnType::Timestamp => Some(8),
            ColumnType::String => None,
        }
    }

    pub fn is_var_len(&self) -> bool {
        self.fixed_size().is_none()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column descriptor. Position is implicit: the declaration order
/// inside `TableSchema::columns` (0-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub col_type: ColumnType,
    /// Values of this column are collected into the row's timestamp
    /// sequence in addition to normal encoding.
    #[serde(default)]
    pub is_time: bool,
    /// Legacy single-column index flag; ignored whenever the table
    /// declares explicit `indexes`.
    #[serde(default)]
    pub indexed: bool,
}

impl ColumnSchema {
    pub fn new(name: &str, col_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            col_type,
            is_time: false,
            indexed: false,
        }
    }
}

/// One explicit multi-column index definition ("column key"). Member
/// order is the key-join order for the derived dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub columns: Vec<String>,
}

/// Table metadata as shipped by the control plane: ordered column
/// descriptors plus optional multi-column index definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
    #[serde(default)]
    pub indexes: Vec<IndexSpec>,
}

impl TableSchema {
    pub fn new(name: &str, columns: Vec<ColumnSchema>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            indexes: Vec::new(),
        }
    }

    pub fn with_indexes(mut self, indexes: Vec<IndexSpec>) -> Self {
        self.indexes = indexes;
        self
    }

    pub fn column_count(&self) -> u32 {
        self.columns.len() as u32
    }

    pub fn column(&self, pos: u32) -> Option<&ColumnSchema> {
        self.columns.get(pos as usize)
    }

    /// Position of a column by name, in declaration order.
    pub fn position_of(&self, name: &str) -> Option<u32> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .map(|p| p as u32)
    }

    /// Name -> position map for index resolution.
    pub fn position_map(&self) -> HashMap<&str, u32> {
        self.columns
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.name.as_str(), pos as u32))
            .collect()
    }

    /// Checks the invariants the encoder relies on: non-empty column
    /// list, unique non-empty names, and index members that exist.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::EmptyTable(self.name.clone()));
        }
        let mut seen = HashMap::with_capacity(self.columns.len());
        for (pos, col) in self.columns.iter().enumerate() {
            if col.name.is_empty() {
                return Err(SchemaError::EmptyColumnName(pos as u32));
            }
            if seen.insert(col.name.as_str(), pos).is_some() {
                return Err(SchemaError::DuplicateColumn(col.name.clone()));
            }
        }
        for index in &self.indexes {
            if index.columns.is_empty() {
                return Err(SchemaError::EmptyIndex(index.name.clone()));
            }
            for column in &index.columns {
                if !seen.contains_key(column.as_str()) {
                    return Err(SchemaError::UnknownIndexColumn {
                        index: index.name.clone(),
                        column: column.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
