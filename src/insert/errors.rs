use thiserror::Error;

use crate::codec::CodecError;
use crate::schema::{ColumnType, SchemaError};

/// Errors surfaced while building insert rows.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InsertError {
    #[error("Previous row is still incomplete")]
    RowInProgress,

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Invalid date {year}-{month}-{day}")]
    InvalidDate { year: u32, month: u32, day: u32 },

    #[error("Default value {value} does not fit column type {expected}")]
    DefaultMismatch { expected: ColumnType, value: String },

    #[error("Defaults must be a JSON object, got {0}")]
    InvalidDefaults(String),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
