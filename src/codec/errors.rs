use thiserror::Error;

use crate::schema::ColumnType;

/// Errors surfaced by the row wire codec (builder and view).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Row buffer is not bound")]
    NotBound,

    #[error("Row is already complete")]
    RowComplete,

    #[error("Type mismatch at column {pos}: expected {expected}, got {given}")]
    TypeMismatch {
        pos: u32,
        expected: ColumnType,
        given: ColumnType,
    },

    #[error("Row size computation overflowed")]
    SizeOverflow,

    #[error("Buffer of {given} bytes cannot hold the {needed} bytes the layout needs")]
    BufferTooSmall { given: u32, needed: u32 },

    #[error("String of {len} bytes exceeds the {remaining} bytes left in the row")]
    StringOverflow { len: u32, remaining: u32 },

    #[error("Column {0} out of range")]
    ColumnOutOfRange(u32),

    #[error("Malformed row: {0}")]
    Malformed(String),

    #[error("Invalid UTF-8 in string column: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
