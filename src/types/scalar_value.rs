use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::Value as JsonValue;

use crate::codec::format;
use crate::insert::errors::InsertError;
use crate::schema::ColumnType;

/// One typed scalar, one tag per supported column type. Default values
/// are stored in this form and coerced against the declared column type
/// when a row consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    /// Packed calendar date, see `format::pack_date`.
    Date(i32),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    String(String),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            ScalarValue::Null => None,
            ScalarValue::Bool(_) => Some(ColumnType::Bool),
            ScalarValue::Int16(_) => Some(ColumnType::Int16),
            ScalarValue::Int32(_) => Some(ColumnType::Int32),
            ScalarValue::Int64(_) => Some(ColumnType::Int64),
            ScalarValue::Float(_) => Some(ColumnType::Float),
            ScalarValue::Double(_) => Some(ColumnType::Double),
            ScalarValue::Date(_) => Some(ColumnType::Date),
            ScalarValue::Timestamp(_) => Some(ColumnType::Timestamp),
            ScalarValue::String(_) => Some(ColumnType::String),
        }
    }

    /// Fallible conversion against a declared column type. `Null` fits
    /// any column; otherwise only the exact matching tag passes.
    pub fn coerce(&self, target: ColumnType) -> Option<ScalarValue> {
        match self {
            ScalarValue::Null => Some(ScalarValue::Null),
            _ if self.column_type() == Some(target) => Some(self.clone()),
            _ => None,
        }
    }

    /// Builds a typed value from a JSON literal for the given column
    /// type. Integers are range-checked; dates accept "YYYY-MM-DD"
    /// strings or pre-packed integers; timestamps accept epoch millis
    /// or RFC3339 strings. JSON `null` yields `Null` for any type.
    pub fn from_json(col_type: ColumnType, literal: &JsonValue) -> Result<ScalarValue, InsertError> {
        if literal.is_null() {
            return Ok(ScalarValue::Null);
        }
        let mismatch = || InsertError::DefaultMismatch {
            expected: col_type,
            value: literal.to_string(),
        };
        match col_type {
            ColumnType::Bool => literal.as_bool().map(ScalarValue::Bool).ok_or_else(mismatch),
            ColumnType::Int16 => literal
                .as_i64()
                .and_then(|v| i16::try_from(v).ok())
                .map(ScalarValue::Int16)
                .ok_or_else(mismatch),
            ColumnType::Int32 => literal
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(ScalarValue::Int32)
                .ok_or_else(mismatch),
            ColumnType::Int64 => literal.as_i64().map(ScalarValue::Int64).ok_or_else(mismatch),
            ColumnType::Float => literal
                .as_f64()
                .map(|v| ScalarValue::Float(v as f32))
                .ok_or_else(mismatch),
            ColumnType::Double => literal
                .as_f64()
                .map(ScalarValue::Double)
                .ok_or_else(mismatch),
            ColumnType::Date => match literal {
                JsonValue::Number(_) => literal
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(ScalarValue::Date)
                    .ok_or_else(mismatch),
                JsonValue::String(s) => {
                    let date =
                        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| mismatch())?;
                    u32::try_from(date.year())
                        .ok()
                        .and_then(|year| format::pack_date(year, date.month(), date.day()))
                        .map(ScalarValue::Date)
                        .ok_or_else(mismatch)
                }
                _ => Err(mismatch()),
            },
            ColumnType::Timestamp => match literal {
                JsonValue::Number(_) => literal
                    .as_i64()
                    .map(ScalarValue::Timestamp)
                    .ok_or_else(mismatch),
                JsonValue::String(s) => DateTime::parse_from_rfc3339(s)
                    .map(|dt| ScalarValue::Timestamp(dt.timestamp_millis()))
                    .map_err(|_| mismatch()),
                _ => Err(mismatch()),
            },
            ColumnType::String => literal
                .as_str()
                .map(|s| ScalarValue::String(s.to_string()))
                .ok_or_else(mismatch),
        }
    }
}
