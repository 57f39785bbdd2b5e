use crate::codec::errors::CodecError;
use crate::codec::format::{self, RowLayout, Slot};
use crate::schema::{ColumnType, TableSchema};

/// Read-back view over one finished row. Typed getters return `None`
/// when the column's null bit is set; string extents are derived from
/// the addr slots (next string's addr, or the header row length for the
/// last string).
pub struct RowView<'a> {
    layout: RowLayout,
    schema: &'a TableSchema,
    data: &'a [u8],
    str_addr_size: u8,
    row_len: u32,
}

impl<'a> RowView<'a> {
    pub fn new(schema: &'a TableSchema, data: &'a [u8]) -> Result<Self, CodecError> {
        if data.len() < format::HEADER_LEN as usize {
            return Err(CodecError::Malformed("row shorter than header".to_string()));
        }
        if data[0] != format::ROW_FORMAT_VERSION {
            return Err(CodecError::Malformed(format!(
                "unknown row format version {}",
                data[0]
            )));
        }
        let str_addr_size = data[1];
        if !(1..=4).contains(&str_addr_size) {
            return Err(CodecError::Malformed(format!(
                "invalid string addr width {str_addr_size}"
            )));
        }
        let row_len = u32::from_le_bytes([data[2], data[3], data[4], data[5]]);
        if row_len as usize != data.len() {
            return Err(CodecError::Malformed(format!(
                "header length {} does not match buffer length {}",
                row_len,
                data.len()
            )));
        }
        let layout = RowLayout::new(schema);
        if row_len < layout.payload_base(str_addr_size) {
            return Err(CodecError::Malformed(
                "row shorter than its fixed layout".to_string(),
            ));
        }
        Ok(Self {
            layout,
            schema,
            data,
            str_addr_size,
            row_len,
        })
    }

    pub fn is_null(&self, pos: u32) -> Result<bool, CodecError> {
        if pos >= self.layout.column_count() {
            return Err(CodecError::ColumnOutOfRange(pos));
        }
        Ok(format::is_null_bit(
            &self.data[format::HEADER_LEN as usize..],
            pos,
        ))
    }

    pub fn get_bool(&self, pos: u32) -> Result<Option<bool>, CodecError> {
        Ok(self.fixed(pos, ColumnType::Bool)?.map(|b| b[0] != 0))
    }

    pub fn get_i16(&self, pos: u32) -> Result<Option<i16>, CodecError> {
        Ok(self
            .fixed(pos, ColumnType::Int16)?
            .map(|b| i16::from_le_bytes([b[0], b[1]])))
    }

    pub fn get_i32(&self, pos: u32) -> Result<Option<i32>, CodecError> {
        Ok(self
            .fixed(pos, ColumnType::Int32)?
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]])))
    }

    pub fn get_i64(&self, pos: u32) -> Result<Option<i64>, CodecError> {
        Ok(self.fixed(pos, ColumnType::Int64)?.map(read_i64))
    }

    pub fn get_f32(&self, pos: u32) -> Result<Option<f32>, CodecError> {
        Ok(self
            .fixed(pos, ColumnType::Float)?
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]])))
    }

    pub fn get_f64(&self, pos: u32) -> Result<Option<f64>, CodecError> {
        Ok(self
            .fixed(pos, ColumnType::Double)?
            .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])))
    }

    pub fn get_date(&self, pos: u32) -> Result<Option<i32>, CodecError> {
        Ok(self
            .fixed(pos, ColumnType::Date)?
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]])))
    }

    pub fn get_timestamp(&self, pos: u32) -> Result<Option<i64>, CodecError> {
        Ok(self.fixed(pos, ColumnType::Timestamp)?.map(read_i64))
    }

    pub fn get_string(&self, pos: u32) -> Result<Option<&'a str>, CodecError> {
        let slot = match self.checked_slot(pos, ColumnType::String)? {
            Some(slot) => slot,
            None => return Ok(None),
        };
        let Slot::StringAddr(idx) = slot else {
            return Err(CodecError::Malformed(format!(
                "string column {pos} has no addr slot"
            )));
        };
        let start = self.read_addr(idx);
        let end = if idx + 1 < self.layout.str_count() {
            self.read_addr(idx + 1)
        } else {
            self.row_len
        };
        if start > end || end as usize > self.data.len() {
            return Err(CodecError::Malformed(format!(
                "string column {pos} extent {start}..{end} out of bounds"
            )));
        }
        let s = std::str::from_utf8(&self.data[start as usize..end as usize])?;
        Ok(Some(s))
    }

    /// Slot of a non-null column whose declared type matches, or `None`
    /// when the null bit is set.
    fn checked_slot(&self, pos: u32, given: ColumnType) -> Result<Option<Slot>, CodecError> {
        if pos >= self.layout.column_count() {
            return Err(CodecError::ColumnOutOfRange(pos));
        }
        let expected = self.schema.columns[pos as usize].col_type;
        if expected != given {
            return Err(CodecError::TypeMismatch {
                pos,
                expected,
                given,
            });
        }
        if self.is_null(pos)? {
            return Ok(None);
        }
        Ok(Some(self.layout.slot(pos)))
    }

    fn fixed(&self, pos: u32, given: ColumnType) -> Result<Option<&[u8]>, CodecError> {
        let slot = match self.checked_slot(pos, given)? {
            Some(slot) => slot,
            None => return Ok(None),
        };
        let Slot::Fixed(rel) = slot else {
            return Err(CodecError::Malformed(format!(
                "column {pos} has no fixed slot"
            )));
        };
        let start = (self.layout.fixed_base() + rel) as usize;
        let width = given.fixed_size().unwrap_or(0) as usize;
        Ok(Some(&self.data[start..start + width]))
    }

    fn read_addr(&self, slot: u32) -> u32 {
        let start = self.layout.addr_slot_offset(slot, self.str_addr_size) as usize;
        let mut bytes = [0u8; 4];
        let width = self.str_addr_size as usize;
        bytes[..width].copy_from_slice(&self.data[start..start + width]);
        u32::from_le_bytes(bytes)
    }
}

fn read_i64(b: &[u8]) -> i64 {
    i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}
