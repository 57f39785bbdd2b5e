use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::errors::CodecError;
use crate::codec::format::{self, RowLayout, Slot};
use crate::schema::{ColumnType, TableSchema};

/// Fixed-layout row buffer writer. One per row: compute the total size,
/// bind a buffer, then append values strictly in column order. The
/// cursor position is the single source of truth for which column an
/// append targets; a failed append leaves the cursor and the buffer
/// untouched.
pub struct RowBuilder {
    schema: Arc<TableSchema>,
    layout: RowLayout,
    buf: Vec<u8>,
    bound: bool,
    pos: u32,
    str_addr_size: u8,
    /// Absolute offset of the next free byte in the payload region.
    str_cursor: u32,
}

impl RowBuilder {
    pub fn new(schema: Arc<TableSchema>) -> Self {
        let layout = RowLayout::new(&schema);
        Self {
            schema,
            layout,
            buf: Vec::new(),
            bound: false,
            pos: 0,
            str_addr_size: 0,
            str_cursor: 0,
        }
    }

    pub fn column_count(&self) -> u32 {
        self.layout.column_count()
    }

    /// Total row size for a given variable-length estimate: the static
    /// layout plus the estimate, under the smallest addr width whose
    /// capacity covers the whole row.
    pub fn compute_total_size(&self, var_len_estimate: u32) -> Result<u32, CodecError> {
        let base = self
            .layout
            .addr_base()
            .checked_add(var_len_estimate)
            .ok_or(CodecError::SizeOverflow)?;
        for width in [1u8, 2, 3, 4] {
            let addrs = self
                .layout
                .str_count()
                .checked_mul(width as u32)
                .ok_or(CodecError::SizeOverflow)?;
            let total = base.checked_add(addrs).ok_or(CodecError::SizeOverflow)?;
            if total <= format::addr_capacity(width) {
                return Ok(total);
            }
        }
        Err(CodecError::SizeOverflow)
    }

    /// Allocates a zeroed buffer of `total` bytes and writes the header.
    /// The addr width is pinned in the header byte so the completing
    /// truncation cannot change how string offsets are read back.
    pub fn bind(&mut self, total: u32) -> Result<(), CodecError> {
        let width = format::addr_width(total);
        let needed = self.layout.payload_base(width);
        if total < needed {
            return Err(CodecError::BufferTooSmall {
                given: total,
                needed,
            });
        }
        self.buf = vec![0u8; total as usize];
        self.buf[0] = format::ROW_FORMAT_VERSION;
        self.buf[1] = width;
        self.buf[2..6].copy_from_slice(&total.to_le_bytes());
        self.str_addr_size = width;
        self.str_cursor = needed;
        self.pos = 0;
        self.bound = true;
        debug!(target: "codec::builder", table = %self.schema.name, total, width, "Bound row buffer");
        Ok(())
    }

    pub fn append_bool(&mut self, val: bool) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Bool, &[val as u8])
    }

    pub fn append_i16(&mut self, val: i16) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Int16, &val.to_le_bytes())
    }

    pub fn append_i32(&mut self, val: i32) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Int32, &val.to_le_bytes())
    }

    pub fn append_i64(&mut self, val: i64) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Int64, &val.to_le_bytes())
    }

    pub fn append_f32(&mut self, val: f32) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Float, &val.to_le_bytes())
    }

    pub fn append_f64(&mut self, val: f64) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Double, &val.to_le_bytes())
    }

    /// Packed calendar date, see `format::pack_date`.
    pub fn append_date(&mut self, packed: i32) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Date, &packed.to_le_bytes())
    }

    /// Milliseconds since the Unix epoch.
    pub fn append_timestamp(&mut self, millis: i64) -> Result<(), CodecError> {
        self.put_fixed(ColumnType::Timestamp, &millis.to_le_bytes())
    }

    pub fn append_string(&mut self, val: &str) -> Result<(), CodecError> {
        self.check(ColumnType::String)?;
        let len = val.len() as u32;
        let remaining = self.buf.len() as u32 - self.str_cursor;
        if len > remaining {
            warn!(target: "codec::builder", pos = self.pos, len, remaining, "String overflows payload region");
            return Err(CodecError::StringOverflow { len, remaining });
        }
        if let Slot::StringAddr(slot) = self.layout.slot(self.pos) {
            self.write_addr(slot, self.str_cursor);
        }
        let start = self.str_cursor as usize;
        self.buf[start..start + val.len()].copy_from_slice(val.as_bytes());
        self.str_cursor += len;
        self.advance();
        Ok(())
    }

    /// Marks the current column null in the bitmap. A null string column
    /// still pins its addr slot so later strings' extents stay derivable.
    pub fn append_null(&mut self) -> Result<(), CodecError> {
        if !self.bound {
            return Err(CodecError::NotBound);
        }
        if self.is_complete() {
            return Err(CodecError::RowComplete);
        }
        let pos = self.pos;
        format::set_null_bit(&mut self.buf[format::HEADER_LEN as usize..], pos);
        if let Slot::StringAddr(slot) = self.layout.slot(pos) {
            self.write_addr(slot, self.str_cursor);
        }
        self.advance();
        Ok(())
    }

    pub fn append_pos(&self) -> u32 {
        self.pos
    }

    pub fn is_complete(&self) -> bool {
        self.bound && self.pos >= self.layout.column_count()
    }

    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    fn check(&self, given: ColumnType) -> Result<(), CodecError> {
        if !self.bound {
            return Err(CodecError::NotBound);
        }
        if self.is_complete() {
            return Err(CodecError::RowComplete);
        }
        let expected = self.schema.columns[self.pos as usize].col_type;
        if expected != given {
            warn!(target: "codec::builder", pos = self.pos, %expected, %given, "Append type mismatch");
            return Err(CodecError::TypeMismatch {
                pos: self.pos,
                expected,
                given,
            });
        }
        Ok(())
    }

    fn put_fixed(&mut self, given: ColumnType, bytes: &[u8]) -> Result<(), CodecError> {
        self.check(given)?;
        if let Slot::Fixed(rel) = self.layout.slot(self.pos) {
            let start = (self.layout.fixed_base() + rel) as usize;
            self.buf[start..start + bytes.len()].copy_from_slice(bytes);
        }
        self.advance();
        Ok(())
    }

    fn write_addr(&mut self, slot: u32, addr: u32) {
        let width = self.str_addr_size as usize;
        let start = self.layout.addr_slot_offset(slot, self.str_addr_size) as usize;
        let bytes = addr.to_le_bytes();
        self.buf[start..start + width].copy_from_slice(&bytes[..width]);
    }

    fn advance(&mut self) {
        self.pos += 1;
        if self.is_complete() {
            self.finish();
        }
    }

    /// The completing append trims the buffer down to the bytes actually
    /// used and patches the header length to match, so transport gets an
    /// exact payload even when the variable-length estimate was generous.
    fn finish(&mut self) {
        let used = self.str_cursor;
        self.buf.truncate(used as usize);
        self.buf[2..6].copy_from_slice(&used.to_le_bytes());
        debug!(target: "codec::builder", table = %self.schema.name, len = used, "Row complete");
    }
}
