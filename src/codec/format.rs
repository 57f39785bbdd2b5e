use crate::schema::TableSchema;

/// Format version written in the first header byte.
pub const ROW_FORMAT_VERSION: u8 = 1;

/// Header: version (u8), string addr width (u8), row length (u32 LE).
pub const HEADER_LEN: u32 = 6;

/// Dimension source for an indexed column that was never appended.
pub const NONE_TOKEN: &str = "!N@O#N$E%";

/// Dimension source for an indexed column appended as null.
pub const NULL_TOKEN: &str = "!N@U#L$L%";

/// Dimension source for an indexed string column holding "".
pub const EMPTY_TOKEN: &str = "!@#$%";

/// Bytes needed for the null bitmap of `column_count` columns.
pub fn bitmap_len(column_count: u32) -> u32 {
    column_count.div_ceil(8)
}

pub fn set_null_bit(bitmap: &mut [u8], pos: u32) {
    bitmap[(pos / 8) as usize] |= 1 << (pos % 8);
}

pub fn is_null_bit(bitmap: &[u8], pos: u32) -> bool {
    bitmap[(pos / 8) as usize] & (1 << (pos % 8)) != 0
}

/// Largest row length a string addr of `width` bytes can point into.
pub fn addr_capacity(width: u8) -> u32 {
    match width {
        1 => u8::MAX as u32,
        2 => u16::MAX as u32,
        3 => 0x00FF_FFFF,
        _ => u32::MAX,
    }
}

/// Smallest addr width whose capacity covers a row of `total` bytes.
pub fn addr_width(total: u32) -> u8 {
    if total <= u8::MAX as u32 {
        1
    } else if total <= u16::MAX as u32 {
        2
    } else if total <= 0x00FF_FFFF {
        3
    } else {
        4
    }
}

/// Packs a calendar date as `((year-1900) << 16) | ((month-1) << 8) | day`.
/// Returns `None` when a field is out of range (1900..=9999 / 1..=12 / 1..=31).
pub fn pack_date(year: u32, month: u32, day: u32) -> Option<i32> {
    if !(1900..=9999).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((((year - 1900) << 16) | ((month - 1) << 8) | day) as i32)
}

/// Where one column's value lands in the encoded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Offset of a fixed-width slot, relative to the fixed region.
    Fixed(u32),
    /// Index of the addr slot holding this string's payload offset.
    StringAddr(u32),
}

/// Static part of the row layout, derived once from the schema and
/// shared by the builder and the view:
///
/// ```text
/// [ header | null bitmap | fixed slots | string addr slots | string payload ]
/// ```
///
/// Fixed slots hold non-string columns in column order; addr slots hold
/// one absolute payload offset per string column, in column order. Only
/// the addr width and the payload extent vary per row.
#[derive(Debug, Clone)]
pub struct RowLayout {
    slots: Vec<Slot>,
    fixed_len: u32,
    str_count: u32,
}

impl RowLayout {
    pub fn new(schema: &TableSchema) -> Self {
        let mut slots = Vec::with_capacity(schema.columns.len());
        let mut fixed_len = 0u32;
        let mut str_count = 0u32;
        for col in &schema.columns {
            match col.col_type.fixed_size() {
                Some(width) => {
                    slots.push(Slot::Fixed(fixed_len));
                    fixed_len += width;
                }
                None => {
                    slots.push(Slot::StringAddr(str_count));
                    str_count += 1;
                }
            }
        }
        Self {
            slots,
            fixed_len,
            str_count,
        }
    }

    pub fn column_count(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn str_count(&self) -> u32 {
        self.str_count
    }

    pub fn slot(&self, pos: u32) -> Slot {
        self.slots[pos as usize]
    }

    pub fn fixed_base(&self) -> u32 {
        HEADER_LEN + bitmap_len(self.column_count())
    }

    pub fn addr_base(&self) -> u32 {
        self.fixed_base() + self.fixed_len
    }

    /// First byte of the string payload region for a given addr width.
    pub fn payload_base(&self, width: u8) -> u32 {
        self.addr_base() + self.str_count * width as u32
    }

    pub fn addr_slot_offset(&self, slot: u32, width: u8) -> u32 {
        self.addr_base() + slot * width as u32
    }
}
