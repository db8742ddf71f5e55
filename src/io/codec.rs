//! Endian-aware import/export of the primitive values both blob formats
//! are built from: bytes, int32, float32, float64.

use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoBlobError, GeoBlobResult};

/// Byte order of multi-byte values inside a blob.
///
/// Both formats use the same one-byte marker: 0 for big-endian, 1 for
/// little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

/// A cursor over a blob that decodes primitives in a selectable byte order.
///
/// The byte order starts little-endian and is switched once the blob's own
/// endian marker has been decoded; every read past that point swaps bytes
/// as needed.
pub(crate) struct BlobReader<'a> {
    cursor: Cursor<&'a [u8]>,
    byte_order: Endianness,
}

impl<'a> BlobReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
            byte_order: Endianness::LittleEndian,
        }
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    pub fn read_u8(&mut self) -> GeoBlobResult<u8> {
        self.cursor.read_u8().map_err(|_| GeoBlobError::Truncated)
    }

    pub fn read_i32(&mut self) -> GeoBlobResult<i32> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_i32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_i32::<LittleEndian>(),
        }
        .map_err(|_| GeoBlobError::Truncated)
    }

    pub fn read_u32(&mut self) -> GeoBlobResult<u32> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>(),
        }
        .map_err(|_| GeoBlobError::Truncated)
    }

    pub fn read_f32(&mut self) -> GeoBlobResult<f32> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_f32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f32::<LittleEndian>(),
        }
        .map_err(|_| GeoBlobError::Truncated)
    }

    pub fn read_f64(&mut self) -> GeoBlobResult<f64> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>(),
        }
        .map_err(|_| GeoBlobError::Truncated)
    }

    /// Read an int32 element or coordinate count.
    pub fn read_count(&mut self) -> GeoBlobResult<usize> {
        let count = self.read_i32()?;
        usize::try_from(count)
            .map_err(|_| GeoBlobError::Malformed(format!("negative element count {count}")))
    }

    /// Consume one byte and require it to equal `expected`.
    pub fn expect_marker(&mut self, kind: &'static str, expected: u8) -> GeoBlobResult<()> {
        let found = self.read_u8()?;
        if found != expected {
            return Err(GeoBlobError::InvalidMarker {
                kind,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Decode a one-byte endian marker.
    pub fn read_byte_order(&mut self) -> GeoBlobResult<Endianness> {
        let marker = self.read_u8()?;
        Endianness::try_from(marker)
            .map_err(|_| GeoBlobError::Malformed(format!("invalid byte order marker {marker:#04x}")))
    }
}

/// The write-side mirror of [`BlobReader`]: encodes primitives into an owned
/// buffer in the byte order fixed at construction.
pub(crate) struct BlobWriter {
    buf: Vec<u8>,
    byte_order: Endianness,
}

impl BlobWriter {
    pub fn new(byte_order: Endianness) -> Self {
        Self {
            buf: Vec::new(),
            byte_order,
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        match self.byte_order {
            Endianness::BigEndian => self.buf.write_i32::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_i32::<LittleEndian>(value).unwrap(),
        }
    }

    pub fn write_u32(&mut self, value: u32) {
        match self.byte_order {
            Endianness::BigEndian => self.buf.write_u32::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_u32::<LittleEndian>(value).unwrap(),
        }
    }

    pub fn write_f32(&mut self, value: f32) {
        match self.byte_order {
            Endianness::BigEndian => self.buf.write_f32::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_f32::<LittleEndian>(value).unwrap(),
        }
    }

    pub fn write_f64(&mut self, value: f64) {
        match self.byte_order {
            Endianness::BigEndian => self.buf.write_f64::<BigEndian>(value).unwrap(),
            Endianness::LittleEndian => self.buf.write_f64::<LittleEndian>(value).unwrap(),
        }
    }

    /// Write an element or coordinate count, which the formats fix at int32.
    pub fn write_count(&mut self, count: usize) -> GeoBlobResult<()> {
        let count = i32::try_from(count).map_err(|_| GeoBlobError::Overflow)?;
        self.write_i32(count);
        Ok(())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
