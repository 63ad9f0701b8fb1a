// Copyright (C) 2015-2025 The Neo Project.
//
// binary_writer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{IoResult, Serializable};

/// An append-only little-endian writer.
///
/// # Examples
///
/// ```rust
/// use neo_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_u32(42).unwrap();
/// writer.write_var_bytes(b"neo").unwrap();
///
/// assert_eq!(writer.to_bytes(), vec![42, 0, 0, 0, 3, b'n', b'e', b'o']);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn write_bool(&mut self, value: bool) -> IoResult<()> {
        self.buffer.push(value as u8);
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_i32(&mut self, value: i32) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Writes raw bytes without a length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes a compact variable-length integer.
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xFD {
            self.write_u8(value as u8)
        } else if value <= 0xFFFF {
            self.write_u8(0xFD)?;
            self.write_u16(value as u16)
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE)?;
            self.write_u32(value as u32)
        } else {
            self.write_u8(0xFF)?;
            self.write_u64(value)
        }
    }

    /// Writes a var-int length followed by the bytes.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.write_var_int(bytes.len() as u64)?;
        self.write_bytes(bytes)
    }

    /// Writes a UTF-8 string as var-bytes.
    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }

    pub fn write_serializable<T: Serializable>(&mut self, value: &T) -> IoResult<()> {
        value.serialize(self)
    }

    /// Writes a var-int count followed by each item.
    pub fn write_serializable_vec<T: Serializable>(&mut self, items: &[T]) -> IoResult<()> {
        self.write_var_int(items.len() as u64)?;
        for item in items {
            item.serialize(self)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var_int(value: u64) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value).unwrap();
        writer.into_bytes()
    }

    #[test]
    fn test_var_int_boundaries() {
        assert_eq!(var_int(0), vec![0x00]);
        assert_eq!(var_int(252), vec![0xFC]);
        assert_eq!(var_int(253), vec![0xFD, 0xFD, 0x00]);
        assert_eq!(var_int(65535), vec![0xFD, 0xFF, 0xFF]);
        assert_eq!(var_int(65536), vec![0xFE, 0x00, 0x00, 0x01, 0x00]);

        let max_u32 = var_int(u32::MAX as u64);
        assert_eq!(max_u32.len(), 5);
        assert_eq!(max_u32[0], 0xFE);

        let above_u32 = var_int(u32::MAX as u64 + 1);
        assert_eq!(above_u32.len(), 9);
        assert_eq!(above_u32[0], 0xFF);
    }

    #[test]
    fn test_fixed_width_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_u16(0x0102).unwrap();
        writer.write_i32(-2).unwrap();
        writer.write_i64(1).unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x02, 0x01, 0xFE, 0xFF, 0xFF, 0xFF, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_var_string() {
        let mut writer = BinaryWriter::new();
        writer.write_var_string("").unwrap();
        writer.write_var_string("ab").unwrap();
        assert_eq!(writer.as_bytes(), &[0x00, 0x02, b'a', b'b']);
    }
}
