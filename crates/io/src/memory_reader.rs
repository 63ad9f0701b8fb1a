// Copyright (C) 2015-2025 The Neo Project.
//
// memory_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{IoError, IoResult, Serializable};

/// A cursor over a byte slice mirroring [`BinaryWriter`](crate::BinaryWriter).
///
/// `mark()` / `reset()` let a parser checkpoint the position and rewind to it,
/// which script classifiers use to check a grammar in two passes.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
    marker: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self {
            memory,
            pos: 0,
            marker: 0,
        }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        if self.remaining() < move_by {
            Err(IoError::EndOfStream {
                needed: move_by,
                available: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.memory.len()
    }

    /// Remembers the current position.
    pub fn mark(&mut self) {
        self.marker = self.pos;
    }

    /// Rewinds to the last `mark()`, or to the start if none was set.
    pub fn reset(&mut self) {
        self.pos = self.marker;
    }

    #[inline(always)]
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure_position(1)?;
        Ok(self.memory[self.pos])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::format(format!("invalid boolean value {other}"))),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> IoResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_memory(N)?);
        Ok(out)
    }

    /// Reads a var-int, failing when it is larger than `max`.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let b = self.read_u8()?;
        let value = match b {
            0xFD => self.read_u16()? as u64,
            0xFE => self.read_u32()? as u64,
            0xFF => self.read_u64()?,
            _ => b as u64,
        };
        if value > max {
            return Err(IoError::format(format!(
                "var-int {value} exceeds maximum {max}"
            )));
        }
        Ok(value)
    }

    /// Borrows the next `count` bytes.
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    pub fn read_fixed_bytes(&mut self, count: usize) -> IoResult<Vec<u8>> {
        Ok(self.read_memory(count)?.to_vec())
    }

    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let length = self.read_var_int(max as u64)? as usize;
        self.read_fixed_bytes(length)
    }

    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes).map_err(|_| IoError::format("invalid UTF-8 sequence"))
    }

    /// Reads everything left in the buffer.
    pub fn read_to_end(&mut self) -> IoResult<&'a [u8]> {
        self.read_memory(self.remaining())
    }

    pub fn read_serializable<T: Serializable>(&mut self) -> IoResult<T> {
        T::deserialize(self)
    }

    /// Reads a var-int count (at most `max`) followed by that many items.
    pub fn read_serializable_vec<T: Serializable>(&mut self, max: usize) -> IoResult<Vec<T>> {
        let count = self.read_var_int(max as u64)? as usize;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::deserialize(self)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_var_int_forms() {
        let data = [0xFC, 0xFD, 0xFD, 0x00, 0xFE, 0x00, 0x00, 0x01, 0x00];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 252);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 253);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 65536);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_read_var_int_over_max() {
        let mut reader = MemoryReader::new(&[0x11]);
        assert!(matches!(reader.read_var_int(16), Err(IoError::Format(_))));
    }

    #[test]
    fn test_mark_and_reset() {
        let data = [1u8, 2, 3, 4];
        let mut reader = MemoryReader::new(&data);
        reader.read_u8().unwrap();
        reader.mark();
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
        reader.reset();
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u8().unwrap(), 2);
    }

    #[test]
    fn test_end_of_stream() {
        let mut reader = MemoryReader::new(&[0x01, 0x02]);
        assert_eq!(
            reader.read_u32(),
            Err(IoError::EndOfStream {
                needed: 4,
                available: 2
            })
        );
        // a failed read leaves the cursor untouched
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_bool_rejects_other_values() {
        let mut reader = MemoryReader::new(&[0x01, 0x02]);
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().is_err());
    }
}
