// Copyright (C) 2015-2025 The Neo Project.
//
// script_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Decoding of push instructions from a script.

use crate::{OpCode, VmError, VmResult};
use neo_io::MemoryReader;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Reads NeoVM push instructions from a [`MemoryReader`].
pub trait ScriptReader {
    /// Reads one opcode byte, failing on bytes outside the instruction set.
    fn read_opcode(&mut self) -> VmResult<OpCode>;

    /// Decodes a PUSHDATA1/2/4 instruction and returns its payload.
    fn read_push_data(&mut self) -> VmResult<Vec<u8>>;

    /// Decodes any PUSHM1..PUSH16 or PUSHINT8..PUSHINT256 instruction.
    fn read_push_big_int(&mut self) -> VmResult<BigInt>;

    /// Like [`read_push_big_int`](Self::read_push_big_int), bounded to `i64`.
    fn read_push_int(&mut self) -> VmResult<i64>;

    /// Decodes a PUSHDATA instruction as UTF-8.
    fn read_push_string(&mut self) -> VmResult<String>;
}

impl ScriptReader for MemoryReader<'_> {
    fn read_opcode(&mut self) -> VmResult<OpCode> {
        let offset = self.position();
        let byte = self.read_u8()?;
        OpCode::from_u8(byte).ok_or(VmError::UnknownOpCode {
            offset,
            opcode: byte,
        })
    }

    fn read_push_data(&mut self) -> VmResult<Vec<u8>> {
        let opcode = self.read_opcode()?;
        let len = match opcode {
            OpCode::PUSHDATA1 => self.read_u8()? as usize,
            OpCode::PUSHDATA2 => self.read_u16()? as usize,
            OpCode::PUSHDATA4 => self.read_u32()? as usize,
            other => {
                return Err(VmError::UnexpectedInstruction(format!(
                    "expected PUSHDATA, found {other}"
                )))
            }
        };
        Ok(self.read_fixed_bytes(len)?)
    }

    fn read_push_big_int(&mut self) -> VmResult<BigInt> {
        let opcode = self.read_opcode()?;
        let byte = opcode as u8;
        if (OpCode::PUSHM1 as u8..=OpCode::PUSH16 as u8).contains(&byte) {
            return Ok(BigInt::from(byte as i32 - OpCode::PUSH0 as i32));
        }
        let width = match opcode {
            OpCode::PUSHINT8
            | OpCode::PUSHINT16
            | OpCode::PUSHINT32
            | OpCode::PUSHINT64
            | OpCode::PUSHINT128
            | OpCode::PUSHINT256 => opcode.operand_size().size(),
            other => {
                return Err(VmError::UnexpectedInstruction(format!(
                    "expected an integer push, found {other}"
                )))
            }
        };
        Ok(BigInt::from_signed_bytes_le(self.read_memory(width)?))
    }

    fn read_push_int(&mut self) -> VmResult<i64> {
        let value = self.read_push_big_int()?;
        value.to_i64().ok_or_else(|| {
            VmError::UnexpectedInstruction(format!("integer {value} does not fit in 64 bits"))
        })
    }

    fn read_push_string(&mut self) -> VmResult<String> {
        String::from_utf8(self.read_push_data()?)
            .map_err(|_| VmError::UnexpectedInstruction("pushed data is not UTF-8".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_small_integers() {
        let script = [0x0F, 0x10, 0x20];
        let mut reader = MemoryReader::new(&script);
        assert_eq!(reader.read_push_int().unwrap(), -1);
        assert_eq!(reader.read_push_int().unwrap(), 0);
        assert_eq!(reader.read_push_int().unwrap(), 16);
    }

    #[test]
    fn test_read_pushint() {
        let script = [0x00, 0x11, 0x01, 0x00, 0xFF];
        let mut reader = MemoryReader::new(&script);
        assert_eq!(reader.read_push_int().unwrap(), 17);
        assert_eq!(reader.read_push_int().unwrap(), -256);
    }

    #[test]
    fn test_read_push_data() {
        let script = [0x0C, 0x02, 0xAA, 0xBB, 0x0D, 0x01, 0x00, 0xCC];
        let mut reader = MemoryReader::new(&script);
        assert_eq!(reader.read_push_data().unwrap(), vec![0xAA, 0xBB]);
        assert_eq!(reader.read_push_data().unwrap(), vec![0xCC]);
    }

    #[test]
    fn test_wrong_instruction() {
        let mut reader = MemoryReader::new(&[0x41]);
        assert!(matches!(
            reader.read_push_data(),
            Err(VmError::UnexpectedInstruction(_))
        ));
        let mut reader = MemoryReader::new(&[0x0C, 0x01]);
        assert!(matches!(reader.read_push_big_int(), Err(VmError::UnexpectedInstruction(_))));
        let mut reader = MemoryReader::new(&[0x06]);
        assert!(matches!(
            reader.read_opcode(),
            Err(VmError::UnknownOpCode {
                offset: 0,
                opcode: 6
            })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let mut reader = MemoryReader::new(&[0x0C, 0x05, 0x01]);
        assert!(matches!(reader.read_push_data(), Err(VmError::Io(_))));
    }
}
