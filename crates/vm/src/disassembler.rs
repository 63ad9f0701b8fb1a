// Copyright (C) 2015-2025 The Neo Project.
//
// disassembler.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Walks a script instruction by instruction.
//!
//! Bytes outside the instruction set are rejected rather than skipped, as are
//! operands that run past the end of the script.

use crate::{InteropService, OpCode, VmError, VmResult};
use std::fmt;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Position of the opcode byte in the script.
    pub offset: usize,
    pub opcode: OpCode,
    /// Operand bytes, without the length prefix of PUSHDATA instructions.
    pub operand: Vec<u8>,
}

impl Instruction {
    /// Encoded size of the instruction, prefix included.
    pub fn size(&self) -> usize {
        1 + self.opcode.operand_size().size_prefix() + self.operand.len()
    }

    /// The interop service a SYSCALL targets, if it is a known one.
    pub fn syscall(&self) -> Option<InteropService> {
        match self.opcode {
            OpCode::SYSCALL => InteropService::from_hash(&self.operand),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(service) = self.syscall() {
            return write!(f, "{} {}", self.opcode, service.name());
        }
        if self.operand.is_empty() && self.opcode.operand_size().is_none() {
            write!(f, "{}", self.opcode)
        } else {
            write!(f, "{} {}", self.opcode, hex::encode(&self.operand))
        }
    }
}

/// Decodes every instruction of `script`.
pub fn disassemble(script: &[u8]) -> VmResult<Vec<Instruction>> {
    let mut instructions = Vec::new();
    let mut offset = 0;

    while offset < script.len() {
        let byte = script[offset];
        let opcode = OpCode::from_u8(byte).ok_or(VmError::UnknownOpCode {
            offset,
            opcode: byte,
        })?;
        let truncated = || VmError::TruncatedOperand {
            offset,
            opcode: opcode.name().to_string(),
        };

        let operand_size = opcode.operand_size();
        let mut cursor = offset + 1;
        let len = if operand_size.has_size_prefix() {
            let prefix_len = operand_size.size_prefix();
            let prefix = script
                .get(cursor..cursor + prefix_len)
                .ok_or_else(truncated)?;
            cursor += prefix_len;
            prefix
                .iter()
                .rev()
                .fold(0usize, |acc, b| (acc << 8) | *b as usize)
        } else {
            operand_size.size()
        };

        let operand = script
            .get(cursor..cursor.checked_add(len).ok_or_else(truncated)?)
            .ok_or_else(truncated)?
            .to_vec();

        instructions.push(Instruction {
            offset,
            opcode,
            operand,
        });
        offset = cursor + len;
    }

    Ok(instructions)
}
