// Copyright (C) 2015-2025 The Neo Project.
//
// operand_size.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Operand size information for Neo VM opcodes.

/// How the operand of an instruction is encoded.
///
/// Either a fixed number of bytes follows the opcode, or a little-endian
/// length prefix of `size_prefix` bytes followed by that many bytes. Both
/// zero means the opcode takes no operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandSize {
    size: usize,
    size_prefix: usize,
}

impl OperandSize {
    /// No operand.
    pub const NONE: Self = Self {
        size: 0,
        size_prefix: 0,
    };

    /// Creates a new operand size with a fixed size.
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            size_prefix: 0,
        }
    }

    /// Creates a new operand size with a size prefix.
    pub const fn prefix(size_prefix: usize) -> Self {
        Self {
            size: 0,
            size_prefix,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn size_prefix(&self) -> usize {
        self.size_prefix
    }

    pub fn has_fixed_size(&self) -> bool {
        self.size > 0
    }

    pub fn has_size_prefix(&self) -> bool {
        self.size_prefix > 0
    }

    pub fn is_none(&self) -> bool {
        self.size == 0 && self.size_prefix == 0
    }
}
