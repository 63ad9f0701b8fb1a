// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for script assembly and decoding.

use neo_io::IoError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("unknown opcode 0x{opcode:02x} at offset {offset}")]
    UnknownOpCode { offset: usize, opcode: u8 },

    #[error("operand of {opcode} at offset {offset} runs past the end of the script")]
    TruncatedOperand { offset: usize, opcode: String },

    #[error("unexpected instruction: {0}")]
    UnexpectedInstruction(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl VmError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        VmError::InvalidArgument(message.into())
    }
}

pub type VmResult<T> = Result<T, VmError>;
