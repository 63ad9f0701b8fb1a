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

use thiserror::Error;

/// Errors produced while encoding or decoding wire data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    #[error("unexpected end of data: needed {needed} bytes, {available} available")]
    EndOfStream { needed: usize, available: usize },

    #[error("invalid format: {0}")]
    Format(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl IoError {
    pub fn format(message: impl Into<String>) -> Self {
        IoError::Format(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        IoError::InvalidData(message.into())
    }
}

pub type IoResult<T> = Result<T, IoError>;
