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

//! Error taxonomy for the transaction model.

use neo_cryptography::CryptoError;
use neo_io::IoError;
use neo_vm::VmError;
use thiserror::Error;

/// Every failure carries a message naming the violated contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed input to a constructor or builder call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Wire bytes violate the expected grammar.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// An operation was invoked before its prerequisite.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A verification script matches neither the single- nor the multi-sig grammar.
    #[error("script format error: {0}")]
    ScriptFormat(String),

    /// A signer restriction or scope violates its limits.
    #[error("signer configuration error: {0}")]
    SignerConfiguration(String),

    /// Signer/witness mismatch, oversize transaction or unrecoverable fee shortfall.
    #[error("transaction configuration error: {0}")]
    TransactionConfiguration(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl From<IoError> for CoreError {
    fn from(err: IoError) -> Self {
        CoreError::Deserialization(err.to_string())
    }
}

impl From<VmError> for CoreError {
    fn from(err: VmError) -> Self {
        match err {
            VmError::InvalidArgument(message) => CoreError::InvalidArgument(message),
            other => CoreError::Deserialization(other.to_string()),
        }
    }
}

impl From<CryptoError> for CoreError {
    fn from(err: CryptoError) -> Self {
        CoreError::InvalidArgument(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
