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

//! Wallet error types.

use neo_core::{CoreError, UInt160};
use neo_cryptography::CryptoError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("account {0} is not a multi-sig account")]
    NotMultiSig(UInt160),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<CryptoError> for WalletError {
    fn from(err: CryptoError) -> Self {
        WalletError::InvalidPrivateKey(err.to_string())
    }
}

pub type WalletResult<T> = std::result::Result<T, WalletError>;
