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

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid public key: {0}")]
    InvalidPoint(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
