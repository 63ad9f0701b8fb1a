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

//! Error types of the node client and the transaction builder.

use crate::rpc_exception::RpcException;
use neo_core::CoreError;
use neo_wallets::WalletError;
use thiserror::Error;

/// Failures talking to a node.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The request never produced a response (connection, timeout, HTTP status).
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcException),

    /// The node answered with something that is not the expected result.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Transport(err.to_string())
    }
}

/// Errors of transaction building, signing and sending.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Raised by the error supplier registered for uncovered fees.
    #[error("the sender cannot cover the fees: {0}")]
    FeeCoverage(Box<dyn std::error::Error + Send + Sync>),
}

impl From<neo_io::IoError> for Error {
    fn from(err: neo_io::IoError) -> Self {
        Error::Core(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
