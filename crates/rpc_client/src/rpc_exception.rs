// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_exception.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error object of a JSON-RPC response.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message} (code {code})")]
pub struct RpcException {
    pub code: i64,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcException {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}
