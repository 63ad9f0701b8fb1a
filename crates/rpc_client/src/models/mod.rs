// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC request/response envelopes and the result models the
//! transaction builder consumes.

pub mod rpc_application_log;
pub mod rpc_invoke_result;
pub mod rpc_request;
pub mod rpc_stack_item;
pub mod rpc_transaction;

pub use rpc_application_log::{RpcApplicationLog, RpcExecution, RpcNotification};
pub use rpc_invoke_result::{RpcInvokeResult, VmState};
pub use rpc_request::{RpcRequest, RpcResponse};
pub use rpc_stack_item::RpcStackItem;
pub use rpc_transaction::{RpcNetworkFee, RpcRawTransactionResult};

/// Nodes report GAS amounts as decimal strings; older ones as numbers.
pub(crate) mod amount {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid amount '{text}'"))),
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("invalid amount {number}"))),
            other => Err(D::Error::custom(format!("invalid amount {other}"))),
        }
    }
}
