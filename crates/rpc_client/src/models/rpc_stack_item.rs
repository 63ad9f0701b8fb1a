// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_stack_item.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A VM stack item as the node renders it: `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcStackItem {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl RpcStackItem {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self {
            item_type: "Integer".to_string(),
            value: Some(Value::String(value.into().to_string())),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            item_type: "Boolean".to_string(),
            value: Some(Value::Bool(value)),
        }
    }

    pub fn byte_string(value: &[u8]) -> Self {
        Self {
            item_type: "ByteString".to_string(),
            value: Some(Value::String(STANDARD.encode(value))),
        }
    }

    /// Integer value; byte strings are read as little-endian two's complement.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self.item_type.as_str() {
            "Integer" => match self.value.as_ref()? {
                Value::String(text) => text.parse().ok(),
                Value::Number(number) => number.as_i64().map(BigInt::from),
                _ => None,
            },
            "Boolean" => self.as_bool().map(|flag| BigInt::from(flag as u8)),
            "ByteString" | "Buffer" => self
                .as_bytes()
                .map(|bytes| BigInt::from_signed_bytes_le(&bytes)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value.as_ref()? {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match (self.item_type.as_str(), self.value.as_ref()?) {
            ("ByteString" | "Buffer", Value::String(text)) => STANDARD.decode(text).ok(),
            _ => None,
        }
    }

    /// Byte string value decoded as UTF-8.
    pub fn as_string(&self) -> Option<String> {
        self.as_bytes().and_then(|bytes| String::from_utf8(bytes).ok())
    }
}
