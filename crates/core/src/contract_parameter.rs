// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed arguments for contract invocations.

use crate::{CoreError, CoreResult, UInt160, UInt256};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo_config::SIGNATURE_SIZE;
use neo_cryptography::ECPoint;
use neo_vm::{ScriptBuilder, ScriptParam, VmError, VmResult};
use num_bigint::BigInt;
use serde_json::{json, Value};
use std::fmt;

/// Wire tags of the parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContractParameterType {
    Any = 0x00,
    Boolean = 0x10,
    Integer = 0x11,
    ByteArray = 0x12,
    String = 0x13,
    Hash160 = 0x14,
    Hash256 = 0x15,
    PublicKey = 0x16,
    Signature = 0x17,
    Array = 0x20,
    Map = 0x22,
    InteropInterface = 0x30,
    Void = 0xff,
}

impl ContractParameterType {
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::ByteArray => "ByteArray",
            Self::String => "String",
            Self::Hash160 => "Hash160",
            Self::Hash256 => "Hash256",
            Self::PublicKey => "PublicKey",
            Self::Signature => "Signature",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::InteropInterface => "InteropInterface",
            Self::Void => "Void",
        }
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A contract parameter. Arrays and maps own their children; map entries
/// keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    Hash256(UInt256),
    PublicKey(ECPoint),
    Signature(Vec<u8>),
    Array(Vec<ContractParameter>),
    Map(Vec<(ContractParameter, ContractParameter)>),
    InteropInterface,
    Void,
}

impl ContractParameter {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        ContractParameter::Integer(value.into())
    }

    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        ContractParameter::ByteArray(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ContractParameter::String(value.into())
    }

    /// A signature parameter; the value must be exactly 64 bytes.
    pub fn signature(value: &[u8]) -> CoreResult<Self> {
        if value.len() != SIGNATURE_SIZE {
            return Err(CoreError::InvalidArgument(format!(
                "a signature must be {SIGNATURE_SIZE} bytes, got {}",
                value.len()
            )));
        }
        Ok(ContractParameter::Signature(value.to_vec()))
    }

    pub fn array(items: impl IntoIterator<Item = ContractParameter>) -> Self {
        ContractParameter::Array(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (ContractParameter, ContractParameter)>) -> Self {
        ContractParameter::Map(entries.into_iter().collect())
    }

    pub fn param_type(&self) -> ContractParameterType {
        match self {
            ContractParameter::Any => ContractParameterType::Any,
            ContractParameter::Boolean(_) => ContractParameterType::Boolean,
            ContractParameter::Integer(_) => ContractParameterType::Integer,
            ContractParameter::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameter::String(_) => ContractParameterType::String,
            ContractParameter::Hash160(_) => ContractParameterType::Hash160,
            ContractParameter::Hash256(_) => ContractParameterType::Hash256,
            ContractParameter::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameter::Signature(_) => ContractParameterType::Signature,
            ContractParameter::Array(_) => ContractParameterType::Array,
            ContractParameter::Map(_) => ContractParameterType::Map,
            ContractParameter::InteropInterface => ContractParameterType::InteropInterface,
            ContractParameter::Void => ContractParameterType::Void,
        }
    }

    /// The `{"type", "value"}` object used by `invokefunction`.
    pub fn to_json(&self) -> Value {
        let kind = self.param_type().name();
        match self {
            ContractParameter::Any
            | ContractParameter::InteropInterface
            | ContractParameter::Void => json!({ "type": kind }),
            ContractParameter::Boolean(value) => json!({ "type": kind, "value": value }),
            ContractParameter::Integer(value) => {
                json!({ "type": kind, "value": value.to_string() })
            }
            ContractParameter::ByteArray(bytes) | ContractParameter::Signature(bytes) => {
                json!({ "type": kind, "value": STANDARD.encode(bytes) })
            }
            ContractParameter::String(value) => json!({ "type": kind, "value": value }),
            ContractParameter::Hash160(hash) => json!({ "type": kind, "value": hash.to_string() }),
            ContractParameter::Hash256(hash) => json!({ "type": kind, "value": hash.to_string() }),
            ContractParameter::PublicKey(key) => json!({ "type": kind, "value": key.to_hex() }),
            ContractParameter::Array(items) => json!({
                "type": kind,
                "value": items.iter().map(ContractParameter::to_json).collect::<Vec<_>>(),
            }),
            ContractParameter::Map(entries) => json!({
                "type": kind,
                "value": entries
                    .iter()
                    .map(|(k, v)| json!({ "key": k.to_json(), "value": v.to_json() }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

impl ScriptParam for ContractParameter {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        match self {
            ContractParameter::Any => {
                builder.push_null();
            }
            ContractParameter::Boolean(value) => {
                builder.push_bool(*value);
            }
            ContractParameter::Integer(value) => {
                builder.push_integer(value)?;
            }
            ContractParameter::ByteArray(bytes) | ContractParameter::Signature(bytes) => {
                builder.push_data(bytes);
            }
            ContractParameter::String(value) => {
                builder.push_string(value);
            }
            ContractParameter::Hash160(hash) => {
                builder.push_data(hash.as_bytes());
            }
            ContractParameter::Hash256(hash) => {
                builder.push_data(hash.as_bytes());
            }
            ContractParameter::PublicKey(key) => {
                builder.push_data(&key.encode_compressed());
            }
            ContractParameter::Array(items) => {
                builder.push_array(items)?;
            }
            ContractParameter::Map(entries) => {
                builder.push_map(entries)?;
            }
            ContractParameter::InteropInterface | ContractParameter::Void => {
                return Err(VmError::invalid_argument(format!(
                    "parameter type {} cannot be pushed to a script",
                    self.param_type()
                )))
            }
        }
        Ok(())
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(value.into())
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<String> for ContractParameter {
    fn from(value: String) -> Self {
        ContractParameter::String(value)
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        ContractParameter::Hash160(value)
    }
}

impl From<UInt256> for ContractParameter {
    fn from(value: UInt256) -> Self {
        ContractParameter::Hash256(value)
    }
}

impl From<ECPoint> for ContractParameter {
    fn from(value: ECPoint) -> Self {
        ContractParameter::PublicKey(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_vm::OpCode;

    fn script_of(param: &ContractParameter) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.push_param(param).unwrap();
        builder.into_bytes()
    }

    #[test]
    fn test_push_scalars() {
        assert_eq!(script_of(&ContractParameter::Any), vec![OpCode::PUSHNULL as u8]);
        assert_eq!(script_of(&true.into()), vec![OpCode::PUSHT as u8]);
        assert_eq!(script_of(&ContractParameter::integer(17)), vec![0x00, 0x11]);
        assert_eq!(script_of(&"".into()), vec![0x0c, 0x00]);

        let hash = UInt160::from_array([3u8; 20]);
        let script = script_of(&hash.into());
        assert_eq!(script[..2], [0x0c, 20]);
        assert_eq!(&script[2..], hash.as_bytes());
    }

    #[test]
    fn test_push_array_keeps_order_for_pack() {
        let param = ContractParameter::array([
            ContractParameter::integer(1),
            ContractParameter::integer(2),
        ]);
        assert_eq!(
            script_of(&param),
            vec![
                OpCode::PUSH2 as u8,
                OpCode::PUSH1 as u8,
                OpCode::PUSH2 as u8,
                OpCode::PACK as u8
            ]
        );
        assert_eq!(
            script_of(&ContractParameter::array(Vec::new())),
            vec![OpCode::NEWARRAY0 as u8]
        );
    }

    #[test]
    fn test_push_map_uses_insertion_order() {
        let param = ContractParameter::map([
            (ContractParameter::integer(1), ContractParameter::integer(2)),
            (ContractParameter::integer(3), ContractParameter::integer(4)),
        ]);
        assert_eq!(
            script_of(&param),
            vec![
                OpCode::PUSH2 as u8,
                OpCode::PUSH1 as u8,
                OpCode::PUSH4 as u8,
                OpCode::PUSH3 as u8,
                OpCode::PUSH2 as u8,
                OpCode::PACKMAP as u8
            ]
        );
    }

    #[test]
    fn test_unpushable_types() {
        let mut builder = ScriptBuilder::new();
        assert!(builder.push_param(&ContractParameter::Void).is_err());
        assert!(builder.push_param(&ContractParameter::InteropInterface).is_err());
    }

    #[test]
    fn test_signature_length() {
        assert!(ContractParameter::signature(&[0u8; 63]).is_err());
        assert_eq!(
            ContractParameter::signature(&[0u8; 64]).unwrap().param_type(),
            ContractParameterType::Signature
        );
    }

    #[test]
    fn test_json() {
        assert_eq!(
            ContractParameter::integer(-5).to_json(),
            json!({ "type": "Integer", "value": "-5" })
        );
        assert_eq!(
            ContractParameter::byte_array(vec![1, 2, 3]).to_json(),
            json!({ "type": "ByteArray", "value": "AQID" })
        );
        let map = ContractParameter::map([(true.into(), "x".into())]).to_json();
        assert_eq!(map["value"][0]["key"]["type"], "Boolean");
        assert_eq!(map["value"][0]["value"]["value"], "x");
    }
}
