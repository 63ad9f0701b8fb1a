// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes.

use crate::UInt256;
use neo_config::HASH_SIZE;
use neo_io::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde_json::{json, Value};

/// Largest oracle result carried by an `OracleResponse` attribute.
pub const MAX_ORACLE_RESULT_SIZE: usize = u16::MAX as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionAttributeType {
    HighPriority = 0x01,
    OracleResponse = 0x11,
    NotValidBefore = 0x20,
    Conflicts = 0x21,
}

impl TransactionAttributeType {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::HighPriority),
            0x11 => Some(Self::OracleResponse),
            0x20 => Some(Self::NotValidBefore),
            0x21 => Some(Self::Conflicts),
            _ => None,
        }
    }

    /// Whether a transaction may carry more than one attribute of this type.
    pub fn allows_multiple(self) -> bool {
        matches!(self, Self::Conflicts)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::HighPriority => "HighPriority",
            Self::OracleResponse => "OracleResponse",
            Self::NotValidBefore => "NotValidBefore",
            Self::Conflicts => "Conflicts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OracleResponseCode {
    Success = 0x00,
    ProtocolNotSupported = 0x10,
    ConsensusUnreachable = 0x12,
    NotFound = 0x14,
    Timeout = 0x16,
    Forbidden = 0x18,
    ResponseTooLarge = 0x1a,
    InsufficientFunds = 0x1c,
    ContentTypeNotSupported = 0x1f,
    Error = 0xff,
}

impl OracleResponseCode {
    const ALL: [OracleResponseCode; 10] = [
        Self::Success,
        Self::ProtocolNotSupported,
        Self::ConsensusUnreachable,
        Self::NotFound,
        Self::Timeout,
        Self::Forbidden,
        Self::ResponseTooLarge,
        Self::InsufficientFunds,
        Self::ContentTypeNotSupported,
        Self::Error,
    ];

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|code| *code as u8 == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionAttribute {
    /// Committee-only priority in the memory pool.
    HighPriority,

    /// Result of an oracle request. Only valid together with a non-success
    /// code when `result` is empty.
    OracleResponse {
        id: u64,
        code: OracleResponseCode,
        result: Vec<u8>,
    },

    /// The transaction is invalid before this block height.
    NotValidBefore { height: u32 },

    /// The transaction conflicts with the one of this hash.
    Conflicts { hash: UInt256 },
}

impl TransactionAttribute {
    pub fn attribute_type(&self) -> TransactionAttributeType {
        match self {
            TransactionAttribute::HighPriority => TransactionAttributeType::HighPriority,
            TransactionAttribute::OracleResponse { .. } => TransactionAttributeType::OracleResponse,
            TransactionAttribute::NotValidBefore { .. } => TransactionAttributeType::NotValidBefore,
            TransactionAttribute::Conflicts { .. } => TransactionAttributeType::Conflicts,
        }
    }

    pub fn to_json(&self) -> Value {
        let kind = self.attribute_type().name();
        match self {
            TransactionAttribute::HighPriority => json!({ "type": kind }),
            TransactionAttribute::OracleResponse { id, code, result } => {
                use base64::{engine::general_purpose::STANDARD, Engine as _};
                json!({
                    "type": kind,
                    "id": id,
                    "code": format!("{code:?}"),
                    "result": STANDARD.encode(result),
                })
            }
            TransactionAttribute::NotValidBefore { height } => {
                json!({ "type": kind, "height": height })
            }
            TransactionAttribute::Conflicts { hash } => {
                json!({ "type": kind, "hash": hash.to_string() })
            }
        }
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self {
            TransactionAttribute::HighPriority => 0,
            TransactionAttribute::OracleResponse { result, .. } => {
                8 + 1 + get_var_bytes_size(result.len())
            }
            TransactionAttribute::NotValidBefore { .. } => 4,
            TransactionAttribute::Conflicts { .. } => HASH_SIZE,
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.attribute_type() as u8)?;
        match self {
            TransactionAttribute::HighPriority => Ok(()),
            TransactionAttribute::OracleResponse { id, code, result } => {
                writer.write_u64(*id)?;
                writer.write_u8(*code as u8)?;
                writer.write_var_bytes(result)
            }
            TransactionAttribute::NotValidBefore { height } => writer.write_u32(*height),
            TransactionAttribute::Conflicts { hash } => hash.serialize(writer),
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let byte = reader.read_u8()?;
        let kind = TransactionAttributeType::from_byte(byte).ok_or_else(|| {
            IoError::format(format!("unknown transaction attribute type 0x{byte:02x}"))
        })?;
        Ok(match kind {
            TransactionAttributeType::HighPriority => TransactionAttribute::HighPriority,
            TransactionAttributeType::OracleResponse => {
                let id = reader.read_u64()?;
                let code_byte = reader.read_u8()?;
                let code = OracleResponseCode::from_byte(code_byte).ok_or_else(|| {
                    IoError::format(format!("unknown oracle response code 0x{code_byte:02x}"))
                })?;
                let result = reader.read_var_bytes(MAX_ORACLE_RESULT_SIZE)?;
                if code != OracleResponseCode::Success && !result.is_empty() {
                    return Err(IoError::invalid_data(
                        "a failed oracle response cannot carry a result",
                    ));
                }
                TransactionAttribute::OracleResponse { id, code, result }
            }
            TransactionAttributeType::NotValidBefore => TransactionAttribute::NotValidBefore {
                height: reader.read_u32()?,
            },
            TransactionAttributeType::Conflicts => TransactionAttribute::Conflicts {
                hash: UInt256::deserialize(reader)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    #[test]
    fn test_wire_forms() {
        assert_eq!(TransactionAttribute::HighPriority.to_array().unwrap(), vec![0x01]);
        assert_eq!(
            TransactionAttribute::NotValidBefore { height: 0x0102 }.to_array().unwrap(),
            vec![0x20, 0x02, 0x01, 0x00, 0x00]
        );
        let oracle = TransactionAttribute::OracleResponse {
            id: 7,
            code: OracleResponseCode::Success,
            result: vec![0xaa, 0xbb],
        };
        let bytes = oracle.to_array().unwrap();
        assert_eq!(bytes.len(), oracle.size());
        assert_eq!(bytes[0], 0x11);
        assert_eq!(TransactionAttribute::from_array(&bytes).unwrap(), oracle);

        let conflicts = TransactionAttribute::Conflicts {
            hash: UInt256::from_array([9u8; 32]),
        };
        assert_eq!(conflicts.size(), 33);
        assert_eq!(
            TransactionAttribute::from_array(&conflicts.to_array().unwrap()).unwrap(),
            conflicts
        );
    }

    #[test]
    fn test_rejects_unknown_type_and_failed_oracle_result() {
        assert!(TransactionAttribute::from_array(&[0x02]).is_err());
        let mut bytes = vec![0x11];
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&[0x14, 0x01, 0xaa]);
        assert!(TransactionAttribute::from_array(&bytes).is_err());
    }
}
