// Copyright (C) 2015-2025 The Neo Project.
//
// uint.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fixed-size little-endian hashes: [`UInt160`] and [`UInt256`].
//!
//! Bytes are stored in wire (little-endian) order. The string form is the
//! byte-reversed hex with a `0x` prefix, as shown by explorers and RPC.

use crate::{CoreError, CoreResult};
use neo_config::{ADDRESS_SIZE, HASH_SIZE};
use neo_cryptography::hash160;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use neo_vm::{ScriptBuilder, ScriptParam, VmResult};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! define_uint {
    ($(#[$doc:meta])* $name:ident, $len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LENGTH: usize = $len;
            pub const ZERO: Self = Self([0u8; $len]);

            /// Wraps little-endian bytes.
            pub const fn from_array(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Parses little-endian bytes of exactly the right length.
            pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
                let array: [u8; $len] = bytes.try_into().map_err(|_| {
                    CoreError::InvalidArgument(format!(
                        "{} needs {} bytes, got {}",
                        stringify!($name),
                        $len,
                        bytes.len()
                    ))
                })?;
                Ok(Self(array))
            }

            /// Parses a big-endian hex string, with or without `0x`.
            pub fn parse(value: &str) -> CoreResult<Self> {
                let digits = value.strip_prefix("0x").unwrap_or(value);
                let mut bytes = hex::decode(digits).map_err(|e| {
                    CoreError::InvalidArgument(format!(
                        "invalid {} '{value}': {e}",
                        stringify!($name)
                    ))
                })?;
                bytes.reverse();
                Self::from_bytes(&bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Big-endian hex without prefix.
            pub fn to_hex(&self) -> String {
                let mut bytes = self.0;
                bytes.reverse();
                hex::encode(bytes)
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Serializable for $name {
            fn size(&self) -> usize {
                $len
            }

            fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
                writer.write_bytes(&self.0)
            }

            fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
                Ok(Self(reader.read_array()?))
            }
        }

        impl ScriptParam for $name {
            fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
                builder.push_data(&self.0);
                Ok(())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::parse(&value).map_err(D::Error::custom)
            }
        }
    };
}

define_uint!(
    /// A 160-bit script hash, identifying accounts and contracts.
    UInt160,
    ADDRESS_SIZE
);

define_uint!(
    /// A 256-bit hash, identifying transactions and blocks.
    UInt256,
    HASH_SIZE
);

impl UInt160 {
    /// The script hash of a script: RIPEMD160(SHA256(script)).
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }
}
