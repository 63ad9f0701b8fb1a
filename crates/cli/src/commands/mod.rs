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

//! Command implementations. Each returns the text to print.

pub mod script;
pub mod tx;

use anyhow::{anyhow, bail, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use neo_core::{ContractParameter, UInt160, UInt256};
use neo_cryptography::ECPoint;
use num_bigint::BigInt;

/// Decodes hex (optionally `0x`-prefixed) or, failing that, base64.
pub fn parse_bytes(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if let Ok(bytes) = hex::decode(digits) {
        return Ok(bytes);
    }
    general_purpose::STANDARD
        .decode(trimmed)
        .map_err(|_| anyhow!("'{input}' is neither hex nor base64"))
}

/// Parses a `type:value` argument, e.g. `int:42` or `hash160:0x...`.
pub fn parse_param(input: &str) -> Result<ContractParameter> {
    let (kind, value) = input
        .split_once(':')
        .ok_or_else(|| anyhow!("argument '{input}' is not of the form type:value"))?;

    let param = match kind.to_ascii_lowercase().as_str() {
        "int" | "integer" => ContractParameter::Integer(
            value
                .parse::<BigInt>()
                .with_context(|| format!("invalid integer '{value}'"))?,
        ),
        "bool" | "boolean" => ContractParameter::Boolean(
            value
                .parse()
                .with_context(|| format!("invalid boolean '{value}'"))?,
        ),
        "str" | "string" => ContractParameter::string(value),
        "hash160" => ContractParameter::Hash160(UInt160::parse(value)?),
        "hash256" => ContractParameter::Hash256(UInt256::parse(value)?),
        "bytes" => ContractParameter::byte_array(parse_bytes(value)?),
        "key" | "publickey" => ContractParameter::PublicKey(
            ECPoint::from_hex(value).with_context(|| format!("invalid public key '{value}'"))?,
        ),
        "null" | "any" => ContractParameter::Any,
        other => bail!("unknown argument type '{other}'"),
    };
    Ok(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes() {
        assert_eq!(parse_bytes("0x0c00").unwrap(), vec![0x0C, 0x00]);
        assert_eq!(parse_bytes("0C00").unwrap(), vec![0x0C, 0x00]);
        assert_eq!(parse_bytes("DAA=").unwrap(), vec![0x0C, 0x00]);
        assert!(parse_bytes("not bytes!").is_err());
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("int:-7").unwrap(), ContractParameter::integer(-7));
        assert_eq!(parse_param("bool:true").unwrap(), ContractParameter::Boolean(true));
        assert_eq!(parse_param("str:a:b").unwrap(), ContractParameter::string("a:b"));
        assert_eq!(
            parse_param("hash160:0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04").unwrap(),
            ContractParameter::Hash160(
                UInt160::parse("0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04").unwrap()
            )
        );
        assert!(parse_param("int:x").is_err());
        assert!(parse_param("float:1.5").is_err());
        assert!(parse_param("42").is_err());
    }
}
