// Copyright (C) 2015-2025 The Neo Project.
//
// script.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script commands: disasm, classify, verification, call.

use super::parse_param;
use anyhow::{bail, Result};
use neo_core::{UInt160, VerificationScript};
use neo_cryptography::ECPoint;
use neo_vm::{disassemble, CallFlags, ScriptBuilder};
use neo_wallets::script_hash_to_address;
use std::fmt::Write as _;
use tracing::debug;

/// One instruction per line, prefixed with its offset.
pub fn disasm(script: &[u8]) -> Result<String> {
    let instructions = disassemble(script)?;
    debug!(count = instructions.len(), "disassembled script");
    let mut out = String::new();
    for instruction in instructions {
        writeln!(out, "{:04} {}", instruction.offset, instruction)?;
    }
    Ok(out)
}

pub fn classify(script: &[u8]) -> Result<String> {
    let verification = VerificationScript::new(script.to_vec());
    let mut out = String::new();
    if verification.is_single_sig() {
        let keys = verification.public_keys()?;
        writeln!(out, "type: single-sig")?;
        writeln!(out, "key: {}", keys[0])?;
    } else if verification.is_multi_sig() {
        writeln!(out, "type: multi-sig")?;
        writeln!(out, "threshold: {}", verification.signing_threshold()?)?;
        writeln!(out, "participants: {}", verification.nr_of_accounts()?)?;
        for key in verification.public_keys()? {
            writeln!(out, "key: {key}")?;
        }
    } else {
        writeln!(out, "type: other")?;
    }
    write_identity(&mut out, &verification.script_hash())?;
    Ok(out)
}

/// Single-sig script for one key, or a multi-sig script when `threshold` is given.
pub fn verification(keys: &[String], threshold: Option<usize>) -> Result<String> {
    let keys = keys
        .iter()
        .map(|key| ECPoint::from_hex(key))
        .collect::<Result<Vec<_>, _>>()?;

    let script = match (threshold, keys.as_slice()) {
        (Some(threshold), _) => VerificationScript::from_public_keys(&keys, threshold)?,
        (None, [key]) => VerificationScript::from_public_key(key),
        (None, _) => bail!("several keys need a --threshold"),
    };

    let mut out = String::new();
    writeln!(out, "script: {}", hex::encode(script.script()))?;
    write_identity(&mut out, &script.script_hash())?;
    Ok(out)
}

/// Hex of a `System.Contract.Call` script, optionally draining an iterator result.
pub fn call(
    contract: &str,
    method: &str,
    params: &[String],
    unwrap_iterator: Option<u32>,
) -> Result<String> {
    let contract = UInt160::parse(contract)?;
    let params = params
        .iter()
        .map(|param| parse_param(param))
        .collect::<Result<Vec<_>>>()?;

    let script = match unwrap_iterator {
        Some(max_items) => ScriptBuilder::build_contract_call_and_unwrap_iterator(
            contract,
            method,
            &params,
            max_items,
            CallFlags::ALL,
        )?,
        None => {
            let mut builder = ScriptBuilder::new();
            builder.contract_call(contract, method, &params, CallFlags::ALL)?;
            builder.into_bytes()
        }
    };
    Ok(format!("{}\n", hex::encode(script)))
}

fn write_identity(out: &mut String, script_hash: &UInt160) -> Result<()> {
    writeln!(out, "script hash: {script_hash}")?;
    writeln!(out, "address: {}", script_hash_to_address(script_hash))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16";

    #[test]
    fn test_disasm_lists_offsets() {
        let out = disasm(&[0x00, 0x11, 0x40]).unwrap();
        assert_eq!(out, "0000 PUSHINT8 11\n0002 RET\n");
        assert!(disasm(&[0xFF]).is_err());
    }

    #[test]
    fn test_verification_then_classify() {
        let out = verification(&[KEY.to_string()], None).unwrap();
        let script_hex = out.lines().next().unwrap().trim_start_matches("script: ");
        assert_eq!(script_hex.len(), 80);

        let classified = classify(&hex::decode(script_hex).unwrap()).unwrap();
        assert!(classified.starts_with("type: single-sig\n"));
        assert!(classified.contains(KEY));
    }

    #[test]
    fn test_several_keys_need_threshold() {
        assert!(verification(&[KEY.to_string(), KEY.to_string()], None).is_err());
    }

    #[test]
    fn test_classify_other() {
        assert!(classify(&[0x40]).unwrap().starts_with("type: other"));
    }

    #[test]
    fn test_call_script_ends_with_syscall() {
        let out = call(
            "0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04",
            "symbol",
            &[],
            None,
        )
        .unwrap();
        // SYSCALL System.Contract.Call
        assert!(out.trim_end().ends_with("41627d5b52"));
    }
}
