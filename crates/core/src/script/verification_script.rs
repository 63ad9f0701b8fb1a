// Copyright (C) 2015-2025 The Neo Project.
//
// verification_script.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Verification scripts: the single- and multi-signature templates and their parsers.

use crate::{CoreError, CoreResult, UInt160};
use neo_config::{
    MAX_PUBLIC_KEYS_PER_MULTISIG, MAX_WITNESS_SCRIPT_SIZE, PUBLIC_KEY_SIZE, SINGLE_SIG_SCRIPT_SIZE,
};
use neo_cryptography::ECPoint;
use neo_io::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use neo_vm::{InteropService, OpCode, ScriptBuilder, ScriptReader};

/// The verification half of a witness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VerificationScript {
    script: Vec<u8>,
}

/// Threshold and raw keys of a script matching the multi-sig template.
struct MultiSigLayout<'a> {
    threshold: usize,
    keys: Vec<&'a [u8]>,
}

impl VerificationScript {
    pub fn new(script: Vec<u8>) -> Self {
        Self { script }
    }

    pub fn from_public_key(public_key: &ECPoint) -> Self {
        Self::new(ScriptBuilder::build_verification_script(public_key))
    }

    /// Multi-sig template over `public_keys`, independent of their order.
    pub fn from_public_keys(public_keys: &[ECPoint], threshold: usize) -> CoreResult<Self> {
        Ok(Self::new(ScriptBuilder::build_multi_sig_verification_script(
            public_keys,
            threshold,
        )?))
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    /// `PUSHDATA1 33 <key> SYSCALL CheckSig`, exactly 40 bytes.
    pub fn is_single_sig(&self) -> bool {
        let script = &self.script;
        script.len() == SINGLE_SIG_SCRIPT_SIZE
            && script[0] == OpCode::PUSHDATA1 as u8
            && script[1] as usize == PUBLIC_KEY_SIZE
            && script[35] == OpCode::SYSCALL as u8
            && script[36..] == InteropService::SystemCryptoCheckSig.hash()
    }

    pub fn is_multi_sig(&self) -> bool {
        self.multi_sig_layout().is_some()
    }

    fn multi_sig_layout(&self) -> Option<MultiSigLayout<'_>> {
        let mut reader = MemoryReader::new(&self.script);
        let threshold = usize::try_from(reader.read_push_int().ok()?).ok()?;
        if !(1..=MAX_PUBLIC_KEYS_PER_MULTISIG).contains(&threshold) {
            return None;
        }

        let mut keys = Vec::new();
        loop {
            reader.mark();
            if reader.read_u8().ok()? != OpCode::PUSHDATA1 as u8 {
                reader.reset();
                break;
            }
            if reader.read_u8().ok()? as usize != PUBLIC_KEY_SIZE {
                return None;
            }
            keys.push(reader.read_memory(PUBLIC_KEY_SIZE).ok()?);
        }
        if keys.len() < threshold || keys.len() > MAX_PUBLIC_KEYS_PER_MULTISIG {
            return None;
        }

        let count = usize::try_from(reader.read_push_int().ok()?).ok()?;
        if count != keys.len() {
            return None;
        }
        if reader.read_u8().ok()? != OpCode::SYSCALL as u8 {
            return None;
        }
        let service: [u8; 4] = reader.read_array().ok()?;
        if service != InteropService::SystemCryptoCheckMultisig.hash() || !reader.is_at_end() {
            return None;
        }
        Some(MultiSigLayout { threshold, keys })
    }

    fn format_error(what: &str) -> CoreError {
        CoreError::ScriptFormat(format!(
            "the verification script is neither single- nor multi-sig, no {what} can be determined"
        ))
    }

    /// Signatures required: 1 for single-sig, the threshold for multi-sig.
    pub fn signing_threshold(&self) -> CoreResult<usize> {
        if self.is_single_sig() {
            return Ok(1);
        }
        self.multi_sig_layout()
            .map(|layout| layout.threshold)
            .ok_or_else(|| Self::format_error("signing threshold"))
    }

    /// Number of keys the script is controlled by.
    pub fn nr_of_accounts(&self) -> CoreResult<usize> {
        if self.is_single_sig() {
            return Ok(1);
        }
        self.multi_sig_layout()
            .map(|layout| layout.keys.len())
            .ok_or_else(|| Self::format_error("number of accounts"))
    }

    /// Keys in script order (ascending for scripts built here).
    pub fn public_keys(&self) -> CoreResult<Vec<ECPoint>> {
        if self.is_single_sig() {
            return Ok(vec![ECPoint::decode_compressed(&self.script[2..2 + PUBLIC_KEY_SIZE])?]);
        }
        let layout = self
            .multi_sig_layout()
            .ok_or_else(|| Self::format_error("public keys"))?;
        layout
            .keys
            .into_iter()
            .map(|key| ECPoint::decode_compressed(key).map_err(CoreError::from))
            .collect()
    }
}

impl From<Vec<u8>> for VerificationScript {
    fn from(script: Vec<u8>) -> Self {
        Self::new(script)
    }
}

impl Serializable for VerificationScript {
    fn size(&self) -> usize {
        get_var_bytes_size(self.script.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.script)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self::new(reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_cryptography::ECDsa;

    fn keys(n: u16) -> Vec<ECPoint> {
        (1..=n)
            .map(|i| {
                let mut private_key = [0u8; 32];
                private_key[30..].copy_from_slice(&i.to_be_bytes());
                ECDsa::public_key(&private_key).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_single_sig() {
        let keys = keys(1);
        let key = &keys[0];
        let script = VerificationScript::from_public_key(key);
        assert_eq!(script.script().len(), 40);
        assert!(script.is_single_sig());
        assert!(!script.is_multi_sig());
        assert_eq!(script.signing_threshold().unwrap(), 1);
        assert_eq!(script.nr_of_accounts().unwrap(), 1);
        assert_eq!(script.public_keys().unwrap(), vec![key.clone()]);
    }

    #[test]
    fn test_multi_sig() {
        let keys = keys(3);
        let script = VerificationScript::from_public_keys(&keys, 2).unwrap();
        assert!(script.is_multi_sig());
        assert!(!script.is_single_sig());
        assert_eq!(script.signing_threshold().unwrap(), 2);
        assert_eq!(script.nr_of_accounts().unwrap(), 3);

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(script.public_keys().unwrap(), sorted);

        let mut reversed = keys;
        reversed.reverse();
        assert_eq!(VerificationScript::from_public_keys(&reversed, 2).unwrap(), script);
    }

    #[test]
    fn test_multi_sig_requires_end_of_script() {
        let mut bytes = VerificationScript::from_public_keys(&keys(2), 1)
            .unwrap()
            .script()
            .to_vec();
        bytes.push(OpCode::NOP as u8);
        assert!(!VerificationScript::new(bytes).is_multi_sig());
    }

    #[test]
    fn test_garbage_is_rejected_without_panicking() {
        for bytes in [vec![], vec![0xff], vec![0x11, 0x0c], vec![0x12, 0x0c, 0x21, 0x00]] {
            let script = VerificationScript::new(bytes);
            assert!(!script.is_single_sig());
            assert!(!script.is_multi_sig());
            assert!(matches!(script.signing_threshold(), Err(CoreError::ScriptFormat(_))));
            assert!(matches!(script.public_keys(), Err(CoreError::ScriptFormat(_))));
            assert!(matches!(script.nr_of_accounts(), Err(CoreError::ScriptFormat(_))));
        }
    }

    #[test]
    fn test_threshold_above_key_count_is_not_multi_sig() {
        let keys = keys(2);
        let mut builder = ScriptBuilder::new();
        builder.push_int(3);
        for key in &keys {
            builder.push_data(&key.encode_compressed());
        }
        builder
            .push_int(2)
            .sys_call(InteropService::SystemCryptoCheckMultisig);
        assert!(!VerificationScript::new(builder.into_bytes()).is_multi_sig());
    }

    #[test]
    fn test_large_multi_sig_uses_pushint8() {
        let keys = keys(20);
        let script = VerificationScript::from_public_keys(&keys, 17).unwrap();
        let bytes = script.script();
        assert_eq!(&bytes[..2], &[OpCode::PUSHINT8 as u8, 17]);
        assert_eq!(&bytes[2 + 20 * 35..4 + 20 * 35], &[OpCode::PUSHINT8 as u8, 20]);

        assert!(script.is_multi_sig());
        assert_eq!(script.signing_threshold().unwrap(), 17);
        assert_eq!(script.nr_of_accounts().unwrap(), 20);
        let mut sorted = keys;
        sorted.sort();
        assert_eq!(script.public_keys().unwrap(), sorted);
    }

    #[test]
    fn test_key_count_bound() {
        let keys = keys(1025);
        assert!(matches!(
            VerificationScript::from_public_keys(&keys, 1),
            Err(CoreError::InvalidArgument(_))
        ));
        let script = VerificationScript::from_public_keys(&keys[..1024], 1).unwrap();
        assert!(script.is_multi_sig());
        assert_eq!(script.nr_of_accounts().unwrap(), 1024);

        let mut builder = ScriptBuilder::new();
        builder.push_int(1);
        for _ in 0..1025 {
            builder.push_data(&[0x02; PUBLIC_KEY_SIZE]);
        }
        builder
            .push_int(1025)
            .sys_call(InteropService::SystemCryptoCheckMultisig);
        let oversized = VerificationScript::new(builder.into_bytes());
        assert!(!oversized.is_multi_sig());
        assert!(matches!(oversized.nr_of_accounts(), Err(CoreError::ScriptFormat(_))));
    }

    #[test]
    fn test_public_keys_reject_compact_prefix() {
        let mut bytes = VerificationScript::from_public_key(&keys(1)[0]).script().to_vec();
        bytes[2] = 0x05;
        let script = VerificationScript::new(bytes);
        assert!(script.is_single_sig());
        assert!(script.public_keys().is_err());
    }
}
