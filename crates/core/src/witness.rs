// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of Witness, the (invocation, verification) pair authorizing a signer.

use crate::contract_parameter::ContractParameter;
use crate::script::{InvocationScript, VerificationScript};
use crate::{CoreError, CoreResult, UInt160};
use neo_config::SIGNATURE_SIZE;
use neo_cryptography::ECPoint;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Witness {
    pub invocation_script: InvocationScript,
    pub verification_script: VerificationScript,
}

impl Witness {
    pub fn new(
        invocation_script: InvocationScript,
        verification_script: VerificationScript,
    ) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// Witness of a single-signature account.
    pub fn from_signature(signature: &[u8; SIGNATURE_SIZE], public_key: &ECPoint) -> Self {
        Self::new(
            InvocationScript::from_signature(signature),
            VerificationScript::from_public_key(public_key),
        )
    }

    /// Witness of a contract signer: pushed parameters, empty verification script.
    pub fn contract(params: &[ContractParameter]) -> CoreResult<Self> {
        Ok(Self::new(
            InvocationScript::from_params(params)?,
            VerificationScript::default(),
        ))
    }

    /// Assembles a multi-sig witness from signatures keyed by public key.
    ///
    /// Exactly `threshold` signatures are used, taken in ascending key order.
    /// Keys that are not part of the verification script are rejected.
    pub fn create_multi_sig_witness(
        verification_script: VerificationScript,
        signatures: &BTreeMap<ECPoint, [u8; SIGNATURE_SIZE]>,
    ) -> CoreResult<Self> {
        let threshold = verification_script.signing_threshold()?;
        let participants = verification_script.public_keys()?;
        if let Some(stranger) = signatures.keys().find(|key| !participants.contains(key)) {
            return Err(CoreError::InvalidArgument(format!(
                "public key {stranger} is not part of the multi-sig verification script"
            )));
        }
        if signatures.len() < threshold {
            return Err(CoreError::InvalidArgument(format!(
                "not enough signatures provided: {} given, the signing threshold is {threshold}",
                signatures.len()
            )));
        }
        let invocation = InvocationScript::from_signatures(signatures.values().take(threshold));
        Ok(Self::new(invocation, verification_script))
    }

    /// Hash of the verification script, i.e. the account this witness is for.
    pub fn script_hash(&self) -> UInt160 {
        self.verification_script.script_hash()
    }

    pub fn to_json(&self) -> Value {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        json!({
            "invocation": STANDARD.encode(self.invocation_script.script()),
            "verification": STANDARD.encode(self.verification_script.script()),
        })
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        self.invocation_script.size() + self.verification_script.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.invocation_script.serialize(writer)?;
        self.verification_script.serialize(writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = InvocationScript::deserialize(reader)?;
        let verification_script = VerificationScript::deserialize(reader)?;
        Ok(Self::new(invocation_script, verification_script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_cryptography::ECDsa;
    use neo_io::SerializableExt;

    fn keys(n: u8) -> Vec<ECPoint> {
        (1..=n).map(|i| ECDsa::public_key(&[i; 32]).unwrap()).collect()
    }

    #[test]
    fn test_multi_sig_selects_lowest_keys() {
        let keys = keys(3);
        let script = VerificationScript::from_public_keys(&keys, 2).unwrap();
        let mut sorted = keys.clone();
        sorted.sort();

        let mut signatures = BTreeMap::new();
        // insertion order differs from key order
        signatures.insert(sorted[2].clone(), [3u8; 64]);
        signatures.insert(sorted[0].clone(), [1u8; 64]);
        signatures.insert(sorted[1].clone(), [2u8; 64]);

        let witness = Witness::create_multi_sig_witness(script.clone(), &signatures).unwrap();
        assert_eq!(
            witness.invocation_script.signatures().unwrap(),
            vec![[1u8; 64], [2u8; 64]]
        );
        assert_eq!(witness.verification_script, script);
    }

    #[test]
    fn test_multi_sig_rejects_too_few_or_foreign() {
        let keys = keys(3);
        let script = VerificationScript::from_public_keys(&keys, 2).unwrap();

        let mut signatures = BTreeMap::new();
        signatures.insert(keys[0].clone(), [1u8; 64]);
        assert!(Witness::create_multi_sig_witness(script.clone(), &signatures).is_err());

        signatures.insert(ECDsa::public_key(&[9u8; 32]).unwrap(), [9u8; 64]);
        assert!(Witness::create_multi_sig_witness(script, &signatures).is_err());
    }

    #[test]
    fn test_single_sig_witness_layout() {
        let key = ECDsa::public_key(&[1u8; 32]).unwrap();
        let witness = Witness::from_signature(&[5u8; 64], &key);
        let bytes = witness.to_array().unwrap();
        assert_eq!(bytes.len(), 1 + 66 + 1 + 40);
        assert_eq!(witness.size(), bytes.len());
        assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
        assert_eq!(
            witness.script_hash(),
            UInt160::from_script(witness.verification_script.script())
        );
    }

    #[test]
    fn test_contract_witness_has_empty_verification() {
        let witness = Witness::contract(&[ContractParameter::integer(1)]).unwrap();
        assert!(witness.verification_script.is_empty());
        assert_eq!(witness.invocation_script.script(), &[0x11]);
    }
}
