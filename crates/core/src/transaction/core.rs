// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Core Transaction struct and the data it is hashed and signed over.

use crate::signer::Signer;
use crate::witness::Witness;
use crate::witness_scope::WitnessScope;
use crate::{CoreError, CoreResult, UInt160, UInt256};
use neo_cryptography::sha256;
use neo_io::{BinaryWriter, SerializableExt};
use std::fmt;

use super::attributes::TransactionAttribute;

/// A Neo N3 transaction.
///
/// Setters do not validate; the builder and [`Transaction::validate_limits`]
/// enforce the protocol limits before anything is signed or sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    pub(crate) version: u8,
    pub(crate) nonce: u32,
    /// In datoshi, 1 datoshi = 1e-8 GAS.
    pub(crate) system_fee: i64,
    /// In datoshi.
    pub(crate) network_fee: i64,
    pub(crate) valid_until_block: u32,
    pub(crate) signers: Vec<Signer>,
    pub(crate) attributes: Vec<TransactionAttribute>,
    pub(crate) script: Vec<u8>,
    pub(crate) witnesses: Vec<Witness>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn set_version(&mut self, value: u8) {
        self.version = value;
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn set_nonce(&mut self, value: u32) {
        self.nonce = value;
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn set_system_fee(&mut self, value: i64) {
        self.system_fee = value;
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn set_network_fee(&mut self, value: i64) {
        self.network_fee = value;
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn set_valid_until_block(&mut self, value: u32) {
        self.valid_until_block = value;
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn set_script(&mut self, value: Vec<u8>) {
        self.script = value;
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn set_signers(&mut self, signers: Vec<Signer>) {
        self.signers = signers;
    }

    pub fn attributes(&self) -> &[TransactionAttribute] {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Vec<TransactionAttribute>) {
        self.attributes = attributes;
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn add_witness(&mut self, witness: Witness) {
        self.witnesses.push(witness);
    }

    pub fn set_witnesses(&mut self, witnesses: Vec<Witness>) {
        self.witnesses = witnesses;
    }

    /// The fee payer: the first signer with scope `None`, else the first signer.
    pub fn sender(&self) -> Option<UInt160> {
        self.signers
            .iter()
            .find(|signer| signer.scopes() == WitnessScope::NONE)
            .or_else(|| self.signers.first())
            .map(Signer::account)
    }

    /// The unsigned body: everything but the witnesses.
    pub fn get_hash_data(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// SHA-256 of the unsigned body, displayed byte-reversed.
    pub fn hash(&self) -> CoreResult<UInt256> {
        Ok(UInt256::from_array(sha256(&self.get_hash_data()?)))
    }

    /// Network magic (u32 LE) followed by the transaction hash; the message
    /// every witness signs.
    pub fn get_sign_data(&self, network_magic: u32) -> CoreResult<Vec<u8>> {
        let hash = self.hash()?;
        let mut data = Vec::with_capacity(4 + UInt256::LENGTH);
        data.extend_from_slice(&network_magic.to_le_bytes());
        data.extend_from_slice(hash.as_bytes());
        Ok(data)
    }

    /// Checks the limits a node enforces on signers and attributes.
    pub fn validate_limits(&self) -> CoreResult<()> {
        let max = neo_config::MAX_TRANSACTION_ATTRIBUTES;
        if self.signers.len() + self.attributes.len() > max {
            return Err(CoreError::TransactionConfiguration(format!(
                "a transaction can have at most {max} signers and attributes combined, got {}",
                self.signers.len() + self.attributes.len()
            )));
        }
        for (i, signer) in self.signers.iter().enumerate() {
            if self.signers[..i].iter().any(|s| s.account() == signer.account()) {
                return Err(CoreError::TransactionConfiguration(format!(
                    "duplicate signer {}",
                    signer.account()
                )));
            }
        }
        for (i, attribute) in self.attributes.iter().enumerate() {
            let kind = attribute.attribute_type();
            if !kind.allows_multiple()
                && self.attributes[..i].iter().any(|a| a.attribute_type() == kind)
            {
                return Err(CoreError::TransactionConfiguration(format!(
                    "only one {} attribute is allowed",
                    kind.name()
                )));
            }
        }
        Ok(())
    }

    /// Full wire form as lowercase hex.
    pub fn to_hex(&self) -> CoreResult<String> {
        Ok(hex::encode(self.to_array()?))
    }

    pub fn from_hex(value: &str) -> CoreResult<Self> {
        let bytes = hex::decode(value.trim_start_matches("0x"))
            .map_err(|e| CoreError::InvalidArgument(format!("invalid transaction hex: {e}")))?;
        Ok(Self::from_array(&bytes)?)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction {{ version: {}, nonce: {}, system_fee: {}, network_fee: {}, valid_until_block: {}, signers: {}, script_len: {} }}",
            self.version,
            self.nonce,
            self.system_fee,
            self.network_fee,
            self.valid_until_block,
            self.signers.len(),
            self.script.len()
        )
    }
}
