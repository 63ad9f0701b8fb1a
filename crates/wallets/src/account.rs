// Copyright (C) 2015-2025 The Neo Project.
//
// account.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of Account, the wallet-side view of a signing party.

use crate::{KeyPair, WalletError, WalletResult};
use neo_config::{ADDRESS_SIZE, ADDRESS_VERSION};
use neo_core::{UInt160, VerificationScript};
use neo_cryptography::ECPoint;
use std::fmt;

/// An account known to the wallet.
///
/// Besides its script hash an account may know its key pair (single-sig
/// accounts that can sign), its verification script, and for multi-sig
/// accounts the threshold and number of participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    script_hash: UInt160,
    key_pair: Option<KeyPair>,
    verification_script: Option<VerificationScript>,
    signing_threshold: Option<usize>,
    nr_of_participants: Option<usize>,
    label: Option<String>,
}

impl Account {
    fn watch_only(script_hash: UInt160) -> Self {
        Self {
            script_hash,
            key_pair: None,
            verification_script: None,
            signing_threshold: None,
            nr_of_participants: None,
            label: None,
        }
    }

    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        let verification_script = key_pair.verification_script();
        Self {
            script_hash: verification_script.script_hash(),
            key_pair: Some(key_pair),
            verification_script: Some(verification_script),
            ..Self::watch_only(UInt160::ZERO)
        }
    }

    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        Ok(Self::from_key_pair(KeyPair::from_wif(wif)?))
    }

    /// A fresh account with a random key.
    pub fn create() -> WalletResult<Self> {
        Ok(Self::from_key_pair(KeyPair::generate()?))
    }

    /// An account without a key, described by its verification script.
    /// Multi-sig scripts also yield the threshold and participant count.
    pub fn from_verification_script(script: VerificationScript) -> WalletResult<Self> {
        let mut account = Self::watch_only(script.script_hash());
        if script.is_multi_sig() {
            account.signing_threshold = Some(script.signing_threshold()?);
            account.nr_of_participants = Some(script.nr_of_accounts()?);
        }
        account.verification_script = Some(script);
        Ok(account)
    }

    /// A multi-sig account over `public_keys`, requiring `threshold` signatures.
    pub fn create_multi_sig(public_keys: &[ECPoint], threshold: usize) -> WalletResult<Self> {
        Self::from_verification_script(VerificationScript::from_public_keys(
            public_keys,
            threshold,
        )?)
    }

    /// A multi-sig account known only by its hash and shape.
    pub fn multi_sig_watch_only(
        script_hash: UInt160,
        threshold: usize,
        nr_of_participants: usize,
    ) -> WalletResult<Self> {
        if threshold == 0 || threshold > nr_of_participants {
            return Err(neo_core::CoreError::InvalidArgument(format!(
                "signing threshold {threshold} is out of range for {nr_of_participants} \
                 participants"
            ))
            .into());
        }
        let mut account = Self::watch_only(script_hash);
        account.signing_threshold = Some(threshold);
        account.nr_of_participants = Some(nr_of_participants);
        Ok(account)
    }

    pub fn from_script_hash(script_hash: UInt160) -> Self {
        Self::watch_only(script_hash)
    }

    pub fn from_address(address: &str) -> WalletResult<Self> {
        Ok(Self::watch_only(address_to_script_hash(address)?))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn address(&self) -> String {
        script_hash_to_address(&self.script_hash)
    }

    pub fn key_pair(&self) -> Option<&KeyPair> {
        self.key_pair.as_ref()
    }

    pub fn verification_script(&self) -> Option<&VerificationScript> {
        self.verification_script.as_ref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_multi_sig(&self) -> bool {
        self.signing_threshold.is_some() && self.nr_of_participants.is_some()
    }

    pub fn signing_threshold(&self) -> WalletResult<usize> {
        self.signing_threshold
            .ok_or(WalletError::NotMultiSig(self.script_hash))
    }

    pub fn nr_of_participants(&self) -> WalletResult<usize> {
        self.nr_of_participants
            .ok_or(WalletError::NotMultiSig(self.script_hash))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({label})", self.address()),
            None => write!(f, "{}", self.address()),
        }
    }
}

/// Base58Check of the address version byte followed by the little-endian hash.
pub fn script_hash_to_address(script_hash: &UInt160) -> String {
    let mut data = Vec::with_capacity(1 + ADDRESS_SIZE);
    data.push(ADDRESS_VERSION);
    data.extend_from_slice(script_hash.as_bytes());
    bs58::encode(data).with_check().into_string()
}

pub fn address_to_script_hash(address: &str) -> WalletResult<UInt160> {
    let data = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| WalletError::InvalidAddress(format!("{address}: {e}")))?;
    if data.len() != 1 + ADDRESS_SIZE {
        return Err(WalletError::InvalidAddress(format!(
            "{address}: expected {} bytes, got {}",
            1 + ADDRESS_SIZE,
            data.len()
        )));
    }
    if data[0] != ADDRESS_VERSION {
        return Err(WalletError::InvalidAddress(format!(
            "{address}: version 0x{:02x} is not 0x{ADDRESS_VERSION:02x}",
            data[0]
        )));
    }
    Ok(UInt160::from_bytes(&data[1..])?)
}
