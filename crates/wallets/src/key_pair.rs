// Copyright (C) 2015-2025 The Neo Project.
//
// key_pair.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of KeyPair, a secp256r1 private key and its public key.

use crate::{WalletError, WalletResult};
use neo_config::SIGNATURE_SIZE;
use neo_core::{UInt160, VerificationScript};
use neo_cryptography::ecdsa::PRIVATE_KEY_SIZE;
use neo_cryptography::{ECDsa, ECPoint};
use std::fmt;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;

#[derive(Clone)]
pub struct KeyPair {
    private_key: [u8; PRIVATE_KEY_SIZE],
    public_key: ECPoint,
}

impl KeyPair {
    pub fn generate() -> WalletResult<Self> {
        Self::from_private_key(&ECDsa::generate_private_key())
    }

    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        let private_key: [u8; PRIVATE_KEY_SIZE] = private_key.try_into().map_err(|_| {
            WalletError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_SIZE} bytes, got {}",
                private_key.len()
            ))
        })?;
        let public_key = ECDsa::public_key(&private_key)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Imports a key in Wallet Import Format (compressed form only).
    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        let data = bs58::decode(wif)
            .with_check(None)
            .into_vec()
            .map_err(|e| WalletError::InvalidWif(e.to_string()))?;
        if data.len() != 34 || data[0] != WIF_VERSION || data[33] != WIF_COMPRESSED_FLAG {
            return Err(WalletError::InvalidWif(
                "expected a compressed WIF of 34 bytes with version 0x80".into(),
            ));
        }
        Self::from_private_key(&data[1..33])
    }

    pub fn export_wif(&self) -> String {
        let mut data = Vec::with_capacity(34);
        data.push(WIF_VERSION);
        data.extend_from_slice(&self.private_key);
        data.push(WIF_COMPRESSED_FLAG);
        bs58::encode(data).with_check().into_string()
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    pub fn public_key(&self) -> &ECPoint {
        &self.public_key
    }

    /// The single-signature verification script of this key.
    pub fn verification_script(&self) -> VerificationScript {
        VerificationScript::from_public_key(&self.public_key)
    }

    pub fn script_hash(&self) -> UInt160 {
        self.verification_script().script_hash()
    }

    /// Signs `message`; ECDSA hashes it with SHA-256.
    pub fn sign(&self, message: &[u8]) -> WalletResult<[u8; SIGNATURE_SIZE]> {
        Ok(ECDsa::sign(message, &self.private_key)?)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.public_key)
    }
}
