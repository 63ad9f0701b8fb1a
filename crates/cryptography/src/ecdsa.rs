// Copyright (C) 2015-2025 The Neo Project.
//
// ecdsa.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ECDSA over secp256r1 with SHA-256, producing 64-byte `r || s` signatures.

use crate::{CryptoError, CryptoResult, ECPoint};
use p256::{
    ecdsa::{signature::Signer, signature::Verifier, Signature, SigningKey, VerifyingKey},
    SecretKey,
};
use rand::rngs::OsRng;

/// Size of a private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of a signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA implementation for Neo blockchain.
pub struct ECDsa;

impl ECDsa {
    /// Signs `message` (hashed internally with SHA-256, RFC 6979 nonce).
    pub fn sign(
        message: &[u8],
        private_key: &[u8; PRIVATE_KEY_SIZE],
    ) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
        let signing_key = SigningKey::from(Self::secret_key(private_key)?);
        let signature: Signature = signing_key.sign(message);

        let mut out = [0u8; SIGNATURE_SIZE];
        out.copy_from_slice(&signature.to_bytes());
        Ok(out)
    }

    /// Verifies a 64-byte signature; malformed input verifies as `false`.
    pub fn verify(message: &[u8], signature: &[u8], public_key: &ECPoint) -> bool {
        let Ok(sig) = Signature::from_slice(signature) else {
            return false;
        };
        let Ok(key) = public_key.to_public_key() else {
            return false;
        };
        VerifyingKey::from(key).verify(message, &sig).is_ok()
    }

    /// Generates a new random private key.
    pub fn generate_private_key() -> [u8; PRIVATE_KEY_SIZE] {
        SecretKey::random(&mut OsRng).to_bytes().into()
    }

    /// Derives the public key from a private key.
    pub fn public_key(private_key: &[u8; PRIVATE_KEY_SIZE]) -> CryptoResult<ECPoint> {
        Ok(ECPoint::from_public_key(&Self::secret_key(private_key)?.public_key()))
    }

    fn secret_key(private_key: &[u8; PRIVATE_KEY_SIZE]) -> CryptoResult<SecretKey> {
        SecretKey::from_bytes(private_key.into())
            .map_err(|_| CryptoError::InvalidKey("scalar out of range".to_string()))
    }
}
