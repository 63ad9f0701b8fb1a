// Copyright (C) 2015-2025 The Neo Project.
//
// ecc.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! secp256r1 public keys.

use crate::{CryptoError, CryptoResult};
use p256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Length of a compressed point.
pub const COMPRESSED_SIZE: usize = 33;

/// A validated point on secp256r1, kept in compressed form.
///
/// Points order by their affine x coordinate, then y. Multi-signature
/// verification scripts rely on that order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ECPoint {
    compressed: [u8; COMPRESSED_SIZE],
    y: [u8; 32],
}

impl ECPoint {
    /// Decodes a SEC1 encoded point, compressed (33 bytes) or not (65 bytes).
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        match (bytes.len(), bytes.first()) {
            (COMPRESSED_SIZE, Some(0x02 | 0x03)) | (65, Some(0x04)) => {}
            _ => return Err(CryptoError::InvalidPoint(hex::encode(bytes))),
        }
        let key = PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| CryptoError::InvalidPoint(hex::encode(bytes)))?;
        Ok(Self::from_public_key(&key))
    }

    /// Decodes exactly 33 bytes prefixed 0x02 or 0x03, the only form a key
    /// takes on the wire and inside scripts.
    pub fn decode_compressed(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != COMPRESSED_SIZE || !matches!(bytes[0], 0x02 | 0x03) {
            return Err(CryptoError::InvalidPoint(hex::encode(bytes)));
        }
        Self::from_bytes(bytes)
    }

    pub fn from_hex(value: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(value.trim_start_matches("0x"))
            .map_err(|e| CryptoError::InvalidPoint(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn from_public_key(key: &PublicKey) -> Self {
        let mut compressed = [0u8; COMPRESSED_SIZE];
        compressed.copy_from_slice(key.to_encoded_point(true).as_bytes());

        // uncompressed form is 0x04 || x || y
        let mut y = [0u8; 32];
        y.copy_from_slice(&key.to_encoded_point(false).as_bytes()[33..65]);

        Self { compressed, y }
    }

    pub(crate) fn to_public_key(&self) -> CryptoResult<PublicKey> {
        PublicKey::from_sec1_bytes(&self.compressed)
            .map_err(|_| CryptoError::InvalidPoint(self.to_hex()))
    }

    /// The 33-byte compressed encoding.
    pub fn encode_compressed(&self) -> [u8; COMPRESSED_SIZE] {
        self.compressed
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.compressed.to_vec()
    }

    /// The 65-byte uncompressed encoding.
    pub fn encode_uncompressed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(65);
        out.push(0x04);
        out.extend_from_slice(self.x());
        out.extend_from_slice(&self.y);
        out
    }

    pub fn x(&self) -> &[u8] {
        &self.compressed[1..]
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed)
    }
}

impl Ord for ECPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x()
            .cmp(other.x())
            .then_with(|| self.y.cmp(&other.y))
    }
}

impl PartialOrd for ECPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ECPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ECPoint({})", self.to_hex())
    }
}

impl FromStr for ECPoint {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for ECPoint {
    type Error = CryptoError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16";

    #[test]
    fn test_compressed_round_trip() {
        let point = ECPoint::from_hex(KEY).unwrap();
        assert_eq!(point.to_hex(), KEY);

        let uncompressed = point.encode_uncompressed();
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(ECPoint::from_bytes(&uncompressed).unwrap(), point);
    }

    #[test]
    fn test_rejects_invalid_points() {
        assert!(ECPoint::from_bytes(&[0x05; 33]).is_err());
        assert!(ECPoint::from_bytes(&[0x02; 10]).is_err());
        assert!(ECPoint::from_hex("zz").is_err());
    }

    #[test]
    fn test_decode_compressed_is_strict() {
        let point = ECPoint::from_hex(KEY).unwrap();
        let mut compact = point.encode_compressed();
        compact[0] = 0x05;
        assert!(ECPoint::from_bytes(&compact).is_err());
        assert!(ECPoint::decode_compressed(&compact).is_err());
        assert!(ECPoint::decode_compressed(&point.encode_uncompressed()).is_err());
        assert_eq!(
            ECPoint::decode_compressed(&point.encode_compressed()).unwrap(),
            point
        );
    }

    #[test]
    fn test_ordering_by_x_then_y() {
        let a = ECPoint::from_hex(KEY).unwrap();
        let b = ECPoint::from_hex(
            "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c",
        )
        .unwrap();
        assert_eq!(a.cmp(&b), a.x().cmp(b.x()));
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
