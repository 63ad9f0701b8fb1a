// Copyright (C) 2015-2025 The Neo Project.
//
// key_pair_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! KeyPair and Account behaviour against known vectors.

use neo_core::UInt160;
use neo_cryptography::ECDsa;
use neo_wallets::*;

const PRIVATE_KEY: [u8; 32] = [0x01; 32];

#[test]
fn test_key_pair_generation() {
    let key_pair = KeyPair::generate().unwrap();
    let compressed = key_pair.public_key().encode_compressed();
    assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
    assert_eq!(key_pair.verification_script().script().len(), 40);
}

#[test]
fn test_known_public_key_and_script_hash() {
    let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
    assert_eq!(key_pair.private_key(), &PRIVATE_KEY);
    assert_eq!(
        key_pair.public_key().to_hex(),
        "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16"
    );
    assert_eq!(
        key_pair.script_hash(),
        UInt160::from_script(key_pair.verification_script().script())
    );
}

#[test]
fn test_invalid_private_keys() {
    assert!(matches!(
        KeyPair::from_private_key(&[1u8; 31]),
        Err(WalletError::InvalidPrivateKey(_))
    ));
    assert!(KeyPair::from_private_key(&[0u8; 32]).is_err());
}

#[test]
fn test_wif_round_trip() {
    let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
    let wif = key_pair.export_wif();
    assert_eq!(wif.len(), 52);
    assert_eq!(KeyPair::from_wif(&wif).unwrap(), key_pair);
    assert!(KeyPair::from_wif("invalid").is_err());
    assert_eq!(
        Account::from_wif(&wif).unwrap().script_hash(),
        key_pair.script_hash()
    );
}

#[test]
fn test_signature_verifies() {
    let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
    let signature = key_pair.sign(b"hello").unwrap();
    assert!(ECDsa::verify(b"hello", &signature, key_pair.public_key()));
    assert!(!ECDsa::verify(b"hellp", &signature, key_pair.public_key()));
}
