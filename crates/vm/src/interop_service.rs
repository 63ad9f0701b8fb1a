// Copyright (C) 2015-2025 The Neo Project.
//
// interop_service.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Interop services reachable through `SYSCALL`.
//!
//! A syscall operand is the first four bytes of the SHA-256 digest of the
//! service name.

use neo_cryptography::sha256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteropService {
    SystemContractCall,
    SystemCryptoCheckSig,
    SystemCryptoCheckMultisig,
    SystemIteratorNext,
    SystemIteratorValue,
    SystemRuntimeCheckWitness,
    SystemRuntimeGetTime,
    SystemRuntimeLog,
    SystemRuntimeNotify,
}

impl InteropService {
    pub const ALL: &'static [InteropService] = &[
        InteropService::SystemContractCall,
        InteropService::SystemCryptoCheckSig,
        InteropService::SystemCryptoCheckMultisig,
        InteropService::SystemIteratorNext,
        InteropService::SystemIteratorValue,
        InteropService::SystemRuntimeCheckWitness,
        InteropService::SystemRuntimeGetTime,
        InteropService::SystemRuntimeLog,
        InteropService::SystemRuntimeNotify,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InteropService::SystemContractCall => "System.Contract.Call",
            InteropService::SystemCryptoCheckSig => "System.Crypto.CheckSig",
            InteropService::SystemCryptoCheckMultisig => "System.Crypto.CheckMultisig",
            InteropService::SystemIteratorNext => "System.Iterator.Next",
            InteropService::SystemIteratorValue => "System.Iterator.Value",
            InteropService::SystemRuntimeCheckWitness => "System.Runtime.CheckWitness",
            InteropService::SystemRuntimeGetTime => "System.Runtime.GetTime",
            InteropService::SystemRuntimeLog => "System.Runtime.Log",
            InteropService::SystemRuntimeNotify => "System.Runtime.Notify",
        }
    }

    /// The 4-byte syscall operand.
    pub fn hash(&self) -> [u8; 4] {
        let digest = sha256(self.name().as_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    }

    pub fn from_hash(hash: &[u8]) -> Option<Self> {
        Self::ALL.iter().copied().find(|service| service.hash() == hash)
    }

    /// Base price of the service in datoshi, before the execution fee factor.
    pub fn price(&self) -> i64 {
        match self {
            InteropService::SystemContractCall => 1 << 15,
            InteropService::SystemCryptoCheckSig => 1 << 15,
            InteropService::SystemCryptoCheckMultisig => 0,
            InteropService::SystemIteratorNext => 1 << 15,
            InteropService::SystemIteratorValue => 1 << 4,
            InteropService::SystemRuntimeCheckWitness => 1 << 10,
            InteropService::SystemRuntimeGetTime => 1 << 3,
            InteropService::SystemRuntimeLog => 1 << 15,
            InteropService::SystemRuntimeNotify => 1 << 15,
        }
    }
}
