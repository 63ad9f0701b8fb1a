// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Cryptography
//!
//! Hashing and secp256r1 primitives used to derive script hashes and to sign
//! transactions. The heavy lifting is done by `sha2`, `ripemd` and `p256`.

pub mod ecc;
pub mod ecdsa;
mod error;
pub mod hash;

pub use ecc::ECPoint;
pub use ecdsa::ECDsa;
pub use error::{CryptoError, CryptoResult};
pub use hash::{hash160, hash256, ripemd160, sha256};
