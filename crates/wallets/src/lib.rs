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

//! Neo Wallets Library
//!
//! The account side of transaction building:
//! - [`KeyPair`]: secp256r1 keys, WIF import/export, signing
//! - [`Account`]: script hash, optional key, multi-sig shape, addresses
//! - [`TransactionSigner`]: a signer together with how its witness is made
//!
//! Wallet file formats (NEP-6, NEP-2) are not handled here.

pub mod account;
pub mod error;
pub mod key_pair;
pub mod transaction_signer;

pub use account::{address_to_script_hash, script_hash_to_address, Account};
pub use error::{WalletError, WalletResult};
pub use key_pair::KeyPair;
pub use transaction_signer::{SignerKind, TransactionSigner};
