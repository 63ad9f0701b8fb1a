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

//! # neo-tx: Neo N3 transaction construction in Rust
//!
//! Builds, encodes and signs Neo N3 transactions on the client side, without
//! running a node.
//!
//! - Binary codec for the wire format ([`io`])
//! - NeoVM script assembly and disassembly ([`vm`])
//! - Verification scripts, witnesses, signers and transactions ([`core`])
//! - Keys, accounts and addresses ([`wallets`])
//! - A JSON-RPC node client and the fee-aware transaction builder ([`rpc_client`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_tx::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::for_network(NetworkType::TestNet);
//!     let client = Arc::new(RpcClient::from_config(config)?);
//!     let account = Account::from_wif("KzQMj6by8e8RaL6W2oaqbn2XMKnM7gueSEVUF4Fwg9LmDWuojqKb")?;
//!
//!     let mut builder = ScriptBuilder::new();
//!     builder.contract_call(
//!         UInt160::parse("0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04")?,
//!         "symbol",
//!         &[] as &[ContractParameter],
//!         CallFlags::ALL,
//!     )?;
//!
//!     let mut manager = TransactionBuilder::new(client)
//!         .script(builder.into_bytes())
//!         .signers(vec![TransactionSigner::called_by_entry(account)])?
//!         .sign()
//!         .await?;
//!     manager.send().await?;
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_rpc_client as rpc_client;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

/// Common imports for building transactions
pub mod prelude {
    pub use crate::config::{ClientConfig, NetworkType};
    pub use crate::core::{
        ContractParameter, Signer, Transaction, TransactionAttribute, UInt160, UInt256,
        VerificationScript, Witness, WitnessCondition, WitnessRule, WitnessRuleAction,
        WitnessScope,
    };
    pub use crate::crypto::ECPoint;
    pub use crate::io::{Serializable, SerializableExt};
    pub use crate::rpc_client::{NodeClient, RpcClient, TransactionBuilder, TransactionManager};
    pub use crate::vm::{CallFlags, OpCode, ScriptBuilder};
    pub use crate::wallets::{Account, KeyPair, TransactionSigner};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
