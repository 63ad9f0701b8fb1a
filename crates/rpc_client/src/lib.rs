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

//! # Neo RPC Client
//!
//! Talks to a Neo node over JSON-RPC and uses it to turn scripts and signers
//! into fee-complete, signed transactions.
//!
//! - [`NodeClient`]: the node operations the builder needs
//! - [`RpcClient`]: JSON-RPC 2.0 implementation over a [`Transport`]
//! - [`TransactionBuilder`]: resolves validity height, system and network
//!   fees, checks the sender's balance and signs
//! - [`TransactionManager`]: witnesses, sending and the application log

pub mod error;
pub mod models;
pub mod node_client;
pub mod rpc_client;
pub mod rpc_exception;
pub mod transaction_builder;
pub mod transaction_manager;
pub mod transport;

pub use error::{Error, Result, RpcError};
pub use models::*;
pub use node_client::NodeClient;
pub use rpc_client::RpcClient;
pub use rpc_exception::RpcException;
pub use transaction_builder::{FeeErrorSupplier, FeeShortfallHandler, TransactionBuilder};
pub use transaction_manager::TransactionManager;
pub use transport::{HttpTransport, Transport};
