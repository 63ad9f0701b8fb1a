// Copyright (C) 2015-2025 The Neo Project.
//
// node_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The node operations the transaction builder depends on.

use crate::error::RpcError;
use crate::models::{RpcApplicationLog, RpcInvokeResult, RpcRawTransactionResult};
use async_trait::async_trait;
use neo_config::ClientConfig;
use neo_core::{ContractParameter, Signer, UInt160, UInt256};
use neo_cryptography::ECPoint;

/// A connection to a Neo node.
///
/// [`RpcClient`](crate::RpcClient) implements this over JSON-RPC; tests
/// substitute in-memory nodes.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Settings that shape built transactions (network magic, fee token, ...).
    fn config(&self) -> &ClientConfig;

    async fn get_block_count(&self) -> Result<u32, RpcError>;

    /// Simulates `script` with the given signers' witnesses assumed present.
    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, RpcError>;

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        params: &[ContractParameter],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, RpcError>;

    /// Network fee the node charges for a serialized transaction, witnesses included.
    async fn calculate_network_fee(&self, transaction: &[u8]) -> Result<i64, RpcError>;

    async fn get_committee(&self) -> Result<Vec<ECPoint>, RpcError>;

    async fn send_raw_transaction(
        &self,
        transaction: &[u8],
    ) -> Result<RpcRawTransactionResult, RpcError>;

    async fn get_application_log(&self, tx_hash: &UInt256) -> Result<RpcApplicationLog, RpcError>;
}
