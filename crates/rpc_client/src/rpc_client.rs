// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::RpcError;
use crate::models::{
    RpcApplicationLog, RpcInvokeResult, RpcNetworkFee, RpcRawTransactionResult, RpcRequest,
};
use crate::node_client::NodeClient;
use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use neo_config::ClientConfig;
use neo_core::{ContractParameter, Signer, UInt160, UInt256};
use neo_cryptography::ECPoint;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// JSON-RPC client for a Neo node.
///
/// Request ids are drawn from a per-client counter, so concurrent calls on
/// one client never share an id.
pub struct RpcClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    next_id: AtomicU64,
}

impl RpcClient<HttpTransport> {
    /// Connects to `config.rpc_url` over HTTP.
    pub fn from_config(config: ClientConfig) -> Result<Self, RpcError> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> RpcClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn as_rpc_request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        RpcRequest::new(id, method, params)
    }

    /// Sends one request and decodes its `result`.
    pub async fn rpc_send_async<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<R, RpcError> {
        let request = self.as_rpc_request(method, params);
        debug!(method, id = request.id, "sending rpc request");

        let response = self.transport.send(&request).await?;
        if let Some(error) = response.error {
            debug!(method, code = error.code, "rpc request failed");
            return Err(RpcError::Rpc(error));
        }
        if response.id.is_some_and(|id| id != request.id) {
            return Err(RpcError::InvalidResponse(format!(
                "response id {:?} does not match request id {}",
                response.id, request.id
            )));
        }

        let result = response
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: no result returned")))?;
        trace!(method, %result, "rpc result");
        serde_json::from_value(result)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))
    }

    fn signers_to_json(signers: &[Signer]) -> Value {
        Value::Array(signers.iter().map(Signer::to_json).collect())
    }
}

#[async_trait]
impl<T: Transport> NodeClient for RpcClient<T> {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_block_count(&self) -> Result<u32, RpcError> {
        self.rpc_send_async("getblockcount", Vec::new()).await
    }

    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, RpcError> {
        let params = vec![
            json!(general_purpose::STANDARD.encode(script)),
            Self::signers_to_json(signers),
        ];
        self.rpc_send_async("invokescript", params).await
    }

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        params: &[ContractParameter],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, RpcError> {
        let params = vec![
            json!(contract.to_string()),
            json!(method),
            Value::Array(params.iter().map(ContractParameter::to_json).collect()),
            Self::signers_to_json(signers),
        ];
        self.rpc_send_async("invokefunction", params).await
    }

    async fn calculate_network_fee(&self, transaction: &[u8]) -> Result<i64, RpcError> {
        let params = vec![json!(general_purpose::STANDARD.encode(transaction))];
        let fee: RpcNetworkFee = self.rpc_send_async("calculatenetworkfee", params).await?;
        Ok(fee.network_fee)
    }

    async fn get_committee(&self) -> Result<Vec<ECPoint>, RpcError> {
        let keys: Vec<String> = self.rpc_send_async("getcommittee", Vec::new()).await?;
        keys.iter()
            .map(|key| {
                ECPoint::from_hex(key).map_err(|e| {
                    RpcError::InvalidResponse(format!(
                        "getcommittee: invalid public key {key}: {e}"
                    ))
                })
            })
            .collect()
    }

    async fn send_raw_transaction(
        &self,
        transaction: &[u8],
    ) -> Result<RpcRawTransactionResult, RpcError> {
        let params = vec![json!(general_purpose::STANDARD.encode(transaction))];
        self.rpc_send_async("sendrawtransaction", params).await
    }

    async fn get_application_log(&self, tx_hash: &UInt256) -> Result<RpcApplicationLog, RpcError> {
        self.rpc_send_async("getapplicationlog", vec![json!(tx_hash.to_string())])
            .await
    }
}
