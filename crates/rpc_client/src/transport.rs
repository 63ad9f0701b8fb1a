// Copyright (C) 2015-2025 The Neo Project.
//
// transport.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Carries JSON-RPC envelopes to a node.

use crate::error::RpcError;
use crate::models::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use neo_config::ClientConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, RpcError>;
}

/// JSON-RPC over HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_address: Url,
    http_client: Client,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RpcError> {
        let base_address = Url::parse(url)
            .map_err(|e| RpcError::Transport(format!("invalid node url '{url}': {e}")))?;
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_address,
            http_client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, RpcError> {
        Self::new(
            &config.rpc_url,
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn url(&self) -> &Url {
        &self.base_address
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, RpcError> {
        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let content = response.text().await?;
        serde_json::from_str(&content)
            .map_err(|e| RpcError::InvalidResponse(format!("malformed JSON-RPC response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ClientConfig::default().with_rpc_url("http://seed1.neo.org:10332");
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.url().host_str(), Some("seed1.neo.org"));
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(matches!(
            HttpTransport::new("not a url", Duration::from_secs(1)),
            Err(RpcError::Transport(_))
        ));
    }
}
