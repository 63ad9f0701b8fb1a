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

//! Neo Configuration Module
//!
//! Protocol constants shared by every crate of the workspace, plus the
//! [`ClientConfig`] that drives the transaction builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Size of a script hash / account (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of a compressed secp256r1 public key
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of an ECDSA signature (r || s)
pub const SIGNATURE_SIZE: usize = 64;
/// Size of a single-signature verification script
pub const SINGLE_SIG_SCRIPT_SIZE: usize = 40;

/// Network limits constants
pub const MAX_TRANSACTION_SIZE: usize = 102_400; // 100KB
/// Maximum number of attributes, signers included, in one transaction
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Maximum entries in each of a signer's restriction lists
pub const MAX_SIGNER_SUBITEMS: usize = 16;
/// Maximum public keys in a multi-signature verification script
pub const MAX_PUBLIC_KEYS_PER_MULTISIG: usize = 1024;
/// Maximum nesting of And/Or witness conditions
pub const MAX_NESTING_DEPTH: usize = 2;
/// Maximum sub-expressions of an And/Or witness condition
pub const MAX_SUBITEMS: usize = 16;
/// Size of the fixed transaction header (version, nonce, fees, valid-until-block)
pub const TRANSACTION_HEADER_SIZE: usize = 25;
/// Maximum invocation / verification script length inside a witness
pub const MAX_WITNESS_SCRIPT_SIZE: usize = 1024;
/// Maximum script size in bytes
pub const MAX_SCRIPT_SIZE: usize = 65_535;

/// Address version byte for N3 addresses
pub const ADDRESS_VERSION: u8 = 0x35;
/// Default number of blocks a transaction stays valid for
pub const DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT: u32 = 5760;
/// Script hash of the GAS token, big-endian
pub const GAS_TOKEN_HASH: &str = "0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04";
/// Default JSON-RPC request timeout
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e, // "NEO3" in little endian
            NetworkType::TestNet => 0x3254334e, // "N3T2" in little endian
            NetworkType::Private => 0x00000000,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            other => Err(ConfigError::Invalid(format!("unknown network '{other}'"))),
        }
    }
}

/// Settings the transaction builder and node client read at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Well-known network; supplies the magic unless `network_magic` is set.
    pub network: NetworkType,
    /// Explicit network magic, required for private networks.
    pub network_magic: Option<u32>,
    /// Blocks added to the current height when `validUntilBlock` is not set.
    pub max_valid_until_block_increment: u32,
    /// Whether a transaction whose simulation faults may still be built.
    pub allow_transmission_on_fault: bool,
    /// Token used to pay fees, as a big-endian `0x` script hash.
    pub fee_token_hash: String,
    /// JSON-RPC endpoint of the node.
    pub rpc_url: String,
    /// Per-request timeout applied by the HTTP transport.
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            network_magic: None,
            max_valid_until_block_increment: DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT,
            allow_transmission_on_fault: false,
            fee_token_hash: GAS_TOKEN_HASH.to_string(),
            rpc_url: "http://localhost:20332".to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given network with default settings.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// The magic prefixed to every signing preimage.
    pub fn network_magic(&self) -> u32 {
        self.network_magic.unwrap_or_else(|| self.network.magic())
    }

    pub fn with_network_magic(mut self, magic: u32) -> Self {
        self.network_magic = Some(magic);
        self
    }

    pub fn with_allow_transmission_on_fault(mut self, allow: bool) -> Self {
        self.allow_transmission_on_fault = allow;
        self
    }

    pub fn with_max_valid_until_block_increment(mut self, increment: u32) -> Self {
        self.max_valid_until_block_increment = increment;
        self
    }

    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Parses a TOML document and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_valid_until_block_increment == 0 {
            return Err(ConfigError::Invalid(
                "max_valid_until_block_increment must be greater than zero".to_string(),
            ));
        }
        if self.network == NetworkType::Private && self.network_magic.is_none() {
            return Err(ConfigError::Invalid(
                "a private network requires an explicit network_magic".to_string(),
            ));
        }
        let hash = self.fee_token_hash.trim_start_matches("0x");
        if hash.len() != ADDRESS_SIZE * 2 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Invalid(format!(
                "fee_token_hash '{}' is not a 20-byte hex script hash",
                self.fee_token_hash
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_magic() {
        assert_eq!(NetworkType::MainNet.magic(), 0x334f454e);
        assert_eq!(NetworkType::TestNet.magic(), 0x3254334e);

        let config = ClientConfig::for_network(NetworkType::MainNet);
        assert_eq!(config.network_magic(), 0x334f454e);
        assert_eq!(config.with_network_magic(7).network_magic(), 7);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_valid_until_block_increment, 5760);
        assert!(!config.allow_transmission_on_fault);
        assert_eq!(config.fee_token_hash, GAS_TOKEN_HASH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("MainNet".parse::<NetworkType>().unwrap(), NetworkType::MainNet);
        assert_eq!("test".parse::<NetworkType>().unwrap(), NetworkType::TestNet);
        assert!("moon".parse::<NetworkType>().is_err());
    }
}
