// Copyright (C) 2015-2025 The Neo Project.
//
// args.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use clap::{Parser, Subcommand, ValueEnum};
use neo_config::{ClientConfig, ConfigError, NetworkType};
use std::path::PathBuf;

/// Command-line arguments for neo-script
#[derive(Parser, Debug, Clone)]
#[command(
    name = "neo-script",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and assemble Neo N3 scripts and transactions",
    long_about = "neo-script disassembles and classifies NeoVM scripts, builds verification and \
                  contract-call scripts, and decodes raw transactions without a running node."
)]
pub struct CliArgs {
    /// Client configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Network whose magic is used for signing data
    #[arg(long = "network", value_enum, default_value = "mainnet", global = true)]
    pub network: Network,

    /// Explicit network magic, overriding the network
    #[arg(long = "network-magic", value_name = "MAGIC", global = true)]
    pub network_magic: Option<u32>,

    /// The verbose log level, used when RUST_LOG is not set
    #[arg(long = "verbose", value_enum, default_value = "warn", global = true)]
    pub verbose: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the instructions of a script
    Disasm {
        /// Script as hex (optionally 0x-prefixed) or base64
        script: String,
    },

    /// Tell whether a script is a single-sig or multi-sig verification script
    Classify {
        /// Script as hex (optionally 0x-prefixed) or base64
        script: String,
    },

    /// Build a verification script from public keys
    Verification {
        /// Compressed public keys in hex
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,

        /// Signatures required; builds a multi-sig script when given
        #[arg(short = 't', long = "threshold")]
        threshold: Option<usize>,
    },

    /// Build a script calling a contract method
    Call {
        /// Contract script hash, big-endian hex
        contract: String,

        /// Method name
        method: String,

        /// Arguments as type:value (int, bool, str, hash160, hash256, bytes, key)
        #[arg(num_args = 0..)]
        params: Vec<String>,

        /// Drain the returned iterator into an array of at most N items
        #[arg(long = "unwrap-iterator", value_name = "N")]
        unwrap_iterator: Option<u32>,
    },

    /// Decode a raw transaction and print it as JSON
    DecodeTx {
        /// Transaction as hex or base64
        transaction: String,
    },

    /// Print the data a witness of the transaction has to sign
    SignData {
        /// Transaction as hex or base64
        transaction: String,
    },
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Network enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Private,
}

impl From<Network> for NetworkType {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => NetworkType::MainNet,
            Network::Testnet => NetworkType::TestNet,
            Network::Private => NetworkType::Private,
        }
    }
}

impl CliArgs {
    /// The configuration file if one was given, otherwise defaults for the
    /// selected network. `--network-magic` applies on top of either.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::for_network(self.network.into()),
        };
        if let Some(magic) = self.network_magic {
            config = config.with_network_magic(magic);
        }
        if config.network == NetworkType::Private && config.network_magic.is_none() {
            return Err(ConfigError::Invalid(
                "a private network requires --network-magic".to_string(),
            ));
        }
        Ok(config)
    }
}
