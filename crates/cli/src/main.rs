// Copyright (C) 2015-2025 The Neo Project.
//
// main.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use anyhow::Result;
use clap::Parser;
use neo_cli::args::{CliArgs, Command};
use neo_cli::commands::{parse_bytes, script, tx};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose.into());

    let output = run(&args)?;
    print!("{output}");
    Ok(())
}

fn run(args: &CliArgs) -> Result<String> {
    debug!(command = ?args.command, "running command");
    match &args.command {
        Command::Disasm { script } => script::disasm(&parse_bytes(script)?),
        Command::Classify { script } => script::classify(&parse_bytes(script)?),
        Command::Verification { keys, threshold } => script::verification(keys, *threshold),
        Command::Call {
            contract,
            method,
            params,
            unwrap_iterator,
        } => script::call(contract, method, params, *unwrap_iterator),
        Command::DecodeTx { transaction } => tx::decode(&parse_bytes(transaction)?),
        Command::SignData { transaction } => {
            let config = args.client_config()?;
            tx::sign_data(&parse_bytes(transaction)?, config.network_magic())
        }
    }
}

fn init_tracing(default_level: tracing::Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string().to_lowercase()));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
