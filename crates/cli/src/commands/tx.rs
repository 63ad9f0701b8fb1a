// Copyright (C) 2015-2025 The Neo Project.
//
// tx.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction commands: decode-tx, sign-data.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use neo_core::{Signer, Transaction, TransactionAttribute, Witness};
use neo_io::{Serializable, SerializableExt};
use neo_wallets::script_hash_to_address;
use serde_json::{json, Value};
use tracing::debug;

/// The transaction in the JSON shape a node returns from `getrawtransaction`.
pub fn transaction_to_json(tx: &Transaction) -> Result<Value> {
    Ok(json!({
        "hash": tx.hash()?.to_string(),
        "size": tx.size(),
        "version": tx.version(),
        "nonce": tx.nonce(),
        "sender": tx.sender().map(|sender| script_hash_to_address(&sender)),
        "sysfee": tx.system_fee().to_string(),
        "netfee": tx.network_fee().to_string(),
        "validuntilblock": tx.valid_until_block(),
        "signers": tx.signers().iter().map(Signer::to_json).collect::<Vec<_>>(),
        "attributes": tx.attributes().iter().map(TransactionAttribute::to_json).collect::<Vec<_>>(),
        "script": general_purpose::STANDARD.encode(tx.script()),
        "witnesses": tx.witnesses().iter().map(Witness::to_json).collect::<Vec<_>>(),
    }))
}

pub fn decode(bytes: &[u8]) -> Result<String> {
    let tx = Transaction::from_array(bytes).context("failed to decode transaction")?;
    debug!(size = bytes.len(), signers = tx.signers().len(), "decoded transaction");
    Ok(format!("{:#}\n", transaction_to_json(&tx)?))
}

/// Hash and signing preimage of the transaction for `network_magic`.
pub fn sign_data(bytes: &[u8], network_magic: u32) -> Result<String> {
    let tx = Transaction::from_array(bytes).context("failed to decode transaction")?;
    Ok(format!(
        "hash: {}\nmagic: {network_magic}\nsign data: {}\n",
        tx.hash()?,
        hex::encode(tx.get_sign_data(network_magic)?)
    ))
}
