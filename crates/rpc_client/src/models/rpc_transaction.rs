// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::amount;
use neo_core::UInt256;
use serde::{Deserialize, Serialize};

/// Result of `sendrawtransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRawTransactionResult {
    pub hash: UInt256,
}

/// Result of `calculatenetworkfee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcNetworkFee {
    #[serde(rename = "networkfee", with = "amount")]
    pub network_fee: i64,
}
