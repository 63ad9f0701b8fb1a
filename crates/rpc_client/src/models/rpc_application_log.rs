// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_application_log.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{amount, RpcStackItem, VmState};
use neo_core::{UInt160, UInt256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of `getapplicationlog` for a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcApplicationLog {
    #[serde(rename = "txid", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<UInt256>,

    #[serde(rename = "blockhash", default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<UInt256>,

    #[serde(default)]
    pub executions: Vec<RpcExecution>,
}

impl RpcApplicationLog {
    /// The application-trigger execution, if the log has one.
    pub fn application_execution(&self) -> Option<&RpcExecution> {
        self.executions
            .iter()
            .find(|execution| execution.trigger.eq_ignore_ascii_case("Application"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcExecution {
    pub trigger: String,

    #[serde(rename = "vmstate")]
    pub vm_state: VmState,

    #[serde(rename = "gasconsumed", with = "amount")]
    pub gas_consumed: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    #[serde(default)]
    pub stack: Vec<RpcStackItem>,

    #[serde(default)]
    pub notifications: Vec<RpcNotification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcNotification {
    pub contract: UInt160,

    #[serde(rename = "eventname")]
    pub event_name: String,

    /// Event payload, usually an `Array` stack item.
    pub state: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_log() {
        let log: RpcApplicationLog = serde_json::from_value(json!({
            "txid": "0x01bcf2edbd27abb8d660b6a06113b84d02f635fed836ce46a38b4d67eae80109",
            "executions": [{
                "trigger": "Application",
                "vmstate": "HALT",
                "gasconsumed": "9999540",
                "stack": [],
                "notifications": [{
                    "contract": "0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04",
                    "eventname": "Transfer",
                    "state": {"type": "Array", "value": []}
                }]
            }]
        }))
        .unwrap();

        let execution = log.application_execution().unwrap();
        assert_eq!(execution.vm_state, VmState::Halt);
        assert_eq!(execution.gas_consumed, 9_999_540);
        assert_eq!(execution.notifications[0].event_name, "Transfer");
        assert_eq!(
            log.tx_id.unwrap().to_string(),
            "0x01bcf2edbd27abb8d660b6a06113b84d02f635fed836ce46a38b4d67eae80109"
        );
    }
}
