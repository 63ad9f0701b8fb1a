// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{amount, RpcStackItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final state of a VM execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VmState {
    #[default]
    None,
    Halt,
    Fault,
    Break,
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VmState::None => "NONE",
            VmState::Halt => "HALT",
            VmState::Fault => "FAULT",
            VmState::Break => "BREAK",
        };
        f.write_str(name)
    }
}

/// Result of `invokescript` / `invokefunction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcInvokeResult {
    #[serde(default)]
    pub script: String,

    pub state: VmState,

    #[serde(rename = "gasconsumed", with = "amount")]
    pub gas_consumed: i64,

    #[serde(default)]
    pub stack: Vec<RpcStackItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<String>,
}

impl RpcInvokeResult {
    pub fn halt(gas_consumed: i64, stack: Vec<RpcStackItem>) -> Self {
        Self {
            script: String::new(),
            state: VmState::Halt,
            gas_consumed,
            stack,
            exception: None,
            session: None,
            tx: None,
        }
    }

    pub fn fault(gas_consumed: i64, exception: impl Into<String>) -> Self {
        Self {
            state: VmState::Fault,
            exception: Some(exception.into()),
            ..Self::halt(gas_consumed, Vec::new())
        }
    }

    pub fn has_state_fault(&self) -> bool {
        self.state == VmState::Fault
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_halt() {
        let result: RpcInvokeResult = serde_json::from_value(json!({
            "script": "EMAfDBSTrRVy",
            "state": "HALT",
            "gasconsumed": "2007570",
            "exception": null,
            "stack": [{"type": "Integer", "value": "8"}]
        }))
        .unwrap();
        assert_eq!(result.state, VmState::Halt);
        assert_eq!(result.gas_consumed, 2_007_570);
        assert!(result.exception.is_none());
        assert_eq!(result.stack.len(), 1);
    }

    #[test]
    fn test_parse_fault() {
        let result: RpcInvokeResult = serde_json::from_value(json!({
            "state": "FAULT",
            "gasconsumed": 9,
            "exception": "ASSERT is executed with false result.",
            "stack": []
        }))
        .unwrap();
        assert!(result.has_state_fault());
        assert_eq!(result.gas_consumed, 9);
    }

    #[test]
    fn test_bad_amount() {
        let parsed = serde_json::from_value::<RpcInvokeResult>(json!({
            "state": "HALT",
            "gasconsumed": "lots"
        }));
        assert!(parsed.is_err());
    }
}
