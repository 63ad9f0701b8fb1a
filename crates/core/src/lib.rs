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

//! Neo Core
//!
//! The transaction model of Neo N3: hashes, contract parameters, the
//! witness authorization model and the transaction itself, with their
//! binary wire format.
//!
//! ## Example
//!
//! ```rust
//! use neo_core::{Signer, Transaction, UInt160};
//!
//! let account = UInt160::from_array([1u8; 20]);
//! let mut tx = Transaction::new();
//! tx.set_script(vec![0x11]);
//! tx.set_signers(vec![Signer::called_by_entry(account)]);
//! assert_eq!(tx.sender(), Some(account));
//! ```
//!
//! ## Architecture
//!
//! - **Basic Types**: `uint` - `UInt160` and `UInt256`
//! - **Scripts**: `contract_parameter`, `script` - parameters and witness scripts
//! - **Authorization**: `witness_scope`, `witness_rule`, `signer`, `witness`
//! - **Transactions**: `transaction` - attributes, hashing, serialization

/// Typed contract invocation arguments
pub mod contract_parameter;
/// Core error types
pub mod error;
/// Invocation and verification scripts
pub mod script;
/// Transaction signers
pub mod signer;
/// Transactions and their attributes
pub mod transaction;
/// Fixed-size hashes
pub mod uint;
/// Witnesses
pub mod witness;
/// Witness rules and conditions
pub mod witness_rule;
/// Witness scopes
pub mod witness_scope;

pub use contract_parameter::{ContractParameter, ContractParameterType};
pub use error::{CoreError, CoreResult};
pub use script::{InvocationScript, VerificationScript};
pub use signer::Signer;
pub use transaction::{
    OracleResponseCode, Transaction, TransactionAttribute, TransactionAttributeType,
};
pub use uint::{UInt160, UInt256};
pub use witness::Witness;
pub use witness_rule::{WitnessCondition, WitnessConditionType, WitnessRule, WitnessRuleAction};
pub use witness_scope::WitnessScope;
