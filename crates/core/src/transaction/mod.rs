// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction types.
//!
//! - `core` - the Transaction struct, hashing and signing data
//! - `attributes` - transaction attributes
//! - `serialization` - the binary wire format

pub mod attributes;
pub mod core;
pub mod serialization;

pub use attributes::{OracleResponseCode, TransactionAttribute, TransactionAttributeType};
pub use self::core::Transaction;
