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

//! neo-script library
//!
//! Argument definitions and command implementations behind the
//! `neo-script` binary. Commands return their output as text so they can be
//! exercised without a terminal.

pub mod args;
pub mod commands;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
