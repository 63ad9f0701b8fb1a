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

//! Invocation and verification scripts carried by witnesses.

mod invocation_script;
mod verification_script;

pub use invocation_script::InvocationScript;
pub use verification_script::VerificationScript;
