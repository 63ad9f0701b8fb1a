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

//! NeoVM script assembly.
//!
//! The opcode table, a [`ScriptBuilder`] that assembles bytecode, the
//! [`ScriptReader`] helpers that decode push instructions, and a
//! disassembler. Execution is out of scope for this crate.

pub mod call_flags;
pub mod disassembler;
pub mod error;
pub mod interop_service;
pub mod op_code;
pub mod script_builder;
pub mod script_reader;

pub use call_flags::CallFlags;
pub use disassembler::{disassemble, Instruction};
pub use error::{VmError, VmResult};
pub use interop_service::InteropService;
pub use op_code::{OpCode, OperandSize};
pub use script_builder::{ScriptBuilder, ScriptParam};
pub use script_reader::ScriptReader;
