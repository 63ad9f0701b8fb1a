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

//! Neo.IO
//!
//! The binary codec underlying the Neo N3 wire format: little-endian
//! fixed-width integers, compact var-ints and length-prefixed blocks.

mod binary_writer;
mod error;
mod memory_reader;
mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
