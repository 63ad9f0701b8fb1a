// Copyright (C) 2015-2025 The Neo Project.
//
// invocation_script.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Invocation scripts: the pushed signatures or parameters of a witness.

use crate::contract_parameter::ContractParameter;
use crate::{CoreError, CoreResult};
use neo_config::{MAX_WITNESS_SCRIPT_SIZE, SIGNATURE_SIZE};
use neo_io::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use neo_vm::{ScriptBuilder, ScriptReader};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InvocationScript {
    script: Vec<u8>,
}

impl InvocationScript {
    pub fn new(script: Vec<u8>) -> Self {
        Self { script }
    }

    pub fn from_signature(signature: &[u8; SIGNATURE_SIZE]) -> Self {
        Self::from_signatures([signature])
    }

    /// Pushes each signature in the given order.
    pub fn from_signatures<'a>(
        signatures: impl IntoIterator<Item = &'a [u8; SIGNATURE_SIZE]>,
    ) -> Self {
        let mut builder = ScriptBuilder::new();
        for signature in signatures {
            builder.push_data(signature);
        }
        Self::new(builder.into_bytes())
    }

    /// Pushes contract verification parameters, as used by contract signers.
    pub fn from_params(params: &[ContractParameter]) -> CoreResult<Self> {
        let mut builder = ScriptBuilder::new();
        for param in params {
            builder.push_param(param)?;
        }
        Ok(Self::new(builder.into_bytes()))
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Parses the script back into its signatures.
    pub fn signatures(&self) -> CoreResult<Vec<[u8; SIGNATURE_SIZE]>> {
        let mut reader = MemoryReader::new(&self.script);
        let mut signatures = Vec::new();
        while !reader.is_at_end() {
            let data = reader.read_push_data()?;
            let signature: [u8; SIGNATURE_SIZE] = data.as_slice().try_into().map_err(|_| {
                CoreError::ScriptFormat(format!(
                    "invocation script pushes {} bytes where a signature was expected",
                    data.len()
                ))
            })?;
            signatures.push(signature);
        }
        Ok(signatures)
    }
}

impl From<Vec<u8>> for InvocationScript {
    fn from(script: Vec<u8>) -> Self {
        Self::new(script)
    }
}

impl Serializable for InvocationScript {
    fn size(&self) -> usize {
        get_var_bytes_size(self.script.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.script)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self::new(reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?))
    }
}
