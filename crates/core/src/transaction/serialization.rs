// Copyright (C) 2015-2025 The Neo Project.
//
// serialization.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction wire format.

use crate::signer::Signer;
use crate::witness::Witness;
use neo_config::{MAX_SCRIPT_SIZE, MAX_TRANSACTION_ATTRIBUTES, TRANSACTION_HEADER_SIZE};
use neo_io::helper::{get_array_size, get_var_bytes_size};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use super::attributes::TransactionAttribute;
use super::core::Transaction;

impl Transaction {
    pub(crate) fn unsigned_size(&self) -> usize {
        TRANSACTION_HEADER_SIZE
            + get_array_size(&self.signers)
            + get_array_size(&self.attributes)
            + get_var_bytes_size(self.script.len())
    }

    pub(crate) fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version)?;
        writer.write_u32(self.nonce)?;
        writer.write_i64(self.system_fee)?;
        writer.write_i64(self.network_fee)?;
        writer.write_u32(self.valid_until_block)?;
        writer.write_serializable_vec(&self.signers)?;
        writer.write_serializable_vec(&self.attributes)?;
        writer.write_var_bytes(&self.script)
    }

    /// Reads the body written by `serialize_unsigned`.
    fn deserialize_unsigned(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_u8()?;
        let nonce = reader.read_u32()?;
        let system_fee = reader.read_i64()?;
        let network_fee = reader.read_i64()?;
        let valid_until_block = reader.read_u32()?;

        let signers: Vec<Signer> = reader.read_serializable_vec(MAX_TRANSACTION_ATTRIBUTES)?;
        for (i, signer) in signers.iter().enumerate() {
            if signers[..i].iter().any(|s| s.account() == signer.account()) {
                return Err(IoError::format(format!("duplicate signer {}", signer.account())));
            }
        }

        let attributes: Vec<TransactionAttribute> =
            reader.read_serializable_vec(MAX_TRANSACTION_ATTRIBUTES - signers.len())?;
        for (i, attribute) in attributes.iter().enumerate() {
            let kind = attribute.attribute_type();
            if !kind.allows_multiple()
                && attributes[..i].iter().any(|a| a.attribute_type() == kind)
            {
                return Err(IoError::format(format!("duplicate {} attribute", kind.name())));
            }
        }

        let script = reader.read_var_bytes(MAX_SCRIPT_SIZE)?;
        Ok(Self {
            version,
            nonce,
            system_fee,
            network_fee,
            valid_until_block,
            signers,
            attributes,
            script,
            witnesses: Vec::new(),
        })
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        writer.write_serializable_vec(&self.witnesses)
    }

    /// Witnesses are optional: a body that ends after the script is an
    /// unsigned transaction.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let mut transaction = Self::deserialize_unsigned(reader)?;
        if !reader.is_at_end() {
            transaction.witnesses =
                reader.read_serializable_vec::<Witness>(MAX_TRANSACTION_ATTRIBUTES)?;
        }
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UInt160, UInt256};
    use neo_io::SerializableExt;

    fn sample(signers: usize, attributes: usize) -> Transaction {
        let mut tx = Transaction::new();
        tx.set_nonce(0x01020304);
        tx.set_system_fee(1_000);
        tx.set_network_fee(2_000);
        tx.set_valid_until_block(500);
        tx.set_script(vec![0x11, 0x40]);
        tx.set_signers(
            (0..signers)
                .map(|i| Signer::called_by_entry(UInt160::from_array([i as u8; 20])))
                .collect(),
        );
        tx.set_attributes(
            (0..attributes)
                .map(|i| TransactionAttribute::Conflicts {
                    hash: UInt256::from_array([i as u8; 32]),
                })
                .collect(),
        );
        tx
    }

    #[test]
    fn test_header_layout() {
        let tx = sample(0, 0);
        let bytes = tx.to_array().unwrap();
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1..5], [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(bytes[5..13], 1_000i64.to_le_bytes());
        assert_eq!(bytes[21..25], 500u32.to_le_bytes());
        // no signers, no attributes, 2-byte script, no witnesses
        assert_eq!(bytes[25..], [0x00, 0x00, 0x02, 0x11, 0x40, 0x00]);
        assert_eq!(bytes.len(), tx.size());
    }

    #[test]
    fn test_round_trip_signer_and_attribute_counts() {
        for (signers, attributes) in [(0, 0), (1, 1), (16, 0), (0, 16), (1, 15)] {
            let tx = sample(signers, attributes);
            let decoded = Transaction::from_array(&tx.to_array().unwrap()).unwrap();
            assert_eq!(decoded, tx);
        }
    }

    #[test]
    fn test_too_many_signers_and_attributes() {
        let bytes = sample(16, 1).to_array().unwrap();
        assert!(Transaction::from_array(&bytes).is_err());
        assert!(sample(16, 1).validate_limits().is_err());
    }

    #[test]
    fn test_witnesses_are_optional() {
        let tx = sample(1, 0);
        let unsigned = tx.get_hash_data().unwrap();
        let decoded = Transaction::from_array(&unsigned).unwrap();
        assert!(decoded.witnesses().is_empty());
        assert_eq!(decoded.hash().unwrap(), tx.hash().unwrap());
    }

    #[test]
    fn test_duplicate_signers_rejected() {
        let mut tx = sample(1, 0);
        let signer = tx.signers()[0].clone();
        tx.set_signers(vec![signer.clone(), signer]);
        assert!(Transaction::from_array(&tx.to_array().unwrap()).is_err());
        assert!(tx.validate_limits().is_err());
    }
}
