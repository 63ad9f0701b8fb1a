// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! A built transaction bound to the node it will be sent to.

use crate::error::Result;
use crate::models::{RpcApplicationLog, RpcRawTransactionResult};
use crate::node_client::NodeClient;
use neo_config::{MAX_TRANSACTION_SIZE, SIGNATURE_SIZE};
use neo_core::{CoreError, Transaction, UInt256, VerificationScript, Witness};
use neo_cryptography::ECPoint;
use neo_io::{Serializable, SerializableExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

pub struct TransactionManager<C> {
    transaction: Transaction,
    client: Arc<C>,
    block_count_when_sent: Option<u32>,
}

impl<C: NodeClient> TransactionManager<C> {
    pub fn new(transaction: Transaction, client: Arc<C>) -> Self {
        Self {
            transaction,
            client,
            block_count_when_sent: None,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }

    pub fn hash(&self) -> Result<UInt256> {
        Ok(self.transaction.hash()?)
    }

    /// The bytes every witness signs: network magic followed by the hash.
    pub fn sign_data(&self) -> Result<Vec<u8>> {
        let magic = self.client.config().network_magic();
        Ok(self.transaction.get_sign_data(magic)?)
    }

    /// Appends a witness. Witnesses must be added in signer order.
    pub fn add_witness(&mut self, witness: Witness) -> &mut Self {
        self.transaction.add_witness(witness);
        self
    }

    /// Appends a multi-sig witness assembled from signatures keyed by public key.
    pub fn add_multi_sig_witness(
        &mut self,
        verification_script: VerificationScript,
        signatures: &BTreeMap<ECPoint, [u8; SIGNATURE_SIZE]>,
    ) -> Result<&mut Self> {
        let witness = Witness::create_multi_sig_witness(verification_script, signatures)?;
        Ok(self.add_witness(witness))
    }

    /// Submits the transaction and records the block count right after.
    ///
    /// Fails without contacting the node when the witnesses do not match the
    /// signers or the transaction is too large.
    pub async fn send(&mut self) -> Result<RpcRawTransactionResult> {
        let signers = self.transaction.signers().len();
        let witnesses = self.transaction.witnesses().len();
        if signers != witnesses {
            return Err(CoreError::TransactionConfiguration(format!(
                "the transaction does not have the same number of signers and witnesses \
                 ({signers} signers, {witnesses} witnesses); for every signer there has to be \
                 one witness, even if that witness is empty"
            ))
            .into());
        }
        let size = self.transaction.size();
        if size > MAX_TRANSACTION_SIZE {
            return Err(CoreError::TransactionConfiguration(format!(
                "the transaction exceeds the maximum transaction size; the maximum size is \
                 {MAX_TRANSACTION_SIZE} bytes while the transaction has size {size}"
            ))
            .into());
        }

        let bytes = self.transaction.to_array()?;
        let result = self.client.send_raw_transaction(&bytes).await?;
        let block_count = self.client.get_block_count().await?;
        self.block_count_when_sent = Some(block_count);
        info!(hash = %result.hash, block_count, size, "transaction sent");
        Ok(result)
    }

    /// Block count observed right after sending; `None` until sent.
    pub fn block_count_when_sent(&self) -> Option<u32> {
        self.block_count_when_sent
    }

    pub async fn application_log(&self) -> Result<RpcApplicationLog> {
        if self.block_count_when_sent.is_none() {
            return Err(CoreError::InvalidState(
                "cannot get the application log before the transaction has been sent".to_string(),
            )
            .into());
        }
        let hash = self.transaction.hash()?;
        Ok(self.client.get_application_log(&hash).await?)
    }
}
