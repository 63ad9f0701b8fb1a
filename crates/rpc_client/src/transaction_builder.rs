// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fee-aware construction and signing of transactions.

use crate::error::{Error, Result, RpcError};
use crate::models::RpcInvokeResult;
use crate::node_client::NodeClient;
use crate::transaction_manager::TransactionManager;
use neo_config::{MAX_TRANSACTION_ATTRIBUTES, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_core::{
    ContractParameter, CoreError, InvocationScript, Signer, Transaction, TransactionAttribute,
    UInt160, VerificationScript, Witness,
};
use neo_io::SerializableExt;
use neo_vm::{InteropService, ScriptBuilder};
use neo_wallets::{Account, SignerKind, TransactionSigner};
use num_bigint::BigInt;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Called with `(fees, balance)` when the sender cannot cover the fees.
pub type FeeShortfallHandler = Box<dyn Fn(&BigInt, &BigInt) + Send + Sync>;

/// Produces the error raised when the sender cannot cover the fees.
pub type FeeErrorSupplier = Box<dyn Fn() -> Box<dyn std::error::Error + Send + Sync> + Send + Sync>;

const BALANCE_OF: &str = "balanceOf";

/// Stand-in key for placeholder verification scripts; only its size matters.
const PLACEHOLDER_KEY: [u8; PUBLIC_KEY_SIZE] = [0x02; PUBLIC_KEY_SIZE];
const PLACEHOLDER_SIGNATURE: [u8; SIGNATURE_SIZE] = [0u8; SIGNATURE_SIZE];

/// Collects the parts of a transaction, then resolves fees and the
/// valid-until-block height against a node and signs the result.
///
/// ```no_run
/// # async fn demo() -> neo_rpc_client::Result<()> {
/// use neo_config::ClientConfig;
/// use neo_rpc_client::{RpcClient, TransactionBuilder};
/// use neo_wallets::{Account, TransactionSigner};
/// use std::sync::Arc;
///
/// let client = Arc::new(RpcClient::from_config(ClientConfig::default())?);
/// let account = Account::from_wif("KzQMj6by8e8RaL6W2oaqbn2XMKnM7gueSEVUF4Fwg9LmDWuojqKb")?;
/// let mut manager = TransactionBuilder::new(client)
///     .script(vec![0x11, 0x40])
///     .signers(vec![TransactionSigner::called_by_entry(account)])?
///     .sign()
///     .await?;
/// manager.send().await?;
/// # Ok(())
/// # }
/// ```
pub struct TransactionBuilder<C> {
    client: Arc<C>,
    version: u8,
    nonce: u32,
    valid_until_block: Option<u32>,
    signers: Vec<TransactionSigner>,
    attributes: Vec<TransactionAttribute>,
    script: Vec<u8>,
    additional_network_fee: i64,
    additional_system_fee: i64,
    fee_shortfall_handler: Option<FeeShortfallHandler>,
    fee_error_supplier: Option<FeeErrorSupplier>,
}

impl<C: NodeClient> TransactionBuilder<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            version: 0,
            nonce: rand::random(),
            valid_until_block: None,
            signers: Vec::new(),
            attributes: Vec::new(),
            script: Vec::new(),
            additional_network_fee: 0,
            additional_system_fee: 0,
            fee_shortfall_handler: None,
            fee_error_supplier: None,
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    /// Fixes the last block height at which the transaction is valid.
    /// Without it, the height is derived from the node's block count.
    pub fn valid_until_block(mut self, height: u32) -> Self {
        self.valid_until_block = Some(height);
        self
    }

    /// Replaces the signers. The first signer pays the fees unless one has
    /// the fee-only scope `None`.
    pub fn signers(mut self, signers: Vec<TransactionSigner>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = signers.iter().find(|s| !seen.insert(s.script_hash())) {
            return Err(CoreError::TransactionConfiguration(format!(
                "cannot add multiple signers concerning the same account {}",
                duplicate.script_hash()
            ))
            .into());
        }
        check_attribute_limit(signers.len(), self.attributes.len())?;
        self.signers = signers;
        Ok(self)
    }

    /// Moves the signer for `account` to the front, making it the sender.
    pub fn first_signer(mut self, account: UInt160) -> Result<Self> {
        if self.signers.iter().any(|s| s.scopes().is_none()) {
            return Err(CoreError::InvalidState(
                "this transaction contains a signer with fee-only witness scope that will cover \
                 the fees, so the order of the signers does not affect the payment of the fees"
                    .to_string(),
            )
            .into());
        }
        let position = self
            .signers
            .iter()
            .position(|s| s.script_hash() == account)
            .ok_or_else(|| {
                CoreError::InvalidArgument(format!(
                    "could not find a signer with script hash {account}"
                ))
            })?;
        let signer = self.signers.remove(position);
        self.signers.insert(0, signer);
        Ok(self)
    }

    /// Appends attributes. A repeated `HighPriority` is ignored.
    pub fn attributes(mut self, attributes: Vec<TransactionAttribute>) -> Result<Self> {
        check_attribute_limit(self.signers.len(), self.attributes.len() + attributes.len())?;
        for attribute in attributes {
            if attribute == TransactionAttribute::HighPriority && self.is_high_priority() {
                continue;
            }
            self.attributes.push(attribute);
        }
        Ok(self)
    }

    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.script = script;
        self
    }

    /// Concatenates `script` to the current script.
    pub fn extend_script(mut self, script: &[u8]) -> Self {
        self.script.extend_from_slice(script);
        self
    }

    /// Added on top of the network fee the node calculates.
    pub fn additional_network_fee(mut self, fee: i64) -> Self {
        self.additional_network_fee = fee;
        self
    }

    /// Added on top of the GAS consumed by the simulated script.
    pub fn additional_system_fee(mut self, fee: i64) -> Self {
        self.additional_system_fee = fee;
        self
    }

    /// Registers a callback invoked with `(fees, balance)` when the sender's
    /// fee-token balance is too low. Building still succeeds.
    pub fn do_if_sender_cannot_cover_fees<F>(mut self, handler: F) -> Result<Self>
    where
        F: Fn(&BigInt, &BigInt) + Send + Sync + 'static,
    {
        if self.fee_error_supplier.is_some() {
            return Err(CoreError::InvalidState(
                "cannot handle a consumer for this case, since an error will be raised if the \
                 sender cannot cover the fees"
                    .to_string(),
            )
            .into());
        }
        self.fee_shortfall_handler = Some(Box::new(handler));
        Ok(self)
    }

    /// Registers an error raised, as [`Error::FeeCoverage`], when the
    /// sender's fee-token balance is too low.
    pub fn throw_if_sender_cannot_cover_fees<F>(mut self, supplier: F) -> Result<Self>
    where
        F: Fn() -> Box<dyn std::error::Error + Send + Sync> + Send + Sync + 'static,
    {
        if self.fee_shortfall_handler.is_some() {
            return Err(CoreError::InvalidState(
                "cannot handle a supplier for this case, since a consumer will be executed if the \
                 sender cannot cover the fees"
                    .to_string(),
            )
            .into());
        }
        self.fee_error_supplier = Some(Box::new(supplier));
        Ok(self)
    }

    pub fn signer_list(&self) -> &[TransactionSigner] {
        &self.signers
    }

    pub fn current_script(&self) -> &[u8] {
        &self.script
    }

    pub fn is_high_priority(&self) -> bool {
        self.attributes.contains(&TransactionAttribute::HighPriority)
    }

    /// Simulates the current script with the current signers.
    pub async fn call_invoke_script(&self) -> Result<RpcInvokeResult> {
        if self.script.is_empty() {
            return Err(CoreError::InvalidState(
                "cannot make an 'invokescript' call without the script being configured"
                    .to_string(),
            )
            .into());
        }
        Ok(self
            .client
            .invoke_script(&self.script, &self.core_signers())
            .await?)
    }

    /// Resolves validity height and fees and returns the transaction without witnesses.
    pub async fn get_unsigned_transaction(&self) -> Result<TransactionManager<C>> {
        let transaction = self.build_transaction().await?;
        Ok(TransactionManager::new(transaction, Arc::clone(&self.client)))
    }

    /// Builds the transaction and adds a witness for every signer.
    ///
    /// Contract signers get their verification parameters as invocation
    /// script. Account signers must hold a private key; multi-sig accounts
    /// cannot be signed here, use
    /// [`TransactionManager::add_multi_sig_witness`] on the unsigned
    /// transaction instead.
    pub async fn sign(&self) -> Result<TransactionManager<C>> {
        for signer in &self.signers {
            if let SignerKind::Account(account) = signer.kind() {
                check_can_auto_sign(account)?;
            }
        }

        let mut manager = self.get_unsigned_transaction().await?;
        let sign_data = manager.sign_data()?;
        for signer in &self.signers {
            let witness = match signer.kind() {
                SignerKind::Contract { verify_params } => Witness::contract(verify_params)?,
                SignerKind::Account(account) => {
                    let key_pair = account.key_pair().ok_or_else(|| missing_key(account))?;
                    let signature = key_pair.sign(&sign_data)?;
                    Witness::from_signature(&signature, key_pair.public_key())
                }
            };
            manager.add_witness(witness);
        }
        debug!(witnesses = manager.transaction().witnesses().len(), "transaction signed");
        Ok(manager)
    }

    /// Signs and sends; the returned manager remembers the block count at sending.
    pub async fn send(&self) -> Result<TransactionManager<C>> {
        let mut manager = self.sign().await?;
        manager.send().await?;
        Ok(manager)
    }

    async fn build_transaction(&self) -> Result<Transaction> {
        if self.script.is_empty() {
            return Err(CoreError::InvalidState(
                "cannot build a transaction without a script".to_string(),
            )
            .into());
        }
        if self.signers.is_empty() {
            return Err(CoreError::InvalidState(
                "cannot create a transaction without signers; at least one signer with witness \
                 scope fee-only or higher is required"
                    .to_string(),
            )
            .into());
        }

        let mut transaction = Transaction::new();
        transaction.set_version(self.version);
        transaction.set_nonce(self.nonce);
        transaction.set_signers(self.core_signers());
        transaction.set_attributes(self.attributes.clone());
        transaction.set_script(self.script.clone());
        transaction.validate_limits()?;

        let valid_until_block = match self.valid_until_block {
            Some(height) => height,
            None => {
                let block_count = self.client.get_block_count().await?;
                let increment = self.client.config().max_valid_until_block_increment;
                let height = block_count.saturating_add(increment).saturating_sub(1);
                debug!(block_count, valid_until_block = height, "resolved validity height");
                height
            }
        };
        transaction.set_valid_until_block(valid_until_block);

        if self.is_high_priority() && !self.is_allowed_for_high_priority().await? {
            return Err(CoreError::TransactionConfiguration(
                "this transaction does not have a committee member as signer; only committee \
                 members can send transactions with high priority"
                    .to_string(),
            )
            .into());
        }

        let system_fee = self
            .system_fee_for_script()
            .await?
            .checked_add(self.additional_system_fee)
            .ok_or_else(|| fee_overflow("system"))?;
        transaction.set_system_fee(system_fee);

        let network_fee = self
            .network_fee_for(&transaction)
            .await?
            .checked_add(self.additional_network_fee)
            .ok_or_else(|| fee_overflow("network"))?;
        transaction.set_network_fee(network_fee);
        debug!(system_fee, network_fee, "fees resolved");

        if self.fee_shortfall_handler.is_some() || self.fee_error_supplier.is_some() {
            self.check_sender_balance(&transaction).await?;
        }

        let hash = transaction.hash()?;
        info!(
            %hash,
            valid_until_block,
            system_fee,
            network_fee,
            "built unsigned transaction"
        );
        Ok(transaction)
    }

    async fn system_fee_for_script(&self) -> Result<i64> {
        let result = self
            .client
            .invoke_script(&self.script, &self.core_signers())
            .await?;
        if result.has_state_fault() {
            let exception = result.exception.clone().unwrap_or_default();
            if !self.client.config().allow_transmission_on_fault {
                return Err(CoreError::TransactionConfiguration(format!(
                    "The vm exited due to the following exception: {exception}"
                ))
                .into());
            }
            warn!(%exception, "script faults, building anyway");
        }
        Ok(result.gas_consumed)
    }

    /// Prices a copy of the transaction carrying placeholder witnesses of the
    /// same size as the real ones.
    async fn network_fee_for(&self, transaction: &Transaction) -> Result<i64> {
        let mut priced = transaction.clone();
        let witnesses = self
            .signers
            .iter()
            .map(placeholder_witness)
            .collect::<Result<Vec<_>>>()?;
        priced.set_witnesses(witnesses);
        let bytes = priced.to_array()?;
        Ok(self.client.calculate_network_fee(&bytes).await?)
    }

    async fn check_sender_balance(&self, transaction: &Transaction) -> Result<()> {
        let sender = transaction.sender().ok_or_else(|| {
            CoreError::InvalidState("the transaction has no sender".to_string())
        })?;
        let fees = BigInt::from(transaction.system_fee()) + BigInt::from(transaction.network_fee());
        let balance = self.fee_token_balance(sender).await?;
        debug!(%sender, %fees, %balance, "checked sender balance");

        if fees > balance {
            if let Some(handler) = &self.fee_shortfall_handler {
                warn!(%sender, %fees, %balance, "sender cannot cover the fees");
                handler(&fees, &balance);
            } else if let Some(supplier) = &self.fee_error_supplier {
                return Err(Error::FeeCoverage(supplier()));
            }
        }
        Ok(())
    }

    async fn fee_token_balance(&self, account: UInt160) -> Result<BigInt> {
        let token = UInt160::parse(&self.client.config().fee_token_hash)?;
        let result = self
            .client
            .invoke_function(
                &token,
                BALANCE_OF,
                &[ContractParameter::Hash160(account)],
                &[],
            )
            .await?;
        result
            .stack
            .first()
            .and_then(|item| item.as_integer())
            .ok_or_else(|| {
                RpcError::InvalidResponse(format!(
                    "{BALANCE_OF} of {token} did not return an integer"
                ))
                .into()
            })
    }

    async fn is_allowed_for_high_priority(&self) -> Result<bool> {
        let committee: HashSet<UInt160> = self
            .client
            .get_committee()
            .await?
            .iter()
            .map(|key| VerificationScript::from_public_key(key).script_hash())
            .collect();

        if self.signers.iter().any(|s| committee.contains(&s.script_hash())) {
            return Ok(true);
        }
        for signer in &self.signers {
            let SignerKind::Account(account) = signer.kind() else {
                continue;
            };
            let Some(script) = account.verification_script().filter(|s| s.is_multi_sig()) else {
                continue;
            };
            let is_member = script.public_keys()?.iter().any(|key| {
                committee.contains(&VerificationScript::from_public_key(key).script_hash())
            });
            if is_member {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn core_signers(&self) -> Vec<Signer> {
        self.signers.iter().map(|s| s.signer().clone()).collect()
    }
}

impl<C> fmt::Debug for TransactionBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionBuilder")
            .field("version", &self.version)
            .field("nonce", &self.nonce)
            .field("valid_until_block", &self.valid_until_block)
            .field("signers", &self.signers)
            .field("attributes", &self.attributes)
            .field("script", &hex::encode(&self.script))
            .finish_non_exhaustive()
    }
}

fn check_attribute_limit(signers: usize, attributes: usize) -> Result<()> {
    if signers + attributes > MAX_TRANSACTION_ATTRIBUTES {
        return Err(CoreError::TransactionConfiguration(format!(
            "a transaction cannot have more than {MAX_TRANSACTION_ATTRIBUTES} attributes \
             (including signers)"
        ))
        .into());
    }
    Ok(())
}

fn check_can_auto_sign(account: &Account) -> Result<()> {
    if account.is_multi_sig() {
        return Err(CoreError::Unsupported(format!(
            "transactions with multi-sig signers cannot be signed automatically; \
             add a multi-sig witness for {} to the unsigned transaction instead",
            account.address()
        ))
        .into());
    }
    if account.key_pair().is_none() {
        return Err(missing_key(account));
    }
    Ok(())
}

fn missing_key(account: &Account) -> Error {
    CoreError::InvalidState(format!(
        "cannot create transaction signature because account {} does not hold a private key",
        account.address()
    ))
    .into()
}

fn fee_overflow(kind: &str) -> Error {
    CoreError::TransactionConfiguration(format!("the {kind} fee overflows")).into()
}

/// A witness the size of the one `signer` will eventually carry.
fn placeholder_witness(signer: &TransactionSigner) -> Result<Witness> {
    let account = match signer.kind() {
        SignerKind::Contract { verify_params } => return Ok(Witness::contract(verify_params)?),
        SignerKind::Account(account) => account,
    };

    let witness = match account.verification_script() {
        Some(script) if script.is_multi_sig() => Witness::new(
            placeholder_invocation(script.signing_threshold()?),
            script.clone(),
        ),
        Some(script) => Witness::new(placeholder_invocation(1), script.clone()),
        None if account.is_multi_sig() => {
            let threshold = account.signing_threshold()?;
            let participants = account.nr_of_participants()?;
            Witness::new(
                placeholder_invocation(threshold),
                placeholder_multi_sig_script(threshold, participants),
            )
        }
        None => {
            let mut builder = ScriptBuilder::new();
            builder
                .push_data(&PLACEHOLDER_KEY)
                .sys_call(InteropService::SystemCryptoCheckSig);
            Witness::new(placeholder_invocation(1), VerificationScript::new(builder.into_bytes()))
        }
    };
    Ok(witness)
}

fn placeholder_invocation(signatures: usize) -> InvocationScript {
    InvocationScript::from_signatures(std::iter::repeat(&PLACEHOLDER_SIGNATURE).take(signatures))
}

fn placeholder_multi_sig_script(threshold: usize, participants: usize) -> VerificationScript {
    let mut builder = ScriptBuilder::new();
    builder.push_int(threshold as i64);
    for _ in 0..participants {
        builder.push_data(&PLACEHOLDER_KEY);
    }
    builder
        .push_int(participants as i64)
        .sys_call(InteropService::SystemCryptoCheckMultisig);
    VerificationScript::new(builder.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_cryptography::ECPoint;
    use neo_wallets::KeyPair;

    fn key(seed: u8) -> KeyPair {
        KeyPair::from_private_key(&[seed; 32]).unwrap()
    }

    #[test]
    fn test_placeholder_matches_single_sig_size() {
        let account = Account::from_key_pair(key(1));
        let signer = TransactionSigner::called_by_entry(account.clone());
        let placeholder = placeholder_witness(&signer).unwrap();

        let real = Witness::from_signature(&[7u8; SIGNATURE_SIZE], key(1).public_key());
        assert_eq!(placeholder.to_array().unwrap().len(), real.to_array().unwrap().len());

        let watch_only =
            TransactionSigner::called_by_entry(Account::from_script_hash(UInt160::ZERO));
        let placeholder = placeholder_witness(&watch_only).unwrap();
        assert_eq!(placeholder.to_array().unwrap().len(), real.to_array().unwrap().len());
    }

    #[test]
    fn test_placeholder_matches_multi_sig_size() {
        let keys: Vec<ECPoint> = (1..=3).map(|seed| key(seed).public_key().clone()).collect();
        let script = VerificationScript::from_public_keys(&keys, 2).unwrap();
        let real = Witness::new(
            InvocationScript::from_signatures([&[1u8; SIGNATURE_SIZE], &[2u8; SIGNATURE_SIZE]]),
            script.clone(),
        );

        let known = Account::from_verification_script(script.clone()).unwrap();
        let placeholder = placeholder_witness(&TransactionSigner::called_by_entry(known)).unwrap();
        assert_eq!(placeholder, Witness::new(placeholder_invocation(2), script.clone()));

        let watch_only = Account::multi_sig_watch_only(script.script_hash(), 2, 3).unwrap();
        let placeholder =
            placeholder_witness(&TransactionSigner::called_by_entry(watch_only)).unwrap();
        assert!(placeholder.verification_script.is_multi_sig());
        assert_eq!(placeholder.to_array().unwrap().len(), real.to_array().unwrap().len());
    }

    #[test]
    fn test_contract_placeholder_uses_params() {
        let params = vec![ContractParameter::integer(5)];
        let signer = TransactionSigner::contract_called_by_entry(UInt160::ZERO, params.clone());
        assert_eq!(placeholder_witness(&signer).unwrap(), Witness::contract(&params).unwrap());
    }

    #[test]
    fn test_attribute_limit() {
        assert!(check_attribute_limit(10, 6).is_ok());
        assert!(matches!(
            check_attribute_limit(10, 7),
            Err(Error::Core(CoreError::TransactionConfiguration(_)))
        ));
    }
}
