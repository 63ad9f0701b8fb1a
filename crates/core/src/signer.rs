// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of Signer: an account plus the scope its witness is valid in.

use crate::witness_rule::WitnessRule;
use crate::witness_scope::WitnessScope;
use crate::{CoreError, CoreResult, UInt160};
use neo_config::{ADDRESS_SIZE, MAX_NESTING_DEPTH, MAX_SIGNER_SUBITEMS};
use neo_cryptography::ECPoint;
use neo_io::helper::get_var_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde_json::{json, Map, Value};

/// An account that must witness a transaction, together with its scope.
///
/// The restriction lists only grow through the `add_*` methods, each of
/// which enforces the per-list limit and turns on the matching scope flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    account: UInt160,
    scopes: WitnessScope,
    allowed_contracts: Vec<UInt160>,
    allowed_groups: Vec<ECPoint>,
    rules: Vec<WitnessRule>,
}

impl Signer {
    /// A signer with the given scope and empty restriction lists.
    pub fn new(account: UInt160, scopes: WitnessScope) -> CoreResult<Self> {
        if !scopes.is_valid() {
            return Err(CoreError::SignerConfiguration(format!(
                "invalid witness scope combination: {scopes}"
            )));
        }
        Ok(Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
            rules: Vec::new(),
        })
    }

    fn with_scope(account: UInt160, scopes: WitnessScope) -> Self {
        Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// A signer whose witness only covers the transaction itself (fee payer).
    pub fn none(account: UInt160) -> Self {
        Self::with_scope(account, WitnessScope::NONE)
    }

    pub fn called_by_entry(account: UInt160) -> Self {
        Self::with_scope(account, WitnessScope::CALLED_BY_ENTRY)
    }

    pub fn global(account: UInt160) -> Self {
        Self::with_scope(account, WitnessScope::GLOBAL)
    }

    pub fn account(&self) -> UInt160 {
        self.account
    }

    pub fn scopes(&self) -> WitnessScope {
        self.scopes
    }

    pub fn allowed_contracts(&self) -> &[UInt160] {
        &self.allowed_contracts
    }

    pub fn allowed_groups(&self) -> &[ECPoint] {
        &self.allowed_groups
    }

    pub fn rules(&self) -> &[WitnessRule] {
        &self.rules
    }

    fn ensure_not_global(&self, what: &str) -> CoreResult<()> {
        if self.scopes.has_flag(WitnessScope::GLOBAL) {
            return Err(CoreError::SignerConfiguration(format!(
                "trying to set {what} on a Signer with global scope"
            )));
        }
        Ok(())
    }

    fn ensure_room(current: usize, added: usize, what: &str) -> CoreResult<()> {
        if current + added > MAX_SIGNER_SUBITEMS {
            return Err(CoreError::SignerConfiguration(format!(
                "a signer's scope can only contain {MAX_SIGNER_SUBITEMS} {what}, tried to hold {}",
                current + added
            )));
        }
        Ok(())
    }

    fn enable(&mut self, flag: WitnessScope) {
        self.scopes = self.scopes.combine(flag);
    }

    /// Appends contracts the witness is valid in. An empty input changes nothing.
    pub fn add_allowed_contracts(
        &mut self,
        contracts: impl IntoIterator<Item = UInt160>,
    ) -> CoreResult<&mut Self> {
        let contracts: Vec<UInt160> = contracts.into_iter().collect();
        if contracts.is_empty() {
            return Ok(self);
        }
        self.ensure_not_global("allowed contracts")?;
        Self::ensure_room(self.allowed_contracts.len(), contracts.len(), "allowed contracts")?;
        self.enable(WitnessScope::CUSTOM_CONTRACTS);
        self.allowed_contracts.extend(contracts);
        Ok(self)
    }

    /// Appends contract groups the witness is valid in.
    pub fn add_allowed_groups(
        &mut self,
        groups: impl IntoIterator<Item = ECPoint>,
    ) -> CoreResult<&mut Self> {
        let groups: Vec<ECPoint> = groups.into_iter().collect();
        if groups.is_empty() {
            return Ok(self);
        }
        self.ensure_not_global("allowed contract groups")?;
        Self::ensure_room(self.allowed_groups.len(), groups.len(), "allowed contract groups")?;
        self.enable(WitnessScope::CUSTOM_GROUPS);
        self.allowed_groups.extend(groups);
        Ok(self)
    }

    /// Appends witness rules after checking each condition's nesting depth.
    pub fn add_rules(
        &mut self,
        rules: impl IntoIterator<Item = WitnessRule>,
    ) -> CoreResult<&mut Self> {
        let rules: Vec<WitnessRule> = rules.into_iter().collect();
        if rules.is_empty() {
            return Ok(self);
        }
        self.ensure_not_global("witness rules")?;
        Self::ensure_room(self.rules.len(), rules.len(), "rules")?;
        for rule in &rules {
            rule.condition.check_depth(MAX_NESTING_DEPTH)?;
        }
        self.enable(WitnessScope::WITNESS_RULES);
        self.rules.extend(rules);
        Ok(self)
    }

    /// The JSON object accepted by `invokescript` and friends.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("account".into(), json!(self.account.to_string()));
        object.insert("scopes".into(), json!(self.scopes.to_string()));
        if self.scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            object.insert(
                "allowedcontracts".into(),
                json!(self.allowed_contracts.iter().map(ToString::to_string).collect::<Vec<_>>()),
            );
        }
        if self.scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            object.insert(
                "allowedgroups".into(),
                json!(self.allowed_groups.iter().map(ECPoint::to_hex).collect::<Vec<_>>()),
            );
        }
        if self.scopes.has_flag(WitnessScope::WITNESS_RULES) {
            object.insert(
                "rules".into(),
                Value::Array(self.rules.iter().map(WitnessRule::to_json).collect()),
            );
        }
        Value::Object(object)
    }

    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let text = |key: &str| {
            json.get(key)
                .and_then(Value::as_str)
                .ok_or_else(|| CoreError::InvalidArgument(format!("signer missing '{key}'")))
        };
        let list = |key: &str| json.get(key).and_then(Value::as_array).cloned().unwrap_or_default();

        let account = UInt160::parse(text("account")?)?;
        let scopes: WitnessScope = text("scopes")?.parse()?;
        let mut signer = Signer::new(account, scopes)?;

        let contracts = list("allowedcontracts")
            .iter()
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| {
                        CoreError::InvalidArgument("allowed contract must be a string".into())
                    })
                    .and_then(UInt160::parse)
            })
            .collect::<CoreResult<Vec<_>>>()?;
        let groups = list("allowedgroups")
            .iter()
            .map(|v| -> CoreResult<ECPoint> {
                let hex = v.as_str().ok_or_else(|| {
                    CoreError::InvalidArgument("allowed group must be a string".into())
                })?;
                Ok(ECPoint::from_hex(hex)?)
            })
            .collect::<CoreResult<Vec<_>>>()?;
        let rules = list("rules")
            .iter()
            .map(WitnessRule::from_json)
            .collect::<CoreResult<Vec<_>>>()?;

        signer.add_allowed_contracts(contracts)?;
        signer.add_allowed_groups(groups)?;
        signer.add_rules(rules)?;
        Ok(signer)
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = ADDRESS_SIZE + 1;
        if self.scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            size += get_var_size(self.allowed_contracts.len() as u64)
                + self.allowed_contracts.len() * ADDRESS_SIZE;
        }
        if self.scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            size += get_var_size(self.allowed_groups.len() as u64)
                + self.allowed_groups.len() * neo_config::PUBLIC_KEY_SIZE;
        }
        if self.scopes.has_flag(WitnessScope::WITNESS_RULES) {
            size += neo_io::helper::get_array_size(&self.rules);
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.account.serialize(writer)?;
        writer.write_u8(self.scopes.to_byte())?;
        if self.scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            writer.write_serializable_vec(&self.allowed_contracts)?;
        }
        if self.scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            writer.write_var_int(self.allowed_groups.len() as u64)?;
            for group in &self.allowed_groups {
                writer.write_bytes(&group.encode_compressed())?;
            }
        }
        if self.scopes.has_flag(WitnessScope::WITNESS_RULES) {
            writer.write_serializable_vec(&self.rules)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let account = UInt160::deserialize(reader)?;
        let scopes = WitnessScope::from_byte(reader.read_u8()?)
            .map_err(|e| IoError::format(e.to_string()))?;
        let mut signer = Signer::with_scope(account, scopes);

        if scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            signer.allowed_contracts = reader.read_serializable_vec(MAX_SIGNER_SUBITEMS)?;
        }
        if scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            let count = reader.read_var_int(MAX_SIGNER_SUBITEMS as u64)? as usize;
            for _ in 0..count {
                let bytes: [u8; neo_config::PUBLIC_KEY_SIZE] = reader.read_array()?;
                let group = ECPoint::decode_compressed(&bytes)
                    .map_err(|e| IoError::invalid_data(e.to_string()))?;
                signer.allowed_groups.push(group);
            }
        }
        if scopes.has_flag(WitnessScope::WITNESS_RULES) {
            signer.rules = reader.read_serializable_vec(MAX_SIGNER_SUBITEMS)?;
        }
        Ok(signer)
    }
}
