// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Signers as the transaction builder sees them: a [`Signer`] plus what is
//! needed to produce its witness.

use crate::{Account, WalletResult};
use neo_core::{ContractParameter, Signer, UInt160, WitnessRule, WitnessScope};
use neo_cryptography::ECPoint;

/// How the witness of a signer is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerKind {
    /// Signed with the account's key, or by assembling a multi-sig witness.
    Account(Account),
    /// A contract verified by calling its `verify` method with these parameters.
    Contract { verify_params: Vec<ContractParameter> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSigner {
    signer: Signer,
    kind: SignerKind,
}

impl TransactionSigner {
    pub fn from_account(account: Account, scopes: WitnessScope) -> WalletResult<Self> {
        Ok(Self {
            signer: Signer::new(account.script_hash(), scopes)?,
            kind: SignerKind::Account(account),
        })
    }

    pub fn called_by_entry(account: Account) -> Self {
        Self {
            signer: Signer::called_by_entry(account.script_hash()),
            kind: SignerKind::Account(account),
        }
    }

    /// Fee-only signer.
    pub fn none(account: Account) -> Self {
        Self {
            signer: Signer::none(account.script_hash()),
            kind: SignerKind::Account(account),
        }
    }

    pub fn global(account: Account) -> Self {
        Self {
            signer: Signer::global(account.script_hash()),
            kind: SignerKind::Account(account),
        }
    }

    pub fn contract(
        contract_hash: UInt160,
        verify_params: Vec<ContractParameter>,
        scopes: WitnessScope,
    ) -> WalletResult<Self> {
        Ok(Self {
            signer: Signer::new(contract_hash, scopes)?,
            kind: SignerKind::Contract { verify_params },
        })
    }

    pub fn contract_called_by_entry(
        contract_hash: UInt160,
        verify_params: Vec<ContractParameter>,
    ) -> Self {
        Self {
            signer: Signer::called_by_entry(contract_hash),
            kind: SignerKind::Contract { verify_params },
        }
    }

    pub fn add_allowed_contracts(
        &mut self,
        contracts: impl IntoIterator<Item = UInt160>,
    ) -> WalletResult<&mut Self> {
        self.signer.add_allowed_contracts(contracts)?;
        Ok(self)
    }

    pub fn add_allowed_groups(
        &mut self,
        groups: impl IntoIterator<Item = ECPoint>,
    ) -> WalletResult<&mut Self> {
        self.signer.add_allowed_groups(groups)?;
        Ok(self)
    }

    pub fn add_rules(
        &mut self,
        rules: impl IntoIterator<Item = WitnessRule>,
    ) -> WalletResult<&mut Self> {
        self.signer.add_rules(rules)?;
        Ok(self)
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub fn kind(&self) -> &SignerKind {
        &self.kind
    }

    pub fn script_hash(&self) -> UInt160 {
        self.signer.account()
    }

    pub fn scopes(&self) -> WitnessScope {
        self.signer.scopes()
    }
}

impl From<TransactionSigner> for Signer {
    fn from(value: TransactionSigner) -> Self {
        value.signer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyPair;

    #[test]
    fn test_account_signer_carries_account() {
        let account = Account::from_key_pair(KeyPair::from_private_key(&[1u8; 32]).unwrap());
        let mut signer = TransactionSigner::called_by_entry(account.clone());
        signer
            .add_allowed_contracts([UInt160::from_array([2u8; 20])])
            .unwrap();
        assert_eq!(signer.script_hash(), account.script_hash());
        assert_eq!(
            signer.scopes(),
            WitnessScope::CALLED_BY_ENTRY | WitnessScope::CUSTOM_CONTRACTS
        );
        assert_eq!(signer.kind(), &SignerKind::Account(account));
    }

    #[test]
    fn test_contract_signer() {
        let hash = UInt160::from_array([3u8; 20]);
        let signer =
            TransactionSigner::contract_called_by_entry(hash, vec![ContractParameter::integer(1)]);
        assert!(matches!(
            signer.kind(),
            SignerKind::Contract { verify_params } if verify_params.len() == 1
        ));
        assert!(TransactionSigner::contract(
            hash,
            Vec::new(),
            WitnessScope::GLOBAL | WitnessScope::CALLED_BY_ENTRY
        )
        .is_err());
        assert_eq!(Signer::from(signer).account(), hash);
    }
}
