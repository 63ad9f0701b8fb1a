// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of WitnessScope, the flag set restricting where a signature is valid.

use crate::{CoreError, CoreResult};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Scope of a signer's witness, a combination of flag bits.
///
/// `GLOBAL` cannot be combined with any other flag. `NONE` is the empty set
/// and disappears as soon as any other flag is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WitnessScope(u8);

impl WitnessScope {
    /// Only sign the transaction, no contract may use the witness.
    pub const NONE: WitnessScope = WitnessScope(0x00);

    /// Valid only when the calling contract is the entry contract.
    pub const CALLED_BY_ENTRY: WitnessScope = WitnessScope(0x01);

    /// Valid inside the listed contracts.
    pub const CUSTOM_CONTRACTS: WitnessScope = WitnessScope(0x10);

    /// Valid inside contracts belonging to the listed groups.
    pub const CUSTOM_GROUPS: WitnessScope = WitnessScope(0x20);

    /// Valid wherever the attached rules allow.
    pub const WITNESS_RULES: WitnessScope = WitnessScope(0x40);

    /// Valid everywhere.
    pub const GLOBAL: WitnessScope = WitnessScope(0x80);

    const VALID_BITS: u8 = 0x01 | 0x10 | 0x20 | 0x40 | 0x80;

    const NAMED: [(WitnessScope, &'static str); 5] = [
        (Self::CALLED_BY_ENTRY, "CalledByEntry"),
        (Self::CUSTOM_CONTRACTS, "CustomContracts"),
        (Self::CUSTOM_GROUPS, "CustomGroups"),
        (Self::WITNESS_RULES, "WitnessRules"),
        (Self::GLOBAL, "Global"),
    ];

    pub fn has_flag(self, flag: WitnessScope) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Adds `other` to the set.
    pub fn combine(self, other: WitnessScope) -> Self {
        WitnessScope(self.0 | other.0)
    }

    /// Decodes a scope byte, rejecting unknown bits and `Global` combined with anything.
    pub fn from_byte(value: u8) -> CoreResult<Self> {
        let scope = WitnessScope(value);
        if value & !Self::VALID_BITS != 0 {
            return Err(CoreError::Deserialization(format!(
                "unknown witness scope bits in 0x{value:02x}"
            )));
        }
        if !scope.is_valid() {
            return Err(CoreError::Deserialization(
                "the Global scope cannot be combined with other scopes".into(),
            ));
        }
        Ok(scope)
    }

    pub fn to_byte(self) -> u8 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        if self.has_flag(Self::GLOBAL) && self.0 != Self::GLOBAL.0 {
            return false;
        }
        self.0 & !Self::VALID_BITS == 0
    }

    /// Individual flags contained in the set, in bit order.
    pub fn flags(self) -> Vec<WitnessScope> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(flag, _)| *flag)
            .collect()
    }
}

impl BitOr for WitnessScope {
    type Output = WitnessScope;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

/// Formats like the node's RPC layer: `CalledByEntry, CustomContracts`.
impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "None");
        }
        let parts: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl FromStr for WitnessScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scope = WitnessScope::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part == "None" {
                continue;
            }
            let (flag, _) = Self::NAMED
                .iter()
                .find(|(_, name)| *name == part)
                .ok_or_else(|| {
                    CoreError::InvalidArgument(format!("unknown witness scope '{part}'"))
                })?;
            scope = scope | *flag;
        }
        if !scope.is_valid() {
            return Err(CoreError::InvalidArgument(
                "the Global scope cannot be combined with other scopes".into(),
            ));
        }
        Ok(scope)
    }
}

impl Serialize for WitnessScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WitnessScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let scope = WitnessScope::CALLED_BY_ENTRY | WitnessScope::CUSTOM_CONTRACTS;
        assert_eq!(scope.to_string(), "CalledByEntry, CustomContracts");
        assert_eq!("CalledByEntry,CustomContracts".parse::<WitnessScope>().unwrap(), scope);
        assert_eq!(WitnessScope::NONE.to_string(), "None");
        assert_eq!("None".parse::<WitnessScope>().unwrap(), WitnessScope::NONE);
        assert!("Everything".parse::<WitnessScope>().is_err());
    }

    #[test]
    fn test_from_byte() {
        assert_eq!(WitnessScope::from_byte(0x11).unwrap().to_byte(), 0x11);
        assert_eq!(WitnessScope::from_byte(0x80).unwrap(), WitnessScope::GLOBAL);
        assert!(WitnessScope::from_byte(0x81).is_err());
        assert!(WitnessScope::from_byte(0x02).is_err());
    }

    #[test]
    fn test_flags() {
        let scope = WitnessScope::WITNESS_RULES | WitnessScope::CALLED_BY_ENTRY;
        assert_eq!(
            scope.flags(),
            vec![WitnessScope::CALLED_BY_ENTRY, WitnessScope::WITNESS_RULES]
        );
        assert!(WitnessScope::NONE.flags().is_empty());
    }
}
