// Copyright (C) 2015-2025 The Neo Project.
//
// witness_rule.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Witness rules: a boolean condition tree paired with an allow/deny action.

use crate::{CoreError, CoreResult, UInt160};
use neo_config::{ADDRESS_SIZE, MAX_NESTING_DEPTH, MAX_SUBITEMS, PUBLIC_KEY_SIZE};
use neo_cryptography::ECPoint;
use neo_io::helper::get_var_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Upper bound on any composite nesting (including `Not` chains) accepted at all.
const MAX_COMPOSITE_NESTING: usize = MAX_SUBITEMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessRuleAction {
    Deny = 0,
    Allow = 1,
}

impl WitnessRuleAction {
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Deny),
            1 => Some(Self::Allow),
            _ => None,
        }
    }
}

impl fmt::Display for WitnessRuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deny => write!(f, "Deny"),
            Self::Allow => write!(f, "Allow"),
        }
    }
}

impl FromStr for WitnessRuleAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deny" => Ok(Self::Deny),
            "Allow" => Ok(Self::Allow),
            other => Err(CoreError::InvalidArgument(format!(
                "invalid witness rule action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessConditionType {
    Boolean = 0x00,
    Not = 0x01,
    And = 0x02,
    Or = 0x03,
    ScriptHash = 0x18,
    Group = 0x19,
    CalledByEntry = 0x20,
    CalledByContract = 0x28,
    CalledByGroup = 0x29,
}

impl WitnessConditionType {
    const ALL: [WitnessConditionType; 9] = [
        Self::Boolean,
        Self::Not,
        Self::And,
        Self::Or,
        Self::ScriptHash,
        Self::Group,
        Self::CalledByEntry,
        Self::CalledByContract,
        Self::CalledByGroup,
    ];

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.to_byte() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::ScriptHash => "ScriptHash",
            Self::Group => "Group",
            Self::CalledByEntry => "CalledByEntry",
            Self::CalledByContract => "CalledByContract",
            Self::CalledByGroup => "CalledByGroup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// A node of the condition tree. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessCondition {
    Boolean { value: bool },
    Not { condition: Box<WitnessCondition> },
    And { conditions: Vec<WitnessCondition> },
    Or { conditions: Vec<WitnessCondition> },
    ScriptHash { hash: UInt160 },
    Group { group: ECPoint },
    CalledByEntry,
    CalledByContract { hash: UInt160 },
    CalledByGroup { group: ECPoint },
}

impl WitnessCondition {
    pub fn not(condition: WitnessCondition) -> Self {
        WitnessCondition::Not {
            condition: Box::new(condition),
        }
    }

    pub fn condition_type(&self) -> WitnessConditionType {
        match self {
            WitnessCondition::Boolean { .. } => WitnessConditionType::Boolean,
            WitnessCondition::Not { .. } => WitnessConditionType::Not,
            WitnessCondition::And { .. } => WitnessConditionType::And,
            WitnessCondition::Or { .. } => WitnessConditionType::Or,
            WitnessCondition::ScriptHash { .. } => WitnessConditionType::ScriptHash,
            WitnessCondition::Group { .. } => WitnessConditionType::Group,
            WitnessCondition::CalledByEntry => WitnessConditionType::CalledByEntry,
            WitnessCondition::CalledByContract { .. } => WitnessConditionType::CalledByContract,
            WitnessCondition::CalledByGroup { .. } => WitnessConditionType::CalledByGroup,
        }
    }

    /// Checks that `And`/`Or` nodes nest at most `max_depth` levels below this one.
    ///
    /// `Not` passes its remaining depth through unchanged. With a depth of 2,
    /// `And(And(x))` is accepted and `And(And(And(x)))` is not.
    pub fn check_depth(&self, max_depth: usize) -> CoreResult<()> {
        check_nesting(self, max_depth, MAX_COMPOSITE_NESTING)
    }

    pub fn size(&self) -> usize {
        let payload = match self {
            WitnessCondition::Boolean { .. } => 1,
            WitnessCondition::Not { condition } => condition.size(),
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                get_var_size(conditions.len() as u64)
                    + conditions.iter().map(WitnessCondition::size).sum::<usize>()
            }
            WitnessCondition::ScriptHash { .. } | WitnessCondition::CalledByContract { .. } => {
                ADDRESS_SIZE
            }
            WitnessCondition::Group { .. } | WitnessCondition::CalledByGroup { .. } => {
                PUBLIC_KEY_SIZE
            }
            WitnessCondition::CalledByEntry => 0,
        };
        1 + payload
    }

    pub fn to_json(&self) -> Value {
        let kind = self.condition_type().name();
        match self {
            WitnessCondition::Boolean { value } => json!({ "type": kind, "expression": value }),
            WitnessCondition::Not { condition } => {
                json!({ "type": kind, "expression": condition.to_json() })
            }
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => json!({
                "type": kind,
                "expressions": conditions.iter().map(WitnessCondition::to_json).collect::<Vec<_>>(),
            }),
            WitnessCondition::ScriptHash { hash } | WitnessCondition::CalledByContract { hash } => {
                json!({ "type": kind, "hash": hash.to_string() })
            }
            WitnessCondition::Group { group } | WitnessCondition::CalledByGroup { group } => {
                json!({ "type": kind, "group": group.to_hex() })
            }
            WitnessCondition::CalledByEntry => json!({ "type": kind }),
        }
    }

    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let name = json
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_json("condition type missing"))?;
        let kind = WitnessConditionType::from_name(name)
            .ok_or_else(|| invalid_json(&format!("unknown condition type '{name}'")))?;
        let field = |key: &str| {
            json.get(key)
                .ok_or_else(|| invalid_json(&format!("{name} condition missing '{key}'")))
        };
        let string_field = |key: &str| {
            field(key)?
                .as_str()
                .ok_or_else(|| invalid_json(&format!("'{key}' must be a string")))
        };
        let children = || -> CoreResult<Vec<WitnessCondition>> {
            field("expressions")?
                .as_array()
                .ok_or_else(|| invalid_json("'expressions' must be an array"))?
                .iter()
                .map(WitnessCondition::from_json)
                .collect()
        };

        Ok(match kind {
            WitnessConditionType::Boolean => {
                let value = field("expression")?;
                let value = match value {
                    Value::Bool(b) => *b,
                    Value::String(s) => s.eq_ignore_ascii_case("true"),
                    _ => return Err(invalid_json("'expression' must be a boolean")),
                };
                WitnessCondition::Boolean { value }
            }
            WitnessConditionType::Not => {
                WitnessCondition::not(Self::from_json(field("expression")?)?)
            }
            WitnessConditionType::And => WitnessCondition::And {
                conditions: children()?,
            },
            WitnessConditionType::Or => WitnessCondition::Or {
                conditions: children()?,
            },
            WitnessConditionType::ScriptHash => WitnessCondition::ScriptHash {
                hash: UInt160::parse(string_field("hash")?)?,
            },
            WitnessConditionType::Group => WitnessCondition::Group {
                group: ECPoint::from_hex(string_field("group")?)?,
            },
            WitnessConditionType::CalledByEntry => WitnessCondition::CalledByEntry,
            WitnessConditionType::CalledByContract => WitnessCondition::CalledByContract {
                hash: UInt160::parse(string_field("hash")?)?,
            },
            WitnessConditionType::CalledByGroup => WitnessCondition::CalledByGroup {
                group: ECPoint::from_hex(string_field("group")?)?,
            },
        })
    }

    fn read(reader: &mut MemoryReader, and_or_depth: usize, nesting: usize) -> IoResult<Self> {
        let byte = reader.read_u8()?;
        let kind = WitnessConditionType::from_byte(byte).ok_or_else(|| {
            IoError::format(format!("unknown witness condition type 0x{byte:02x}"))
        })?;
        let composite = matches!(
            kind,
            WitnessConditionType::Not | WitnessConditionType::And | WitnessConditionType::Or
        );
        if composite && nesting == 0 {
            return Err(IoError::format("witness condition nested too deeply"));
        }
        Ok(match kind {
            WitnessConditionType::Boolean => WitnessCondition::Boolean {
                value: reader.read_bool()?,
            },
            WitnessConditionType::Not => {
                WitnessCondition::not(Self::read(reader, and_or_depth, nesting - 1)?)
            }
            WitnessConditionType::And | WitnessConditionType::Or => {
                if and_or_depth == 0 {
                    return Err(IoError::format(format!(
                        "{} conditions exceed the nesting depth of {MAX_NESTING_DEPTH}",
                        kind.name()
                    )));
                }
                let count = reader.read_var_int(MAX_SUBITEMS as u64)? as usize;
                let mut conditions = Vec::with_capacity(count);
                for _ in 0..count {
                    conditions.push(Self::read(reader, and_or_depth - 1, nesting - 1)?);
                }
                if kind == WitnessConditionType::And {
                    WitnessCondition::And { conditions }
                } else {
                    WitnessCondition::Or { conditions }
                }
            }
            WitnessConditionType::ScriptHash => WitnessCondition::ScriptHash {
                hash: UInt160::deserialize(reader)?,
            },
            WitnessConditionType::Group => WitnessCondition::Group {
                group: read_group(reader)?,
            },
            WitnessConditionType::CalledByEntry => WitnessCondition::CalledByEntry,
            WitnessConditionType::CalledByContract => WitnessCondition::CalledByContract {
                hash: UInt160::deserialize(reader)?,
            },
            WitnessConditionType::CalledByGroup => WitnessCondition::CalledByGroup {
                group: read_group(reader)?,
            },
        })
    }
}

fn check_nesting(
    condition: &WitnessCondition,
    and_or_depth: usize,
    nesting: usize,
) -> CoreResult<()> {
    let too_deep = || {
        CoreError::SignerConfiguration(format!(
            "a witness condition can only be nested {MAX_NESTING_DEPTH} levels deep"
        ))
    };
    match condition {
        WitnessCondition::Not { condition } => {
            if nesting == 0 {
                return Err(too_deep());
            }
            check_nesting(condition, and_or_depth, nesting - 1)
        }
        WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
            if and_or_depth == 0 || nesting == 0 {
                return Err(too_deep());
            }
            if conditions.len() > MAX_SUBITEMS {
                return Err(CoreError::SignerConfiguration(format!(
                    "a composite condition can hold at most {MAX_SUBITEMS} expressions"
                )));
            }
            conditions
                .iter()
                .try_for_each(|c| check_nesting(c, and_or_depth - 1, nesting - 1))
        }
        _ => Ok(()),
    }
}

fn read_group(reader: &mut MemoryReader) -> IoResult<ECPoint> {
    let bytes: [u8; PUBLIC_KEY_SIZE] = reader.read_array()?;
    ECPoint::decode_compressed(&bytes).map_err(|e| IoError::invalid_data(e.to_string()))
}

fn invalid_json(message: &str) -> CoreError {
    CoreError::InvalidArgument(format!("invalid witness condition json: {message}"))
}

impl Serializable for WitnessCondition {
    fn size(&self) -> usize {
        WitnessCondition::size(self)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.condition_type().to_byte())?;
        match self {
            WitnessCondition::Boolean { value } => writer.write_bool(*value),
            WitnessCondition::Not { condition } => condition.serialize(writer),
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                writer.write_serializable_vec(conditions)
            }
            WitnessCondition::ScriptHash { hash } | WitnessCondition::CalledByContract { hash } => {
                hash.serialize(writer)
            }
            WitnessCondition::Group { group } | WitnessCondition::CalledByGroup { group } => {
                writer.write_bytes(&group.encode_compressed())
            }
            WitnessCondition::CalledByEntry => Ok(()),
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::read(reader, MAX_NESTING_DEPTH, MAX_COMPOSITE_NESTING)
    }
}

/// An action applied when its condition matches the current execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessRule {
    pub action: WitnessRuleAction,
    pub condition: WitnessCondition,
}

impl WitnessRule {
    pub fn new(action: WitnessRuleAction, condition: WitnessCondition) -> Self {
        Self { action, condition }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "action": self.action.to_string(),
            "condition": self.condition.to_json(),
        })
    }

    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let action = json
            .get("action")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::InvalidArgument("witness rule missing 'action'".into()))?
            .parse()?;
        let condition = json
            .get("condition")
            .ok_or_else(|| CoreError::InvalidArgument("witness rule missing 'condition'".into()))?;
        Ok(Self::new(action, WitnessCondition::from_json(condition)?))
    }
}

impl Serializable for WitnessRule {
    fn size(&self) -> usize {
        1 + self.condition.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.action.to_byte())?;
        self.condition.serialize(writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let byte = reader.read_u8()?;
        let action = WitnessRuleAction::from_byte(byte)
            .ok_or_else(|| IoError::format(format!("invalid witness rule action {byte}")))?;
        let condition = WitnessCondition::deserialize(reader)?;
        Ok(Self { action, condition })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    fn leaf() -> WitnessCondition {
        WitnessCondition::Boolean { value: true }
    }

    fn and(inner: WitnessCondition) -> WitnessCondition {
        WitnessCondition::And {
            conditions: vec![inner],
        }
    }

    fn group_key() -> ECPoint {
        ECPoint::from_hex("026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16")
            .unwrap()
    }

    #[test]
    fn test_depth_limit() {
        assert!(leaf().check_depth(MAX_NESTING_DEPTH).is_ok());
        assert!(and(and(leaf())).check_depth(MAX_NESTING_DEPTH).is_ok());
        assert!(matches!(
            and(and(and(leaf()))).check_depth(MAX_NESTING_DEPTH),
            Err(CoreError::SignerConfiguration(_))
        ));
        // Not does not consume depth.
        assert!(WitnessCondition::not(and(and(leaf())))
            .check_depth(MAX_NESTING_DEPTH)
            .is_ok());
    }

    #[test]
    fn test_group_encodes_fixed_33_bytes() {
        let condition = WitnessCondition::CalledByGroup { group: group_key() };
        let bytes = condition.to_array().unwrap();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0x29);
        assert_eq!(bytes[1], 0x02);
        assert_eq!(WitnessCondition::from_array(&bytes).unwrap(), condition);
    }

    #[test]
    fn test_group_decode_rejects_compact_prefix() {
        let mut bytes = WitnessCondition::Group { group: group_key() }
            .to_array()
            .unwrap();
        bytes[1] = 0x05;
        assert!(WitnessCondition::from_array(&bytes).is_err());
    }

    #[test]
    fn test_decode_rejects_deep_nesting() {
        let bytes = and(and(and(leaf()))).to_array().unwrap();
        assert!(WitnessCondition::from_array(&bytes).is_err());
        let bytes = and(and(leaf())).to_array().unwrap();
        assert_eq!(bytes, vec![0x02, 0x01, 0x02, 0x01, 0x00, 0x01]);
        assert!(WitnessCondition::from_array(&bytes).is_ok());
    }

    #[test]
    fn test_decode_rejects_unknown_type_and_action() {
        assert!(WitnessCondition::from_array(&[0x05]).is_err());
        assert!(WitnessRule::from_array(&[0x02, 0x20]).is_err());
        let rule = WitnessRule::from_array(&[0x01, 0x20]).unwrap();
        assert_eq!(rule.action, WitnessRuleAction::Allow);
        assert_eq!(rule.condition, WitnessCondition::CalledByEntry);
    }

    #[test]
    fn test_json_shape() {
        let hash = UInt160::parse("0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04").unwrap();
        let rule = WitnessRule::new(
            WitnessRuleAction::Deny,
            WitnessCondition::Or {
                conditions: vec![
                    WitnessCondition::CalledByContract { hash },
                    WitnessCondition::not(WitnessCondition::Group { group: group_key() }),
                ],
            },
        );
        let json = rule.to_json();
        assert_eq!(json["action"], "Deny");
        assert_eq!(json["condition"]["type"], "Or");
        assert_eq!(
            json["condition"]["expressions"][0]["hash"],
            "0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04"
        );
        assert_eq!(json["condition"]["expressions"][1]["expression"]["type"], "Group");
        assert_eq!(WitnessRule::from_json(&json).unwrap(), rule);
    }
}
