// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The NeoVM instruction set.
//!
//! Every opcode carries its operand encoding and its execution price. Prices
//! are the engine's base factors; the node multiplies them by the current
//! execution fee factor.

mod operand_size;

pub use operand_size::OperandSize;

use std::fmt;

macro_rules! define_opcodes {
    ($( $name:ident = $value:literal, $operand:expr, $price:expr; )*) => {
        /// A NeoVM instruction byte.
        #[repr(u8)]
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum OpCode {
            $( $name = $value, )*
        }

        impl OpCode {
            /// Every defined opcode, in byte order.
            pub const ALL: &'static [OpCode] = &[$( OpCode::$name, )*];

            /// Looks up the opcode for an instruction byte.
            pub fn from_u8(byte: u8) -> Option<Self> {
                match byte {
                    $( $value => Some(OpCode::$name), )*
                    _ => None,
                }
            }

            /// Looks up an opcode by its mnemonic.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( stringify!($name) => Some(OpCode::$name), )*
                    _ => None,
                }
            }

            /// The mnemonic, e.g. `PUSHDATA1`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( OpCode::$name => stringify!($name), )*
                }
            }

            pub fn operand_size(&self) -> OperandSize {
                match self {
                    $( OpCode::$name => $operand, )*
                }
            }

            pub fn price(&self) -> i64 {
                match self {
                    $( OpCode::$name => $price, )*
                }
            }
        }
    };
}

define_opcodes! {
    // Constants
    PUSHINT8 = 0x00, OperandSize::fixed(1), 1;
    PUSHINT16 = 0x01, OperandSize::fixed(2), 1;
    PUSHINT32 = 0x02, OperandSize::fixed(4), 1;
    PUSHINT64 = 0x03, OperandSize::fixed(8), 1;
    PUSHINT128 = 0x04, OperandSize::fixed(16), 4;
    PUSHINT256 = 0x05, OperandSize::fixed(32), 4;
    PUSHT = 0x08, OperandSize::NONE, 1;
    PUSHF = 0x09, OperandSize::NONE, 1;
    PUSHA = 0x0A, OperandSize::fixed(4), 4;
    PUSHNULL = 0x0B, OperandSize::NONE, 1;
    PUSHDATA1 = 0x0C, OperandSize::prefix(1), 8;
    PUSHDATA2 = 0x0D, OperandSize::prefix(2), 512;
    PUSHDATA4 = 0x0E, OperandSize::prefix(4), 4096;
    PUSHM1 = 0x0F, OperandSize::NONE, 1;
    PUSH0 = 0x10, OperandSize::NONE, 1;
    PUSH1 = 0x11, OperandSize::NONE, 1;
    PUSH2 = 0x12, OperandSize::NONE, 1;
    PUSH3 = 0x13, OperandSize::NONE, 1;
    PUSH4 = 0x14, OperandSize::NONE, 1;
    PUSH5 = 0x15, OperandSize::NONE, 1;
    PUSH6 = 0x16, OperandSize::NONE, 1;
    PUSH7 = 0x17, OperandSize::NONE, 1;
    PUSH8 = 0x18, OperandSize::NONE, 1;
    PUSH9 = 0x19, OperandSize::NONE, 1;
    PUSH10 = 0x1A, OperandSize::NONE, 1;
    PUSH11 = 0x1B, OperandSize::NONE, 1;
    PUSH12 = 0x1C, OperandSize::NONE, 1;
    PUSH13 = 0x1D, OperandSize::NONE, 1;
    PUSH14 = 0x1E, OperandSize::NONE, 1;
    PUSH15 = 0x1F, OperandSize::NONE, 1;
    PUSH16 = 0x20, OperandSize::NONE, 1;
    // Flow control
    NOP = 0x21, OperandSize::NONE, 1;
    JMP = 0x22, OperandSize::fixed(1), 2;
    JMP_L = 0x23, OperandSize::fixed(4), 2;
    JMPIF = 0x24, OperandSize::fixed(1), 2;
    JMPIF_L = 0x25, OperandSize::fixed(4), 2;
    JMPIFNOT = 0x26, OperandSize::fixed(1), 2;
    JMPIFNOT_L = 0x27, OperandSize::fixed(4), 2;
    JMPEQ = 0x28, OperandSize::fixed(1), 2;
    JMPEQ_L = 0x29, OperandSize::fixed(4), 2;
    JMPNE = 0x2A, OperandSize::fixed(1), 2;
    JMPNE_L = 0x2B, OperandSize::fixed(4), 2;
    JMPGT = 0x2C, OperandSize::fixed(1), 2;
    JMPGT_L = 0x2D, OperandSize::fixed(4), 2;
    JMPGE = 0x2E, OperandSize::fixed(1), 2;
    JMPGE_L = 0x2F, OperandSize::fixed(4), 2;
    JMPLT = 0x30, OperandSize::fixed(1), 2;
    JMPLT_L = 0x31, OperandSize::fixed(4), 2;
    JMPLE = 0x32, OperandSize::fixed(1), 2;
    JMPLE_L = 0x33, OperandSize::fixed(4), 2;
    CALL = 0x34, OperandSize::fixed(1), 512;
    CALL_L = 0x35, OperandSize::fixed(4), 512;
    CALLA = 0x36, OperandSize::NONE, 512;
    CALLT = 0x37, OperandSize::fixed(2), 32768;
    ABORT = 0x38, OperandSize::NONE, 0;
    ASSERT = 0x39, OperandSize::NONE, 1;
    THROW = 0x3A, OperandSize::NONE, 512;
    TRY = 0x3B, OperandSize::fixed(2), 4;
    TRY_L = 0x3C, OperandSize::fixed(8), 4;
    ENDTRY = 0x3D, OperandSize::fixed(1), 4;
    ENDTRY_L = 0x3E, OperandSize::fixed(4), 4;
    ENDFINALLY = 0x3F, OperandSize::NONE, 4;
    RET = 0x40, OperandSize::NONE, 0;
    SYSCALL = 0x41, OperandSize::fixed(4), 0;
    // Stack
    DEPTH = 0x43, OperandSize::NONE, 2;
    DROP = 0x45, OperandSize::NONE, 2;
    NIP = 0x46, OperandSize::NONE, 2;
    XDROP = 0x48, OperandSize::NONE, 16;
    CLEAR = 0x49, OperandSize::NONE, 16;
    DUP = 0x4A, OperandSize::NONE, 2;
    OVER = 0x4B, OperandSize::NONE, 2;
    PICK = 0x4D, OperandSize::NONE, 2;
    TUCK = 0x4E, OperandSize::NONE, 2;
    SWAP = 0x50, OperandSize::NONE, 2;
    ROT = 0x51, OperandSize::NONE, 2;
    ROLL = 0x52, OperandSize::NONE, 16;
    REVERSE3 = 0x53, OperandSize::NONE, 2;
    REVERSE4 = 0x54, OperandSize::NONE, 2;
    REVERSEN = 0x55, OperandSize::NONE, 16;
    // Slot
    INITSSLOT = 0x56, OperandSize::fixed(1), 16;
    INITSLOT = 0x57, OperandSize::fixed(2), 64;
    LDSFLD0 = 0x58, OperandSize::NONE, 2;
    LDSFLD1 = 0x59, OperandSize::NONE, 2;
    LDSFLD2 = 0x5A, OperandSize::NONE, 2;
    LDSFLD3 = 0x5B, OperandSize::NONE, 2;
    LDSFLD4 = 0x5C, OperandSize::NONE, 2;
    LDSFLD5 = 0x5D, OperandSize::NONE, 2;
    LDSFLD6 = 0x5E, OperandSize::NONE, 2;
    LDSFLD = 0x5F, OperandSize::fixed(1), 2;
    STSFLD0 = 0x60, OperandSize::NONE, 2;
    STSFLD1 = 0x61, OperandSize::NONE, 2;
    STSFLD2 = 0x62, OperandSize::NONE, 2;
    STSFLD3 = 0x63, OperandSize::NONE, 2;
    STSFLD4 = 0x64, OperandSize::NONE, 2;
    STSFLD5 = 0x65, OperandSize::NONE, 2;
    STSFLD6 = 0x66, OperandSize::NONE, 2;
    STSFLD = 0x67, OperandSize::fixed(1), 2;
    LDLOC0 = 0x68, OperandSize::NONE, 2;
    LDLOC1 = 0x69, OperandSize::NONE, 2;
    LDLOC2 = 0x6A, OperandSize::NONE, 2;
    LDLOC3 = 0x6B, OperandSize::NONE, 2;
    LDLOC4 = 0x6C, OperandSize::NONE, 2;
    LDLOC5 = 0x6D, OperandSize::NONE, 2;
    LDLOC6 = 0x6E, OperandSize::NONE, 2;
    LDLOC = 0x6F, OperandSize::fixed(1), 2;
    STLOC0 = 0x70, OperandSize::NONE, 2;
    STLOC1 = 0x71, OperandSize::NONE, 2;
    STLOC2 = 0x72, OperandSize::NONE, 2;
    STLOC3 = 0x73, OperandSize::NONE, 2;
    STLOC4 = 0x74, OperandSize::NONE, 2;
    STLOC5 = 0x75, OperandSize::NONE, 2;
    STLOC6 = 0x76, OperandSize::NONE, 2;
    STLOC = 0x77, OperandSize::fixed(1), 2;
    LDARG0 = 0x78, OperandSize::NONE, 2;
    LDARG1 = 0x79, OperandSize::NONE, 2;
    LDARG2 = 0x7A, OperandSize::NONE, 2;
    LDARG3 = 0x7B, OperandSize::NONE, 2;
    LDARG4 = 0x7C, OperandSize::NONE, 2;
    LDARG5 = 0x7D, OperandSize::NONE, 2;
    LDARG6 = 0x7E, OperandSize::NONE, 2;
    LDARG = 0x7F, OperandSize::fixed(1), 2;
    STARG0 = 0x80, OperandSize::NONE, 2;
    STARG1 = 0x81, OperandSize::NONE, 2;
    STARG2 = 0x82, OperandSize::NONE, 2;
    STARG3 = 0x83, OperandSize::NONE, 2;
    STARG4 = 0x84, OperandSize::NONE, 2;
    STARG5 = 0x85, OperandSize::NONE, 2;
    STARG6 = 0x86, OperandSize::NONE, 2;
    STARG = 0x87, OperandSize::fixed(1), 2;
    // Splice
    NEWBUFFER = 0x88, OperandSize::NONE, 256;
    MEMCPY = 0x89, OperandSize::NONE, 2048;
    CAT = 0x8B, OperandSize::NONE, 2048;
    SUBSTR = 0x8C, OperandSize::NONE, 2048;
    LEFT = 0x8D, OperandSize::NONE, 2048;
    RIGHT = 0x8E, OperandSize::NONE, 2048;
    // Bitwise logic
    INVERT = 0x90, OperandSize::NONE, 4;
    AND = 0x91, OperandSize::NONE, 8;
    OR = 0x92, OperandSize::NONE, 8;
    XOR = 0x93, OperandSize::NONE, 8;
    EQUAL = 0x97, OperandSize::NONE, 32;
    NOTEQUAL = 0x98, OperandSize::NONE, 32;
    // Arithmetic
    SIGN = 0x99, OperandSize::NONE, 4;
    ABS = 0x9A, OperandSize::NONE, 4;
    NEGATE = 0x9B, OperandSize::NONE, 4;
    INC = 0x9C, OperandSize::NONE, 4;
    DEC = 0x9D, OperandSize::NONE, 4;
    ADD = 0x9E, OperandSize::NONE, 8;
    SUB = 0x9F, OperandSize::NONE, 8;
    MUL = 0xA0, OperandSize::NONE, 8;
    DIV = 0xA1, OperandSize::NONE, 8;
    MOD = 0xA2, OperandSize::NONE, 8;
    POW = 0xA3, OperandSize::NONE, 64;
    SQRT = 0xA4, OperandSize::NONE, 64;
    MODMUL = 0xA5, OperandSize::NONE, 32;
    MODPOW = 0xA6, OperandSize::NONE, 2048;
    SHL = 0xA8, OperandSize::NONE, 8;
    SHR = 0xA9, OperandSize::NONE, 8;
    NOT = 0xAA, OperandSize::NONE, 4;
    BOOLAND = 0xAB, OperandSize::NONE, 8;
    BOOLOR = 0xAC, OperandSize::NONE, 8;
    NZ = 0xB1, OperandSize::NONE, 4;
    NUMEQUAL = 0xB3, OperandSize::NONE, 8;
    NUMNOTEQUAL = 0xB4, OperandSize::NONE, 8;
    LT = 0xB5, OperandSize::NONE, 8;
    LE = 0xB6, OperandSize::NONE, 8;
    GT = 0xB7, OperandSize::NONE, 8;
    GE = 0xB8, OperandSize::NONE, 8;
    MIN = 0xB9, OperandSize::NONE, 8;
    MAX = 0xBA, OperandSize::NONE, 8;
    WITHIN = 0xBB, OperandSize::NONE, 8;
    // Compound-type
    PACKMAP = 0xBE, OperandSize::NONE, 2048;
    PACKSTRUCT = 0xBF, OperandSize::NONE, 2048;
    PACK = 0xC0, OperandSize::NONE, 2048;
    UNPACK = 0xC1, OperandSize::NONE, 2048;
    NEWARRAY0 = 0xC2, OperandSize::NONE, 16;
    NEWARRAY = 0xC3, OperandSize::NONE, 512;
    NEWARRAY_T = 0xC4, OperandSize::fixed(1), 512;
    NEWSTRUCT0 = 0xC5, OperandSize::NONE, 16;
    NEWSTRUCT = 0xC6, OperandSize::NONE, 512;
    NEWMAP = 0xC8, OperandSize::NONE, 8;
    SIZE = 0xCA, OperandSize::NONE, 4;
    HASKEY = 0xCB, OperandSize::NONE, 64;
    KEYS = 0xCC, OperandSize::NONE, 16;
    VALUES = 0xCD, OperandSize::NONE, 8192;
    PICKITEM = 0xCE, OperandSize::NONE, 64;
    APPEND = 0xCF, OperandSize::NONE, 8192;
    SETITEM = 0xD0, OperandSize::NONE, 8192;
    REVERSEITEMS = 0xD1, OperandSize::NONE, 8192;
    REMOVE = 0xD2, OperandSize::NONE, 16;
    CLEARITEMS = 0xD3, OperandSize::NONE, 16;
    POPITEM = 0xD4, OperandSize::NONE, 16;
    // Types
    ISNULL = 0xD8, OperandSize::NONE, 2;
    ISTYPE = 0xD9, OperandSize::fixed(1), 2;
    CONVERT = 0xDB, OperandSize::fixed(1), 8192;
    // Extensions
    ABORTMSG = 0xE0, OperandSize::NONE, 0;
    ASSERTMSG = 0xE1, OperandSize::NONE, 1;
}

impl OpCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this opcode pushes an integer constant (PUSHM1..PUSH16, PUSHINT*).
    pub fn is_push_integer(&self) -> bool {
        matches!(*self as u8, 0x00..=0x05 | 0x0F..=0x20)
    }

    /// Whether this opcode pushes a data block (PUSHDATA1/2/4).
    pub fn is_push_data(&self) -> bool {
        matches!(self, OpCode::PUSHDATA1 | OpCode::PUSHDATA2 | OpCode::PUSHDATA4)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        OpCode::from_u8(value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_round_trip() {
        for opcode in OpCode::ALL {
            assert_eq!(OpCode::from_u8(*opcode as u8), Some(*opcode));
            assert_eq!(OpCode::from_name(opcode.name()), Some(*opcode));
        }
        assert_eq!(OpCode::ALL.len(), 196);
    }

    #[test]
    fn test_undefined_bytes() {
        for byte in [0x06u8, 0x07, 0x42, 0x44, 0x47, 0x4C, 0x4F, 0x8A, 0xC7, 0xDA, 0xE2, 0xFF] {
            assert_eq!(OpCode::from_u8(byte), None, "0x{byte:02x}");
        }
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::PUSHINT8.operand_size(), OperandSize::fixed(1));
        assert_eq!(OpCode::PUSHINT256.operand_size(), OperandSize::fixed(32));
        assert_eq!(OpCode::PUSHDATA1.operand_size(), OperandSize::prefix(1));
        assert_eq!(OpCode::PUSHDATA2.operand_size(), OperandSize::prefix(2));
        assert_eq!(OpCode::PUSHDATA4.operand_size(), OperandSize::prefix(4));
        assert_eq!(OpCode::JMP.operand_size(), OperandSize::fixed(1));
        assert_eq!(OpCode::JMPLE_L.operand_size(), OperandSize::fixed(4));
        assert_eq!(OpCode::TRY_L.operand_size(), OperandSize::fixed(8));
        assert_eq!(OpCode::SYSCALL.operand_size(), OperandSize::fixed(4));
        assert_eq!(OpCode::LDARG.operand_size(), OperandSize::fixed(1));
        assert!(OpCode::RET.operand_size().is_none());
    }

    #[test]
    fn test_well_known_values() {
        assert_eq!(OpCode::PUSHM1 as u8, 0x0F);
        assert_eq!(OpCode::PUSH16 as u8, 0x20);
        assert_eq!(OpCode::SYSCALL as u8, 0x41);
        assert_eq!(OpCode::STARG as u8, 0x87);
        assert_eq!(OpCode::PACKMAP as u8, 0xBE);
        assert_eq!(OpCode::ASSERTMSG as u8, 0xE1);
    }

    #[test]
    fn test_prices() {
        assert_eq!(OpCode::PUSHDATA1.price(), 8);
        assert_eq!(OpCode::SYSCALL.price(), 0);
        assert_eq!(OpCode::CALLT.price(), 1 << 15);
        assert_eq!(OpCode::APPEND.price(), 1 << 13);
    }

    #[test]
    fn test_push_classes() {
        assert!(OpCode::PUSHM1.is_push_integer());
        assert!(OpCode::PUSHINT256.is_push_integer());
        assert!(!OpCode::PUSHNULL.is_push_integer());
        assert!(OpCode::PUSHDATA4.is_push_data());
    }
}
