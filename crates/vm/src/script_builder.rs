// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder module for the Neo Virtual Machine.
//!
//! This module provides a way to programmatically construct scripts for the Neo VM.

use crate::{CallFlags, InteropService, OpCode, VmError, VmResult};
use neo_config::MAX_PUBLIC_KEYS_PER_MULTISIG;
use neo_cryptography::ECPoint;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// A value that can push itself onto the evaluation stack.
pub trait ScriptParam {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()>;
}

impl ScriptParam for bool {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.push_bool(*self);
        Ok(())
    }
}

impl ScriptParam for i64 {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.push_int(*self);
        Ok(())
    }
}

impl ScriptParam for BigInt {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.push_integer(self).map(|_| ())
    }
}

impl ScriptParam for str {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.push_string(self);
        Ok(())
    }
}

impl ScriptParam for String {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.push_string(self);
        Ok(())
    }
}

impl<T: ScriptParam + ?Sized> ScriptParam for &T {
    fn push_to(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        (**self).push_to(builder)
    }
}

/// A jump whose one-byte offset is filled in once its target is known.
#[derive(Debug, Clone, Copy)]
struct JumpPatch {
    /// Position of the jump opcode.
    at: usize,
    /// Absolute position the jump lands on.
    target: usize,
}

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Current length of the script.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits an opcode with no operand.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits an opcode followed by its raw operand bytes.
    pub fn emit_with_operand(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.script.push(op as u8);
        self.script.extend_from_slice(operand);
        self
    }

    /// Appends already-assembled bytecode.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    pub fn sys_call(&mut self, service: InteropService) -> &mut Self {
        self.emit_with_operand(OpCode::SYSCALL, &service.hash())
    }

    pub fn push_null(&mut self) -> &mut Self {
        self.emit(OpCode::PUSHNULL)
    }

    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.emit(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    pub fn push_int(&mut self, value: i64) -> &mut Self {
        if (-1..=16).contains(&value) {
            self.script.push((OpCode::PUSH0 as i64 + value) as u8);
            return self;
        }
        self.push_signed_bytes(value.to_le_bytes().to_vec(), value < 0)
    }

    /// Pushes an integer using the shortest encoding.
    ///
    /// -1..=16 use the single-byte PUSHM1..PUSH16 forms. Anything else is
    /// written as two's-complement little-endian, sign-extended to the
    /// smallest of 1, 2, 4, 8, 16 or 32 bytes that holds it.
    pub fn push_integer(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Some(small) = value.to_i64() {
            return Ok(self.push_int(small));
        }
        let bytes = value.to_signed_bytes_le();
        if bytes.len() > 32 {
            return Err(VmError::invalid_argument(format!(
                "integer {value} does not fit in 256 bits"
            )));
        }
        Ok(self.push_signed_bytes(bytes, value.sign() == Sign::Minus))
    }

    fn push_signed_bytes(&mut self, mut bytes: Vec<u8>, negative: bool) -> &mut Self {
        let pad = if negative { 0xFF } else { 0x00 };
        // drop redundant sign-extension bytes from the fixed-width form
        while bytes.len() > 1 {
            let last = bytes[bytes.len() - 1];
            let prev = bytes[bytes.len() - 2];
            if last == pad && (prev & 0x80 == 0) == !negative {
                bytes.pop();
            } else {
                break;
            }
        }
        let (opcode, width) = match bytes.len() {
            1 => (OpCode::PUSHINT8, 1),
            2 => (OpCode::PUSHINT16, 2),
            3..=4 => (OpCode::PUSHINT32, 4),
            5..=8 => (OpCode::PUSHINT64, 8),
            9..=16 => (OpCode::PUSHINT128, 16),
            _ => (OpCode::PUSHINT256, 32),
        };
        bytes.resize(width, pad);
        self.emit_with_operand(opcode, &bytes)
    }

    /// Pushes a data block with the smallest PUSHDATA form.
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < 0x100 {
            self.emit_with_operand(OpCode::PUSHDATA1, &[len as u8]);
        } else if len < 0x10000 {
            self.emit_with_operand(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            self.emit_with_operand(OpCode::PUSHDATA4, &(len as u32).to_le_bytes());
        }
        self.emit_raw(data)
    }

    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_data(value.as_bytes())
    }

    pub fn push_param<P: ScriptParam + ?Sized>(&mut self, param: &P) -> VmResult<&mut Self> {
        param.push_to(self)?;
        Ok(self)
    }

    /// Pushes the items as one array: elements last-to-first, then the count
    /// and PACK, so that PACK rebuilds the original order. An empty slice
    /// becomes NEWARRAY0.
    pub fn push_array<P: ScriptParam>(&mut self, items: &[P]) -> VmResult<&mut Self> {
        if items.is_empty() {
            return Ok(self.emit(OpCode::NEWARRAY0));
        }
        for item in items.iter().rev() {
            item.push_to(self)?;
        }
        self.push_int(items.len() as i64);
        Ok(self.emit(OpCode::PACK))
    }

    /// Pushes a map. Entries are emitted in the given order, value before
    /// key, then the count and PACKMAP.
    pub fn push_map<K: ScriptParam, V: ScriptParam>(
        &mut self,
        entries: &[(K, V)],
    ) -> VmResult<&mut Self> {
        for (key, value) in entries {
            value.push_to(self)?;
            key.push_to(self)?;
        }
        self.push_int(entries.len() as i64);
        Ok(self.emit(OpCode::PACKMAP))
    }

    /// Emits a `System.Contract.Call` of `method` on the contract whose
    /// little-endian script hash is `script_hash`.
    pub fn contract_call<P: ScriptParam>(
        &mut self,
        script_hash: impl Into<[u8; 20]>,
        method: &str,
        params: &[P],
        call_flags: CallFlags,
    ) -> VmResult<&mut Self> {
        self.push_array(params)?;
        self.push_int(call_flags.bits() as i64);
        self.push_string(method);
        self.push_data(&script_hash.into());
        Ok(self.sys_call(InteropService::SystemContractCall))
    }

    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    fn apply_patch(&mut self, patch: JumpPatch) -> VmResult<()> {
        let offset = patch.target as isize - patch.at as isize;
        let offset = i8::try_from(offset).map_err(|_| {
            VmError::invalid_argument(format!("jump offset {offset} does not fit in one byte"))
        })?;
        match self.script.get_mut(patch.at + 1) {
            Some(slot) => {
                *slot = offset as u8;
                Ok(())
            }
            None => Err(VmError::invalid_argument(format!(
                "no jump operand at offset {}",
                patch.at
            ))),
        }
    }

    /// Single-signature verification script:
    /// `PUSHDATA1 <33-byte key> SYSCALL System.Crypto.CheckSig`.
    pub fn build_verification_script(public_key: &ECPoint) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .push_data(&public_key.encode_compressed())
            .sys_call(InteropService::SystemCryptoCheckSig);
        builder.into_bytes()
    }

    /// Multi-signature verification script requiring `threshold` of the keys.
    ///
    /// Keys are sorted before being pushed, so the script and its hash do
    /// not depend on the order the caller supplies them in.
    pub fn build_multi_sig_verification_script(
        public_keys: &[ECPoint],
        threshold: usize,
    ) -> VmResult<Vec<u8>> {
        if threshold < 1 || threshold > public_keys.len() {
            return Err(VmError::invalid_argument(format!(
                "signing threshold must be between 1 and {}, got {threshold}",
                public_keys.len()
            )));
        }
        if public_keys.len() > MAX_PUBLIC_KEYS_PER_MULTISIG {
            return Err(VmError::invalid_argument(format!(
                "at most {MAX_PUBLIC_KEYS_PER_MULTISIG} public keys are allowed, got {}",
                public_keys.len()
            )));
        }

        let mut sorted: Vec<&ECPoint> = public_keys.iter().collect();
        sorted.sort();

        let mut builder = ScriptBuilder::new();
        builder.push_int(threshold as i64);
        for key in sorted {
            builder.push_data(&key.encode_compressed());
        }
        builder
            .push_int(public_keys.len() as i64)
            .sys_call(InteropService::SystemCryptoCheckMultisig);
        Ok(builder.into_bytes())
    }

    /// Calls a method that returns an iterator and drains up to `max_items`
    /// of it into an array on the stack.
    ///
    /// The loop's forward jumps are emitted with a placeholder and patched
    /// once the loop body has been laid out.
    pub fn build_contract_call_and_unwrap_iterator<P: ScriptParam>(
        script_hash: impl Into<[u8; 20]>,
        method: &str,
        params: &[P],
        max_items: u32,
        call_flags: CallFlags,
    ) -> VmResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        builder.push_int(max_items as i64);
        builder.contract_call(script_hash, method, params, call_flags)?;
        builder.emit(OpCode::NEWARRAY0);

        let loop_start = builder.len();
        builder
            .emit(OpCode::OVER)
            .sys_call(InteropService::SystemIteratorNext);

        let exhausted_jump = builder.len();
        builder.emit_with_operand(OpCode::JMPIFNOT, &[0]);

        builder
            .emit(OpCode::DUP)
            .emit(OpCode::PUSH2)
            .emit(OpCode::PICK)
            .sys_call(InteropService::SystemIteratorValue)
            .emit(OpCode::APPEND)
            .emit(OpCode::DUP)
            .emit(OpCode::SIZE)
            .emit(OpCode::PUSH3)
            .emit(OpCode::PICK)
            .emit(OpCode::GE);

        let full_jump = builder.len();
        builder.emit_with_operand(OpCode::JMPIF, &[0]);

        let back_jump = builder.len();
        builder.emit_with_operand(OpCode::JMP, &[0]);

        let loop_end = builder.len();
        builder.emit(OpCode::NIP).emit(OpCode::NIP);

        let patches = [
            JumpPatch {
                at: exhausted_jump,
                target: loop_end,
            },
            JumpPatch {
                at: full_jump,
                target: loop_end,
            },
            JumpPatch {
                at: back_jump,
                target: loop_start,
            },
        ];
        for patch in patches {
            builder.apply_patch(patch)?;
        }
        Ok(builder.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptReader;
    use neo_io::MemoryReader;

    fn int_script(value: &BigInt) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.push_integer(value).unwrap();
        builder.into_bytes()
    }

    #[test]
    fn test_push_small_integers() {
        assert_eq!(int_script(&BigInt::from(-1)), vec![OpCode::PUSHM1 as u8]);
        assert_eq!(int_script(&BigInt::from(0)), vec![OpCode::PUSH0 as u8]);
        assert_eq!(int_script(&BigInt::from(16)), vec![OpCode::PUSH16 as u8]);
    }

    #[test]
    fn test_push_integer_widths() {
        assert_eq!(int_script(&BigInt::from(17)), vec![0x00, 0x11]);
        assert_eq!(int_script(&BigInt::from(-2)), vec![0x00, 0xFE]);
        assert_eq!(int_script(&BigInt::from(128)), vec![0x01, 0x80, 0x00]);
        assert_eq!(int_script(&BigInt::from(-129)), vec![0x01, 0x7F, 0xFF]);
        assert_eq!(
            int_script(&BigInt::from(65536)),
            vec![0x02, 0x00, 0x00, 0x01, 0x00]
        );
        assert_eq!(
            int_script(&BigInt::from(-800000)),
            vec![0x02, 0x00, 0xCB, 0xF3, 0xFF]
        );
        assert_eq!(
            int_script(&BigInt::from(100000000000i64))[0],
            OpCode::PUSHINT64 as u8
        );
        assert_eq!(int_script(&BigInt::from(i64::MIN)).len(), 9);
    }

    #[test]
    fn test_push_integer_round_trip() {
        let ten = BigInt::from(10);
        let values = vec![
            BigInt::from(-1),
            BigInt::from(0),
            BigInt::from(1),
            BigInt::from(16),
            BigInt::from(17),
            BigInt::from(-800000),
            BigInt::from(-100000000000i64),
            BigInt::from(100000000000i64),
            ten.pow(23),
            -ten.pow(23),
            ten.pow(40),
            -ten.pow(40),
        ];
        for value in values {
            let script = int_script(&value);
            let mut reader = MemoryReader::new(&script);
            assert_eq!(reader.read_push_big_int().unwrap(), value);
            assert!(reader.is_at_end());
        }
        assert_eq!(int_script(&ten.pow(23))[0], OpCode::PUSHINT128 as u8);
        assert_eq!(int_script(&ten.pow(40))[0], OpCode::PUSHINT256 as u8);
    }

    #[test]
    fn test_push_integer_too_large() {
        let too_big: BigInt = BigInt::from(1) << 256u32;
        assert!(matches!(
            ScriptBuilder::new().push_integer(&too_big),
            Err(VmError::InvalidArgument(_))
        ));
        let min_256: BigInt = -(BigInt::from(1) << 255u32);
        assert_eq!(int_script(&min_256).len(), 33);
    }

    #[test]
    fn test_push_data_forms() {
        let mut builder = ScriptBuilder::new();
        builder.push_data(b"");
        assert_eq!(builder.to_array(), vec![0x0C, 0x00]);

        let script = ScriptBuilder::new().push_data(&[0u8; 255]).to_array();
        assert_eq!(&script[..2], &[0x0C, 0xFF]);

        let script = ScriptBuilder::new().push_data(&[0u8; 256]).to_array();
        assert_eq!(&script[..3], &[0x0D, 0x00, 0x01]);
        assert_eq!(script.len(), 259);

        let script = ScriptBuilder::new().push_data(&vec![0u8; 65536]).to_array();
        assert_eq!(&script[..5], &[0x0E, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn test_push_array_reversed_then_pack() {
        let mut builder = ScriptBuilder::new();
        builder.push_array(&[1i64, 2]).unwrap();
        assert_eq!(builder.to_array(), vec![0x12, 0x11, 0x12, OpCode::PACK as u8]);

        let empty: [i64; 0] = [];
        let script = ScriptBuilder::new().push_array(&empty).unwrap().to_array();
        assert_eq!(script, vec![OpCode::NEWARRAY0 as u8]);
    }

    #[test]
    fn test_push_map_value_then_key() {
        let mut builder = ScriptBuilder::new();
        builder.push_map(&[(1i64, 2i64), (3i64, 4i64)]).unwrap();
        assert_eq!(
            builder.to_array(),
            vec![0x12, 0x11, 0x14, 0x13, 0x12, OpCode::PACKMAP as u8]
        );
    }

    #[test]
    fn test_contract_call_layout() {
        let hash = [0xABu8; 20];
        let mut builder = ScriptBuilder::new();
        let no_params: [i64; 0] = [];
        builder
            .contract_call(hash, "symbol", &no_params, CallFlags::ALL)
            .unwrap();

        let mut expected = vec![OpCode::NEWARRAY0 as u8, OpCode::PUSH15 as u8, 0x0C, 6];
        expected.extend_from_slice(b"symbol");
        expected.extend_from_slice(&[0x0C, 20]);
        expected.extend_from_slice(&hash);
        expected.push(OpCode::SYSCALL as u8);
        expected.extend_from_slice(&[0x62, 0x7d, 0x5b, 0x52]);
        assert_eq!(builder.to_array(), expected);
    }

    #[test]
    fn test_single_sig_verification_script() {
        let key = ECPoint::from_hex(
            "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16",
        )
        .unwrap();
        let script = ScriptBuilder::build_verification_script(&key);
        assert_eq!(script.len(), 40);
        assert_eq!(
            hex::encode(&script),
            "0c21026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca164156e7b327"
        );
    }

    #[test]
    fn test_multi_sig_threshold_bounds() {
        let key = ECPoint::from_hex(
            "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16",
        )
        .unwrap();
        assert!(ScriptBuilder::build_multi_sig_verification_script(&[key.clone()], 0).is_err());
        assert!(ScriptBuilder::build_multi_sig_verification_script(&[key.clone()], 2).is_err());
        assert!(ScriptBuilder::build_multi_sig_verification_script(&[], 1).is_err());
        let script = ScriptBuilder::build_multi_sig_verification_script(&[key], 1).unwrap();
        assert_eq!(script.len(), 1 + 35 + 1 + 5);
    }

    #[test]
    fn test_iterator_unwrap_jumps() {
        let no_params: [i64; 0] = [];
        let script = ScriptBuilder::build_contract_call_and_unwrap_iterator(
            [1u8; 20],
            "tokensOf",
            &no_params,
            100,
            CallFlags::ALL,
        )
        .unwrap();

        // prologue: PUSHINT8 100, NEWARRAY0, PUSH15, PUSHDATA1 "tokensOf", PUSHDATA1 hash, SYSCALL
        let prologue = 2 + 1 + 1 + 10 + 22 + 5;
        assert_eq!(script[prologue], OpCode::NEWARRAY0 as u8);

        let loop_start = prologue + 1;
        assert_eq!(script[loop_start], OpCode::OVER as u8);

        let jmp_if_not = loop_start + 1 + 5;
        assert_eq!(script[jmp_if_not], OpCode::JMPIFNOT as u8);

        let end = script.len() - 2;
        assert_eq!(&script[end..], &[OpCode::NIP as u8, OpCode::NIP as u8]);
        assert_eq!(
            script[jmp_if_not + 1] as i8 as isize,
            end as isize - jmp_if_not as isize
        );

        let jmp = end - 2;
        assert_eq!(script[jmp], OpCode::JMP as u8);
        assert_eq!(
            script[jmp + 1] as i8 as isize,
            loop_start as isize - jmp as isize
        );

        let jmp_if = jmp - 2;
        assert_eq!(script[jmp_if], OpCode::JMPIF as u8);
        assert_eq!(script[jmp_if + 1], 4);
    }
}
