use neo_io::MemoryReader;
use neo_vm::{disassemble, OpCode, ScriptBuilder, ScriptReader};
use num_bigint::BigInt;
use proptest::prelude::*;

proptest! {
    #[test]
    fn push_int_reads_back(value in any::<i64>()) {
        let mut builder = ScriptBuilder::new();
        builder.push_int(value);
        let script = builder.into_bytes();

        let mut reader = MemoryReader::new(&script);
        prop_assert_eq!(reader.read_push_int().unwrap(), value);
        prop_assert!(reader.is_at_end());
    }

    #[test]
    fn push_integer_matches_push_int(value in any::<i64>()) {
        let mut small = ScriptBuilder::new();
        small.push_int(value);
        let mut big = ScriptBuilder::new();
        big.push_integer(&BigInt::from(value)).unwrap();
        prop_assert_eq!(small.into_bytes(), big.into_bytes());
    }

    #[test]
    fn wide_integers_read_back(bytes in proptest::collection::vec(any::<u8>(), 1..32)) {
        let value = BigInt::from_signed_bytes_le(&bytes);
        let mut builder = ScriptBuilder::new();
        builder.push_integer(&value).unwrap();
        let script = builder.into_bytes();

        let mut reader = MemoryReader::new(&script);
        prop_assert_eq!(reader.read_push_big_int().unwrap(), value);
    }

    #[test]
    fn push_data_disassembles(data in proptest::collection::vec(any::<u8>(), 0..700)) {
        let mut builder = ScriptBuilder::new();
        builder.push_data(&data);
        let instructions = disassemble(&builder.to_array()).unwrap();
        prop_assert_eq!(instructions.len(), 1);
        prop_assert!(instructions[0].opcode.is_push_data());
        prop_assert_eq!(&instructions[0].operand, &data);
    }

    #[test]
    fn disassembler_never_panics(script in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = disassemble(&script);
    }
}

#[test]
fn every_fixed_operand_opcode_disassembles() {
    for opcode in OpCode::ALL {
        let size = opcode.operand_size();
        if size.has_size_prefix() {
            continue;
        }
        let mut script = vec![*opcode as u8];
        script.extend(std::iter::repeat(0u8).take(size.size()));
        let instructions = disassemble(&script).unwrap();
        assert_eq!(instructions.len(), 1, "{opcode}");
        assert_eq!(instructions[0].size(), script.len());
    }
}
