// Copyright (C) 2015-2025 The Neo Project.
//
// serializable.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits and utilities for Neo objects.

use crate::{BinaryWriter, IoError, IoResult, MemoryReader};

/// Represents NEO objects that can be serialized.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified BinaryWriter.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes the object using the specified MemoryReader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Creates an object from a byte array, rejecting trailing bytes.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        if !reader.is_at_end() {
            return Err(IoError::format(format!(
                "{} trailing bytes after object",
                reader.remaining()
            )));
        }
        Ok(value)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for computing serialized sizes.
pub mod helper {
    use super::Serializable;

    /// Gets the size of variable-length of the data.
    pub fn get_var_size(value: u64) -> usize {
        if value < 0xFD {
            1
        } else if value <= 0xFFFF {
            3
        } else if value <= 0xFFFF_FFFF {
            5
        } else {
            9
        }
    }

    /// Size of a var-bytes block holding `len` bytes.
    pub fn get_var_bytes_size(len: usize) -> usize {
        get_var_size(len as u64) + len
    }

    /// Gets the size of a var-int counted array of serializable items.
    pub fn get_array_size<T: Serializable>(items: &[T]) -> usize {
        get_var_size(items.len() as u64) + items.iter().map(|item| item.size()).sum::<usize>()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_get_var_size() {
            assert_eq!(get_var_size(0), 1);
            assert_eq!(get_var_size(0xFC), 1);
            assert_eq!(get_var_size(0xFD), 3);
            assert_eq!(get_var_size(0xFFFF), 3);
            assert_eq!(get_var_size(0x10000), 5);
            assert_eq!(get_var_size(0xFFFF_FFFF), 5);
            assert_eq!(get_var_size(0x1_0000_0000), 9);
            assert_eq!(get_var_bytes_size(300), 303);
        }
    }
}
