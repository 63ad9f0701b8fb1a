// Copyright (C) 2015-2025 The Neo Project.
//
// call_flags.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Call flags passed to `System.Contract.Call`.

use std::ops::BitOr;

/// Flags that control what operations a called contract can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallFlags(pub u8);

impl CallFlags {
    pub const NONE: Self = Self(0);
    pub const READ_STATES: Self = Self(0x01);
    pub const WRITE_STATES: Self = Self(0x02);
    pub const ALLOW_CALL: Self = Self(0x04);
    pub const ALLOW_NOTIFY: Self = Self(0x08);
    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);
    pub const ALL: Self = Self(
        Self::READ_STATES.0 | Self::WRITE_STATES.0 | Self::ALLOW_CALL.0 | Self::ALLOW_NOTIFY.0,
    );

    pub fn has_flag(&self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Returns `None` if undefined bits are set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for CallFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
