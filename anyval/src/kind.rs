// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric kind tags.
//!
//! A [`Kind`] names one concrete numeric representation. Kinds are partitioned into four
//! [`Family`] values; inference only ever moves within a family, while forced conversions may
//! cross families.

use core::fmt;

/// The numeric family a [`Kind`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Unsigned integers.
    Unsigned,
    /// Signed integers.
    Signed,
    /// Real floating point.
    Floating,
    /// Complex floating point.
    Complex,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned => write!(f, "unsigned"),
            Self::Signed => write!(f, "signed"),
            Self::Floating => write!(f, "floating"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// A concrete numeric representation.
///
/// The discriminant is the kind's stable code (see [`Kind::code`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    /// `u8`.
    U8 = 0,
    /// `u16`.
    U16 = 1,
    /// `u32`.
    U32 = 2,
    /// `u64`.
    U64 = 3,
    /// `i8`.
    I8 = 4,
    /// `i16`.
    I16 = 5,
    /// `i32`.
    I32 = 6,
    /// `i64`.
    I64 = 7,
    /// `f32`.
    F32 = 8,
    /// `f64`.
    F64 = 9,
    /// Complex with `f32` parts.
    C64 = 10,
    /// Complex with `f64` parts.
    C128 = 11,
}

impl Kind {
    /// Every kind, in code order.
    pub const ALL: [Self; 12] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::C64,
        Self::C128,
    ];

    /// Returns the stable code for this kind.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a stable code back into a kind.
    ///
    /// Returns `None` for codes that do not name a kind.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::U8,
            1 => Self::U16,
            2 => Self::U32,
            3 => Self::U64,
            4 => Self::I8,
            5 => Self::I16,
            6 => Self::I32,
            7 => Self::I64,
            8 => Self::F32,
            9 => Self::F64,
            10 => Self::C64,
            11 => Self::C128,
            _ => return None,
        })
    }

    /// Returns the family this kind belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => Family::Unsigned,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Family::Signed,
            Self::F32 | Self::F64 => Family::Floating,
            Self::C64 | Self::C128 => Family::Complex,
        }
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 | Self::C64 => 8,
            Self::C128 => 16,
        }
    }

    /// Returns the short lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::C64 => "c64",
            Self::C128 => "c128",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
