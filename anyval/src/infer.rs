// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal-kind inference.
//!
//! Inference scans a [`KindLadder`] from the narrowest rung to the widest and picks the first kind
//! that stores the value exactly. Exactness is a round trip: cast the value to the candidate kind,
//! widen it back, and compare with the original. This rejects out-of-range magnitudes and
//! fractional values alike, without separate range checks.
//!
//! Ladders are validated when they are built, so a scan over an integer ladder always finds a fit.
//! Floating scans fall back to [`Kind::F64`] when nothing round-trips, which is what happens for
//! NaN.

use core::fmt;

use crate::kind::{Family, Kind};
use crate::value::AnyValue;

const MAX_RUNGS: usize = 4;

/// An ordered list of candidate kinds for one family, narrowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindLadder {
    family: Family,
    rungs: [Kind; MAX_RUNGS],
    len: u8,
}

/// Error building a [`KindLadder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LadderError {
    /// No rungs were given.
    Empty,
    /// Inference never targets the complex family.
    UnsupportedFamily(Family),
    /// A rung does not belong to the ladder's family.
    WrongFamily {
        /// Offending kind.
        kind: Kind,
        /// Ladder family.
        family: Family,
    },
    /// Rungs must strictly increase in width.
    NotAscending {
        /// First rung that is not wider than its predecessor.
        kind: Kind,
    },
    /// The widest rung cannot hold every 64-bit host integer.
    NoKindFits {
        /// Widest configured rung.
        widest: Kind,
    },
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "kind ladder has no rungs"),
            Self::UnsupportedFamily(family) => {
                write!(f, "no kind ladder for the {family} family")
            }
            Self::WrongFamily { kind, family } => {
                write!(f, "kind {kind} does not belong to the {family} family")
            }
            Self::NotAscending { kind } => {
                write!(f, "kind {kind} is not wider than the previous rung")
            }
            Self::NoKindFits { widest } => {
                write!(f, "widest rung {widest} cannot hold every 64-bit value")
            }
        }
    }
}

impl core::error::Error for LadderError {}

impl KindLadder {
    /// `u8`, `u16`, `u32`, `u64`.
    pub const UNSIGNED: Self = Self {
        family: Family::Unsigned,
        rungs: [Kind::U8, Kind::U16, Kind::U32, Kind::U64],
        len: 4,
    };

    /// `i8`, `i16`, `i32`, `i64`.
    pub const SIGNED: Self = Self {
        family: Family::Signed,
        rungs: [Kind::I8, Kind::I16, Kind::I32, Kind::I64],
        len: 4,
    };

    /// `f32`, `f64`.
    pub const FLOATING: Self = Self {
        family: Family::Floating,
        rungs: [Kind::F32, Kind::F64, Kind::F64, Kind::F64],
        len: 2,
    };

    /// `f64` only: host floats never narrow below double precision.
    pub const FLOATING_AT_LEAST_DOUBLE: Self = Self {
        family: Family::Floating,
        rungs: [Kind::F64, Kind::F64, Kind::F64, Kind::F64],
        len: 1,
    };

    /// Builds a ladder for `family` from `kinds`, narrowest first.
    pub fn new(family: Family, kinds: &[Kind]) -> Result<Self, LadderError> {
        if family == Family::Complex {
            return Err(LadderError::UnsupportedFamily(family));
        }
        let (&first, _) = kinds.split_first().ok_or(LadderError::Empty)?;

        let mut rungs = [first; MAX_RUNGS];
        let mut len = 0_u8;
        let mut prev: Option<Kind> = None;
        for &kind in kinds {
            if kind.family() != family {
                return Err(LadderError::WrongFamily { kind, family });
            }
            if prev.is_some_and(|p| p.size() >= kind.size()) {
                return Err(LadderError::NotAscending { kind });
            }
            // Strictly ascending widths within one family bound the rung count.
            let slot = rungs
                .get_mut(usize::from(len))
                .ok_or(LadderError::NotAscending { kind })?;
            *slot = kind;
            len += 1;
            prev = Some(kind);
        }

        let widest = prev.unwrap_or(first);
        let covers_host = match family {
            Family::Unsigned => widest == Kind::U64,
            Family::Signed => widest == Kind::I64,
            Family::Floating | Family::Complex => true,
        };
        if !covers_host {
            return Err(LadderError::NoKindFits { widest });
        }

        // Unused slots repeat the widest rung, matching the presets.
        if let Some(tail) = rungs.get_mut(usize::from(len)..) {
            tail.fill(widest);
        }
        Ok(Self { family, rungs, len })
    }

    /// Returns the ladder's family.
    #[must_use]
    #[inline]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Returns the rungs, narrowest first.
    #[must_use]
    pub fn kinds(&self) -> &[Kind] {
        &self.rungs[..usize::from(self.len)]
    }

    /// Returns the narrowest rung that stores `v` exactly.
    #[must_use]
    pub fn fit_u64(&self, v: u64) -> Kind {
        self.scan(|kind| AnyValue::cast_u64(kind, v).as_u64() == Some(v))
    }

    /// Returns the narrowest rung that stores `v` exactly.
    #[must_use]
    pub fn fit_i64(&self, v: i64) -> Kind {
        self.scan(|kind| AnyValue::cast_i64(kind, v).as_i64() == Some(v))
    }

    /// Returns the narrowest rung that stores `v` exactly, or [`Kind::F64`] if none does.
    #[must_use]
    pub fn fit_f64(&self, v: f64) -> Kind {
        self.kinds()
            .iter()
            .copied()
            .find(|&kind| AnyValue::cast_f64(kind, v).as_f64() == Some(v))
            .unwrap_or(Kind::F64)
    }

    // Integer ladders end at the 64-bit kind, so the widest rung always matches.
    fn scan(&self, fits: impl Fn(Kind) -> bool) -> Kind {
        let kinds = self.kinds();
        kinds
            .iter()
            .copied()
            .find(|&kind| fits(kind))
            .or_else(|| kinds.last().copied())
            .unwrap_or(self.rungs[0])
    }
}

/// Returns the narrowest unsigned kind that stores `v` exactly.
#[must_use]
pub fn infer_unsigned(v: u64) -> Kind {
    KindLadder::UNSIGNED.fit_u64(v)
}

/// Returns the narrowest signed kind that stores `v` exactly.
#[must_use]
pub fn infer_signed(v: i64) -> Kind {
    KindLadder::SIGNED.fit_i64(v)
}

/// Returns the narrowest floating kind that stores `v` exactly.
///
/// NaN never round-trips and yields [`Kind::F64`].
#[must_use]
pub fn infer_floating(v: f64) -> Kind {
    KindLadder::FLOATING.fit_f64(v)
}
