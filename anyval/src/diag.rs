// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion diagnostics.
//!
//! Diagnostics are informational and never change a conversion result. A diagnostic is delivered
//! only if both the engine's configured [`DiagnosticMask`] and the sink's own mask include it.

use alloc::vec::Vec;
use core::fmt;
use core::ops::BitOr;

use crate::host::Number;

/// Bitmask selecting which diagnostics are delivered.
///
/// Defaults to [`DiagnosticMask::NONE`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DiagnosticMask(u8);

impl DiagnosticMask {
    /// No diagnostics.
    pub const NONE: Self = Self(0);
    /// Undefined input replaced by the configured default.
    pub const UNDEF_SUBSTITUTION: Self = Self(1 << 0);
    /// Every diagnostic.
    pub const ALL: Self = Self(Self::UNDEF_SUBSTITUTION.0);

    /// Returns `true` if this mask contains every bit in `other`.
    #[must_use]
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for DiagnosticMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A conversion diagnostic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// An undefined scalar was replaced by the configured default.
    UndefinedSubstituted {
        /// The substituted default.
        value: Number,
    },
}

impl Diagnostic {
    /// Returns the mask bit that gates this diagnostic.
    #[must_use]
    pub const fn mask(&self) -> DiagnosticMask {
        match self {
            Self::UndefinedSubstituted { .. } => DiagnosticMask::UNDEF_SUBSTITUTION,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedSubstituted { value } => {
                write!(f, "converted undefined value to the configured default ({value})")
            }
        }
    }
}

/// Receives diagnostics emitted during conversion.
pub trait DiagnosticSink {
    /// Diagnostics this sink wants.
    fn mask(&self) -> DiagnosticMask {
        DiagnosticMask::ALL
    }

    /// Handles one diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// A sink that discards every diagnostic.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn mask(&self) -> DiagnosticMask {
        DiagnosticMask::NONE
    }

    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

/// A sink that keeps every diagnostic in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(*diagnostic);
    }
}

/// A sink that writes warnings to standard error.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        std::eprintln!("Warning: {diagnostic}.");
    }
}
