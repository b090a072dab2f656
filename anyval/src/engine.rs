// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host scalar conversions.
//!
//! [`Engine`] converts classified host scalars into [`AnyValue`]s and back. It holds the settings
//! an embedder would otherwise keep as process-wide state (the substitute for undefined input and
//! the diagnostic mask) as an explicit [`EngineConfig`].
//!
//! ## Host scalar → `AnyValue`
//!
//! Inputs are handled in priority order:
//!
//! 1. Undefined input yields [`AnyValue::Invalid`] (or a zero of the forced kind) unless
//!    [`ConvertOptions::use_default_for_undefined`] is set, in which case the configured default
//!    is converted instead. With no default configured the result is a zero of the forced kind,
//!    or [`UNDEFINED_FALLBACK_KIND`].
//! 2. A container must hold exactly one element, which is read at its native kind.
//! 3. A complex object is read through [`Host::complex_part`] into [`AnyValue::C128`].
//! 4. Any other reference is rejected.
//! 5. Plain numbers take the forced kind, or the narrowest exact kind from the configured ladder.
//!
//! ## `AnyValue` → host scalar
//!
//! Real payloads widen to the host's 64-bit representation of their family. Complex payloads go
//! through [`Host::construct_complex`]. [`AnyValue::Invalid`] becomes [`HostValue::Undefined`].

use alloc::boxed::Box;
use core::fmt;

use crate::complex::{Complex, Complex64};
use crate::container::NumericContainer;
use crate::diag::{Diagnostic, DiagnosticMask, DiagnosticSink};
use crate::host::{ComplexPart, Host, HostError, HostScalar, HostValue, Number, ObjHandle};
use crate::infer::KindLadder;
use crate::kind::{Family, Kind};
use crate::value::{AnyValue, ReadError};

/// Kind used for undefined input when a default is requested but none is configured.
pub const UNDEFINED_FALLBACK_KIND: Kind = Kind::U8;

/// Why a container could not be read as a single value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionFault {
    /// The container did not hold exactly one element.
    ElementCount(usize),
    /// The element kind code does not name a kind.
    UnknownKind(u8),
    /// The element payload lies outside the container's storage.
    Payload(ReadError),
}

impl fmt::Display for PositionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementCount(n) => write!(f, "container holds {n} elements"),
            Self::UnknownKind(code) => write!(f, "unknown element kind code {code}"),
            Self::Payload(err) => write!(f, "{err}"),
        }
    }
}

/// Why a host call did not produce a single result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallFault {
    /// The call returned this many values instead of one.
    Arity(usize),
    /// The call itself failed.
    Host(HostError),
}

impl fmt::Display for CallFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(n) => write!(f, "returned {n} values"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

/// Conversion errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertError {
    /// A container reference did not resolve to exactly one readable element.
    PositionOutOfRange(PositionFault),
    /// Reading a part of a host complex object failed.
    ComplexAccessFailure {
        /// Part being read.
        part: ComplexPart,
        /// What went wrong.
        fault: CallFault,
    },
    /// Constructing a host complex object failed.
    ComplexConstructionFailure {
        /// Real part passed to the host.
        re: f64,
        /// Imaginary part passed to the host.
        im: f64,
        /// What went wrong.
        fault: CallFault,
    },
    /// The reference type has no numeric interpretation.
    UnsupportedReference {
        /// The host's name for the referenced type.
        type_name: Box<str>,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange(fault) => write!(f, "position out of range: {fault}"),
            Self::ComplexAccessFailure { part, fault } => {
                write!(f, "failed complex accessor '{part}': {fault}")
            }
            Self::ComplexConstructionFailure { re, im, fault } => {
                write!(f, "failed to construct complex ({re:.9}, {im:.9}): {fault}")
            }
            Self::UnsupportedReference { type_name } => {
                write!(f, "can't convert reference '{type_name}' to a numeric value")
            }
        }
    }
}

impl core::error::Error for ConvertError {}

/// Settings shared by every conversion an [`Engine`] performs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    undefined_default: Option<Number>,
    diagnostics: DiagnosticMask,
    unsigned: KindLadder,
    signed: KindLadder,
    floating: KindLadder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            undefined_default: None,
            diagnostics: DiagnosticMask::NONE,
            unsigned: KindLadder::UNSIGNED,
            signed: KindLadder::SIGNED,
            floating: KindLadder::FLOATING,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the substitute for undefined input.
    #[must_use]
    pub fn with_undefined_default(mut self, value: Option<Number>) -> Self {
        self.undefined_default = value;
        self
    }

    /// Sets which diagnostics are emitted.
    #[must_use]
    pub fn with_diagnostics(mut self, mask: DiagnosticMask) -> Self {
        self.diagnostics = mask;
        self
    }

    /// Replaces the inference ladder for `ladder`'s family.
    #[must_use]
    pub fn with_ladder(mut self, ladder: KindLadder) -> Self {
        match ladder.family() {
            Family::Unsigned => self.unsigned = ladder,
            Family::Signed => self.signed = ladder,
            Family::Floating => self.floating = ladder,
            // `KindLadder::new` never builds complex ladders.
            Family::Complex => {}
        }
        self
    }

    /// Updates the substitute for undefined input in place.
    pub fn set_undefined_default(&mut self, value: Option<Number>) {
        self.undefined_default = value;
    }

    /// Returns the substitute for undefined input.
    #[must_use]
    pub fn undefined_default(&self) -> Option<Number> {
        self.undefined_default
    }

    /// Returns the diagnostic mask.
    #[must_use]
    pub fn diagnostics(&self) -> DiagnosticMask {
        self.diagnostics
    }

    /// Returns the inference ladder for `family`, if inference supports it.
    #[must_use]
    pub fn ladder(&self, family: Family) -> Option<&KindLadder> {
        match family {
            Family::Unsigned => Some(&self.unsigned),
            Family::Signed => Some(&self.signed),
            Family::Floating => Some(&self.floating),
            Family::Complex => None,
        }
    }
}

/// Per-call options for [`Engine::to_any_value`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Replace undefined input with [`EngineConfig::undefined_default`].
    pub use_default_for_undefined: bool,
    /// Store plain numbers (and zero fallbacks) as this kind instead of inferring one.
    pub forced_kind: Option<Kind>,
    /// Emit [`Diagnostic::UndefinedSubstituted`] when a default is substituted.
    pub warn_on_undefined_substitution: bool,
}

impl ConvertOptions {
    /// Options that infer kinds and leave undefined input invalid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            use_default_for_undefined: false,
            forced_kind: None,
            warn_on_undefined_substitution: false,
        }
    }

    /// Sets the forced kind.
    #[must_use]
    pub const fn forced(mut self, kind: Kind) -> Self {
        self.forced_kind = Some(kind);
        self
    }

    /// Substitutes the configured default for undefined input, optionally warning.
    #[must_use]
    pub const fn undefined_as_default(mut self, warn: bool) -> Self {
        self.use_default_for_undefined = true;
        self.warn_on_undefined_substitution = warn;
        self
    }
}

/// Converts between host scalars and [`AnyValue`].
///
/// An engine is immutable during conversion and can be shared across threads; hosts and sinks are
/// borrowed per call.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configuration for in-place updates.
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Converts a host scalar into an [`AnyValue`].
    pub fn to_any_value<H: Host + ?Sized>(
        &self,
        host: &mut H,
        scalar: HostScalar<'_>,
        opts: ConvertOptions,
        sink: Option<&mut dyn DiagnosticSink>,
    ) -> Result<AnyValue, ConvertError> {
        match scalar {
            HostScalar::Undefined => Ok(self.undefined(opts, sink)),
            HostScalar::Container(c) => single_element(c),
            HostScalar::Complex(obj) => {
                let re = complex_part(host, obj, ComplexPart::Re)?;
                let im = complex_part(host, obj, ComplexPart::Im)?;
                Ok(AnyValue::C128(Complex::new(re, im)))
            }
            HostScalar::Other { type_name } => Err(ConvertError::UnsupportedReference {
                type_name: type_name.into(),
            }),
            HostScalar::Float(v) => Ok(self.number(Number::Float(v), opts.forced_kind)),
            HostScalar::UnsignedInt(v) => Ok(self.number(Number::Unsigned(v), opts.forced_kind)),
            HostScalar::SignedInt(v) => Ok(self.number(Number::Signed(v), opts.forced_kind)),
        }
    }

    /// Converts an [`AnyValue`] into a host scalar.
    ///
    /// Only complex payloads touch `host`; everything else is infallible.
    pub fn to_host_scalar<H: Host + ?Sized>(
        &self,
        host: &mut H,
        value: AnyValue,
    ) -> Result<HostValue, ConvertError> {
        Ok(match value {
            AnyValue::Invalid => HostValue::Undefined,
            AnyValue::U8(v) => HostValue::UnsignedInt(v.into()),
            AnyValue::U16(v) => HostValue::UnsignedInt(v.into()),
            AnyValue::U32(v) => HostValue::UnsignedInt(v.into()),
            AnyValue::U64(v) => HostValue::UnsignedInt(v),
            AnyValue::I8(v) => HostValue::SignedInt(v.into()),
            AnyValue::I16(v) => HostValue::SignedInt(v.into()),
            AnyValue::I32(v) => HostValue::SignedInt(v.into()),
            AnyValue::I64(v) => HostValue::SignedInt(v),
            AnyValue::F32(v) => HostValue::Float(v.into()),
            AnyValue::F64(v) => HostValue::Float(v),
            AnyValue::C64(c) => HostValue::Complex(construct_complex(host, c.into())?),
            AnyValue::C128(c) => HostValue::Complex(construct_complex(host, c)?),
        })
    }

    // Without a sink, a requested and mask-enabled warning is skipped. The result is unchanged.
    fn undefined(&self, opts: ConvertOptions, sink: Option<&mut dyn DiagnosticSink>) -> AnyValue {
        if !opts.use_default_for_undefined {
            return opts.forced_kind.map_or(AnyValue::Invalid, AnyValue::zero);
        }
        let Some(default) = self.config.undefined_default else {
            return AnyValue::zero(opts.forced_kind.unwrap_or(UNDEFINED_FALLBACK_KIND));
        };
        if opts.warn_on_undefined_substitution
            && let Some(sink) = sink
        {
            let diagnostic = Diagnostic::UndefinedSubstituted { value: default };
            let wanted = self.config.diagnostics.contains(diagnostic.mask())
                && sink.mask().contains(diagnostic.mask());
            if wanted {
                sink.emit(&diagnostic);
            }
        }
        self.number(default, opts.forced_kind)
    }

    fn number(&self, n: Number, forced: Option<Kind>) -> AnyValue {
        match n {
            Number::Float(v) => {
                let kind = forced.unwrap_or_else(|| self.config.floating.fit_f64(v));
                AnyValue::cast_f64(kind, v)
            }
            Number::Unsigned(v) => {
                let kind = forced.unwrap_or_else(|| self.config.unsigned.fit_u64(v));
                AnyValue::cast_u64(kind, v)
            }
            Number::Signed(v) => {
                let kind = forced.unwrap_or_else(|| self.config.signed.fit_i64(v));
                AnyValue::cast_i64(kind, v)
            }
        }
    }
}

fn single_element(c: &dyn NumericContainer) -> Result<AnyValue, ConvertError> {
    let count = c.element_count();
    if count != 1 {
        return Err(ConvertError::PositionOutOfRange(PositionFault::ElementCount(count)));
    }
    let code = c.kind_code();
    let kind = Kind::from_code(code)
        .ok_or(ConvertError::PositionOutOfRange(PositionFault::UnknownKind(code)))?;
    AnyValue::read_ne(kind, c.bytes(), c.offset())
        .map_err(|err| ConvertError::PositionOutOfRange(PositionFault::Payload(err)))
}

fn complex_part<H: Host + ?Sized>(
    host: &mut H,
    obj: ObjHandle,
    part: ComplexPart,
) -> Result<f64, ConvertError> {
    let fail = |fault| ConvertError::ComplexAccessFailure { part, fault };
    let values = host
        .complex_part(obj, part)
        .map_err(|e| fail(CallFault::Host(e)))?;
    match values.as_slice() {
        [v] => Ok(*v),
        other => Err(fail(CallFault::Arity(other.len()))),
    }
}

fn construct_complex<H: Host + ?Sized>(
    host: &mut H,
    c: Complex64,
) -> Result<ObjHandle, ConvertError> {
    let fail = |fault| ConvertError::ComplexConstructionFailure {
        re: c.re,
        im: c.im,
        fault,
    };
    let objs = host
        .construct_complex(c.re, c.im)
        .map_err(|e| fail(CallFault::Host(e)))?;
    match objs.as_slice() {
        [obj] => Ok(*obj),
        other => Err(fail(CallFault::Arity(other.len()))),
    }
}
