// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host scalar model and host call interface.
//!
//! The embedding runtime classifies its own scalars into [`HostScalar`] shapes before handing them
//! to the engine. The engine calls back into the runtime through [`Host`] only for complex
//! objects, which it treats as opaque handles.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::container::NumericContainer;

/// An opaque handle to a host-owned object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjHandle(pub u64);

/// Which half of a complex object an accessor reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComplexPart {
    /// Real part.
    Re,
    /// Imaginary part.
    Im,
}

impl fmt::Display for ComplexPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Re => write!(f, "Re"),
            Self::Im => write!(f, "Im"),
        }
    }
}

/// A host call failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host has no complex-number support.
    Unsupported,
    /// The handle does not name a live object of the expected type.
    BadHandle(ObjHandle),
    /// The host call raised.
    Failed(Box<str>),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "host has no complex support"),
            Self::BadHandle(h) => write!(f, "bad host object handle: {}", h.0),
            Self::Failed(msg) => write!(f, "host call failed: {msg}"),
        }
    }
}

impl core::error::Error for HostError {}

/// Host callbacks used for complex objects.
///
/// Both calls return every value the host produced. The engine requires exactly one and reports
/// anything else as a conversion failure, so implementations should not pad or truncate.
pub trait Host {
    /// Reads one part of the complex object `obj`.
    fn complex_part(&mut self, obj: ObjHandle, part: ComplexPart) -> Result<Vec<f64>, HostError>;

    /// Constructs a new complex object from its parts.
    fn construct_complex(&mut self, re: f64, im: f64) -> Result<Vec<ObjHandle>, HostError>;
}

/// A host without complex-number support.
///
/// Plain numbers and containers convert normally; complex input and output fail.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn complex_part(
        &mut self,
        _obj: ObjHandle,
        _part: ComplexPart,
    ) -> Result<Vec<f64>, HostError> {
        Err(HostError::Unsupported)
    }

    fn construct_complex(&mut self, _re: f64, _im: f64) -> Result<Vec<ObjHandle>, HostError> {
        Err(HostError::Unsupported)
    }
}

/// A defined host number, e.g. the configured substitute for undefined input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    /// Unsigned integer.
    Unsigned(u64),
    /// Signed integer.
    Signed(i64),
    /// Floating point.
    Float(f64),
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Signed(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A classified host scalar, as consumed by the engine.
#[derive(Copy, Clone, Debug)]
pub enum HostScalar<'a> {
    /// Missing or undefined.
    Undefined,
    /// Signed integer.
    SignedInt(i64),
    /// Unsigned integer.
    UnsignedInt(u64),
    /// Floating point.
    Float(f64),
    /// Reference to a numeric container that should hold a single element.
    Container(&'a dyn NumericContainer),
    /// Reference to a host complex object.
    Complex(ObjHandle),
    /// Any other reference.
    Other {
        /// The host's name for the referenced type.
        type_name: &'a str,
    },
}

impl From<Number> for HostScalar<'_> {
    fn from(n: Number) -> Self {
        match n {
            Number::Unsigned(v) => Self::UnsignedInt(v),
            Number::Signed(v) => Self::SignedInt(v),
            Number::Float(v) => Self::Float(v),
        }
    }
}

impl From<HostValue> for HostScalar<'_> {
    fn from(v: HostValue) -> Self {
        match v {
            HostValue::Undefined => Self::Undefined,
            HostValue::SignedInt(v) => Self::SignedInt(v),
            HostValue::UnsignedInt(v) => Self::UnsignedInt(v),
            HostValue::Float(v) => Self::Float(v),
            HostValue::Complex(obj) => Self::Complex(obj),
        }
    }
}

/// A host scalar produced by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostValue {
    /// The host's undefined value.
    Undefined,
    /// Signed integer.
    SignedInt(i64),
    /// Unsigned integer.
    UnsignedInt(u64),
    /// Floating point.
    Float(f64),
    /// A freshly constructed host complex object.
    Complex(ObjHandle),
}
