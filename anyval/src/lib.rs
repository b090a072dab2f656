// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged numeric values for embedding runtimes.
//!
//! `anyval` moves single numbers across the boundary between a dynamically typed host and typed
//! numeric storage:
//!
//! - [`AnyValue`] holds one scalar of any [`Kind`] (unsigned, signed, floating, complex), or
//!   nothing at all.
//! - [`infer_unsigned`], [`infer_signed`], and [`infer_floating`] pick the narrowest kind that
//!   stores a host number exactly.
//! - [`Engine`] converts classified [`HostScalar`]s into [`AnyValue`]s and back, calling into the
//!   embedder's [`Host`] only for complex objects.
//!
//! The crate is `no_std + alloc`. The `std` feature adds [`StderrSink`](diag::StderrSink).
//!
//! ## Example
//! ```
//! use anyval::{AnyValue, ConvertOptions, Engine, HostScalar, HostValue, Kind, NullHost};
//!
//! let engine = Engine::default();
//! let v = engine.to_any_value(&mut NullHost, HostScalar::UnsignedInt(300), ConvertOptions::new(), None)?;
//! assert_eq!(v, AnyValue::U16(300));
//!
//! let narrowed = engine.to_any_value(
//!     &mut NullHost,
//!     HostScalar::UnsignedInt(300),
//!     ConvertOptions::new().forced(Kind::U8),
//!     None,
//! )?;
//! assert_eq!(narrowed, AnyValue::U8(44));
//!
//! assert_eq!(engine.to_host_scalar(&mut NullHost, v)?, HostValue::UnsignedInt(300));
//! # Ok::<(), anyval::ConvertError>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod complex;
pub mod container;
pub mod diag;
pub mod engine;
pub mod host;
pub mod infer;
pub mod kind;
pub mod value;

pub use complex::{Complex, Complex32, Complex64};
pub use container::{NumericContainer, ScalarContainer};
pub use diag::{CollectingSink, Diagnostic, DiagnosticMask, DiagnosticSink, NoopSink};
#[cfg(feature = "std")]
pub use diag::StderrSink;
pub use engine::{
    CallFault, ConvertError, ConvertOptions, Engine, EngineConfig, PositionFault,
    UNDEFINED_FALLBACK_KIND,
};
pub use host::{ComplexPart, Host, HostError, HostScalar, HostValue, Number, NullHost, ObjHandle};
pub use infer::{KindLadder, LadderError, infer_floating, infer_signed, infer_unsigned};
pub use kind::{Family, Kind};
pub use value::{AnyValue, ReadError};
