// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `anyval` diagnostics (currently Tracy).
//!
//! This crate is `std`-only and keeps `anyval` itself free of profiling dependencies.
//! It forwards conversion diagnostics as Tracy messages, so undefined-value substitutions show up
//! on the profiler timeline next to the work that caused them.
//!
//! ## Backend
//! This crate currently supports the Tracy backend via `tracy-client`.
//!
//! ## Example
//! ```ignore
//! use anyval::{ConvertOptions, DiagnosticMask, Engine, EngineConfig, HostScalar, NullHost};
//! use anyval_profiling::TracyDiagnosticSink;
//!
//! let engine = Engine::new(EngineConfig::new().with_diagnostics(DiagnosticMask::ALL));
//! let mut sink = TracyDiagnosticSink::new();
//! let opts = ConvertOptions::new().undefined_as_default(true);
//! engine.to_any_value(&mut NullHost, HostScalar::Undefined, opts, Some(&mut sink))?;
//! # Ok::<(), anyval::ConvertError>(())
//! ```

mod sink;

pub use sink::TracyDiagnosticSink;
