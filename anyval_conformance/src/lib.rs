// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for `anyval` conformance tests and benchmarks.
//!
//! [`RecordingHost`] is an in-memory complex-object runtime that logs every call, and
//! [`TestContainer`] is a container with an arbitrary element count.

use std::collections::BTreeMap;
use std::vec::Vec;

use anyval::{AnyValue, ComplexPart, Host, HostError, Kind, NumericContainer, ObjHandle};

/// One recorded host call.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    /// [`Host::complex_part`].
    Part {
        /// Object read.
        obj: ObjHandle,
        /// Part read.
        part: ComplexPart,
    },
    /// [`Host::construct_complex`].
    Construct {
        /// Real part.
        re: f64,
        /// Imaginary part.
        im: f64,
    },
}

/// In-memory complex-object host.
///
/// Accessors and the constructor normally return exactly one value. The `*_arity` fields override
/// that, so tests can simulate misbehaving hosts.
#[derive(Debug, Default)]
pub struct RecordingHost {
    objects: BTreeMap<u64, (f64, f64)>,
    next: u64,
    /// Every call, in order.
    pub calls: Vec<HostCall>,
    /// When set, accessors return this many copies of the part.
    pub accessor_arity: Option<usize>,
    /// When set, the constructor creates this many objects.
    pub constructor_arity: Option<usize>,
}

impl RecordingHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a complex object without recording a call.
    pub fn alloc(&mut self, re: f64, im: f64) -> ObjHandle {
        let handle = self.next;
        self.next += 1;
        self.objects.insert(handle, (re, im));
        ObjHandle(handle)
    }

    /// Returns the parts of `obj`, if it exists.
    #[must_use]
    pub fn parts(&self, obj: ObjHandle) -> Option<(f64, f64)> {
        self.objects.get(&obj.0).copied()
    }
}

impl Host for RecordingHost {
    fn complex_part(&mut self, obj: ObjHandle, part: ComplexPart) -> Result<Vec<f64>, HostError> {
        self.calls.push(HostCall::Part { obj, part });
        let (re, im) = self.parts(obj).ok_or(HostError::BadHandle(obj))?;
        let v = match part {
            ComplexPart::Re => re,
            ComplexPart::Im => im,
        };
        Ok(vec![v; self.accessor_arity.unwrap_or(1)])
    }

    fn construct_complex(&mut self, re: f64, im: f64) -> Result<Vec<ObjHandle>, HostError> {
        self.calls.push(HostCall::Construct { re, im });
        let n = self.constructor_arity.unwrap_or(1);
        Ok((0..n).map(|_| self.alloc(re, im)).collect())
    }
}

/// A container holding `elements` copies of one value.
#[derive(Clone, Debug)]
pub struct TestContainer {
    kind: Kind,
    elements: usize,
    bytes: Vec<u8>,
}

impl TestContainer {
    /// Creates a container with `elements` copies of `value`.
    ///
    /// `value` must not be [`AnyValue::Invalid`]; an invalid value produces an empty `u8`
    /// container.
    #[must_use]
    pub fn repeat(value: AnyValue, elements: usize) -> Self {
        let mut bytes = Vec::new();
        for _ in 0..elements {
            value.write_ne(&mut bytes);
        }
        Self {
            kind: value.kind().unwrap_or(Kind::U8),
            elements,
            bytes,
        }
    }
}

impl NumericContainer for TestContainer {
    fn element_count(&self) -> usize {
        self.elements
    }

    fn kind_code(&self) -> u8 {
        self.kind.code()
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
