// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-element numeric containers.
//!
//! A host container exposes its element count, a raw kind code, and native-endian payload bytes.
//! The engine only ever reads the first element, and only when there is exactly one.

use alloc::vec::Vec;
use core::fmt;

use crate::kind::Kind;
use crate::value::AnyValue;

/// A host numeric container, viewed as raw storage.
pub trait NumericContainer: fmt::Debug {
    /// Number of elements held.
    fn element_count(&self) -> usize;

    /// Raw kind code of the elements; see [`Kind::code`].
    fn kind_code(&self) -> u8;

    /// Backing storage.
    fn bytes(&self) -> &[u8];

    /// Byte offset of the first element within [`NumericContainer::bytes`].
    fn offset(&self) -> usize {
        0
    }
}

/// A one-element container owning its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarContainer {
    kind: Kind,
    bytes: Vec<u8>,
}

impl ScalarContainer {
    /// Wraps `value`. Returns `None` for [`AnyValue::Invalid`].
    #[must_use]
    pub fn new(value: AnyValue) -> Option<Self> {
        let kind = value.kind()?;
        let mut bytes = Vec::with_capacity(kind.size());
        value.write_ne(&mut bytes);
        Some(Self { kind, bytes })
    }

    /// Returns the element kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Reads the element back.
    #[must_use]
    pub fn value(&self) -> AnyValue {
        AnyValue::read_ne(self.kind, &self.bytes, 0).unwrap_or_default()
    }
}

impl NumericContainer for ScalarContainer {
    fn element_count(&self) -> usize {
        1
    }

    fn kind_code(&self) -> u8 {
        self.kind.code()
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
