// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complex payloads.
//!
//! This is a storage type only. Arithmetic belongs to the host.

/// A complex number stored as its real and imaginary parts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a complex value from its parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Complex with `f32` parts.
pub type Complex32 = Complex<f32>;

/// Complex with `f64` parts.
pub type Complex64 = Complex<f64>;

impl From<Complex32> for Complex64 {
    fn from(c: Complex32) -> Self {
        Self::new(f64::from(c.re), f64::from(c.im))
    }
}
