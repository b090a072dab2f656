// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tagged numeric value.
//!
//! [`AnyValue`] is a closed sum over every [`Kind`] plus an [`AnyValue::Invalid`] sentinel. It is
//! `Copy` and owns nothing, so it can be passed around and shared across threads freely.

use alloc::vec::Vec;
use core::fmt;

use crate::complex::{Complex, Complex32, Complex64};
use crate::kind::Kind;

/// A numeric value of any supported kind.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum AnyValue {
    /// No value. Produced only for undefined input without a configured fallback.
    #[default]
    Invalid,
    /// `u8`.
    U8(u8),
    /// `u16`.
    U16(u16),
    /// `u32`.
    U32(u32),
    /// `u64`.
    U64(u64),
    /// `i8`.
    I8(i8),
    /// `i16`.
    I16(i16),
    /// `i32`.
    I32(i32),
    /// `i64`.
    I64(i64),
    /// `f32`.
    F32(f32),
    /// `f64`.
    F64(f64),
    /// Complex with `f32` parts.
    C64(Complex32),
    /// Complex with `f64` parts.
    C128(Complex64),
}

/// Error reading a raw payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// The payload does not fit in the buffer at the requested offset.
    OutOfBounds {
        /// Requested byte offset.
        offset: usize,
        /// Payload size in bytes.
        size: usize,
        /// Buffer length in bytes.
        len: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { offset, size, len } => write!(
                f,
                "payload out of bounds: offset={offset} size={size} len={len}"
            ),
        }
    }
}

impl core::error::Error for ReadError {}

impl AnyValue {
    /// Returns the kind of this value, or `None` for [`AnyValue::Invalid`].
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        Some(match self {
            Self::Invalid => return None,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::C64(_) => Kind::C64,
            Self::C128(_) => Kind::C128,
        })
    }

    /// Returns `true` for [`AnyValue::Invalid`].
    #[must_use]
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Widens an unsigned payload to `u64`. `None` for other families.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::U8(v) => Some(u64::from(v)),
            Self::U16(v) => Some(u64::from(v)),
            Self::U32(v) => Some(u64::from(v)),
            Self::U64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens a signed payload to `i64`. `None` for other families.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(i64::from(v)),
            Self::I16(v) => Some(i64::from(v)),
            Self::I32(v) => Some(i64::from(v)),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens a real floating payload to `f64`. `None` for other families.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens a complex payload to [`Complex64`]. `None` for other families.
    #[must_use]
    pub fn as_complex(&self) -> Option<Complex64> {
        match *self {
            Self::C64(c) => Some(c.into()),
            Self::C128(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the zero value of `kind`.
    #[must_use]
    pub const fn zero(kind: Kind) -> Self {
        match kind {
            Kind::U8 => Self::U8(0),
            Kind::U16 => Self::U16(0),
            Kind::U32 => Self::U32(0),
            Kind::U64 => Self::U64(0),
            Kind::I8 => Self::I8(0),
            Kind::I16 => Self::I16(0),
            Kind::I32 => Self::I32(0),
            Kind::I64 => Self::I64(0),
            Kind::F32 => Self::F32(0.0),
            Kind::F64 => Self::F64(0.0),
            Kind::C64 => Self::C64(Complex::new(0.0, 0.0)),
            Kind::C128 => Self::C128(Complex::new(0.0, 0.0)),
        }
    }

    /// Stores `v` as `kind` with numeric cast semantics.
    ///
    /// Narrow integer kinds keep the low bits, so `cast_u64(Kind::U8, 300)` is `U8(44)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "forced kinds narrow with cast semantics"
    )]
    pub fn cast_u64(kind: Kind, v: u64) -> Self {
        match kind {
            Kind::U8 => Self::U8(v as u8),
            Kind::U16 => Self::U16(v as u16),
            Kind::U32 => Self::U32(v as u32),
            Kind::U64 => Self::U64(v),
            Kind::I8 => Self::I8(v as i8),
            Kind::I16 => Self::I16(v as i16),
            Kind::I32 => Self::I32(v as i32),
            Kind::I64 => Self::I64(v as i64),
            Kind::F32 => Self::F32(v as f32),
            Kind::F64 => Self::F64(v as f64),
            Kind::C64 => Self::C64(Complex::new(v as f32, 0.0)),
            Kind::C128 => Self::C128(Complex::new(v as f64, 0.0)),
        }
    }

    /// Stores `v` as `kind` with numeric cast semantics.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "forced kinds narrow with cast semantics"
    )]
    pub fn cast_i64(kind: Kind, v: i64) -> Self {
        match kind {
            Kind::U8 => Self::U8(v as u8),
            Kind::U16 => Self::U16(v as u16),
            Kind::U32 => Self::U32(v as u32),
            Kind::U64 => Self::U64(v as u64),
            Kind::I8 => Self::I8(v as i8),
            Kind::I16 => Self::I16(v as i16),
            Kind::I32 => Self::I32(v as i32),
            Kind::I64 => Self::I64(v),
            Kind::F32 => Self::F32(v as f32),
            Kind::F64 => Self::F64(v as f64),
            Kind::C64 => Self::C64(Complex::new(v as f32, 0.0)),
            Kind::C128 => Self::C128(Complex::new(v as f64, 0.0)),
        }
    }

    /// Stores `v` as `kind` with numeric cast semantics.
    ///
    /// Float to integer casts truncate toward zero, saturate at the target bounds and map NaN to
    /// zero. Negative values forced to an unsigned kind therefore clamp to 0.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "forced kinds narrow with cast semantics"
    )]
    pub fn cast_f64(kind: Kind, v: f64) -> Self {
        match kind {
            Kind::U8 => Self::U8(v as u8),
            Kind::U16 => Self::U16(v as u16),
            Kind::U32 => Self::U32(v as u32),
            Kind::U64 => Self::U64(v as u64),
            Kind::I8 => Self::I8(v as i8),
            Kind::I16 => Self::I16(v as i16),
            Kind::I32 => Self::I32(v as i32),
            Kind::I64 => Self::I64(v as i64),
            Kind::F32 => Self::F32(v as f32),
            Kind::F64 => Self::F64(v),
            Kind::C64 => Self::C64(Complex::new(v as f32, 0.0)),
            Kind::C128 => Self::C128(Complex::new(v, 0.0)),
        }
    }

    /// Reads a native-endian payload of `kind` starting at byte `offset` of `bytes`.
    pub fn read_ne(kind: Kind, bytes: &[u8], offset: usize) -> Result<Self, ReadError> {
        Ok(match kind {
            Kind::U8 => Self::U8(u8::from_ne_bytes(take(bytes, offset)?)),
            Kind::U16 => Self::U16(u16::from_ne_bytes(take(bytes, offset)?)),
            Kind::U32 => Self::U32(u32::from_ne_bytes(take(bytes, offset)?)),
            Kind::U64 => Self::U64(u64::from_ne_bytes(take(bytes, offset)?)),
            Kind::I8 => Self::I8(i8::from_ne_bytes(take(bytes, offset)?)),
            Kind::I16 => Self::I16(i16::from_ne_bytes(take(bytes, offset)?)),
            Kind::I32 => Self::I32(i32::from_ne_bytes(take(bytes, offset)?)),
            Kind::I64 => Self::I64(i64::from_ne_bytes(take(bytes, offset)?)),
            Kind::F32 => Self::F32(f32::from_ne_bytes(take(bytes, offset)?)),
            Kind::F64 => Self::F64(f64::from_ne_bytes(take(bytes, offset)?)),
            Kind::C64 => {
                let raw: [u8; 8] = take(bytes, offset)?;
                let (re, im) = raw.split_at(4);
                Self::C64(Complex::new(
                    f32::from_ne_bytes(chunk(re)),
                    f32::from_ne_bytes(chunk(im)),
                ))
            }
            Kind::C128 => {
                let raw: [u8; 16] = take(bytes, offset)?;
                let (re, im) = raw.split_at(8);
                Self::C128(Complex::new(
                    f64::from_ne_bytes(chunk(re)),
                    f64::from_ne_bytes(chunk(im)),
                ))
            }
        })
    }

    /// Appends the native-endian payload to `out`.
    ///
    /// Complex payloads are written real part first. [`AnyValue::Invalid`] writes nothing.
    pub fn write_ne(&self, out: &mut Vec<u8>) {
        match self {
            Self::Invalid => {}
            Self::U8(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::U16(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::U32(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::U64(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::I8(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::I16(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::I32(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::I64(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::F32(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::F64(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Self::C64(c) => {
                out.extend_from_slice(&c.re.to_ne_bytes());
                out.extend_from_slice(&c.im.to_ne_bytes());
            }
            Self::C128(c) => {
                out.extend_from_slice(&c.re.to_ne_bytes());
                out.extend_from_slice(&c.im.to_ne_bytes());
            }
        }
    }
}

fn take<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], ReadError> {
    let err = ReadError::OutOfBounds {
        offset,
        size: N,
        len: bytes.len(),
    };
    let end = offset.checked_add(N).ok_or(err)?;
    let slice = bytes.get(offset..end).ok_or(err)?;
    <[u8; N]>::try_from(slice).map_err(|_| err)
}

// Callers split fixed-size arrays at exact halves.
fn chunk<const N: usize>(half: &[u8]) -> [u8; N] {
    let mut out = [0_u8; N];
    out.copy_from_slice(half);
    out
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::C64(c) => write!(f, "{}{:+}i", c.re, c.im),
            Self::C128(c) => write!(f, "{}{:+}i", c.re, c.im),
        }
    }
}
