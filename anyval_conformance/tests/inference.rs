// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal-kind inference properties over boundary values.

use anyval::{
    AnyValue, Family, Kind, KindLadder, infer_floating, infer_signed, infer_unsigned,
};

fn probe_u64() -> Vec<u64> {
    let mut out = vec![0, 1, 2];
    for bits in [8_u32, 16, 32, 63] {
        let edge = 1_u64 << bits;
        out.extend([edge - 1, edge, edge + 1]);
    }
    out.push(u64::MAX);
    out
}

fn probe_i64() -> Vec<i64> {
    let mut out = vec![0, 1, -1];
    for bits in [7_u32, 15, 31] {
        let edge = 1_i64 << bits;
        out.extend([edge - 1, edge, -edge, -edge - 1]);
    }
    out.extend([i64::MIN, i64::MAX]);
    out
}

#[test]
fn unsigned_inference_is_minimal() {
    let ladder = KindLadder::UNSIGNED;
    for v in probe_u64() {
        let kind = infer_unsigned(v);
        let rungs = ladder.kinds();
        let pos = rungs.iter().position(|&k| k == kind).unwrap();
        assert_eq!(
            AnyValue::cast_u64(kind, v).as_u64(),
            Some(v),
            "{v} must fit {kind}"
        );
        for &narrower in &rungs[..pos] {
            assert_ne!(
                AnyValue::cast_u64(narrower, v).as_u64(),
                Some(v),
                "{v} must not fit {narrower}"
            );
        }
    }
}

#[test]
fn signed_inference_is_minimal() {
    let ladder = KindLadder::SIGNED;
    for v in probe_i64() {
        let kind = infer_signed(v);
        let rungs = ladder.kinds();
        let pos = rungs.iter().position(|&k| k == kind).unwrap();
        assert_eq!(
            AnyValue::cast_i64(kind, v).as_i64(),
            Some(v),
            "{v} must fit {kind}"
        );
        for &narrower in &rungs[..pos] {
            assert_ne!(
                AnyValue::cast_i64(narrower, v).as_i64(),
                Some(v),
                "{v} must not fit {narrower}"
            );
        }
    }
}

#[test]
fn inference_stays_in_family() {
    for v in probe_u64() {
        assert_eq!(infer_unsigned(v).family(), Family::Unsigned);
    }
    for v in probe_i64() {
        assert_eq!(infer_signed(v).family(), Family::Signed);
    }
    for v in [0.0, 0.1, -2.5, 1e39, f64::MIN_POSITIVE, f64::NAN] {
        assert_eq!(infer_floating(v).family(), Family::Floating);
    }
}

#[test]
fn nan_infers_double_without_error() {
    assert_eq!(infer_floating(f64::NAN), Kind::F64);
    assert_eq!(infer_floating(-f64::NAN), Kind::F64);
}

#[test]
fn floating_precision_boundaries() {
    // 2^24 + 1 is the first integer f32 cannot hold.
    assert_eq!(infer_floating(16_777_216.0), Kind::F32);
    assert_eq!(infer_floating(16_777_217.0), Kind::F64);
    assert_eq!(infer_floating(f64::from(f32::MAX)), Kind::F32);
    assert_eq!(infer_floating(f64::MAX), Kind::F64);
    assert_eq!(infer_floating(f64::NEG_INFINITY), Kind::F32);
}
