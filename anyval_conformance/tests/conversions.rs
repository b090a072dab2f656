// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host scalar conversions in both directions against a recording host.

use anyval::{
    AnyValue, CallFault, CollectingSink, Complex, ComplexPart, ConvertError, ConvertOptions,
    Diagnostic, DiagnosticMask, Engine, EngineConfig, HostError, HostScalar, HostValue, Kind,
    Number, ObjHandle, PositionFault, ScalarContainer, StderrSink,
};
use anyval_conformance::{HostCall, RecordingHost, TestContainer};

fn roundtrip(engine: &Engine, host: &mut RecordingHost, scalar: HostScalar<'_>) -> HostValue {
    let v = engine
        .to_any_value(host, scalar, ConvertOptions::new(), None)
        .unwrap();
    engine.to_host_scalar(host, v).unwrap()
}

#[test]
fn plain_numbers_roundtrip_exactly() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();

    for v in [0, 1, 255, 256, 65_535, 1 << 40, u64::MAX] {
        assert_eq!(
            roundtrip(&engine, &mut host, HostScalar::UnsignedInt(v)),
            HostValue::UnsignedInt(v)
        );
    }
    for v in [0, -1, -128, 127, -32_769, i64::MIN, i64::MAX] {
        assert_eq!(
            roundtrip(&engine, &mut host, HostScalar::SignedInt(v)),
            HostValue::SignedInt(v)
        );
    }
    for v in [
        0.0,
        -0.0,
        0.1,
        1.5,
        -1e-300,
        1e300,
        f64::MIN_POSITIVE,
        f64::INFINITY,
    ] {
        let HostValue::Float(back) = roundtrip(&engine, &mut host, HostScalar::Float(v)) else {
            panic!("float {v} did not come back as a float");
        };
        assert_eq!(back.to_bits(), v.to_bits(), "{v} changed bits");
    }
    assert!(host.calls.is_empty(), "plain numbers never call the host");
}

#[test]
fn nan_roundtrips_as_double() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let v = engine
        .to_any_value(&mut host, HostScalar::Float(f64::NAN), ConvertOptions::new(), None)
        .unwrap();
    assert_eq!(v.kind(), Some(Kind::F64));
    let Ok(HostValue::Float(back)) = engine.to_host_scalar(&mut host, v) else {
        panic!("NaN did not come back as a float");
    };
    assert!(back.is_nan(), "NaN payload lost");
}

#[test]
fn undefined_without_default() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let opts = ConvertOptions::new();

    let v = engine
        .to_any_value(&mut host, HostScalar::Undefined, opts, None)
        .unwrap();
    assert_eq!(v, AnyValue::Invalid);
    assert_eq!(engine.to_host_scalar(&mut host, v), Ok(HostValue::Undefined));

    let v = engine
        .to_any_value(&mut host, HostScalar::Undefined, opts.forced(Kind::F32), None)
        .unwrap();
    assert_eq!(v, AnyValue::F32(0.0));
}

#[test]
fn undefined_default_can_be_updated_between_calls() {
    let mut engine = Engine::new(EngineConfig::new().with_diagnostics(DiagnosticMask::ALL));
    let mut host = RecordingHost::new();
    let mut sink = CollectingSink::default();
    let opts = ConvertOptions::new().undefined_as_default(true);

    let v = engine
        .to_any_value(&mut host, HostScalar::Undefined, opts, Some(&mut sink))
        .unwrap();
    assert_eq!(v, AnyValue::U8(0));
    assert!(sink.diagnostics.is_empty(), "nothing was substituted");

    engine
        .config_mut()
        .set_undefined_default(Some(70_000_u64.into()));
    let v = engine
        .to_any_value(&mut host, HostScalar::Undefined, opts, Some(&mut sink))
        .unwrap();
    assert_eq!(v, AnyValue::U32(70_000));
    assert_eq!(
        sink.diagnostics,
        vec![Diagnostic::UndefinedSubstituted {
            value: Number::Unsigned(70_000)
        }]
    );
}

#[test]
fn single_element_container_extracts_native_kind() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let c = TestContainer::repeat(AnyValue::I32(-7), 1);
    let v = engine
        .to_any_value(&mut host, HostScalar::Container(&c), ConvertOptions::new(), None)
        .unwrap();
    assert_eq!(v, AnyValue::I32(-7));
}

#[test]
fn container_with_wrong_element_count_is_out_of_range() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    for n in [0, 2] {
        let c = TestContainer::repeat(AnyValue::I32(-7), n);
        let err = engine
            .to_any_value(&mut host, HostScalar::Container(&c), ConvertOptions::new(), None)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::PositionOutOfRange(PositionFault::ElementCount(n))
        );
    }
}

#[test]
fn complex_object_roundtrip() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let obj = host.alloc(3.0, -2.0);

    let v = engine
        .to_any_value(&mut host, HostScalar::Complex(obj), ConvertOptions::new(), None)
        .unwrap();
    assert_eq!(v, AnyValue::C128(Complex::new(3.0, -2.0)));

    let HostValue::Complex(back) = engine.to_host_scalar(&mut host, v).unwrap() else {
        panic!("complex value did not come back as an object");
    };
    assert_ne!(back, obj, "a new object is constructed");
    assert_eq!(host.parts(back), Some((3.0, -2.0)));
    assert_eq!(
        host.calls,
        vec![
            HostCall::Part {
                obj,
                part: ComplexPart::Re
            },
            HostCall::Part {
                obj,
                part: ComplexPart::Im
            },
            HostCall::Construct { re: 3.0, im: -2.0 },
        ]
    );
}

#[test]
fn single_precision_complex_widens_for_the_host() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let c = ScalarContainer::new(AnyValue::C64(Complex::new(0.5, 0.25))).unwrap();
    let v = engine
        .to_any_value(&mut host, HostScalar::Container(&c), ConvertOptions::new(), None)
        .unwrap();
    assert_eq!(v.kind(), Some(Kind::C64));
    engine.to_host_scalar(&mut host, v).unwrap();
    assert_eq!(host.calls, vec![HostCall::Construct { re: 0.5, im: 0.25 }]);
}

#[test]
fn complex_accessor_arity_is_checked() {
    let engine = Engine::default();
    for arity in [0, 2] {
        let mut host = RecordingHost::new();
        host.accessor_arity = Some(arity);
        let obj = host.alloc(1.0, 1.0);
        let err = engine
            .to_any_value(&mut host, HostScalar::Complex(obj), ConvertOptions::new(), None)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::ComplexAccessFailure {
                part: ComplexPart::Re,
                fault: CallFault::Arity(arity),
            }
        );
    }
}

#[test]
fn complex_accessor_host_errors_surface() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let err = engine
        .to_any_value(
            &mut host,
            HostScalar::Complex(ObjHandle(99)),
            ConvertOptions::new(),
            None,
        )
        .unwrap_err();
    assert_eq!(
        err,
        ConvertError::ComplexAccessFailure {
            part: ComplexPart::Re,
            fault: CallFault::Host(HostError::BadHandle(ObjHandle(99))),
        }
    );
}

#[test]
fn complex_constructor_arity_is_checked() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    host.constructor_arity = Some(0);
    let err = engine
        .to_host_scalar(&mut host, AnyValue::C128(Complex::new(1.0, 0.0)))
        .unwrap_err();
    assert_eq!(
        err,
        ConvertError::ComplexConstructionFailure {
            re: 1.0,
            im: 0.0,
            fault: CallFault::Arity(0),
        }
    );
    assert_eq!(
        err.to_string(),
        "failed to construct complex (1.000000000, 0.000000000): returned 0 values"
    );
}

#[test]
fn unsupported_reference_names_type() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let err = engine
        .to_any_value(
            &mut host,
            HostScalar::Other { type_name: "CODE" },
            ConvertOptions::new(),
            None,
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "can't convert reference 'CODE' to a numeric value"
    );
}

#[test]
fn forced_kind_narrowing_does_not_error() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let v = engine
        .to_any_value(
            &mut host,
            HostScalar::UnsignedInt(300),
            ConvertOptions::new().forced(Kind::U8),
            None,
        )
        .unwrap();
    assert_eq!(v, AnyValue::U8(44));

    let v = engine
        .to_any_value(
            &mut host,
            HostScalar::Float(2.75),
            ConvertOptions::new().forced(Kind::C64),
            None,
        )
        .unwrap();
    assert_eq!(v, AnyValue::C64(Complex::new(2.75, 0.0)));
}

#[test]
fn host_values_feed_back_unchanged() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let obj = host.alloc(0.5, 4.0);
    let inputs = [
        HostScalar::UnsignedInt(70_000),
        HostScalar::SignedInt(-129),
        HostScalar::Float(0.1),
        HostScalar::Complex(obj),
    ];
    for scalar in inputs {
        let first = engine
            .to_any_value(&mut host, scalar, ConvertOptions::new(), None)
            .unwrap();
        let back = engine.to_host_scalar(&mut host, first).unwrap();
        let second = engine
            .to_any_value(&mut host, HostScalar::from(back), ConvertOptions::new(), None)
            .unwrap();
        assert_eq!(second, first, "{scalar:?} changed on the second pass");
    }

    let undefined = HostScalar::from(HostValue::Undefined);
    let v = engine
        .to_any_value(&mut host, undefined, ConvertOptions::new(), None)
        .unwrap();
    assert_eq!(v, AnyValue::Invalid);
}

#[test]
fn numbers_convert_like_the_matching_host_scalar() {
    let engine = Engine::default();
    let mut host = RecordingHost::new();
    let cases: [(Number, AnyValue); 3] = [
        (u64::MAX.into(), AnyValue::U64(u64::MAX)),
        ((-2_i64).into(), AnyValue::I8(-2)),
        (0.1_f64.into(), AnyValue::F64(0.1)),
    ];
    for (n, expected) in cases {
        let v = engine
            .to_any_value(&mut host, n.into(), ConvertOptions::new(), None)
            .unwrap();
        assert_eq!(v, expected);
    }
}

#[test]
fn stderr_sink_receives_substitution_warning() {
    let engine = Engine::new(
        EngineConfig::new()
            .with_undefined_default(Some(Number::Float(1.5)))
            .with_diagnostics(DiagnosticMask::ALL),
    );
    let mut host = RecordingHost::new();
    let v = engine
        .to_any_value(
            &mut host,
            HostScalar::Undefined,
            ConvertOptions::new().undefined_as_default(true),
            Some(&mut StderrSink),
        )
        .unwrap();
    assert_eq!(v, AnyValue::F32(1.5));
}
