//! VolumetricFlow 값 타입 동작 테스트: 생성, 환산, 비교, 연산, 출력.
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use approx::assert_relative_eq;
use flow_units::{VolumetricFlow, VolumetricFlowUnit};
use proptest::prelude::*;

fn hash_of(v: VolumetricFlow) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

#[test]
fn constructors() {
    let v = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);
    assert_eq!(v.cubic_meters_per_second(), 100.0);

    let v2 = VolumetricFlow::default();
    assert_eq!(v2.cubic_meters_per_hour(), 0.0);

    let v3 = VolumetricFlow::new(150.0, VolumetricFlowUnit::CubicMetersPerSecond);
    assert_eq!(v3.cubic_meters_per_second(), 150.0);

    let v4 = VolumetricFlow::new(100.0, VolumetricFlowUnit::LitersPerSecond);
    assert_eq!(v4.liters_per_second(), 100.0);
    assert_eq!(v4.value(), 0.1);

    let v5 = VolumetricFlow::from(100.0);
    assert_eq!(v5.cubic_meters_per_second(), 100.0);

    let copy = v5;
    assert_eq!(copy.value(), v5.value());
}

#[test]
fn units_per_hour() {
    let v = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerHour);
    assert_relative_eq!(v.cubic_centimeters_per_hour(), 100_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.cubic_meters_per_hour(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(v.gallons_per_hour(), 26_417.205_235_816, max_relative = 1e-9);
    assert_relative_eq!(v.liters_per_hour(), 100_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.milliliters_per_hour(), 100_000_000.0, max_relative = 1e-9);
}

#[test]
fn units_per_minute() {
    let v = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerMinute);
    assert_relative_eq!(v.cubic_centimeters_per_minute(), 100_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.cubic_meters_per_minute(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(v.gallons_per_minute(), 26_417.205_235_815, max_relative = 1e-9);
    assert_relative_eq!(v.liters_per_minute(), 100_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.milliliters_per_minute(), 100_000_000.0, max_relative = 1e-9);
}

#[test]
fn units_per_second() {
    let v = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);
    assert_relative_eq!(v.cubic_centimeters_per_second(), 100_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.cubic_meters_per_second(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(v.gallons_per_second(), 26_417.2052, max_relative = 1e-6);
    assert_relative_eq!(v.liters_per_second(), 100_000.0, max_relative = 1e-9);
    assert_relative_eq!(v.milliliters_per_second(), 100_000_000.0, max_relative = 1e-9);
}

#[test]
fn comparisons() {
    let v1 = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);
    let v2 = VolumetricFlow::new(1000.0, VolumetricFlowUnit::CubicMetersPerSecond);

    assert!(v1 < v2);
    assert!(v1 <= v2);
    assert!(v2 > v1);
    assert!(v2 >= v1);
    assert!(v1 != v2);
    assert!(v1 == VolumetricFlow::from(100.0));
}

#[test]
fn comparisons_across_units_use_canonical_value() {
    let a = VolumetricFlow::new(60.0, VolumetricFlowUnit::LitersPerMinute);
    let b = VolumetricFlow::new(1.0, VolumetricFlowUnit::LitersPerSecond);
    assert_relative_eq!(a.value(), b.value(), max_relative = 1e-12);
    assert!(VolumetricFlow::new(1.0, VolumetricFlowUnit::CubicMetersPerHour)
        < VolumetricFlow::new(1.0, VolumetricFlowUnit::CubicMetersPerMinute));
}

#[test]
fn bare_numbers_are_canonical() {
    let v = VolumetricFlow::from(100.0);
    assert!(v == 100.0_f64);
    assert!(100.0_f64 == v);
    assert!(v < 101.0_f64);
    assert!(99.0_f64 < v);
    assert!(v != 100.5_f64);
}

#[test]
fn equality() {
    let v1 = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);
    let v2 = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);

    assert!(v1.equals(Some(&v2)));
    assert!(v1.equals_value(Some(100.0)));
    assert!(!v1.equals(None));
    assert!(!v1.equals_value(None));
}

#[test]
fn equality_has_no_tolerance() {
    let v = VolumetricFlow::from(0.1 + 0.2);
    assert!(v != 0.3_f64);
}

#[test]
fn math_operations() {
    let v1 = VolumetricFlow::new(200.0, VolumetricFlowUnit::CubicMetersPerSecond);
    let v2 = VolumetricFlow::new(100.0, VolumetricFlowUnit::CubicMetersPerSecond);
    let v3 = VolumetricFlow::new(-10.10, VolumetricFlowUnit::CubicMetersPerSecond);

    assert!((v1 + v2).equals_value(Some(300.0)));
    assert!((v1 - v2).equals_value(Some(100.0)));
    assert!((v1 * 100.0).equals_value(Some(20_000.0)));
    assert!((v1 / 2.0).equals_value(Some(100.0)));
    assert!(v3.abs().equals_value(Some(10.10)));
    assert_eq!(v1 + v2, VolumetricFlow::from(300.0));

    // 피연산자는 바뀌지 않는다
    assert_eq!(v1.value(), 200.0);
    assert_eq!(v3.value(), -10.10);
}

#[test]
fn sum_of_flows() {
    let flows = [
        VolumetricFlow::new(1.0, VolumetricFlowUnit::LitersPerSecond),
        VolumetricFlow::new(2.0, VolumetricFlowUnit::LitersPerSecond),
        VolumetricFlow::new(3.0, VolumetricFlowUnit::LitersPerSecond),
    ];
    let total: VolumetricFlow = flows.iter().sum();
    assert_relative_eq!(total.liters_per_second(), 6.0, max_relative = 1e-12);
    let empty: VolumetricFlow = std::iter::empty::<VolumetricFlow>().sum();
    assert_eq!(empty, VolumetricFlow::ZERO);
}

#[test]
fn to_string_is_canonical_number() {
    let v1 = VolumetricFlow::new(200.0, VolumetricFlowUnit::CubicMetersPerSecond);
    assert_eq!(v1.to_string(), "200");
    assert_eq!(format!("{v1:.2}"), "200.00");
    assert_eq!(format!("{v1:>6}"), "   200");
    assert_eq!(format!("{v1:e}"), "2e2");
    assert_eq!(format!("{v1:E}"), "2E2");

    let hourly = VolumetricFlow::new(7.2, VolumetricFlowUnit::CubicMetersPerHour);
    assert_eq!(hourly.to_string(), hourly.value().to_string());
}

#[test]
fn display_in_unit_appends_symbol() {
    let v = VolumetricFlow::new(1.0, VolumetricFlowUnit::CubicMetersPerSecond);
    let shown = v.display_in(VolumetricFlowUnit::LitersPerSecond);
    assert_eq!(shown.to_string(), "1000 L/s");
    assert_eq!(format!("{shown:.1}"), "1000.0 L/s");
    assert_eq!(shown.unit(), VolumetricFlowUnit::LitersPerSecond);
    assert_eq!(shown.value(), 1000.0);
}

#[test]
fn compare_to() {
    let v1 = VolumetricFlow::new(200.0, VolumetricFlowUnit::CubicMetersPerSecond);

    assert_eq!(v1.compare_to(Some(&VolumetricFlow::from(100.0))), Ordering::Greater);
    assert_eq!(v1.compare_to(Some(&VolumetricFlow::from(200.0))), Ordering::Equal);
    assert_eq!(v1.compare_to(Some(&VolumetricFlow::from(300.0))), Ordering::Less);
    assert_eq!(v1.compare_to(None), Ordering::Less);
    assert_eq!(v1.compare_to_value(Some(200.0)), Ordering::Equal);
    assert_eq!(v1.compare_to_value(None), Ordering::Less);
}

#[test]
fn compare_to_orders_nan_lowest() {
    let nan = VolumetricFlow::from(f64::NAN);
    let one = VolumetricFlow::from(1.0);

    assert_eq!(nan.compare_to(Some(&nan)), Ordering::Equal);
    assert_eq!(nan.compare_to(Some(&one)), Ordering::Less);
    assert_eq!(one.compare_to(Some(&nan)), Ordering::Greater);
    assert_eq!(
        nan.compare_to(Some(&VolumetricFlow::from(f64::NEG_INFINITY))),
        Ordering::Less
    );

    // 연산자 비교는 IEEE 규칙을 그대로 따른다
    assert_eq!(nan.partial_cmp(&one), None);
    assert!(!nan.equals(Some(&nan)));
}

#[test]
fn hash_follows_equality() {
    let zero = VolumetricFlow::from(0.0);
    let neg_zero = VolumetricFlow::from(-0.0);
    assert_eq!(zero, neg_zero);
    assert_eq!(hash_of(zero), hash_of(neg_zero));

    let a = VolumetricFlow::new(3600.0, VolumetricFlowUnit::CubicMetersPerHour);
    let b = VolumetricFlow::from(1.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));
    assert_ne!(hash_of(b), hash_of(VolumetricFlow::from(2.0)));
}

#[test]
fn into_f64_is_canonical() {
    let v = VolumetricFlow::new(1.0, VolumetricFlowUnit::LitersPerSecond);
    let raw: f64 = v.into();
    assert_eq!(raw, 0.001);
    assert_eq!(v.value() as i64, 0);
}

#[test]
fn serializes_as_bare_number() {
    let v = VolumetricFlow::from(2.5);
    assert_eq!(serde_json::to_string(&v).unwrap(), "2.5");
    let back: VolumetricFlow = serde_json::from_str("2.5").unwrap();
    assert_eq!(back, v);
    assert_eq!(
        serde_json::to_string(&VolumetricFlowUnit::LitersPerMinute).unwrap(),
        "\"LitersPerMinute\""
    );
}

proptest! {
    #[test]
    fn constructing_in_a_unit_reads_back(
        x in -1.0e9f64..1.0e9,
        unit in prop::sample::select(VolumetricFlowUnit::ALL.to_vec()),
    ) {
        let back = VolumetricFlow::new(x, unit).value_in(unit);
        prop_assert!((back - x).abs() <= 1e-12 * x.abs().max(1e-300));
    }

    #[test]
    fn add_then_subtract_recovers(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let fa = VolumetricFlow::from(a);
        let fb = VolumetricFlow::from(b);
        let r = (fa + fb) - fb;
        prop_assert!((r.value() - a).abs() <= 1e-12 * a.abs().max(b.abs()));
    }

    #[test]
    fn ordering_matches_canonical_values(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let fa = VolumetricFlow::from(a);
        let fb = VolumetricFlow::from(b);
        prop_assert_eq!(fa < fb, a < b);
        prop_assert_eq!(fa == fb, a == b);
        prop_assert_eq!(Some(fa.compare_to(Some(&fb))), a.partial_cmp(&b));
    }
}

#[test]
fn equals_and_compare_to_disagree_on_nan() {
    let nan = VolumetricFlow::from(f64::NAN);
    assert_eq!(nan.compare_to(Some(&nan)), Ordering::Equal);
    assert!(!nan.equals(Some(&nan)));
    assert!(!nan.equals_value(Some(f64::NAN)));
}
