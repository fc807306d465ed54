//! Property-based tests for s16math
//!
//! Uses proptest to validate the arithmetic and trigonometric invariants under
//! both scale policies.

use proptest::prelude::*;
use s16math::convert::{gcd, reduce_to_ratio, Ratio};
use s16math::math::{cosine, exponential, natural_log, nth_root, sincos, sine, square_root, SinCos};
use s16math::ops::{
    add, add_overflows, div_overflows, divide, mul_overflows, multiply, sub_overflows, subtract,
};
use s16math::{Binary, Decimal, Scale};


#[cfg(test)]
use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

fn in_range(v: i64) -> bool {
    v >= i16::MIN as i64 && v <= i16::MAX as i64
}

/// Property: the multiply overflow predicate fires exactly when the rounded
/// product leaves the 16-bit range
fn check_mul_overflow<S: Scale>(a: i16, b: i16) {
    let product = multiply::<S>(a, b);
    let exact = ref_mul::<S>(a, b);
    assert_eq!(
        mul_overflows::<S>(product, a, b),
        !in_range(exact),
        "{}: {} * {} = {} (exact {})",
        S::NAME,
        a,
        b,
        product,
        exact
    );
    if in_range(exact) {
        assert_eq!(product as i64, exact);
    }
}

#[test]
fn test_mul_overflow_iff_out_of_range() {
    proptest!(proptest_config(), |((a, b) in any_pair())| {
        check_mul_overflow::<Decimal>(a, b);
        check_mul_overflow::<Binary>(a, b);
    });
}

#[test]
fn test_multiplication_commutativity() {
    proptest!(proptest_config(), |((a, b) in any_pair())| {
        prop_assert_eq!(multiply::<Decimal>(a, b), multiply::<Decimal>(b, a));
        prop_assert_eq!(multiply::<Binary>(a, b), multiply::<Binary>(b, a));
    });
}

fn check_divide<S: Scale>(a: i16, b: i16) {
    let quotient = divide::<S>(a, b);
    let exact = ref_div::<S>(a, b);
    assert_eq!(div_overflows::<S>(quotient, a, b), !in_range(exact));
    if in_range(exact) {
        assert_eq!(quotient as i64, exact, "{}: {} / {}", S::NAME, a, b);
    }
}

#[test]
fn test_divide_matches_rounded_quotient() {
    proptest!(proptest_config(), |((a, b) in any_pair())| {
        prop_assume!(b != 0);
        check_divide::<Decimal>(a, b);
        check_divide::<Binary>(a, b);
    });
}

#[test]
fn test_add_subtract_overflow_iff_checked_fails() {
    proptest!(proptest_config(), |((a, b) in any_pair())| {
        prop_assert_eq!(add_overflows(add(a, b), a, b), a.checked_add(b).is_none());
        prop_assert_eq!(sub_overflows(subtract(a, b), a, b), a.checked_sub(b).is_none());
    });
}

#[test]
fn test_sine_is_periodic() {
    proptest!(proptest_config(), |(phi in periodic_angle::<Decimal>())| {
        prop_assert_eq!(sine::<Decimal>(phi + Decimal::FULL_CIRCLE), sine::<Decimal>(phi));
    });
    proptest!(proptest_config(), |(phi in periodic_angle::<Binary>())| {
        prop_assert_eq!(sine::<Binary>(phi + Binary::FULL_CIRCLE), sine::<Binary>(phi));
    });
}

#[test]
fn test_sincos_matches_separate_calls() {
    proptest!(proptest_config(), |(phi in any_value())| {
        let sc = sincos::<Decimal>(phi);
        prop_assert_eq!(sc.sin, sine::<Decimal>(phi));
        prop_assert_eq!(sc.cos, cosine::<Decimal>(phi));
        prop_assert_eq!(SinCos::from_packed(sc.packed()), sc);

        let sc = sincos::<Binary>(phi);
        prop_assert_eq!(sc.sin, sine::<Binary>(phi));
        prop_assert_eq!(sc.cos, cosine::<Binary>(phi));
        prop_assert_eq!(SinCos::from_packed(sc.packed()), sc);
    });
}

#[test]
fn test_sine_cosine_are_bounded() {
    proptest!(proptest_config(), |(phi in any_value())| {
        let sc = sincos::<Decimal>(phi);
        prop_assert!(sc.sin.abs() <= Decimal::UNIT && sc.cos.abs() <= Decimal::UNIT);
        let sc = sincos::<Binary>(phi);
        prop_assert!(sc.sin.abs() <= Binary::UNIT && sc.cos.abs() <= Binary::UNIT);
    });
}

#[test]
fn test_square_root_is_second_root() {
    proptest!(proptest_config(), |(a in any_value())| {
        prop_assert_eq!(nth_root::<Decimal>(a, 2), square_root::<Decimal>(a));
        prop_assert_eq!(nth_root::<Binary>(a, 2), square_root::<Binary>(a));
    });
}

#[test]
fn test_odd_roots_are_odd() {
    proptest!(proptest_config(), |(a in -i16::MAX..=i16::MAX)| {
        prop_assert_eq!(nth_root::<Decimal>(-a, 3), -nth_root::<Decimal>(a, 3));
    });
}

fn check_exp_undoes_ln<S: Scale>(n: i16) {
    let ln = natural_log::<S>(n);
    let (back, overflowed) = exponential::<S>(ln);
    assert!(!overflowed, "{}: e^ln({}) overflowed", S::NAME, n);
    assert_close_rel(back, n as f64, 2.0, 0.02, "e^ln(n)");
}

#[test]
fn test_exponential_undoes_natural_log() {
    // ln of the very top of the binary range rounds up past what e^x can
    // represent, so stay a little below it
    proptest!(proptest_config(), |(n in 1i16..=30_000)| {
        check_exp_undoes_ln::<Decimal>(n);
        check_exp_undoes_ln::<Binary>(n);
    });
}

#[test]
fn test_gcd_divides_both() {
    proptest!(proptest_config(), |(u in any::<u16>(), v in any::<u16>())| {
        let g = gcd(u, v);
        prop_assert_eq!(g, gcd(v, u));
        if g != 0 {
            prop_assert_eq!(u % g, 0);
            prop_assert_eq!(v % g, 0);
        } else {
            prop_assert!(u == 0 && v == 0);
        }
    });
}

fn check_ratio<S: Scale>(k: i16) {
    let ratio = reduce_to_ratio::<S>(k);
    assert!(ratio.denominator >= 1);
    assert!(ratio.numerator >= -127);
    assert_eq!(Ratio::from_packed(ratio.packed()), ratio);
    if k != 0 {
        assert_eq!(ratio.numerator < 0, k < 0, "{}: sign of {}", S::NAME, k);
    }

    // No admissible fraction with the same denominator is closer
    let target = num_to_f64::<S>(k);
    let error = (ratio.numerator as f64 / ratio.denominator as f64 - target).abs();
    let d = ratio.denominator as f64;
    for candidate in [ratio.numerator as i32 - 1, ratio.numerator as i32 + 1] {
        if (-127..=127).contains(&candidate) {
            assert!((candidate as f64 / d - target).abs() >= error - 1e-12);
        }
    }
}

#[test]
fn test_reduce_to_ratio_is_admissible() {
    proptest!(proptest_config(), |(k in any_value())| {
        check_ratio::<Decimal>(k);
        check_ratio::<Binary>(k);
    });
}
