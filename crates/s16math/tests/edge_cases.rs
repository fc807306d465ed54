//! Edge case tests for s16math
//!
//! Boundary values of the 16-bit range, undefined arguments and the
//! documented preconditions.

use s16math::format::Fixed;
use s16math::math::{
    arccosine, arcsine, arctangent, arctangent2, cosecant, exponential, log10, log_base,
    log_overflows, natural_log, nth_root, root_overflows, sincos, sqrt_overflows, square_root,
    tangent, try_tangent,
};
use s16math::ops::{
    add, add_overflows, div_overflows, divide, factorial, mul_overflows, multiply, power,
    sub_overflows, subtract, try_divide,
};
use s16math::qformat::{split, Kind};
use s16math::{Binary, Decimal, MathError, Scale};

fn check_minimum_value<S: Scale>() {
    let parts = split::<S>(i16::MIN, Kind::Number);
    assert!(parts.negative);
    assert_eq!(
        parts.whole as u32 * S::NUMBER.denominator as u32 + parts.fraction as u32,
        32768
    );

    // -x does not exist for the minimum value
    let product = multiply::<S>(i16::MIN, -S::UNIT);
    assert!(mul_overflows::<S>(product, i16::MIN, -S::UNIT));

    let product = multiply::<S>(i16::MIN, S::UNIT);
    assert_eq!(product, i16::MIN);
    assert!(!mul_overflows::<S>(product, i16::MIN, S::UNIT));
}

#[test]
fn test_minimum_value() {
    check_minimum_value::<Decimal>();
    check_minimum_value::<Binary>();
}

#[test]
fn test_minimum_value_renders_once_signed() {
    assert_eq!(Fixed::<Decimal>::number(i16::MIN).to_string(), "-327.68");
    assert_eq!(Fixed::<Decimal>::number(-1).to_string(), "-0.01");
}

#[test]
fn test_add_subtract_at_the_boundary() {
    assert!(!add_overflows(add(i16::MAX, 0), i16::MAX, 0));
    assert!(add_overflows(add(i16::MAX, 1), i16::MAX, 1));
    assert!(add_overflows(add(i16::MIN, -1), i16::MIN, -1));
    assert!(sub_overflows(subtract(0, i16::MIN), 0, i16::MIN));
    assert!(!sub_overflows(subtract(-1, i16::MIN), -1, i16::MIN));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_divide_by_zero_panics() {
    let _ = divide::<Decimal>(i16::MAX, 0);
}

#[test]
fn test_checked_variants_report_zero_divisors() {
    assert_eq!(try_divide::<Binary>(128, 0), Err(MathError::DivideByZero));
    assert!(div_overflows::<Binary>(0, 128, 0));
    assert_eq!(try_tangent::<Binary>(Binary::HALF_PI), Err(MathError::DivideByZero));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_cosecant_of_zero_panics() {
    let _ = cosecant::<Decimal>(0);
}

#[test]
fn test_tangent_near_pole() {
    // ten steps before the pole the cosine is 0.01 and the quotient is huge
    let phi = Decimal::HALF_PI - 10;
    let sc = sincos::<Decimal>(phi);
    let t = tangent::<Decimal>(phi);
    assert_eq!(t, divide::<Decimal>(sc.sin, sc.cos));
    assert!(t > 5000);
}

#[test]
fn test_logarithm_sentinels() {
    for n in [0, -1, i16::MIN] {
        assert_eq!(natural_log::<Decimal>(n), Decimal::NAN);
        assert_eq!(log10::<Decimal>(n), Decimal::NAN);
        assert!(log_overflows::<Decimal>(natural_log::<Decimal>(n)));
        assert_eq!(natural_log::<Binary>(n), Binary::NAN);
    }
    // base one has a zero logarithm
    assert_eq!(log_base::<Decimal>(Decimal::UNIT, 500), Decimal::NAN);
    assert_eq!(log_base::<Binary>(Binary::UNIT, 500), Binary::NAN);
}

#[test]
fn test_exponential_extremes() {
    assert_eq!(exponential::<Decimal>(i16::MAX), (i16::MAX, true));
    assert_eq!(exponential::<Decimal>(i16::MIN), (0, false));
    assert_eq!(exponential::<Binary>(i16::MAX), (i16::MAX, true));
}

#[test]
fn test_power_and_factorial_extremes() {
    assert_eq!(power::<Decimal>(i16::MIN, 0), (Decimal::UNIT, false));
    assert!(power::<Decimal>(i16::MIN, 2).1);
    assert!(power::<Binary>(i16::MAX, 3).1);
    assert_eq!(power::<Decimal>(0, u16::MAX), (0, false));
    assert!(factorial::<Decimal>(u16::MAX).1);
}

#[test]
fn test_root_domain() {
    assert_eq!(square_root::<Decimal>(-1), 0);
    assert!(sqrt_overflows::<Decimal>(0, -1));
    assert_eq!(nth_root::<Decimal>(500, 0), 0);
    assert!(root_overflows::<Decimal>(0, 500, 0));
    assert!(nth_root::<Decimal>(i16::MIN, 3) < 0);
    assert!(nth_root::<Binary>(i16::MIN, 5) < 0);
}

#[test]
fn test_inverse_trig_domain_is_clamped() {
    assert_eq!(arcsine::<Decimal>(i16::MAX), arcsine::<Decimal>(Decimal::UNIT));
    assert_eq!(arcsine::<Decimal>(i16::MIN), -arcsine::<Decimal>(Decimal::UNIT));
    assert_eq!(arccosine::<Binary>(i16::MAX), 0);
    assert_eq!(arccosine::<Binary>(i16::MIN), Binary::PI);
}

#[test]
fn test_arctangent_extremes() {
    assert_eq!(arctangent2::<Decimal>(0, 0), 0);
    assert_eq!(arctangent2::<Binary>(0, 0), 0);
    assert_eq!(arctangent2::<Decimal>(0, i16::MIN), Decimal::PI);
    assert!(arctangent::<Decimal>(i16::MIN) >= Decimal::MIN_ATAN);
    assert!(arctangent::<Decimal>(i16::MAX) <= Decimal::HALF_PI);
}

#[test]
fn test_sincos_at_range_ends() {
    for phi in [i16::MIN, i16::MAX] {
        let sc = sincos::<Decimal>(phi);
        assert!(sc.sin.abs() <= Decimal::UNIT);
        assert!(sc.cos.abs() <= Decimal::UNIT);
    }
}
