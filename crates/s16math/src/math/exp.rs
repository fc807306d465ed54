//! Exponential function
//!
//! `e^x = 2^k * e^r` with `x = k * ln 2 + r` and `r` in `[0, ln 2)`. The
//! residual goes through a seven-term Taylor series at CORDIC resolution and
//! `2^k` is applied as a shift, so the series always sees a small argument.
//!
//! The result of `e^x` is positive for every `x` and leaves the 16-bit range
//! quickly (above about 5.79 in decimal mode, 5.54 in binary mode). On
//! overflow the value saturates to `i16::MAX` and the flag is set.

use crate::scale::{fits, round_div, Num, Scale};

const TAYLOR_TERMS: i32 = 7;

/// Largest `2^k` shift that keeps the CORDIC-resolution result in 32 bits
const MAX_SHIFT: i32 = 15;

/// `e^x` and whether it overflowed
///
/// # Example
///
/// ```rust
/// use s16math::math::exponential;
/// use s16math::{Decimal, Scale};
///
/// assert_eq!(exponential::<Decimal>(0), (100, false));
/// assert_eq!(exponential::<Decimal>(100), (Decimal::E, false));
/// assert_eq!(exponential::<Decimal>(1000), (i16::MAX, true));
/// ```
pub fn exponential<S: Scale>(x: Num) -> (Num, bool) {
    let one = S::CORDIC.denominator;
    let ln2 = S::LN2 as i32;
    let xc = S::upscale(x as i32, S::NUM_TO_CORDIC);
    let k = xc.div_euclid(ln2);
    let r = xc.rem_euclid(ln2);

    if k > MAX_SHIFT {
        return (i16::MAX, true);
    }

    let mut term = one;
    let mut sum = one;
    for d in 1..=TAYLOR_TERMS {
        term = round_div(term * r, one * d);
        sum += term;
    }

    let scaled = if k >= 0 {
        sum << k
    } else if -k < 31 {
        sum >> -k
    } else {
        0
    };

    let value = S::downscale(scaled, S::NUM_TO_CORDIC);
    if fits(value) {
        (value as Num, false)
    } else {
        (i16::MAX, true)
    }
}
