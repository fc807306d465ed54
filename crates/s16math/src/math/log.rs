//! Logarithms
//!
//! Undefined results (a non-positive argument, or a base whose logarithm is
//! zero) are reported with the [`NAN`](crate::Scale::NAN) sentinel rather than
//! a flag. [`log_overflows`] tests for it.
//!
//! # Algorithm
//!
//! `natural_log` works at CORDIC resolution:
//! 1. Range reduction: `n = m * 2^k` with `m` in `[1, 2)`
//! 2. `s = (m - 1) / (m + 1)`, so that `ln m = 2 * atanh(s)`
//! 3. Six terms of `atanh(s) = s + s^3/3 + s^5/5 + ...`; `s <= 1/3` keeps the
//!    truncation error below the CORDIC resolution
//! 4. `ln n = k * ln 2 + ln m`, rounded to number resolution

use crate::ops::{div_overflows, divide};
use crate::scale::{narrow, round_div, Num, Scale};

/// Odd divisors of the atanh series
const SERIES_DIVISORS: [i32; 6] = [1, 3, 5, 7, 9, 11];

/// Natural logarithm of `n`
///
/// Returns [`NAN`](crate::Scale::NAN) for `n <= 0`.
///
/// # Example
///
/// ```rust
/// use s16math::math::natural_log;
/// use s16math::{Decimal, Scale};
///
/// assert_eq!(natural_log::<Decimal>(100), 0);
/// assert_eq!(natural_log::<Decimal>(Decimal::E), 100);
/// assert_eq!(natural_log::<Decimal>(0), Decimal::NAN);
/// ```
pub fn natural_log<S: Scale>(n: Num) -> Num {
    if n <= 0 {
        return S::NAN;
    }

    let one = S::CORDIC.denominator;
    let mut m = S::upscale(n as i32, S::NUM_TO_CORDIC);
    let mut k = 0i32;
    while m >= 2 * one {
        m = round_div(m, 2);
        k += 1;
    }
    while m < one {
        m *= 2;
        k -= 1;
    }

    let s = round_div((m - one) * one, m + one);
    let s2 = round_div(s * s, one);
    let mut term = s;
    let mut sum = 0i32;
    for d in SERIES_DIVISORS {
        sum += round_div(term, d);
        term = round_div(term * s2, one);
    }

    let ln = k * S::LN2 as i32 + 2 * sum;
    narrow(S::downscale(ln, S::NUM_TO_CORDIC))
}

/// Logarithm of `n` to base `a`
///
/// Returns [`NAN`](crate::Scale::NAN) when either logarithm is undefined,
/// the base is one, or the quotient does not fit (a base very close to one).
///
/// ```rust
/// use s16math::math::log_base;
/// use s16math::Decimal;
///
/// assert_eq!(log_base::<Decimal>(300, 900), 200); // log3(9)
/// ```
pub fn log_base<S: Scale>(a: Num, n: Num) -> Num {
    let ln_a = natural_log::<S>(a);
    let ln_n = natural_log::<S>(n);
    if ln_a == S::NAN || ln_n == S::NAN || ln_a == 0 {
        return S::NAN;
    }
    quotient::<S>(ln_n, ln_a)
}

/// Common (base ten) logarithm of `n`
pub fn log10<S: Scale>(n: Num) -> Num {
    let ln_n = natural_log::<S>(n);
    if ln_n == S::NAN {
        return S::NAN;
    }
    quotient::<S>(ln_n, S::LN10)
}

/// `ln_n / ln_a`, or the sentinel when it leaves the 16-bit range
fn quotient<S: Scale>(ln_n: Num, ln_a: Num) -> Num {
    let q = divide::<S>(ln_n, ln_a);
    if div_overflows::<S>(q, ln_n, ln_a) {
        return S::NAN;
    }
    q
}

/// Whether a logarithm result is the undefined sentinel
#[inline]
pub fn log_overflows<S: Scale>(x: Num) -> bool {
    x == S::NAN
}
