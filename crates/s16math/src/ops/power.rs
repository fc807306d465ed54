//! Integer powers and factorial
//!
//! Both are iterative and report overflow alongside the value, the same way
//! `i16::overflowing_mul` does. On overflow the value is whatever the wrapped
//! iteration produced; the loop never stops early, so the running time only
//! depends on `n`.

use super::arithmetic::{mul_overflows, multiply};
use crate::scale::{fits, narrow, Num, Scale};

/// `a` raised to the integer power `n`, by repeated [`multiply`]
///
/// Returns the (possibly wrapped) value and whether any step overflowed.
/// `power(a, 0)` is one unit.
///
/// # Example
///
/// ```rust
/// use s16math::ops::power;
/// use s16math::Decimal;
///
/// assert_eq!(power::<Decimal>(200, 3), (800, false)); // 2.00^3
/// assert!(power::<Decimal>(1000, 3).1); // 10.00^3 does not fit
/// ```
pub fn power<S: Scale>(a: Num, n: u16) -> (Num, bool) {
    let mut acc = S::UNIT;
    let mut overflowed = false;
    for _ in 0..n {
        let next = multiply::<S>(acc, a);
        overflowed |= mul_overflows::<S>(next, acc, a);
        acc = next;
    }
    (acc, overflowed)
}

/// Whether `result` is not a trustworthy `a^n`
#[inline]
pub fn pow_overflows<S: Scale>(result: Num, a: Num, n: u16) -> bool {
    let (exact, overflowed) = power::<S>(a, n);
    overflowed || exact != result
}

/// `n!` as a plain number
///
/// Multiplies by integer factors, so each step is exact until the product
/// leaves the 16-bit range. `factorial(0)` is one unit.
///
/// ```rust
/// use s16math::ops::factorial;
/// use s16math::Decimal;
///
/// assert_eq!(factorial::<Decimal>(5), (12000, false)); // 120.00
/// assert!(factorial::<Decimal>(6).1);
/// ```
pub fn factorial<S: Scale>(n: u16) -> (Num, bool) {
    let mut acc = S::UNIT;
    let mut overflowed = false;
    for i in 2..=n as i32 {
        let exact = acc as i32 * i;
        overflowed |= !fits(exact);
        acc = narrow(exact);
    }
    (acc, overflowed)
}
