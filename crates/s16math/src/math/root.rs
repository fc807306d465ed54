//! Integer-order roots
//!
//! `nth_root` searches the non-negative 16-bit values for the root whose
//! [`power`](crate::ops::power) lands closest to the argument. Because powers
//! are rounded to number resolution, several candidates can share the same
//! power; the middle one of that run is returned.
//!
//! Odd roots of negative arguments are negative. Even roots of negative
//! arguments and zeroth roots are undefined: they return zero and
//! [`root_overflows`] reports them.

use crate::scale::{fits, Num, Scale};

/// `n`-th root of `a`
///
/// # Example
///
/// ```rust
/// use s16math::math::nth_root;
/// use s16math::Decimal;
///
/// assert_eq!(nth_root::<Decimal>(2700, 3), 300);
/// assert_eq!(nth_root::<Decimal>(-800, 3), -200);
/// assert_eq!(nth_root::<Decimal>(-400, 2), 0);
/// ```
pub fn nth_root<S: Scale>(a: Num, n: u16) -> Num {
    if n == 0 || a == 0 || (a < 0 && n % 2 == 0) {
        return 0;
    }
    if n == 1 {
        return a;
    }

    let target = (a as i32).abs();
    let lowest = first_at_least::<S>(target, n);
    let nearest = match bounded_power::<S>(lowest, n) {
        Some(p) if p == target => p,
        above => {
            // `lowest` is never zero here, since 0^n = 0 < target
            let below = bounded_power::<S>(lowest - 1, n).unwrap_or(0);
            match above {
                Some(p) if p - target < target - below => p,
                _ => below,
            }
        }
    };

    let first = first_at_least::<S>(nearest, n);
    let last = first_at_least::<S>(nearest + 1, n) - 1;
    let root = ((first + last) / 2) as Num;
    if a < 0 {
        -root
    } else {
        root
    }
}

/// Whether `result` is not a defined `n`-th root of `a`
///
/// True for `n == 0`, for even roots of negative arguments, and when `result`
/// differs from what [`nth_root`] computes.
pub fn root_overflows<S: Scale>(result: Num, a: Num, n: u16) -> bool {
    n == 0 || (a < 0 && n % 2 == 0) || nth_root::<S>(a, n) != result
}

/// Square root of `a`; zero for negative arguments
#[inline]
pub fn square_root<S: Scale>(a: Num) -> Num {
    nth_root::<S>(a, 2)
}

/// Whether `result` is not a defined square root of `a`
#[inline]
pub fn sqrt_overflows<S: Scale>(result: Num, a: Num) -> bool {
    root_overflows::<S>(result, a, 2)
}

/// `r^n` with the rounding of repeated multiplication, or `None` once a step
/// leaves the 16-bit range
fn bounded_power<S: Scale>(r: i32, n: u16) -> Option<i32> {
    let mut acc = S::UNIT as i32;
    for _ in 0..n {
        acc = S::fixscale(acc * r);
        if !fits(acc) {
            return None;
        }
    }
    Some(acc)
}

/// Lowest non-negative `r` whose power reaches `v`; an out-of-range power
/// counts as reaching it. Returns `i16::MAX + 1` when no 16-bit value does.
fn first_at_least<S: Scale>(v: i32, n: u16) -> i32 {
    let mut lo = 0i32;
    let mut hi = i16::MAX as i32 + 1;
    while lo < hi {
        let mid = (lo + hi) / 2;
        match bounded_power::<S>(mid, n) {
            Some(p) if p < v => lo = mid + 1,
            _ => hi = mid,
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Binary, Decimal};

    #[test]
    fn test_square_root_exact() {
        assert_eq!(square_root::<Decimal>(400), 200);
        assert_eq!(square_root::<Decimal>(10000), 1000);
        assert_eq!(square_root::<Binary>(4 * 128), 2 * 128);
        assert_eq!(square_root::<Decimal>(0), 0);
    }

    #[test]
    fn test_square_root_inexact() {
        assert_eq!(square_root::<Decimal>(200), 141);
        assert_eq!(square_root::<Binary>(2 * 128), 181);
        assert_eq!(square_root::<Decimal>(i16::MAX), 1810);
    }

    #[test]
    fn test_odd_roots_of_negatives() {
        assert_eq!(nth_root::<Decimal>(-800, 3), -200);
        assert_eq!(nth_root::<Binary>(-8 * 128, 3), -2 * 128);
        assert!(!root_overflows::<Decimal>(-200, -800, 3));
    }

    #[test]
    fn test_undefined_roots() {
        assert_eq!(nth_root::<Decimal>(-400, 2), 0);
        assert!(root_overflows::<Decimal>(0, -400, 2));
        assert!(sqrt_overflows::<Decimal>(0, -1));
        assert_eq!(nth_root::<Decimal>(400, 0), 0);
        assert!(root_overflows::<Decimal>(0, 400, 0));
    }

    #[test]
    fn test_first_root_is_identity() {
        assert_eq!(nth_root::<Decimal>(-1234, 1), -1234);
        assert_eq!(nth_root::<Binary>(i16::MIN, 1), i16::MIN);
    }

    #[test]
    fn test_fifth_root_of_one() {
        assert_eq!(nth_root::<Decimal>(100, 5), 100);
        assert_eq!(nth_root::<Binary>(128, 5), 128);
    }

    #[test]
    fn test_minimum_value_cube_root() {
        let r = nth_root::<Decimal>(i16::MIN, 3);
        assert!(r < 0);
        assert!(!root_overflows::<Decimal>(r, i16::MIN, 3));
    }
}
