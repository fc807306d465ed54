//! Inverse trigonometry and vector length
//!
//! All of these run the CORDIC engine in vectoring mode on a first-quadrant
//! vector and then place the angle in the right quadrant from the input
//! signs. Results are radians at the radian resolution of the scale policy.
//!
//! Arcsine and arccosine clamp their argument to `[-1, 1]`, so
//! `arcsine(5.00)` is `pi/2` rather than an error.

use crate::cordic;
use crate::scale::{fits, narrow, Num, Rad, Scale};

/// Angle of the vector `(x, y)` from the positive x axis, in `(-pi, pi]`
///
/// `arctangent2(0, 0)` is zero.
///
/// # Example
///
/// ```rust
/// use s16math::math::arctangent2;
/// use s16math::{Decimal, Scale};
///
/// assert_eq!(arctangent2::<Decimal>(100, 100), 785); // pi/4
/// assert_eq!(arctangent2::<Decimal>(0, -100), Decimal::PI);
/// assert_eq!(arctangent2::<Decimal>(0, 0), 0);
/// ```
pub fn arctangent2<S: Scale>(y: Num, x: Num) -> Rad {
    if x == 0 && y == 0 {
        return 0;
    }
    let (_, z) = cordic::vector::<S>(x.unsigned_abs() as i32, y.unsigned_abs() as i32);
    let a = narrow(S::downscale(z, S::RAD_TO_CORDIC));

    match (x < 0, y < 0) {
        (false, false) => a,
        (true, false) => S::PI - a,
        (true, true) => a - S::PI,
        (false, true) => -a,
    }
}

/// Arctangent of the plain number `t`, in `[MIN_ATAN, pi/2]`
#[inline]
pub fn arctangent<S: Scale>(t: Num) -> Rad {
    arctangent2::<S>(t, S::UNIT).max(S::MIN_ATAN)
}

/// Arcsine of `s`, in `[-pi/2, pi/2]`
///
/// Inputs beyond one unit in magnitude are clamped.
pub fn arcsine<S: Scale>(s: Num) -> Rad {
    let s = s.clamp(-S::UNIT, S::UNIT);
    let sc = S::upscale(s as i32, S::NUM_TO_CORDIC);
    let (_, z) = cordic::vector::<S>(complement::<S>(sc), sc.abs());
    let a = narrow(S::downscale(z, S::RAD_TO_CORDIC));
    if s < 0 {
        -a
    } else {
        a
    }
}

/// Arccosine of `c`, in `[0, pi]`
///
/// Inputs beyond one unit in magnitude are clamped.
pub fn arccosine<S: Scale>(c: Num) -> Rad {
    let c = c.clamp(-S::UNIT, S::UNIT);
    let cc = S::upscale(c as i32, S::NUM_TO_CORDIC);
    let (_, z) = cordic::vector::<S>(cc.abs(), complement::<S>(cc));
    let a = narrow(S::downscale(z, S::RAD_TO_CORDIC));
    if c < 0 {
        S::PI - a
    } else {
        a
    }
}

/// Length of the vector `(x, y)`, `sqrt(x^2 + y^2)`
///
/// Wraps when the length does not fit; see [`hypot_overflows`].
pub fn hypot<S: Scale>(x: Num, y: Num) -> Num {
    narrow(exact_hypot::<S>(x, y))
}

/// Whether `result` is not the length of `(x, y)` as computed by [`hypot`]
pub fn hypot_overflows<S: Scale>(result: Num, x: Num, y: Num) -> bool {
    let exact = exact_hypot::<S>(x, y);
    !fits(exact) || exact != result as i32
}

#[inline]
fn exact_hypot<S: Scale>(x: Num, y: Num) -> i32 {
    let (r, _) = cordic::vector::<S>(x.unsigned_abs() as i32, y.unsigned_abs() as i32);
    r
}

/// `sqrt(1 - v^2)` for `|v| <= 1`, all at CORDIC resolution
#[inline]
fn complement<S: Scale>(v: i32) -> i32 {
    let one = S::CORDIC.denominator;
    isqrt((one * one - v * v) as u32) as i32
}

/// Integer square root, rounded to nearest
fn isqrt(n: u32) -> u32 {
    let mut rem = n;
    let mut root = 0u32;
    let mut bit = 1u32 << 30;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    if rem > root {
        root + 1
    } else {
        root
    }
}
