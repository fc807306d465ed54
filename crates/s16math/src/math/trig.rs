//! Sine, cosine and friends
//!
//! Angles are radians at the radian resolution of the scale policy, results
//! are plain numbers. Any 16-bit angle is accepted: it is first unwound into
//! `[0, 2pi)`, then folded into the first quadrant for a single CORDIC
//! rotation, and the quadrant symmetries are applied to the result.
//!
//! # Functions
//!
//! - `sine`, `cosine`: one rotation each
//! - `sincos`: both from a single rotation
//! - `tangent`, `cotangent`, `secant`, `cosecant`: ratios through
//!   [`divide`](crate::ops::divide)
//! - `unwind`, `quadrant`: the range reduction steps
//!
//! # Error Bounds
//!
//! Within one unit of the number resolution for angles in `[-2pi, 2pi]`. Far
//! from zero, the rounding of the stored pi adds a phase drift of about
//! `|phi| / 2000` rad in decimal mode.
//!
//! # Example
//!
//! ```rust
//! use s16math::math::{cosine, sincos, sine};
//! use s16math::{Decimal, Scale};
//!
//! assert_eq!(sine::<Decimal>(0), 0);
//! assert_eq!(cosine::<Decimal>(0), Decimal::UNIT);
//!
//! let sc = sincos::<Decimal>(Decimal::HALF_PI);
//! assert_eq!((sc.sin, sc.cos), (100, 0));
//! ```

use crate::cordic;
use crate::error::MathError;
use crate::ops::{divide, try_divide};
use crate::scale::{narrow, Num, Rad, Scale};

/// Sine and cosine of one angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SinCos {
    /// Cosine
    pub cos: Num,
    /// Sine
    pub sin: Num,
}

impl SinCos {
    /// Pack into one 32-bit word: cosine in the low half, sine in the high half
    ///
    /// ```rust
    /// use s16math::math::SinCos;
    ///
    /// let sc = SinCos { cos: -1, sin: 2 };
    /// assert_eq!(sc.packed(), 0x0002_ffff);
    /// assert_eq!(SinCos::from_packed(sc.packed()), sc);
    /// ```
    #[inline]
    pub const fn packed(self) -> i32 {
        ((self.sin as i32) << 16) | (self.cos as u16 as i32)
    }

    /// Inverse of [`packed`](Self::packed)
    #[inline]
    pub const fn from_packed(word: i32) -> Self {
        Self {
            cos: word as i16,
            sin: (word >> 16) as i16,
        }
    }
}

/// Reduce `phi` into `[0, 2pi)`
#[inline]
pub fn unwind<S: Scale>(phi: Rad) -> Rad {
    phi.rem_euclid(S::FULL_CIRCLE)
}

/// Quadrant (1 to 4) of an unwound angle
///
/// Angles at or beyond `2pi` count as quadrant 4.
#[inline]
pub fn quadrant<S: Scale>(phi: Rad) -> u8 {
    if phi < S::HALF_PI {
        1
    } else if phi < S::PI {
        2
    } else if phi < S::PI + S::HALF_PI {
        3
    } else {
        4
    }
}

/// Sine and cosine of `phi` from one CORDIC rotation
pub fn sincos<S: Scale>(phi: Rad) -> SinCos {
    let phi = unwind::<S>(phi);
    let q = quadrant::<S>(phi);
    let start = match q {
        1 => 0,
        2 => S::HALF_PI,
        3 => S::PI,
        _ => S::PI + S::HALF_PI,
    };

    let residual = S::upscale((phi - start) as i32, S::RAD_TO_CORDIC);
    let (c, s) = cordic::rotate::<S>(residual);
    let c = narrow(S::downscale(c, S::NUM_TO_CORDIC));
    let s = narrow(S::downscale(s, S::NUM_TO_CORDIC));

    match q {
        1 => SinCos { cos: c, sin: s },
        2 => SinCos { cos: -s, sin: c },
        3 => SinCos { cos: -c, sin: -s },
        _ => SinCos { cos: s, sin: -c },
    }
}

/// Sine of `phi`
#[inline]
pub fn sine<S: Scale>(phi: Rad) -> Num {
    sincos::<S>(phi).sin
}

/// Cosine of `phi`
#[inline]
pub fn cosine<S: Scale>(phi: Rad) -> Num {
    sincos::<S>(phi).cos
}

/// Tangent of `phi`
///
/// Near `pi/2 + k*pi` the result leaves the 16-bit range and wraps; check
/// with [`div_overflows`](crate::ops::div_overflows) on the [`sincos`] parts
/// when that matters.
///
/// # Panics
///
/// Panics if the cosine rounds to zero. Use [`try_tangent`] to get an error
/// instead.
pub fn tangent<S: Scale>(phi: Rad) -> Num {
    let sc = sincos::<S>(phi);
    divide::<S>(sc.sin, sc.cos)
}

/// Checked [`tangent`]
pub fn try_tangent<S: Scale>(phi: Rad) -> Result<Num, MathError> {
    let sc = sincos::<S>(phi);
    try_divide::<S>(sc.sin, sc.cos)
}

/// Cotangent of `phi`
///
/// # Panics
///
/// Panics if the sine rounds to zero.
pub fn cotangent<S: Scale>(phi: Rad) -> Num {
    let sc = sincos::<S>(phi);
    divide::<S>(sc.cos, sc.sin)
}

/// Cosecant (`1 / sin`) of `phi`
///
/// # Panics
///
/// Panics if the sine rounds to zero.
pub fn cosecant<S: Scale>(phi: Rad) -> Num {
    divide::<S>(S::UNIT, sine::<S>(phi))
}

/// Secant (`1 / cos`) of `phi`
///
/// # Panics
///
/// Panics if the cosine rounds to zero.
pub fn secant<S: Scale>(phi: Rad) -> Num {
    divide::<S>(S::UNIT, cosine::<S>(phi))
}
