//! Angle unit conversion and rational helpers
//!
//! # Functions
//!
//! - `degrees_to_radians` / `radians_to_degrees`: rounded, through 32 bits
//! - `gcd`: greatest common divisor of two unsigned values
//! - `reduce_to_ratio`: nearest small fraction to a plain number

use crate::scale::{narrow, round_div, Deg, Num, Rad, Scale};

/// Largest numerator magnitude of a [`Ratio`]
const MAX_NUMERATOR: u32 = i8::MAX as u32;

/// Largest denominator of a [`Ratio`]
const MAX_DENOMINATOR: u32 = u8::MAX as u32;

/// Convert degrees to radians
///
/// ```rust
/// use s16math::convert::degrees_to_radians;
/// use s16math::Decimal;
///
/// assert_eq!(degrees_to_radians::<Decimal>(900), 1571); // 90.0 deg
/// ```
#[inline]
pub fn degrees_to_radians<S: Scale>(d: Deg) -> Rad {
    let half_circle = 180 * S::DEGREE.denominator;
    narrow(round_div(d as i32 * S::PI as i32, half_circle))
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees<S: Scale>(r: Rad) -> Deg {
    let half_circle = 180 * S::DEGREE.denominator;
    narrow(round_div(r as i32 * half_circle, S::PI as i32))
}

/// Greatest common divisor by Euclid's algorithm; `gcd(0, v) == v`
pub fn gcd(mut u: u16, mut v: u16) -> u16 {
    while v != 0 {
        let r = u % v;
        u = v;
        v = r;
    }
    u
}

/// A small signed fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ratio {
    /// Signed numerator
    pub numerator: i8,
    /// Denominator, never zero
    pub denominator: u8,
}

impl Ratio {
    /// Pack into 16 bits: numerator in the high byte, denominator in the low
    ///
    /// ```rust
    /// use s16math::convert::Ratio;
    ///
    /// let r = Ratio { numerator: -1, denominator: 3 };
    /// assert_eq!(r.packed() as u16, 0xff03);
    /// assert_eq!(Ratio::from_packed(r.packed()), r);
    /// ```
    #[inline]
    pub const fn packed(self) -> i16 {
        ((self.numerator as i16) << 8) | (self.denominator as i16)
    }

    /// Inverse of [`packed`](Self::packed)
    #[inline]
    pub const fn from_packed(word: i16) -> Self {
        Self {
            numerator: (word >> 8) as i8,
            denominator: word as u8,
        }
    }
}

/// Nearest fraction `x / y` to the plain number `k`, with `|x| <= 127` and
/// `1 <= y <= 255`
///
/// Walks the continued fraction expansion of `|k|` until the next convergent
/// breaks a bound, then picks between the last convergent and the largest
/// admissible semiconvergent. Magnitudes of 127 and above give `127/1`.
///
/// # Example
///
/// ```rust
/// use s16math::convert::{reduce_to_ratio, Ratio};
/// use s16math::Decimal;
///
/// assert_eq!(reduce_to_ratio::<Decimal>(50), Ratio { numerator: 1, denominator: 2 });
/// assert_eq!(reduce_to_ratio::<Decimal>(314), Ratio { numerator: 113, denominator: 36 });
/// ```
pub fn reduce_to_ratio<S: Scale>(k: Num) -> Ratio {
    let target_num = k.unsigned_abs() as u32;
    let target_den = S::NUMBER.denominator as u32;

    // Convergents h(i-2)/k(i-2) and h(i-1)/k(i-1), seeded with 0/1 and 1/0
    let (mut p0, mut q0, mut p1, mut q1) = (0u32, 1u32, 1u32, 0u32);
    let (mut n, mut d) = (target_num, target_den);
    loop {
        let a = n / d;
        let p2 = p0 + a * p1;
        let q2 = q0 + a * q1;
        if p2 > MAX_NUMERATOR || q2 > MAX_DENOMINATOR {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, n - a * d);
        if d == 0 {
            break;
        }
    }

    // Largest multiple of the last convergent that keeps both bounds
    let mut m = u32::MAX;
    if p1 != 0 {
        m = (MAX_NUMERATOR - p0) / p1;
    }
    if q1 != 0 {
        m = m.min((MAX_DENOMINATOR - q0) / q1);
    }
    let (ps, qs) = (p0 + m * p1, q0 + m * q1);

    let (p, q) = if q1 == 0 {
        (ps, qs)
    } else {
        // |p/q - n/d| compared across the two candidates without dividing
        let convergent_err = (p1 * target_den).abs_diff(target_num * q1) * qs;
        let semi_err = (ps * target_den).abs_diff(target_num * qs) * q1;
        if convergent_err <= semi_err {
            (p1, q1)
        } else {
            (ps, qs)
        }
    };

    let numerator = p as i8;
    Ratio {
        numerator: if k < 0 { -numerator } else { numerator },
        denominator: q as u8,
    }
}
