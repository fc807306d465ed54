//! Q-format value decomposition and cross-policy conversion
//!
//! # Functions
//!
//! - `split`: whole and fractional parts of a value, sign carried separately
//! - `to_binary_point`: binary point (Q8.7) plain number to decimal (1/100)
//! - `to_decimal_point`: decimal plain number to binary point
//! - `rescale`: the general resolution change behind both
//! - `round_even`: drop the least significant field, ties to even

use crate::scale::{Binary, Decimal, Resolution, Scale};

/// The three value kinds, each with its own implicit denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    /// Angle in degrees
    Degree,
    /// Plain number
    Number,
    /// Angle in radians
    Radian,
}

impl Kind {
    /// Resolution of this kind under scale policy `S`
    pub const fn resolution<S: Scale>(self) -> Resolution {
        match self {
            Kind::Degree => S::DEGREE,
            Kind::Number => S::NUMBER,
            Kind::Radian => S::RADIAN,
        }
    }
}

/// Magnitude split of a stored value
///
/// The sign is kept apart from `whole` so that values between -1 and 0 keep
/// it, and so that `i16::MIN` splits without negating out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parts {
    /// Whether the value is below zero
    pub negative: bool,
    /// Integer part of the magnitude
    pub whole: u16,
    /// Numerator of the fractional part of the magnitude, over the kind's
    /// denominator
    pub fraction: u16,
}

/// Split `x` into sign, whole and fractional parts at the resolution of `kind`
///
/// # Example
///
/// ```rust
/// use s16math::qformat::{split, Kind, Parts};
/// use s16math::Decimal;
///
/// let parts = split::<Decimal>(-5, Kind::Number);
/// assert_eq!(parts, Parts { negative: true, whole: 0, fraction: 5 });
///
/// let parts = split::<Decimal>(i16::MIN, Kind::Number);
/// assert_eq!((parts.whole, parts.fraction), (327, 68));
/// ```
#[inline]
pub fn split<S: Scale>(x: i16, kind: Kind) -> Parts {
    let denominator = kind.resolution::<S>().denominator as u16;
    let magnitude = x.unsigned_abs();
    Parts {
        negative: x < 0,
        whole: magnitude / denominator,
        fraction: magnitude % denominator,
    }
}

/// Change the resolution of `x` from `from` to `to`, rounding half up
///
/// Computes `floor((x * to + from / 2) / from)`. The result wraps if it does
/// not fit in 16 bits.
#[inline]
pub fn rescale(x: i16, from: Resolution, to: Resolution) -> i16 {
    let biased = x as i32 * to.denominator + from.denominator / 2;
    biased.div_euclid(from.denominator) as i16
}

/// Read a binary point plain number (Q8.7) as decimal hundredths
///
/// `(x * 100 + 64) / 128`, rounding half up at the decimal resolution. The
/// name follows the value's origin: the argument is the binary point value.
///
/// # Example
///
/// ```rust
/// use s16math::qformat::to_binary_point;
///
/// assert_eq!(to_binary_point(320), 250); // 2 64/128 == 2.50
/// ```
#[inline]
pub fn to_binary_point(x: i16) -> i16 {
    rescale(x, Binary::NUMBER, Decimal::NUMBER)
}

/// Read a decimal plain number (1/100) as binary point (Q8.7)
///
/// `(x * 128 + 50) / 100`, rounding half up at the binary resolution.
/// Decimal values beyond the Q8.7 range (about ±255.99) wrap.
///
/// ```rust
/// use s16math::qformat::to_decimal_point;
///
/// assert_eq!(to_decimal_point(250), 320);
/// ```
#[inline]
pub fn to_decimal_point(x: i16) -> i16 {
    rescale(x, Decimal::NUMBER, Binary::NUMBER)
}

/// Round away the least significant field (a decimal digit, or three bits) to
/// nearest, ties to even
///
/// ```rust
/// use s16math::qformat::round_even;
/// use s16math::Decimal;
///
/// assert_eq!(round_even::<Decimal>(125), 120);
/// assert_eq!(round_even::<Decimal>(135), 140);
/// assert_eq!(round_even::<Decimal>(-126), -130);
/// ```
pub fn round_even<S: Scale>(x: i16) -> i16 {
    let field = S::ROUNDING_FIELD;
    let magnitude = x.unsigned_abs() as i32;
    let low = magnitude % field;
    let mut rounded = magnitude - low;
    let half = field / 2;
    let floor_is_odd = (rounded / field) & 1 == 1;
    if low > half || (low == half && floor_is_odd) {
        rounded += field;
    }
    if x < 0 {
        (-rounded) as i16
    } else {
        rounded as i16
    }
}
