//! Scale policies: the implicit denominators behind every stored value
//!
//! A stored value is an `i16` numerator. Its denominator is never stored; it is
//! fixed by the value's *kind* (degrees, plain numbers, radians) and by the
//! active scale policy:
//!
//! | Kind    | [`Decimal`] | Range              | [`Binary`] | Range               |
//! |---------|-------------|--------------------|------------|---------------------|
//! | Degrees | 1/10        | -3276.8 .. 3276.7  | Q11.4      | -2048.00 .. 2047.15 |
//! | Numbers | 1/100       | -327.68 .. 327.67  | Q8.7       | -256.000 .. 255.127 |
//! | Radians | 1/1000      | -32.768 .. 32.767  | Q5.10      | -32.0000 .. 31.1023 |
//!
//! Both policies are always compiled. [`ActiveScale`] names the one selected
//! by the `binary-point` cargo feature and is what client code built against a
//! known configuration should use.
//!
//! Beware that the two policies disagree on what a fraction means: `2.50` in
//! decimal is `2 50/100`, while the binary value displayed as `2.064` is
//! `2 64/128`.

use crate::tables;

/// Plain number (`qm_n`): hundredths, or Q8.7
pub type Num = i16;

/// Angle in degrees: tenths, or Q11.4
pub type Deg = i16;

/// Angle in radians: thousandths, or Q5.10
pub type Rad = i16;

/// Resolution of one value kind under one scale policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    /// Implicit denominator
    pub denominator: i32,
    /// Argument to [`Scale::upscale`]/[`Scale::downscale`] that multiplies or
    /// divides by `denominator`: the denominator itself in decimal mode, its
    /// base-two logarithm in binary mode
    pub factor: u32,
    /// Digits printed after the point
    pub width: usize,
}

impl Resolution {
    /// Create a resolution descriptor
    pub const fn new(denominator: i32, factor: u32, width: usize) -> Self {
        Self {
            denominator,
            factor,
            width,
        }
    }
}

/// Numeric configuration shared by every higher layer
///
/// Implementations supply the denominators, the CORDIC table and the derived
/// constants pre-rounded at their resolution, plus the two scaling primitives.
/// Everything else in the crate is written once, generic over `S: Scale`.
///
/// # Example
///
/// ```rust
/// use s16math::{Binary, Decimal, Scale};
///
/// assert_eq!(Decimal::UNIT, 100);
/// assert_eq!(Binary::UNIT, 128);
/// assert_eq!(Decimal::NAN, -9900);
/// ```
pub trait Scale: Copy + Clone + Default + core::fmt::Debug + 'static {
    /// Human readable policy name
    const NAME: &'static str;

    /// Degree resolution
    const DEGREE: Resolution;
    /// Plain number resolution
    const NUMBER: Resolution;
    /// Radian resolution
    const RADIAN: Resolution;
    /// CORDIC angle table and rotation state resolution
    const CORDIC: Resolution;

    /// Width of the field removed by [`round_even`](crate::qformat::round_even)
    const ROUNDING_FIELD: i32;

    /// Scaling factor radians -> CORDIC resolution
    const RAD_TO_CORDIC: u32;
    /// Scaling factor numbers -> CORDIC resolution
    const NUM_TO_CORDIC: u32;

    /// `atan(2^-i)` at CORDIC resolution, one entry per iteration
    const CORDIC_ANGLES: &'static [i16];
    /// Pi at CORDIC resolution
    const CORDIC_PI: i16;
    /// Pseudo-rotation gain of a full CORDIC pass (about 1.6468)
    const CORDIC_K: i16;
    /// Length correction `1 / CORDIC_K` (about 0.6072)
    const CORDIC_LC: i16;
    /// Natural log of two at CORDIC resolution
    const LN2: i16;

    /// Pi in radians (3.142)
    const PI: Rad;
    /// Euler's number (2.72)
    const E: Num;
    /// Natural log of ten (2.30)
    const LN10: Num;
    /// Degrees per radian (57.3)
    const DEG_PER_RAD: Deg;
    /// Radians per degree (0.017)
    const RAD_PER_DEG: Rad;
    /// Smallest value [`arctangent`](crate::math::arctangent) can return
    const MIN_ATAN: Rad;

    /// One, as a plain number
    const UNIT: Num = Self::NUMBER.denominator as Num;
    /// Pi / 2 in radians
    const HALF_PI: Rad = Self::PI / 2;
    /// 2 pi radians in the unit circle
    const FULL_CIRCLE: Rad = 2 * Self::PI;
    /// 360 degrees in the unit circle
    const FULL_CIRCLE_DEG: Deg = (360 * Self::DEGREE.denominator) as Deg;
    /// Sentinel returned by the logarithms for undefined results (-99.0)
    const NAN: Num = (-99 * Self::NUMBER.denominator) as Num;

    /// Scale `n` up by `factor` (multiply, or shift left)
    ///
    /// The caller guarantees the result fits in 32 bits.
    fn upscale(n: i32, factor: u32) -> i32;

    /// Scale `n` down by `factor` (divide, or shift right), rounding to
    /// nearest with ties away from zero
    fn downscale(n: i32, factor: u32) -> i32;

    /// Widen a plain number to 32 bits scaled up by its denominator, ready to
    /// be divided
    #[inline]
    fn prescale(x: Num) -> i32 {
        Self::upscale(x as i32, Self::NUMBER.factor)
    }

    /// Scale a 32-bit product of two plain numbers back to plain number
    /// resolution
    #[inline]
    fn fixscale(x: i32) -> i32 {
        Self::downscale(x, Self::NUMBER.factor)
    }
}

/// Decimal denominators: tenths of a degree, hundredths, thousandths of a radian
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decimal;

impl Scale for Decimal {
    const NAME: &'static str = "decimal";

    const DEGREE: Resolution = Resolution::new(10, 10, 1);
    const NUMBER: Resolution = Resolution::new(100, 100, 2);
    const RADIAN: Resolution = Resolution::new(1000, 1000, 3);
    const CORDIC: Resolution = Resolution::new(10_000, 10_000, 4);

    const ROUNDING_FIELD: i32 = 10;

    const RAD_TO_CORDIC: u32 = 10;
    const NUM_TO_CORDIC: u32 = 100;

    const CORDIC_ANGLES: &'static [i16] = &tables::DECIMAL_CORDIC_ANGLES;
    const CORDIC_PI: i16 = 31416;
    const CORDIC_K: i16 = 16468;
    const CORDIC_LC: i16 = 6072;
    const LN2: i16 = 6931;

    const PI: Rad = 3142;
    const E: Num = 272;
    const LN10: Num = 230;
    const DEG_PER_RAD: Deg = 573;
    const RAD_PER_DEG: Rad = 17;
    const MIN_ATAN: Rad = -(1000 + 570);

    #[inline]
    fn upscale(n: i32, factor: u32) -> i32 {
        n * factor as i32
    }

    #[inline]
    fn downscale(n: i32, factor: u32) -> i32 {
        round_div(n, factor as i32)
    }
}

/// Power-of-two denominators: Q11.4 degrees, Q8.7 numbers, Q5.10 radians
///
/// Scaling is done with shifts, which is what makes this policy attractive on
/// cores without a hardware divider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binary;

impl Scale for Binary {
    const NAME: &'static str = "binary";

    const DEGREE: Resolution = Resolution::new(1 << 4, 4, 2);
    const NUMBER: Resolution = Resolution::new(1 << 7, 7, 3);
    const RADIAN: Resolution = Resolution::new(1 << 10, 10, 4);
    const CORDIC: Resolution = Resolution::new(1 << 13, 13, 4);

    const ROUNDING_FIELD: i32 = 1 << 3;

    const RAD_TO_CORDIC: u32 = 13 - 10;
    const NUM_TO_CORDIC: u32 = 13 - 7;

    const CORDIC_ANGLES: &'static [i16] = &tables::BINARY_CORDIC_ANGLES;
    const CORDIC_PI: i16 = 25736;
    const CORDIC_K: i16 = 13491;
    const CORDIC_LC: i16 = 4974;
    const LN2: i16 = 5678;

    const PI: Rad = 3217;
    const E: Num = 348;
    const LN10: Num = 295;
    // 57.2958 * 16 rounded to nearest; scaling the decimal 57.3 gives 916
    const DEG_PER_RAD: Deg = 917;
    const RAD_PER_DEG: Rad = 18;
    // 584/1024 approximates the decimal 570/1000
    const MIN_ATAN: Rad = -(1024 + 584);

    #[inline]
    fn upscale(n: i32, factor: u32) -> i32 {
        n << factor
    }

    #[inline]
    fn downscale(n: i32, factor: u32) -> i32 {
        round_shift(n, factor)
    }
}

/// Scale policy selected at build time
///
/// - default: [`Decimal`]
/// - `binary-point` feature: [`Binary`]
#[cfg(not(feature = "binary-point"))]
pub type ActiveScale = Decimal;

/// Scale policy selected at build time (binary-point build)
#[cfg(feature = "binary-point")]
pub type ActiveScale = Binary;

/// Divide rounding to nearest, ties away from zero
#[inline]
pub(crate) fn round_div(n: i32, d: i32) -> i32 {
    let d_abs = d.unsigned_abs();
    let q = ((n.unsigned_abs() + d_abs / 2) / d_abs) as i32;
    if (n < 0) != (d < 0) {
        q.wrapping_neg()
    } else {
        q
    }
}

/// Arithmetic shift right rounding to nearest, ties away from zero
#[inline]
pub(crate) fn round_shift(n: i32, shift: u32) -> i32 {
    if shift == 0 {
        return n;
    }
    let q = ((n.unsigned_abs() + (1 << (shift - 1))) >> shift) as i32;
    if n < 0 {
        q.wrapping_neg()
    } else {
        q
    }
}

/// Narrow a 32-bit intermediate to 16 bits, wrapping like a C cast
#[inline]
pub(crate) fn narrow(n: i32) -> i16 {
    n as i16
}

/// Whether a 32-bit intermediate survives narrowing unchanged
#[inline]
pub(crate) fn fits(n: i32) -> bool {
    n >= i16::MIN as i32 && n <= i16::MAX as i32
}
