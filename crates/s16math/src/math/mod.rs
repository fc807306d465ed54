//! Transcendental functions on 16-bit fixed-point values
//!
//! Everything here is generic over the scale policy and built from the
//! [`cordic`](crate::cordic) engine and the [`ops`](crate::ops) layer. No
//! floating point, no tables beyond the CORDIC steps.
//!
//! # Modules
//!
//! - `trig`: sine, cosine, sincos, tangent and the reciprocal ratios
//! - `inverse`: arctangent, arctangent2, arcsine, arccosine, hypot
//! - `log`: natural, base-ten and arbitrary-base logarithms
//! - `exp`: natural exponential
//! - `root`: square root and integer-order roots
//!
//! # Example
//!
//! ```rust
//! use s16math::math::{arctangent2, natural_log, sine, square_root};
//! use s16math::Decimal;
//!
//! let angle = arctangent2::<Decimal>(100, 100); // 0.785 rad
//! assert_eq!(sine::<Decimal>(angle), 71);
//! assert_eq!(natural_log::<Decimal>(1000), 230);
//! assert_eq!(square_root::<Decimal>(900), 300);
//! ```

pub mod exp;
pub mod inverse;
pub mod log;
pub mod root;
pub mod trig;

pub use self::exp::exponential;
pub use self::inverse::{arccosine, arcsine, arctangent, arctangent2, hypot, hypot_overflows};
pub use self::log::{log10, log_base, log_overflows, natural_log};
pub use self::root::{nth_root, root_overflows, sqrt_overflows, square_root};
pub use self::trig::{
    cosecant, cosine, cotangent, quadrant, secant, sincos, sine, tangent, try_tangent, unwind,
    SinCos,
};
