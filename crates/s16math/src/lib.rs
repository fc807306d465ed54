#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! s16math: 16-bit fixed-point arithmetic and CORDIC trigonometry
//!
//! Every value is an `i16` numerator over an implicit denominator that
//! depends on what the value means (degrees, plain numbers or radians) and on
//! the scale policy. Higher layers are written once, generic over
//! [`Scale`], and work unchanged with decimal or power-of-two denominators.
//!
//! # Features
//!
//! - **Two scale policies**: [`Decimal`] (1/10, 1/100, 1/1000) and [`Binary`]
//!   (Q11.4, Q8.7, Q5.10), both always compiled; [`ActiveScale`] follows the
//!   `binary-point` cargo feature
//! - **Deferred overflow checks**: arithmetic always returns a value, and a
//!   matching `*_overflows` predicate tells whether it can be trusted
//! - **CORDIC trigonometry**: shift-and-add sine, cosine and inverse
//!   functions with a running time that does not depend on the input
//! - **Transcendentals**: logarithms, exponential, integer roots
//! - **No allocations, no floating point**: every function is pure and
//!   re-entrant
//!
//! # Quick Start
//!
//! ```rust
//! use s16math::math::{sine, square_root};
//! use s16math::ops::{mul_overflows, multiply};
//! use s16math::{ActiveScale, Scale};
//!
//! type S = ActiveScale;
//!
//! let twelve = 12 * S::UNIT;
//! let three = 3 * S::UNIT;
//! let product = multiply::<S>(twelve, three);
//! assert_eq!(product, 36 * S::UNIT);
//! assert!(!mul_overflows::<S>(product, twelve, three));
//!
//! assert_eq!(sine::<S>(S::HALF_PI), S::UNIT);
//! assert_eq!(square_root::<S>(4 * S::UNIT), 2 * S::UNIT);
//! ```

// Scale policies and the value aliases
pub mod scale;

// CORDIC step tables
pub mod tables;

// Value decomposition and cross-policy conversion
pub mod qformat;

// Checked-operation errors
pub mod error;

// Arithmetic with deferred overflow checks
pub mod ops;

// Shift-and-add rotation engine
pub mod cordic;

// Trigonometric and transcendental functions
pub mod math;

// Angle units and rationals
pub mod convert;

// Display
pub mod format;

// Public re-exports for convenience
pub use scale::{ActiveScale, Binary, Decimal, Deg, Num, Rad, Resolution, Scale};

pub use error::MathError;

pub use convert::{degrees_to_radians, gcd, radians_to_degrees, reduce_to_ratio, Ratio};

pub use format::Fixed;
