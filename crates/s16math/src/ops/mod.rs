//! Overflow-checked core arithmetic
//!
//! Compute functions never fail on their own; each one has a matching
//! `*_overflows` predicate (or returns its overflow flag, for the iterative
//! ones) so callers choose when to pay for the check.
//!
//! # Modules
//!
//! - `arithmetic`: add, subtract, multiply, divide, square
//! - `power`: integer powers and factorial

pub mod arithmetic;
pub mod power;

pub use self::arithmetic::{
    add, add_overflows, div_overflows, divide, mul_overflows, multiply, square, square_overflows,
    sub_overflows, subtract, try_divide,
};
pub use self::power::{factorial, pow_overflows, power};
