//! Checked-operation errors
//!
//! Most of the library reports trouble through overflow predicates or the
//! [`NAN`](crate::Scale::NAN) sentinel. The `try_*` functions turn the
//! remaining preconditions into values of this type.

use core::fmt;

/// Precondition violated by a checked operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MathError {
    /// Divisor was zero
    DivideByZero,
    /// Input outside the function's domain
    Domain,
}

impl MathError {
    /// Short lowercase description, suitable for a console line
    pub const fn message(&self) -> &'static str {
        match self {
            MathError::DivideByZero => "divide by zero",
            MathError::Domain => "argument out of domain",
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
