//! Basic arithmetic on plain numbers
//!
//! Every operation comes in two halves: a compute function that always
//! returns a 16-bit result (wrapped like a C cast if the exact value does not
//! fit), and an `*_overflows` predicate that recomputes the exact 32-bit
//! value and says whether the result can be trusted. Code that rarely needs
//! the check never pays for it.
//!
//! ```rust
//! use s16math::ops::{multiply, mul_overflows};
//! use s16math::Decimal;
//!
//! let p = multiply::<Decimal>(1200, 300); // 12.00 * 3.00
//! assert_eq!(p, 3600);
//! assert!(!mul_overflows::<Decimal>(p, 1200, 300));
//!
//! let p = multiply::<Decimal>(20000, 20000); // 200.00 * 200.00
//! assert!(mul_overflows::<Decimal>(p, 20000, 20000));
//! ```

use crate::error::MathError;
use crate::scale::{fits, narrow, round_div, Num, Scale};

#[inline]
fn exact_product<S: Scale>(a: Num, b: Num) -> i32 {
    S::fixscale(a as i32 * b as i32)
}

#[inline]
fn exact_quotient<S: Scale>(a: Num, b: Num) -> i32 {
    round_div(S::prescale(a), b as i32)
}

/// Product `a * b`, rounded to nearest with ties away from zero
///
/// The product is formed exactly in 32 bits and narrowed once. Use
/// [`mul_overflows`] to find out whether the narrowing lost anything.
#[inline]
pub fn multiply<S: Scale>(a: Num, b: Num) -> Num {
    narrow(exact_product::<S>(a, b))
}

/// Whether `result` is not the exact rounded product `a * b`
///
/// True iff the product lies outside the 16-bit range at plain number
/// resolution (±327.67 decimal, ±255.99 binary), or `result` was not
/// produced by [`multiply`] from the same operands.
#[inline]
pub fn mul_overflows<S: Scale>(result: Num, a: Num, b: Num) -> bool {
    let exact = exact_product::<S>(a, b);
    !fits(exact) || exact != result as i32
}

/// Quotient `a / b`, rounded to nearest with ties away from zero
///
/// # Panics
///
/// Panics if `b` is zero. Use [`try_divide`] when the divisor is not known
/// to be non-zero.
///
/// # Example
///
/// ```rust
/// use s16math::ops::divide;
/// use s16math::Decimal;
///
/// assert_eq!(divide::<Decimal>(100, 300), 33); // 1.00 / 3.00 = 0.33
/// assert_eq!(divide::<Decimal>(-200, 300), -67);
/// ```
#[inline]
pub fn divide<S: Scale>(a: Num, b: Num) -> Num {
    assert!(b != 0, "fixed-point divide by zero");
    narrow(exact_quotient::<S>(a, b))
}

/// Checked [`divide`]
#[inline]
pub fn try_divide<S: Scale>(a: Num, b: Num) -> Result<Num, MathError> {
    if b == 0 {
        return Err(MathError::DivideByZero);
    }
    Ok(narrow(exact_quotient::<S>(a, b)))
}

/// Whether `result` is not the exact rounded quotient `a / b`
///
/// Always true for a zero divisor.
#[inline]
pub fn div_overflows<S: Scale>(result: Num, a: Num, b: Num) -> bool {
    if b == 0 {
        return true;
    }
    let exact = exact_quotient::<S>(a, b);
    !fits(exact) || exact != result as i32
}

/// Sum `a + b`, wrapping at the 16-bit boundary
#[inline]
pub fn add(a: Num, b: Num) -> Num {
    a.wrapping_add(b)
}

/// Whether `result` is not the exact sum `a + b`
#[inline]
pub fn add_overflows(result: Num, a: Num, b: Num) -> bool {
    let exact = a as i32 + b as i32;
    !fits(exact) || exact != result as i32
}

/// Difference `a - b`, wrapping at the 16-bit boundary
#[inline]
pub fn subtract(a: Num, b: Num) -> Num {
    a.wrapping_sub(b)
}

/// Whether `result` is not the exact difference `a - b`
#[inline]
pub fn sub_overflows(result: Num, a: Num, b: Num) -> bool {
    let exact = a as i32 - b as i32;
    !fits(exact) || exact != result as i32
}

/// `a * a`
#[inline]
pub fn square<S: Scale>(a: Num) -> Num {
    multiply::<S>(a, a)
}

/// Whether `result` is not the exact rounded square of `a`
#[inline]
pub fn square_overflows<S: Scale>(result: Num, a: Num) -> bool {
    mul_overflows::<S>(result, a, a)
}
