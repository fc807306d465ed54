//! CORDIC rotation and vectoring engine
//!
//! Shift-and-add only: each iteration rotates a vector by `±atan(2^-i)`, so
//! the whole pass costs one table lookup, two shifts and three additions per
//! step. The number of steps is the table length of the scale policy, which
//! makes the running time independent of the input.
//!
//! Both modes leave the vector scaled by the pseudo-rotation gain
//! [`Scale::CORDIC_K`]; the results returned here already have it removed
//! with [`Scale::CORDIC_LC`].

use crate::scale::{round_shift, Scale};

/// Headroom shift applied to vectoring inputs so that the small steps still
/// move the vector. 16-bit inputs stay below `2^29`, leaving room for the
/// gain and the `sqrt(2)` of a diagonal vector.
const VECTOR_SHIFT: u32 = 14;

/// Rotate the unit vector by `angle`, given at CORDIC resolution
///
/// `angle` must lie in the first quadrant, `[0, pi/2]`. Returns
/// `(cos, sin)` at CORDIC resolution.
///
/// ```rust
/// use s16math::cordic::rotate;
/// use s16math::Decimal;
///
/// let (cos, sin) = rotate::<Decimal>(0);
/// assert!((cos - 10_000).abs() <= 2);
/// assert!(sin.abs() <= 2);
/// ```
pub fn rotate<S: Scale>(angle: i32) -> (i32, i32) {
    let mut x = S::CORDIC.denominator;
    let mut y = 0i32;
    let mut z = angle;

    for (i, &step) in S::CORDIC_ANGLES.iter().enumerate() {
        let dx = y >> i;
        let dy = x >> i;
        if z >= 0 {
            x -= dx;
            y += dy;
            z -= step as i32;
        } else {
            x += dx;
            y -= dy;
            z += step as i32;
        }
    }

    (remove_gain::<S>(x), remove_gain::<S>(y))
}

/// Rotate `(x, y)` onto the positive x axis
///
/// Both coordinates must be non-negative and at most `32768`; they can be at
/// any resolution as long as it is the same for both. Returns
/// `(magnitude, angle)`: the length of the vector at the input resolution
/// and its angle from the x axis at CORDIC resolution, in `[0, pi/2]`.
///
/// The zero vector has magnitude and angle zero.
pub fn vector<S: Scale>(x: i32, y: i32) -> (i32, i32) {
    debug_assert!(x >= 0 && y >= 0, "vectoring needs a first-quadrant vector");
    if x == 0 && y == 0 {
        return (0, 0);
    }

    let mut x = x << VECTOR_SHIFT;
    let mut y = y << VECTOR_SHIFT;
    let mut z = 0i32;

    for (i, &step) in S::CORDIC_ANGLES.iter().enumerate() {
        let dx = y >> i;
        let dy = x >> i;
        if y > 0 {
            x += dx;
            y -= dy;
            z += step as i32;
        } else {
            x -= dx;
            y += dy;
            z -= step as i32;
        }
    }

    (remove_gain::<S>(round_shift(x, VECTOR_SHIFT)), z)
}

#[inline]
fn remove_gain<S: Scale>(v: i32) -> i32 {
    S::downscale(v * S::CORDIC_LC as i32, S::CORDIC.factor)
}
