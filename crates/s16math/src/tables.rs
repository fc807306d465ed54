//! CORDIC arctangent step tables
//!
//! Entry `i` is `atan(2^-i)` rounded to the CORDIC resolution of its scale
//! policy. A table stops at the last step that still rounds to a non-zero
//! unit; further iterations could not move the residual angle.

/// `atan(2^-i)` in units of 1/10000 rad
pub const DECIMAL_CORDIC_ANGLES: [i16; 15] = [
    7854, 4636, 2450, 1244, 624, 312, 156, 78, 39, 20, 10, 5, 2, 1, 1,
];

/// `atan(2^-i)` in Q2.13 rad
pub const BINARY_CORDIC_ANGLES: [i16; 14] = [
    6434, 3798, 2007, 1019, 511, 256, 128, 64, 32, 16, 8, 4, 2, 1,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_increasing(table: &[i16]) {
        for pair in table.windows(2) {
            assert!(pair[0] >= pair[1], "table not monotonic: {:?}", pair);
        }
        assert!(table.iter().all(|&step| step > 0));
    }

    #[test]
    fn test_tables_are_monotonic() {
        assert_non_increasing(&DECIMAL_CORDIC_ANGLES);
        assert_non_increasing(&BINARY_CORDIC_ANGLES);
    }

    #[test]
    fn test_tables_cover_a_quadrant() {
        // The steps must add up to more than pi/2 or the rotation cannot
        // reach the end of the first quadrant.
        let decimal: i32 = DECIMAL_CORDIC_ANGLES.iter().map(|&s| s as i32).sum();
        let binary: i32 = BINARY_CORDIC_ANGLES.iter().map(|&s| s as i32).sum();
        assert!(decimal > 15708, "decimal sum {}", decimal);
        assert!(binary > 12868, "binary sum {}", binary);
    }

    #[test]
    fn test_first_step_is_quarter_pi() {
        assert_eq!(DECIMAL_CORDIC_ANGLES[0], 7854);
        assert_eq!(BINARY_CORDIC_ANGLES[0], 6434);
    }
}
