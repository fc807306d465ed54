//! Decimal rendering of stored values
//!
//! [`Fixed`] implements [`core::fmt::Display`], so it works with `write!` on
//! any `core::fmt::Write` sink (a UART buffer, a `heapless::String`, or a
//! `String` on the host). The fraction is printed as the raw numerator,
//! zero-padded to the width of the denominator: in binary mode `2.064`
//! means `2 64/128`, not two and sixty-four thousandths.

use core::fmt;
use core::marker::PhantomData;

use crate::qformat::{split, Kind};
use crate::scale::{Deg, Num, Rad, Scale};

/// A stored value tagged with its kind, ready for display
///
/// ```rust
/// use s16math::format::Fixed;
/// use s16math::{Binary, Decimal};
///
/// assert_eq!(Fixed::<Decimal>::number(-5).to_string(), "-0.05");
/// assert_eq!(Fixed::<Decimal>::number(i16::MIN).to_string(), "-327.68");
/// assert_eq!(Fixed::<Decimal>::radians(3142).to_string(), "3.142");
/// assert_eq!(Fixed::<Binary>::number(320).to_string(), "2.064");
/// ```
#[derive(Clone, Copy)]
pub struct Fixed<S: Scale> {
    value: i16,
    kind: Kind,
    _scale: PhantomData<S>,
}

impl<S: Scale> Fixed<S> {
    /// Wrap `value` as a value of `kind`
    pub const fn new(value: i16, kind: Kind) -> Self {
        Self {
            value,
            kind,
            _scale: PhantomData,
        }
    }

    /// Wrap a plain number
    pub const fn number(value: Num) -> Self {
        Self::new(value, Kind::Number)
    }

    /// Wrap an angle in degrees
    pub const fn degrees(value: Deg) -> Self {
        Self::new(value, Kind::Degree)
    }

    /// Wrap an angle in radians
    pub const fn radians(value: Rad) -> Self {
        Self::new(value, Kind::Radian)
    }

    /// The stored value
    pub const fn raw(&self) -> i16 {
        self.value
    }
}

impl<S: Scale> fmt::Display for Fixed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = split::<S>(self.value, self.kind);
        let width = self.kind.resolution::<S>().width;
        if parts.negative {
            f.write_str("-")?;
        }
        write!(f, "{}.{:0width$}", parts.whole, parts.fraction, width = width)
    }
}

impl<S: Scale> fmt::Debug for Fixed<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed<{}>({:?}, {})", S::NAME, self.kind, self)
    }
}
