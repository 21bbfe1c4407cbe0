//! Fixed-width integer operations with the target architecture's
//! non-trapping division rules.
//!
//! Native `/` and `%` panic on a zero divisor (and on `MIN / -1` for signed
//! types). The architecture under test defines a result for every input
//! instead:
//!
//! | Operation        | Divisor zero      | Signed overflow (`MIN`, `-1`) |
//! |------------------|-------------------|-------------------------------|
//! | quotient         | all bits set      | `MIN`                         |
//! | remainder        | dividend          | `0`                           |
//!
//! All comparisons happen at 64 bits; [`Widen`] performs the extension.

/// Division and remainder that never trap.
pub trait NonTrapping: Sized {
    /// Quotient; a zero divisor yields a value with every bit set.
    fn div_nt(self, rhs: Self) -> Self;
    /// Remainder; a zero divisor yields the dividend unchanged.
    fn rem_nt(self, rhs: Self) -> Self;
}

/// Extension into the canonical 64-bit comparison width.
pub trait Widen {
    /// Zero-extends unsigned types, sign-extends signed types.
    fn widen(self) -> u64;
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl NonTrapping for $ty {
            #[inline]
            fn div_nt(self, rhs: Self) -> Self {
                self.checked_div(rhs).unwrap_or(<$ty>::MAX)
            }

            #[inline]
            fn rem_nt(self, rhs: Self) -> Self {
                self.checked_rem(rhs).unwrap_or(self)
            }
        }

        impl Widen for $ty {
            #[inline]
            fn widen(self) -> u64 {
                u64::from(self)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl NonTrapping for $ty {
            #[inline]
            fn div_nt(self, rhs: Self) -> Self {
                // wrapping_div covers MIN / -1; only zero needs a guard.
                if rhs == 0 { -1 } else { self.wrapping_div(rhs) }
            }

            #[inline]
            fn rem_nt(self, rhs: Self) -> Self {
                if rhs == 0 { self } else { self.wrapping_rem(rhs) }
            }
        }

        impl Widen for $ty {
            #[inline]
            fn widen(self) -> u64 {
                i64::from(self) as u64
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ONES: u64 = u64::MAX;

    #[test]
    fn unsigned_div_by_zero_sets_every_bit() {
        assert_eq!(255u8.div_nt(0), u8::MAX);
        assert_eq!(256u16.div_nt(0), u16::MAX);
        assert_eq!(256u32.div_nt(0), 0xFFFF_FFFF);
        assert_eq!(256u64.div_nt(0), ALL_ONES);
    }

    #[test]
    fn signed_div_by_zero_is_minus_one() {
        assert_eq!(100i8.div_nt(0), -1);
        assert_eq!(256i16.div_nt(0), -1);
        assert_eq!(256i32.div_nt(0), -1);
        assert_eq!((-256i64).div_nt(0), -1);
    }

    #[test]
    fn rem_by_zero_returns_dividend() {
        assert_eq!(256u64.rem_nt(0), 256);
        assert_eq!(255u8.rem_nt(0), 255);
        assert_eq!((-7i32).rem_nt(0), -7);
        assert_eq!(i64::MIN.rem_nt(0), i64::MIN);
    }

    #[test]
    fn signed_overflow_does_not_trap() {
        assert_eq!(i64::MIN.div_nt(-1), i64::MIN);
        assert_eq!(i64::MIN.rem_nt(-1), 0);
        assert_eq!(i32::MIN.div_nt(-1), i32::MIN);
        assert_eq!(i8::MIN.rem_nt(-1), 0);
    }

    #[test]
    fn ordinary_division_truncates_toward_zero() {
        assert_eq!(5u64.div_nt(2), 2);
        assert_eq!(3000u64.div_nt(7), 428);
        assert_eq!((-7i32).div_nt(2), -3);
        assert_eq!((-7i32).rem_nt(2), -1);
        assert_eq!(7i64.rem_nt(-2), 1);
    }

    #[test]
    fn widen_extends_by_signedness() {
        assert_eq!(u32::MAX.widen(), 4_294_967_295);
        assert_eq!((-1i32).widen(), ALL_ONES);
        assert_eq!((-1i64).widen(), ALL_ONES);
        assert_eq!(i8::MIN.widen(), 0xFFFF_FFFF_FFFF_FF80);
        assert_eq!(0x80u8.widen(), 0x80);
    }
}
