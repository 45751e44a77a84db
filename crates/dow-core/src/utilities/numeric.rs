//! Integer helpers shared by the date arithmetic.

use num_traits::{PrimInt, Signed};

/// Absolute value of a signed integer.
///
/// Saturates at `T::max_value()` for `T::min_value()` instead of overflowing.
pub fn abs_int<T: PrimInt + Signed>(x: T) -> T {
    if x < T::zero() {
        T::zero().checked_sub(&x).unwrap_or_else(T::max_value)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn abs_of_small_values() {
        assert_eq!(abs_int(0i64), 0);
        assert_eq!(abs_int(-7i64), 7);
        assert_eq!(abs_int(7i32), 7);
        assert_eq!(abs_int(i64::MIN), i64::MAX);
    }

    proptest! {
        #[test]
        fn matches_std_abs(x in (i64::MIN + 1)..=i64::MAX) {
            prop_assert_eq!(abs_int(x), x.abs());
        }
    }
}
