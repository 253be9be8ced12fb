//! Scalar payloads of value nodes

use std::fmt::{Debug, Display};

/// A value a leaf can hold: combinable, drawable from an `f64` sample and printable.
pub trait Scalar: Copy + Default + PartialEq + Debug + Display + 'static {
    /// Elementwise combine. Integers wrap instead of panicking on overflow.
    fn add(self, rhs: Self) -> Self;

    /// Narrowing conversion from a random sample (`as` semantics: saturating, NaN to zero).
    fn from_f64(sample: f64) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn from_f64(sample: f64) -> Self {
                    sample as $t
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn from_f64(sample: f64) -> Self {
                    sample as $t
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(123.9, 123)]
    #[case(-0.7, 0)]
    #[case(f64::NAN, 0)]
    #[case(1e12, i32::MAX)]
    fn given_sample_when_narrowing_to_i32_then_truncates_and_saturates(
        #[case] sample: f64,
        #[case] expected: i32,
    ) {
        assert_eq!(i32::from_f64(sample), expected);
    }

    #[test]
    fn given_integer_overflow_when_adding_then_wraps() {
        assert_eq!(i8::MAX.add(1), i8::MIN);
        assert_eq!(Scalar::add(2_i64, 3), 5);
    }

    #[test]
    fn given_floats_when_adding_then_uses_ieee_addition() {
        assert_eq!(Scalar::add(1.5_f32, 2.25), 3.75);
        assert_eq!(f64::from_f64(42.5), 42.5);
    }
}
