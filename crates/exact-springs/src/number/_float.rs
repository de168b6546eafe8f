//! A `Float` is the scalar type every spring, solver and config is generic
//! over.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Floating point numbers that springs can be evaluated with.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + SubAssign<Self>
    + Mul<Output = Self>
    + MulAssign<Self>
    + Div<Output = Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + Sum<Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// One half.
    const HALF: Self;

    /// Two.
    const TWO: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// `pi / 2`.
    const FRAC_PI_2: Self;

    /// `pi / 4`.
    const FRAC_PI_4: Self;

    /// `ln(2)`.
    const LN_2: Self;

    /// `log2(e)`.
    const LOG2_E: Self;

    /// Casts an `f64` to `Self`. This may be a lossy conversion.
    fn from_f64(x: f64) -> Self;

    /// Returns the number as an `i32`, truncating towards zero and saturating
    /// at the bounds of `i32`. `NaN` becomes `0`.
    fn as_i32(self) -> i32;

    /// Returns the absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns the square root.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns the sine, in radians.
    #[must_use]
    fn sin(self) -> Self;

    /// Returns the sine and cosine, in radians.
    fn sin_cos(self) -> (Self, Self);

    /// Returns the arc-cosine, in radians. `NaN` outside of `[-1, 1]`.
    #[must_use]
    fn acos(self) -> Self;

    /// Returns `e^self`.
    #[must_use]
    fn exp(self) -> Self;

    /// Returns the largest integer less than or equal to `self`.
    #[must_use]
    fn floor(self) -> Self;

    /// Returns `self * 2^exp`, computed exactly unless the result under- or
    /// overflows.
    #[must_use]
    fn ldexp(self, exp: i32) -> Self;

    /// Returns whether the number is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;

    /// Returns a random number drawn uniformly from `[0, 1)`.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Returns a random number drawn uniformly from `[min, max)`.
    fn random_in<R: rand::Rng>(rng: &mut R, min: Self, max: Self) -> Self {
        min + (max - min) * Self::next_random(rng)
    }

    /// Returns `self * self`.
    #[must_use]
    fn square(self) -> Self {
        self * self
    }

    /// Returns `self / 2`.
    #[must_use]
    fn half(self) -> Self {
        self * Self::HALF
    }

    /// Returns the smaller of two numbers.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// Returns the larger of two numbers.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// Returns `self` clamped to `[lo, hi]`.
    #[must_use]
    fn clamp(self, lo: Self, hi: Self) -> Self {
        debug_assert!(lo <= hi);
        self.min(hi).max(lo)
    }
}

/// A macro to implement the `Float` trait for the primitive floats.
macro_rules! impl_float {
    ($($ty:ident, $ldexp:path);*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
            impl Float for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;
                const PI: Self = core::$ty::consts::PI;
                const FRAC_PI_2: Self = core::$ty::consts::FRAC_PI_2;
                const FRAC_PI_4: Self = core::$ty::consts::FRAC_PI_4;
                const LN_2: Self = core::$ty::consts::LN_2;
                const LOG2_E: Self = core::$ty::consts::LOG2_E;

                fn from_f64(x: f64) -> Self {
                    x as $ty
                }

                fn as_i32(self) -> i32 {
                    self as i32
                }

                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }

                fn sin(self) -> Self {
                    <$ty>::sin(self)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$ty>::sin_cos(self)
                }

                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn exp(self) -> Self {
                    <$ty>::exp(self)
                }

                fn floor(self) -> Self {
                    <$ty>::floor(self)
                }

                fn ldexp(self, exp: i32) -> Self {
                    $ldexp(self, exp)
                }

                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }
            }
        )*
    }
}

impl_float!(f32, libm::ldexpf; f64, libm::ldexp);

#[cfg(test)]
mod tests {
    use super::Float;

    #[test]
    fn ldexp_scales_by_powers_of_two() {
        assert_eq!(<f32 as Float>::ldexp(1.5, 3), 12.0);
        assert_eq!(<f64 as Float>::ldexp(1.5, -1), 0.75);
        assert_eq!(<f64 as Float>::ldexp(1.0, -2000), 0.0);
    }

    #[test]
    fn as_i32_saturates() {
        assert_eq!(<f32 as Float>::as_i32(1e30), i32::MAX);
        assert_eq!(<f64 as Float>::as_i32(-2.7), -2);
        assert_eq!(<f64 as Float>::as_i32(f64::NAN), 0);
    }

    #[test]
    fn clamp() {
        assert_eq!(Float::clamp(2.0_f32, -1.0, 1.0), 1.0);
        assert_eq!(Float::clamp(-2.0_f64, -1.0, 1.0), -1.0);
        assert_eq!(Float::clamp(0.25_f64, -1.0, 1.0), 0.25);
    }
}
