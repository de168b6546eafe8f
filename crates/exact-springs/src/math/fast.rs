//! Fast approximations of `e^-x` and `atan(x)` used by the spring solvers.

use crate::number::Float;

/// Width of the dead zone around zero in which `copysign` returns zero.
pub const COPYSIGN_DEAD_ZONE: f64 = 0.01;

/// Approximates `e^-x`.
///
/// The argument is split as `x = n * ln(2) + r` with `r` in `[0, ln(2))`, so
/// that `e^-x = 2^-n / e^r`. The reciprocal is taken of the degree-5 Taylor
/// polynomial of `e^r`, and the power of two is applied exactly with `ldexp`.
///
/// The relative error is below `1e-4` for all finite non-negative inputs until
/// the result underflows. The result is exactly `1` at `x = 0` and positive.
/// Huge and infinite arguments give `0`.
///
/// The solvers only ever call this with non-negative arguments. Negative
/// arguments are not part of the contract.
///
/// # Examples
///
/// ```
/// use exact_springs::math::fast_neg_exp;
///
/// assert_eq!(fast_neg_exp(0.0_f32), 1.0);
///
/// let approx: f64 = fast_neg_exp(3.0);
/// assert!((approx - (-3.0_f64).exp()).abs() / (-3.0_f64).exp() < 1e-3);
/// ```
pub fn fast_neg_exp<F: Float>(x: F) -> F {
    // Past 2^-2048 every float has underflowed, so the exponent can stop there.
    let n = (x * F::LOG2_E).min(F::from_f64(2048.0)).floor();
    let r = x - n * F::LN_2;

    let c5 = F::from_f64(1.0 / 120.0);
    let c4 = F::from_f64(1.0 / 24.0);
    let c3 = F::from_f64(1.0 / 6.0);
    let p = F::ONE + r * (F::ONE + r * (F::HALF + r * (c3 + r * (c4 + r * c5))));

    (F::ONE / p).ldexp(-n.as_i32())
}

/// Returns `|a|` with the sign of `b`, or zero when `b` lies within
/// [`COPYSIGN_DEAD_ZONE`] of zero.
///
/// The dead zone keeps a phase computed from a noisy near-zero ratio from
/// flickering between `+a` and `-a`.
pub fn copysign<F: Float>(a: F, b: F) -> F {
    let dead_zone = F::from_f64(COPYSIGN_DEAD_ZONE);
    if b.abs() <= dead_zone {
        F::ZERO
    } else if b > F::ZERO {
        a.abs()
    } else {
        -a.abs()
    }
}

/// Approximates `atan(x)` over the whole real line.
///
/// A polynomial on `w = min(|x|, 1 / |x|)` approximates `atan(w)` on
/// `[0, 1]`, the identity `atan(z) = pi / 2 - atan(1 / z)` reflects it for
/// `|x| > 1`, and [`copysign`] restores the sign of `x`.
///
/// Outside the dead zone of [`copysign`] the absolute error is below `2e-3`
/// radians. Inside it the result is zero.
///
/// # Examples
///
/// ```
/// use exact_springs::math::fast_atan;
///
/// let approx: f64 = fast_atan(1.0);
/// assert!((approx - core::f64::consts::FRAC_PI_4).abs() < 2e-3);
/// assert_eq!(fast_atan(0.005_f32), 0.0);
/// ```
pub fn fast_atan<F: Float>(x: F) -> F {
    let z = x.abs();
    let reflect = z > F::ONE;
    let w = if reflect { F::ONE / z } else { z };

    let a = F::from_f64(0.2447);
    let b = F::from_f64(0.0663);
    let y = F::FRAC_PI_4 * w - w * (w - F::ONE) * (a + b * w);

    copysign(if reflect { F::FRAC_PI_2 - y } else { y }, x)
}
