//! Conversions from the user-facing spring knobs to the coefficients of the
//! damped oscillator `x'' + d x' + s (x - c) = 0`.

use crate::number::Float;

/// Added to the half-life before dividing by it.
pub const HALF_LIFE_EPSILON: f64 = 1e-5;

/// Converts a half-life into a damping coefficient `d`.
///
/// Under critical damping the distance to the goal halves every `half_life`
/// seconds. A zero half-life gives a very large, but finite, damping.
///
/// # Arguments
///
/// * `half_life`: Time for the distance to the goal to halve. Must not be
///   negative.
///
/// # Examples
///
/// ```
/// use exact_springs::math::halflife_to_damping;
///
/// let d: f64 = halflife_to_damping(1.0);
/// assert!((d - 4.0 * core::f64::consts::LN_2 / (1.0 + 1e-5)).abs() < 1e-12);
///
/// let d: f32 = halflife_to_damping(0.0);
/// assert!(d.is_finite());
/// ```
pub fn halflife_to_damping<F: Float>(half_life: F) -> F {
    let four = F::TWO + F::TWO;
    four * F::LN_2 / (half_life + F::from_f64(HALF_LIFE_EPSILON))
}

/// Converts a damping ratio and a damping coefficient into a stiffness `s`.
///
/// The stiffness is `(damping / (2 * ratio))^2`, so a ratio of `1` always
/// lands exactly on the critical point `s = d^2 / 4`, whatever the half-life.
///
/// # Arguments
///
/// * `ratio`: The damping ratio. Must be positive.
/// * `damping`: The damping coefficient, as given by [`halflife_to_damping`].
pub fn damping_ratio_to_stiffness<F: Float>(ratio: F, damping: F) -> F {
    (damping / (ratio * F::TWO)).square()
}
