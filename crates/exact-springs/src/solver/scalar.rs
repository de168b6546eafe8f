//! The exact solver for a scalar spring with a configurable damping ratio.

use crate::{
    math::{damping_ratio_to_stiffness, fast_atan, fast_neg_exp, halflife_to_damping},
    number::Float,
};

use super::{discriminant, Regime, EPSILON};

/// Advances a scalar spring by `dt` and returns the new `(value, velocity)`.
///
/// This is [`evaluate_with_epsilon`] with the default [`EPSILON`].
///
/// # Arguments
///
/// * `x`: The current value.
/// * `v`: The current velocity.
/// * `goal`: The goal value.
/// * `goal_velocity`: The velocity of the goal.
/// * `damping_ratio`: `1` is critical, below `1` oscillates, above `1` is
///   sluggish. Must be positive.
/// * `half_life`: Time for the distance to the goal to halve under critical
///   damping. Must not be negative.
/// * `dt`: The elapsed time. Must not be negative.
///
/// # Examples
///
/// ```
/// use exact_springs::solver::scalar::evaluate;
///
/// let (x, v) = evaluate(0.0_f32, 0.0, 10.0, 0.0, 1.0, 0.5, 0.0);
/// assert_eq!((x, v), (0.0, 0.0));
///
/// let (x, _) = evaluate(0.0_f32, 0.0, 10.0, 0.0, 1.0, 0.5, 100.0);
/// assert!((x - 10.0).abs() < 1e-3);
/// ```
pub fn evaluate<F: Float>(x: F, v: F, goal: F, goal_velocity: F, damping_ratio: F, half_life: F, dt: F) -> (F, F) {
    evaluate_with_epsilon(
        x,
        v,
        goal,
        goal_velocity,
        damping_ratio,
        half_life,
        dt,
        F::from_f64(EPSILON),
    )
}

/// Advances a scalar spring by `dt` and returns the new `(value, velocity)`.
///
/// The damping and stiffness come from the half-life and damping ratio. The
/// spring settles on the equilibrium `c = goal + d * goal_velocity / s`, which
/// is the goal itself when the goal is stationary. The [`Regime`] selects one
/// of three exact solutions.
///
/// `epsilon` is the half-width of the critical dead zone, and is added to the
/// denominators that can vanish instead of branching on them.
///
/// The under-damped branch recovers the phase of the oscillation with
/// [`fast_atan`], so it only reproduces its input at `dt = 0` up to the error
/// of that approximation. The other two branches do so exactly.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_with_epsilon<F: Float>(
    x: F,
    v: F,
    goal: F,
    goal_velocity: F,
    damping_ratio: F,
    half_life: F,
    dt: F,
    epsilon: F,
) -> (F, F) {
    let d = halflife_to_damping(half_life);
    let s = damping_ratio_to_stiffness(damping_ratio, d);
    let c = goal + d * goal_velocity / (s + epsilon);
    let y = d.half();

    match Regime::classify(s, d, epsilon) {
        Regime::Critical => critical(x, v, c, y, dt),
        Regime::UnderDamped => under_damped(x, v, c, y, discriminant(s, d).sqrt(), dt, epsilon),
        Regime::OverDamped => over_damped(x, v, c, d, s, dt),
    }
}

/// The double root `-y`.
fn critical<F: Float>(x: F, v: F, c: F, y: F, dt: F) -> (F, F) {
    let j0 = x - c;
    let j1 = v + j0 * y;
    let eydt = fast_neg_exp(y * dt);

    let x = (j0 + dt * j1) * eydt + c;
    let v = (-y * j0 - y * dt * j1 + j1) * eydt;
    (x, v)
}

/// The complex roots `-y ± iw`, written as a decaying cosine with amplitude
/// `j` and phase `p`.
fn under_damped<F: Float>(x: F, v: F, c: F, y: F, w: F, dt: F, epsilon: F) -> (F, F) {
    let offset = x - c;
    let rate = v + offset * y;

    let j = (rate.square() / (w * w + epsilon) + offset.square()).sqrt();
    let j = if offset > F::ZERO { j } else { -j };
    let p = fast_atan(rate / (-offset * w + epsilon));

    let eydt = fast_neg_exp(y * dt);
    let (sin, cos) = (w * dt + p).sin_cos();

    let x = j * eydt * cos + c;
    let v = eydt * (-y * j * cos - w * j * sin);
    (x, v)
}

/// The real roots `-y0` and `-y1`, with `y0 > y1 > 0`.
fn over_damped<F: Float>(x: F, v: F, c: F, d: F, s: F, dt: F) -> (F, F) {
    let root = (d * d - (F::TWO + F::TWO) * s).sqrt();
    let y0 = (d + root).half();
    let y1 = (d - root).half();

    let j1 = (c * y0 - x * y0 - v) / (y1 - y0);
    let j0 = x - j1 - c;

    let ey0dt = fast_neg_exp(y0 * dt);
    let ey1dt = fast_neg_exp(y1 * dt);

    let x = j0 * ey0dt + j1 * ey1dt + c;
    let v = -y0 * j0 * ey0dt - y1 * j1 * ey1dt;
    (x, v)
}
