//! The exact solver for a critically damped orientation spring.
//!
//! The rotation from the goal to the current orientation is mapped into the
//! tangent space at the goal as a scaled axis-angle vector. There every
//! component follows the critically damped scalar solution, and the result is
//! mapped back onto the unit quaternions.

use crate::{
    linalg::{Quaternion, Vector3},
    math::{fast_neg_exp, halflife_to_damping},
    number::Float,
};

/// Advances an orientation spring by `dt` and returns the new
/// `(orientation, angular velocity)`.
///
/// The angular velocity is a scaled axis-angle rate, in radians per unit time.
/// The returned orientation is renormalized to absorb floating-point drift.
///
/// The rotation error is taken along the shorter arc, so the spring never
/// turns more than half a revolution to reach its goal.
///
/// # Arguments
///
/// * `x`: The current orientation, a unit quaternion.
/// * `v`: The current angular velocity.
/// * `goal`: The goal orientation, a unit quaternion.
/// * `half_life`: Time for the angle to the goal to halve. Must not be
///   negative.
/// * `dt`: The elapsed time. Must not be negative.
///
/// # Examples
///
/// ```
/// use exact_springs::{linalg::{Quaternion, Vector3}, solver::orientation::evaluate};
///
/// let goal = Quaternion::from_axis_angle(Vector3::xyz(0.0_f64, 0.0, 1.0), 1.0);
/// let (x, v) = evaluate(Quaternion::IDENTITY, Vector3::zero(), goal, 0.2, 100.0);
///
/// assert!(x.angle_to(&goal) < 1e-6);
/// assert!(v.magnitude() < 1e-6);
/// ```
pub fn evaluate<F: Float>(
    x: Quaternion<F>,
    v: Vector3<F>,
    goal: Quaternion<F>,
    half_life: F,
    dt: F,
) -> (Quaternion<F>, Vector3<F>) {
    let y = halflife_to_damping(half_life).half();

    let j0 = (x * goal.inverse()).shortest_arc().to_scaled_axis_angle();
    // The critically damped derivative form, so that `v` stays the rate of change of `x`.
    let j1 = v + j0 * y;
    let eydt = fast_neg_exp(y * dt);

    let x = (Quaternion::from_scaled_axis_angle((j0 + j1 * dt) * eydt) * goal).normalized();
    let v = (v - j1 * (y * dt)) * eydt;
    (x, v)
}
