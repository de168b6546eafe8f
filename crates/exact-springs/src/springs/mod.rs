//! Stateful springs that chase a goal.
//!
//! A caller sets the goal, and calls [`Spring::update`] once per simulation
//! tick. [`Spring::predict`] evaluates the same trajectory further ahead
//! without changing the spring.

mod orientation;
mod scalar;
mod vector;

pub use orientation::OrientationSpring;
pub use scalar::ScalarSpring;
pub use vector::{Vector2Spring, Vector3Spring, VectorSpring};

use crate::number::Float;

/// A spring whose value is driven towards a goal.
///
/// # Type Parameters
///
/// * `F`: The scalar type of the spring.
pub trait Spring<F: Float> {
    /// The type of the value and the goal.
    type Value: Copy;

    /// The type of the rate of change of the value. This is the same as the
    /// `Value` for scalars and vectors, and an angular velocity for
    /// orientations.
    type Velocity: Copy;

    /// Returns the current value.
    fn value(&self) -> Self::Value;

    /// Returns the current velocity.
    fn velocity(&self) -> Self::Velocity;

    /// Returns the goal.
    fn goal_value(&self) -> Self::Value;

    /// Returns the velocity of the goal. Goals are treated as stationary, so
    /// this is always zero.
    fn goal_velocity(&self) -> Self::Velocity;

    /// Returns how far the value is from the goal.
    fn distance_to_goal(&self) -> F;

    /// Advances the spring by `dt` and returns the new value.
    ///
    /// Call this at most once per tick. Updates are not accumulated.
    fn update(&mut self, dt: F) -> Self::Value;

    /// Returns the value the spring would have after `horizon`, without
    /// changing the spring.
    fn predict(&self, horizon: F) -> Self::Value;

    /// Moves the goal. The value and velocity stay continuous.
    fn set_goal(&mut self, goal: Self::Value);

    /// Teleports the spring to `value` and brings it to rest.
    fn set_value(&mut self, value: Self::Value);

    /// Overwrites the half-life. Takes effect on the next update.
    fn set_half_life(&mut self, half_life: F);
}

/// A [`Spring`] whose damping ratio can be tuned.
pub trait DampedSpring<F: Float>: Spring<F> {
    /// Overwrites the damping ratio. Takes effect on the next update.
    fn set_damping_ratio(&mut self, damping_ratio: F);
}
