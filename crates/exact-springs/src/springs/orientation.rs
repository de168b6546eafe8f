//! A critically damped spring driving an orientation.

use crate::{
    config::SpringConfig,
    linalg::{Quaternion, Vector3},
    number::Float,
    solver::orientation::evaluate,
};

use super::Spring;

/// A critically damped spring driving a unit quaternion towards a goal.
///
/// The velocity is an angular velocity in scaled axis-angle form. There is no
/// damping ratio to tune.
///
/// # Examples
///
/// ```
/// use exact_springs::{linalg::{Quaternion, Vector3}, OrientationSpring, Spring};
///
/// let mut spring = OrientationSpring::new(0.25_f32)?;
/// let goal = Quaternion::from_axis_angle(Vector3::xyz(0.0, 1.0, 0.0), 1.5);
/// spring.set_goal(goal);
///
/// for _ in 0..60 {
///     spring.update(1.0 / 60.0);
/// }
/// assert!(spring.distance_to_goal() < 0.1);
/// # Ok::<(), String>(())
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OrientationSpring<F: Float> {
    /// The current orientation.
    value: Quaternion<F>,
    /// The current angular velocity.
    velocity: Vector3<F>,
    /// The goal orientation.
    goal: Quaternion<F>,
    /// Always critically damped.
    config: SpringConfig<F>,
}

impl<F: Float> Default for OrientationSpring<F> {
    fn default() -> Self {
        Self::with_config(SpringConfig::new_unchecked(F::ONE, F::ONE))
    }
}

impl<F: Float> OrientationSpring<F> {
    /// Create a new `OrientationSpring` at rest at the identity, with its goal
    /// at the identity.
    ///
    /// # Errors
    ///
    /// * If `half_life` is negative or not finite.
    pub fn new(half_life: F) -> Result<Self, String> {
        SpringConfig::critical(half_life).map(Self::with_config)
    }

    const fn with_config(config: SpringConfig<F>) -> Self {
        Self {
            value: Quaternion::IDENTITY,
            velocity: Vector3::zero(),
            goal: Quaternion::IDENTITY,
            config,
        }
    }

    /// Returns the half-life.
    pub const fn half_life(&self) -> F {
        self.config.half_life()
    }

    /// Evaluates the spring `dt` into the future.
    fn evaluate(&self, dt: F) -> (Quaternion<F>, Vector3<F>) {
        evaluate(self.value, self.velocity, self.goal, self.config.half_life(), dt)
    }
}

impl<F: Float> Spring<F> for OrientationSpring<F> {
    type Value = Quaternion<F>;
    type Velocity = Vector3<F>;

    fn value(&self) -> Quaternion<F> {
        self.value
    }

    fn velocity(&self) -> Vector3<F> {
        self.velocity
    }

    fn goal_value(&self) -> Quaternion<F> {
        self.goal
    }

    fn goal_velocity(&self) -> Vector3<F> {
        Vector3::zero()
    }

    /// The angle, in radians, between the value and the goal.
    fn distance_to_goal(&self) -> F {
        self.value.angle_to(&self.goal)
    }

    fn update(&mut self, dt: F) -> Quaternion<F> {
        (self.value, self.velocity) = self.evaluate(dt);
        self.value
    }

    fn predict(&self, horizon: F) -> Quaternion<F> {
        self.evaluate(horizon).0
    }

    fn set_goal(&mut self, goal: Quaternion<F>) {
        self.goal = goal;
    }

    /// Also moves the goal to `value`, so that the spring stays still until a
    /// new goal is set.
    fn set_value(&mut self, value: Quaternion<F>) {
        ftlog::trace!("Resetting orientation spring from {:?} to {value:?}", self.value);
        self.value = value;
        self.velocity = Vector3::zero();
        self.goal = value;
    }

    fn set_half_life(&mut self, half_life: F) {
        self.config.set_half_life(half_life);
    }
}
