//! A spring driving a single float.

use serde::{Deserialize, Serialize};

use crate::{config::SpringConfig, number::Float, solver::scalar::evaluate};

use super::{DampedSpring, Spring};

/// A spring driving a single float towards a goal.
///
/// # Examples
///
/// ```
/// use exact_springs::{ScalarSpring, Spring, SpringConfig};
///
/// let mut spring = ScalarSpring::new(SpringConfig::critical(1.0_f32)?);
/// spring.set_goal(10.0);
///
/// let x = spring.update(1.0);
/// assert!(0.0 < x && x < 10.0);
/// # Ok::<(), String>(())
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ScalarSpring<F: Float> {
    /// The current value.
    value: F,
    /// The current velocity.
    velocity: F,
    /// The goal value.
    goal: F,
    /// The half-life and damping ratio.
    config: SpringConfig<F>,
}

impl<F: Float> ScalarSpring<F> {
    /// Create a new `ScalarSpring` at rest at zero, with its goal at zero.
    pub fn new(config: SpringConfig<F>) -> Self {
        Self {
            value: F::ZERO,
            velocity: F::ZERO,
            goal: F::ZERO,
            config,
        }
    }

    /// Returns the configuration of the spring.
    pub const fn config(&self) -> &SpringConfig<F> {
        &self.config
    }

    /// Evaluates the spring `dt` into the future.
    fn evaluate(&self, dt: F) -> (F, F) {
        evaluate(
            self.value,
            self.velocity,
            self.goal,
            F::ZERO,
            self.config.damping_ratio(),
            self.config.half_life(),
            dt,
        )
    }
}

impl<F: Float> Spring<F> for ScalarSpring<F> {
    type Value = F;
    type Velocity = F;

    fn value(&self) -> F {
        self.value
    }

    fn velocity(&self) -> F {
        self.velocity
    }

    fn goal_value(&self) -> F {
        self.goal
    }

    fn goal_velocity(&self) -> F {
        F::ZERO
    }

    /// The signed offset `value - goal`.
    fn distance_to_goal(&self) -> F {
        self.value - self.goal
    }

    fn update(&mut self, dt: F) -> F {
        (self.value, self.velocity) = self.evaluate(dt);
        self.value
    }

    fn predict(&self, horizon: F) -> F {
        self.evaluate(horizon).0
    }

    fn set_goal(&mut self, goal: F) {
        self.goal = goal;
    }

    fn set_value(&mut self, value: F) {
        ftlog::trace!("Resetting scalar spring from {} to {value}", self.value);
        self.value = value;
        self.velocity = F::ZERO;
    }

    fn set_half_life(&mut self, half_life: F) {
        self.config.set_half_life(half_life);
    }
}

impl<F: Float> DampedSpring<F> for ScalarSpring<F> {
    fn set_damping_ratio(&mut self, damping_ratio: F) {
        self.config.set_damping_ratio(damping_ratio);
    }
}
