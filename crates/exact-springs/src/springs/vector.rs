//! A spring driving a vector, one independent scalar spring per axis.

use crate::{config::SpringConfig, linalg::Vector, number::Float};

use super::{DampedSpring, ScalarSpring, Spring};

/// A spring driving a `DIM`-dimensional vector towards a goal.
///
/// The axes are decoupled. Each one is a [`ScalarSpring`] with its own
/// configuration, and every operation fans out to all of them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VectorSpring<F: Float, const DIM: usize> {
    /// One spring per axis.
    axes: [ScalarSpring<F>; DIM],
}

/// A two-dimensional `VectorSpring`.
pub type Vector2Spring<F> = VectorSpring<F, 2>;

/// A three-dimensional `VectorSpring`.
pub type Vector3Spring<F> = VectorSpring<F, 3>;

impl<F: Float, const DIM: usize> Default for VectorSpring<F, DIM> {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl<F: Float, const DIM: usize> VectorSpring<F, DIM> {
    /// Create a new `VectorSpring` with the same configuration on every axis.
    pub fn new(config: SpringConfig<F>) -> Self {
        Self::with_axes([config; DIM])
    }

    /// Create a new `VectorSpring` with a configuration per axis.
    pub fn with_axes(configs: [SpringConfig<F>; DIM]) -> Self {
        Self {
            axes: configs.map(ScalarSpring::new),
        }
    }

    /// Returns the spring driving the `i`-th axis.
    ///
    /// # Panics
    ///
    /// * If `i` is not less than `DIM`.
    pub const fn axis(&self, i: usize) -> &ScalarSpring<F> {
        &self.axes[i]
    }

    /// Returns the spring driving the `i`-th axis, to reconfigure it.
    ///
    /// # Panics
    ///
    /// * If `i` is not less than `DIM`.
    pub fn axis_mut(&mut self, i: usize) -> &mut ScalarSpring<F> {
        &mut self.axes[i]
    }

    /// Collects one float from every axis into a `Vector`.
    fn gather<G: FnMut(&ScalarSpring<F>) -> F>(&self, mut f: G) -> Vector<F, DIM> {
        Vector::from_fn(|i| f(&self.axes[i]))
    }
}

impl<F: Float, const DIM: usize> Spring<F> for VectorSpring<F, DIM> {
    type Value = Vector<F, DIM>;
    type Velocity = Vector<F, DIM>;

    fn value(&self) -> Self::Value {
        self.gather(|axis| axis.value())
    }

    fn velocity(&self) -> Self::Velocity {
        self.gather(|axis| axis.velocity())
    }

    fn goal_value(&self) -> Self::Value {
        self.gather(|axis| axis.goal_value())
    }

    fn goal_velocity(&self) -> Self::Velocity {
        Vector::zero()
    }

    /// The euclidean distance between the value and the goal.
    fn distance_to_goal(&self) -> F {
        self.value().distance_to(&self.goal_value())
    }

    fn update(&mut self, dt: F) -> Self::Value {
        Vector::from_fn(|i| self.axes[i].update(dt))
    }

    fn predict(&self, horizon: F) -> Self::Value {
        self.gather(|axis| axis.predict(horizon))
    }

    fn set_goal(&mut self, goal: Self::Value) {
        self.axes.iter_mut().zip(goal.iter()).for_each(|(axis, &g)| axis.set_goal(g));
    }

    fn set_value(&mut self, value: Self::Value) {
        self.axes.iter_mut().zip(value.iter()).for_each(|(axis, &v)| axis.set_value(v));
    }

    fn set_half_life(&mut self, half_life: F) {
        self.axes.iter_mut().for_each(|axis| axis.set_half_life(half_life));
    }
}

impl<F: Float, const DIM: usize> DampedSpring<F> for VectorSpring<F, DIM> {
    fn set_damping_ratio(&mut self, damping_ratio: F) {
        self.axes
            .iter_mut()
            .for_each(|axis| axis.set_damping_ratio(damping_ratio));
    }
}
