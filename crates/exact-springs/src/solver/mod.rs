//! Closed-form solutions of the damped spring.
//!
//! A spring with damping `d`, stiffness `s` and equilibrium `c` follows
//!
//! ```text
//! x'' + d x' + s (x - c) = 0
//! ```
//!
//! Its characteristic equation has the discriminant `s - d^2 / 4`, whose sign
//! selects one of three [`Regime`]s. Each regime has an exact solution, so a
//! single call with an arbitrarily large time step lands on the same
//! trajectory as many small ones.

pub mod orientation;
pub mod scalar;

use serde::{Deserialize, Serialize};

use crate::number::Float;

/// The width of the dead zone around the critical point, and the additive
/// guard on the solvers' denominators.
pub const EPSILON: f64 = 1e-5;

/// One of the three qualitatively distinct solutions of the damped spring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Regime {
    /// A double real root: the fastest approach to the goal that never
    /// overshoots.
    Critical,
    /// Complex conjugate roots: the spring oscillates around the goal while
    /// the oscillation decays.
    UnderDamped,
    /// Two distinct real roots: a sluggish approach that never overshoots.
    OverDamped,
}

impl Regime {
    /// Classifies a spring by the sign of the discriminant `s - d^2 / 4`.
    ///
    /// Discriminants within `epsilon` of zero are treated as critical, so that
    /// a ratio of exactly one never reaches the oscillating branch with a
    /// vanishing frequency.
    ///
    /// # Arguments
    ///
    /// * `stiffness`: The stiffness `s`.
    /// * `damping`: The damping `d`.
    /// * `epsilon`: The half-width of the critical dead zone.
    pub fn classify<F: Float>(stiffness: F, damping: F, epsilon: F) -> Self {
        let discriminant = discriminant(stiffness, damping);
        if discriminant.abs() < epsilon {
            Self::Critical
        } else if discriminant > F::ZERO {
            Self::UnderDamped
        } else {
            Self::OverDamped
        }
    }

    /// Returns whether the spring overshoots and oscillates around its goal.
    #[must_use]
    pub const fn oscillates(self) -> bool {
        matches!(self, Self::UnderDamped)
    }
}

/// Returns the discriminant `s - d^2 / 4` of the characteristic equation.
pub(crate) fn discriminant<F: Float>(stiffness: F, damping: F) -> F {
    stiffness - damping * damping / (F::TWO + F::TWO)
}
