//! The user-facing knobs of a spring.

use serde::{Deserialize, Serialize};

use crate::{
    math::{damping_ratio_to_stiffness, halflife_to_damping},
    number::Float,
    solver::{Regime, EPSILON},
};

/// The half-life and damping ratio of a spring.
///
/// The half-life is the time it takes for the distance to the goal to halve
/// under critical damping. The damping ratio selects the [`Regime`]: `1` is
/// critical, below `1` oscillates and above `1` is sluggish.
///
/// A configuration is only changed by its setters. Nothing derived from it is
/// cached, so a change takes effect on the next update.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SpringConfig<F: Float> {
    /// Time for the distance to the goal to halve.
    half_life: F,
    /// Selects the regime.
    damping_ratio: F,
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self {
            half_life: F::ONE,
            damping_ratio: F::HALF,
        }
    }
}

impl<F: Float> SpringConfig<F> {
    /// Create a new `SpringConfig`.
    ///
    /// # Arguments
    ///
    /// * `half_life`: Must be finite and non-negative. Zero snaps to the goal
    ///   almost instantly.
    /// * `damping_ratio`: Must be finite and positive.
    ///
    /// # Errors
    ///
    /// * If `half_life` is negative or not finite.
    /// * If `damping_ratio` is not positive or not finite.
    pub fn new(half_life: F, damping_ratio: F) -> Result<Self, String> {
        check_half_life(half_life)?;
        check_damping_ratio(damping_ratio)?;
        Ok(Self::new_unchecked(half_life, damping_ratio))
    }

    /// Create a new `SpringConfig` without checking its arguments.
    pub(crate) const fn new_unchecked(half_life: F, damping_ratio: F) -> Self {
        Self {
            half_life,
            damping_ratio,
        }
    }

    /// Create a new critically damped `SpringConfig`.
    ///
    /// # Errors
    ///
    /// * If `half_life` is negative or not finite.
    pub fn critical(half_life: F) -> Result<Self, String> {
        Self::new(half_life, F::ONE)
    }

    /// Returns the half-life.
    pub const fn half_life(&self) -> F {
        self.half_life
    }

    /// Returns the damping ratio.
    pub const fn damping_ratio(&self) -> F {
        self.damping_ratio
    }

    /// Overwrites the half-life.
    ///
    /// A negative or non-finite half-life violates the solver's preconditions
    /// and is only caught by a debug assertion.
    pub fn set_half_life(&mut self, half_life: F) {
        debug_assert!(check_half_life(half_life).is_ok(), "invalid half-life {half_life}");
        ftlog::debug!("Setting half-life from {} to {half_life}", self.half_life);
        self.half_life = half_life;
    }

    /// Overwrites the damping ratio.
    ///
    /// A non-positive or non-finite ratio violates the solver's preconditions
    /// and is only caught by a debug assertion.
    pub fn set_damping_ratio(&mut self, damping_ratio: F) {
        debug_assert!(
            check_damping_ratio(damping_ratio).is_ok(),
            "invalid damping ratio {damping_ratio}"
        );
        ftlog::debug!("Setting damping ratio from {} to {damping_ratio}", self.damping_ratio);
        self.damping_ratio = damping_ratio;
    }

    /// The damping coefficient `d` of the oscillator.
    pub fn damping(&self) -> F {
        halflife_to_damping(self.half_life)
    }

    /// The stiffness coefficient `s` of the oscillator.
    pub fn stiffness(&self) -> F {
        damping_ratio_to_stiffness(self.damping_ratio, self.damping())
    }

    /// The branch of the solver this configuration selects.
    pub fn regime(&self) -> Regime {
        Regime::classify(self.stiffness(), self.damping(), F::from_f64(EPSILON))
    }
}

/// Checks that a half-life is finite and non-negative.
fn check_half_life<F: Float>(half_life: F) -> Result<(), String> {
    if half_life.is_finite() && half_life >= F::ZERO {
        Ok(())
    } else {
        Err(format!("Half-life must be finite and non-negative. Got {half_life} instead."))
    }
}

/// Checks that a damping ratio is finite and positive.
fn check_damping_ratio<F: Float>(damping_ratio: F) -> Result<(), String> {
    if damping_ratio.is_finite() && damping_ratio > F::ZERO {
        Ok(())
    } else {
        Err(format!(
            "Damping ratio must be finite and positive. Got {damping_ratio} instead."
        ))
    }
}
