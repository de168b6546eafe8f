//! Stateless helpers shared by the spring solvers.
//!
//! * Fast approximations of `e^-x` and `atan(x)`.
//! * Conversions from half-life and damping ratio to the damping and
//!   stiffness coefficients of the oscillator.

mod damping;
mod fast;

pub use damping::{damping_ratio_to_stiffness, halflife_to_damping, HALF_LIFE_EPSILON};
pub use fast::{copysign, fast_atan, fast_neg_exp, COPYSIGN_DEAD_ZONE};
