//! The `Float` trait is used to represent the scalar type of a spring.
//!
//! We provide implementations for the following types:
//!
//! * `f32`, the usual choice for a per-frame simulation.
//! * `f64`, useful for reference computations and long horizons.

mod _float;

pub use _float::Float;
