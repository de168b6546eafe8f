#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod linalg;
pub mod math;
pub mod number;
pub mod solver;
pub mod springs;

pub use config::SpringConfig;
pub use number::Float;
pub use solver::Regime;
pub use springs::{
    DampedSpring, OrientationSpring, ScalarSpring, Spring, Vector2Spring, Vector3Spring, VectorSpring,
};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
