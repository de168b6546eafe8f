//! The small amount of linear algebra the springs need: fixed-size vectors
//! and quaternions.

mod quaternion;
mod vector;

pub use quaternion::Quaternion;
pub use vector::{Vector, Vector2, Vector3};
