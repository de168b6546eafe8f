//! Quaternions for the orientation spring.

use serde::{Deserialize, Serialize};

use crate::number::Float;

use super::Vector3;

/// A quaternion `w + xi + yj + zk`.
///
/// Orientations are unit quaternions. `q` and `-q` describe the same
/// orientation.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Quaternion<F: Float> {
    /// The `i` component.
    pub x: F,
    /// The `j` component.
    pub y: F,
    /// The `k` component.
    pub z: F,
    /// The real component.
    pub w: F,
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<F: Float> Quaternion<F> {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: F::ZERO,
        y: F::ZERO,
        z: F::ZERO,
        w: F::ONE,
    };

    /// Create a new quaternion from its components.
    #[must_use]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    /// Returns a quaternion representing a rotation of `angle` radians around
    /// the given `axis`. The axis need not be normalized.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3<F>, angle: F) -> Self {
        Self::from_vector_part(axis.normalized(), angle)
    }

    /// Returns the quaternion `(cos(angle / 2), axis * sin(angle / 2))` for a
    /// unit `axis`.
    fn from_vector_part(axis: Vector3<F>, angle: F) -> Self {
        let (s, c) = angle.half().sin_cos();
        let [x, y, z]: [F; 3] = (axis * s).into();
        Self { x, y, z, w: c }
    }

    /// Returns the imaginary part as a vector.
    pub const fn vector_part(&self) -> Vector3<F> {
        Vector3::xyz(self.x, self.y, self.z)
    }

    /// Returns the four-dimensional dot product of two quaternions.
    #[must_use]
    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the norm of the quaternion. Orientations have norm `1`.
    #[must_use]
    pub fn norm(&self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns the quaternion scaled to unit norm.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    /// Returns the conjugate `w - xi - yj - zk`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the multiplicative inverse. For unit quaternions this is the
    /// conjugate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let n2 = self.dot(self);
        let c = self.conjugate();
        Self::new(c.x / n2, c.y / n2, c.z / n2, c.w / n2)
    }

    /// Returns `-self` if its real part is negative, `self` otherwise. Both
    /// describe the same rotation; the result rotates by at most `pi`.
    #[must_use]
    pub fn shortest_arc(&self) -> Self {
        if self.w < F::ZERO {
            Self::new(-self.x, -self.y, -self.z, -self.w)
        } else {
            *self
        }
    }

    /// Rotates the vector `v` by `self`.
    pub fn rotate(&self, v: Vector3<F>) -> Vector3<F> {
        let u = self.vector_part();
        let w = self.w;
        v * (w * w - u.dot(&u)) + u * (u.dot(&v) * F::TWO) + u.cross(&v) * (w * F::TWO)
    }

    /// Maps the rotation to its scaled axis-angle vector, the logarithm map of
    /// the unit quaternion (scaled by two).
    ///
    /// The angle is `2 * acos(w)`. When `sin(angle / 2)` is zero the rotation
    /// is the identity and the zero vector is returned.
    pub fn to_scaled_axis_angle(&self) -> Vector3<F> {
        let angle = F::TWO * self.w.clamp(-F::ONE, F::ONE).acos();
        let s = angle.half().sin();
        if s == F::ZERO {
            Vector3::zero()
        } else {
            self.vector_part() * (angle / s)
        }
    }

    /// Maps a scaled axis-angle vector back to a unit quaternion, the
    /// exponential map. The zero vector maps to the identity.
    #[must_use]
    pub fn from_scaled_axis_angle(v: Vector3<F>) -> Self {
        let angle = v.magnitude();
        if angle == F::ZERO {
            Self::IDENTITY
        } else {
            Self::from_vector_part(v / angle, angle)
        }
    }

    /// Returns the angle, in `[0, pi]`, of the rotation taking `other` to
    /// `self`.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> F {
        (*self * other.inverse())
            .shortest_arc()
            .to_scaled_axis_angle()
            .magnitude()
    }
}

/// The Hamilton product.
impl<F: Float> core::ops::Mul for Quaternion<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Self {
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }
}

impl<F: Float> core::ops::Mul<Vector3<F>> for Quaternion<F> {
    type Output = Vector3<F>;

    fn mul(self, rhs: Vector3<F>) -> Self::Output {
        self.rotate(rhs)
    }
}
