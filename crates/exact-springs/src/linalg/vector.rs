//! A fixed-size vector that can represent the value, velocity or goal of a
//! vector spring, or the angular velocity of an orientation spring.

use crate::number::Float;

/// A vector of `DIM` floats.
#[must_use]
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<F: Float, const DIM: usize>([F; DIM]);

/// A two-dimensional `Vector`.
pub type Vector2<F> = Vector<F, 2>;

/// A three-dimensional `Vector`.
pub type Vector3<F> = Vector<F, 3>;

impl<F: Float, const DIM: usize> core::fmt::Debug for Vector<F, DIM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<F: Float, const DIM: usize> Default for Vector<F, DIM> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float, const DIM: usize> Vector<F, DIM> {
    /// Create a new `Vector` with the given elements.
    pub const fn new(elements: [F; DIM]) -> Self {
        Self(elements)
    }

    /// Create a new `Vector` with all elements set to `0.0`.
    pub const fn zero() -> Self {
        Self::fill(F::ZERO)
    }

    /// Create a new `Vector` with all elements set to `v`.
    pub const fn fill(v: F) -> Self {
        Self([v; DIM])
    }

    /// Create a new `Vector` whose `i`-th element is `f(i)`.
    pub fn from_fn<G: FnMut(usize) -> F>(f: G) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Get the magnitude of the `Vector`.
    #[must_use]
    pub fn magnitude(&self) -> F {
        self.dot(self).sqrt()
    }

    /// Get the euclidean distance between two `Vector`s.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> F {
        (other - self).magnitude()
    }

    /// Get a `Vector` with the same direction and unit magnitude. The zero
    /// `Vector` stays zero.
    pub fn normalized(&self) -> Self {
        let m = self.magnitude();
        if m == F::ZERO {
            *self
        } else {
            *self / m
        }
    }

    /// Get the dot product of two `Vector`s.
    #[must_use]
    pub fn dot(&self, other: &Self) -> F {
        self.iter().zip(other.iter()).map(|(&a, &b)| a * b).sum()
    }

    /// Create a new random `Vector` with elements in the range `[min, max)`.
    pub fn random<R: rand::Rng>(rng: &mut R, min: F, max: F) -> Self {
        Self::from_fn(|_| F::random_in(rng, min, max))
    }
}

impl<F: Float> Vector<F, 2> {
    /// Create a new two-dimensional `Vector`.
    pub const fn xy(x: F, y: F) -> Self {
        Self([x, y])
    }
}

impl<F: Float> Vector<F, 3> {
    /// Create a new three-dimensional `Vector`.
    pub const fn xyz(x: F, y: F, z: F) -> Self {
        Self([x, y, z])
    }

    /// Get the cross product of two three-dimensional `Vector`s.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<F: Float, const DIM: usize> From<[F; DIM]> for Vector<F, DIM> {
    fn from(elements: [F; DIM]) -> Self {
        Self(elements)
    }
}

impl<F: Float, const DIM: usize> From<Vector<F, DIM>> for [F; DIM] {
    fn from(val: Vector<F, DIM>) -> [F; DIM] {
        val.0
    }
}

impl<F: Float, const DIM: usize> core::ops::Deref for Vector<F, DIM> {
    type Target = [F; DIM];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<F: Float, const DIM: usize> core::ops::DerefMut for Vector<F, DIM> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// Implementations of `+` and `+=` on `Vector`s.
impl<F: Float, const DIM: usize> core::ops::Add<Self> for Vector<F, DIM> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_fn(|i| self[i] + other[i])
    }
}

impl<F: Float, const DIM: usize> core::ops::AddAssign<Self> for Vector<F, DIM> {
    fn add_assign(&mut self, other: Self) {
        for i in 0..DIM {
            self[i] += other[i];
        }
    }
}

// Implementations of `-` and `-=` on `Vector`s.
impl<F: Float, const DIM: usize> core::ops::Sub<Self> for Vector<F, DIM> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::from_fn(|i| self[i] - other[i])
    }
}

impl<F: Float, const DIM: usize> core::ops::Sub<Self> for &Vector<F, DIM> {
    type Output = Vector<F, DIM>;

    fn sub(self, other: Self) -> Self::Output {
        Vector::from_fn(|i| self[i] - other[i])
    }
}

impl<F: Float, const DIM: usize> core::ops::SubAssign<Self> for Vector<F, DIM> {
    fn sub_assign(&mut self, other: Self) {
        for i in 0..DIM {
            self[i] -= other[i];
        }
    }
}

impl<F: Float, const DIM: usize> core::ops::Neg for Vector<F, DIM> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_fn(|i| -self[i])
    }
}

// Implementations of `*` and `*=` on `Vector`s.
impl<F: Float, const DIM: usize> core::ops::Mul<F> for Vector<F, DIM> {
    type Output = Self;

    fn mul(self, scalar: F) -> Self::Output {
        Self::from_fn(|i| self[i] * scalar)
    }
}

impl<F: Float, const DIM: usize> core::ops::MulAssign<F> for Vector<F, DIM> {
    fn mul_assign(&mut self, scalar: F) {
        for i in 0..DIM {
            self[i] *= scalar;
        }
    }
}

// Implementations of `/` and `/=` on `Vector`s.
impl<F: Float, const DIM: usize> core::ops::Div<F> for Vector<F, DIM> {
    type Output = Self;

    fn div(self, scalar: F) -> Self::Output {
        Self::from_fn(|i| self[i] / scalar)
    }
}

impl<F: Float, const DIM: usize> core::ops::DivAssign<F> for Vector<F, DIM> {
    fn div_assign(&mut self, scalar: F) {
        for i in 0..DIM {
            self[i] /= scalar;
        }
    }
}
