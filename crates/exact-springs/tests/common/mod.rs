#![allow(dead_code)]

use exact_springs::Float;
use rand::prelude::*;

/// Generates `n` random `(value, velocity, goal)` triples in `[-10, 10)`.
pub fn random_states<F: Float>(seed: u64, n: usize) -> Vec<(F, F, F)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (min, max) = (F::from_f64(-10.0), F::from_f64(10.0));
    (0..n)
        .map(|_| {
            let x = F::random_in(&mut rng, min, max);
            let v = F::random_in(&mut rng, min, max);
            let goal = F::random_in(&mut rng, min, max);
            (x, v, goal)
        })
        .collect()
}

/// The size of a state, used to scale tolerances.
pub fn scale<F: Float>(x: F, v: F, goal: F) -> F {
    (x - goal).abs() + v.abs()
}

/// The exact solution of the damped spring towards a stationary goal, computed
/// with the transcendental functions of `F`.
pub fn reference<F: Float>(x: F, v: F, goal: F, damping_ratio: F, half_life: F, t: F) -> (F, F) {
    let four = F::TWO + F::TWO;
    let epsilon = F::from_f64(1e-5);
    let d = four * F::LN_2 / (half_life + epsilon);
    let s = (d / (F::TWO * damping_ratio)).square();
    let y = d.half();
    let a = x - goal;
    let discriminant = s - d * d / four;

    if discriminant.abs() < epsilon {
        let b = v + y * a;
        let e = (-y * t).exp();
        ((a + b * t) * e + goal, (b - y * (a + b * t)) * e)
    } else if discriminant > F::ZERO {
        let w = discriminant.sqrt();
        let b = (v + y * a) / w;
        let e = (-y * t).exp();
        let (sin, cos) = (w * t).sin_cos();
        let x = e * (a * cos + b * sin);
        let v = e * (-y * (a * cos + b * sin) + w * (b * cos - a * sin));
        (x + goal, v)
    } else {
        let root = (d * d - four * s).sqrt();
        let (y0, y1) = ((d + root).half(), (d - root).half());
        let j1 = (-a * y0 - v) / (y1 - y0);
        let j0 = a - j1;
        let (e0, e1) = ((-y0 * t).exp(), (-y1 * t).exp());
        (j0 * e0 + j1 * e1 + goal, -y0 * j0 * e0 - y1 * j1 * e1)
    }
}
