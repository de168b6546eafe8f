use rand::prelude::*;
use test_case::test_case;

use exact_springs::linalg::{Quaternion, Vector3};
use exact_springs::solver::{orientation, scalar};
use exact_springs::{Float, OrientationSpring, Spring};

/// Generates `n` random orientations.
fn random_orientations<F: Float>(seed: u64, n: usize) -> Vec<Quaternion<F>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let axis = Vector3::random(&mut rng, -F::ONE, F::ONE);
            let angle = F::random_in(&mut rng, F::ZERO, F::TWO * F::PI);
            Quaternion::from_axis_angle(axis, angle)
        })
        .collect()
}

#[test]
fn stays_unit_length() {
    let mut spring = OrientationSpring::new(0.3_f32).unwrap();
    for goal in random_orientations(42, 20) {
        spring.set_goal(goal);
        for _ in 0..300 {
            let value = spring.update(1.0 / 60.0);
            assert!((value.norm() - 1.0).abs() < 1e-4, "{value:?}");
        }
    }
    assert!(spring.distance_to_goal() < 1e-2);
}

#[test_case(0.1; "fast")]
#[test_case(0.5; "medium")]
#[test_case(2.0; "slow")]
fn converges(half_life: f64) {
    let mut rng = StdRng::seed_from_u64(7);
    let starts = random_orientations(1, 100);
    let goals = random_orientations(2, 100);
    for (x, goal) in starts.into_iter().zip(goals) {
        let v = Vector3::random(&mut rng, -5.0, 5.0);
        let (x1, v1) = orientation::evaluate(x, v, goal, half_life, 1_000.0 * half_life);
        assert!(x1.angle_to(&goal) < 1e-6);
        assert!(v1.magnitude() < 1e-6);
    }
}

#[test]
fn identity_at_zero_dt() {
    let mut rng = StdRng::seed_from_u64(7);
    let starts = random_orientations(1, 100);
    let goals = random_orientations(2, 100);
    for (x, goal) in starts.into_iter().zip(goals) {
        let v = Vector3::random(&mut rng, -5.0, 5.0);
        let (x1, v1) = orientation::evaluate(x, v, goal, 0.5, 0.0);
        // `q` and `-q` are the same orientation.
        assert!((x1.dot(&x).abs() - 1.0).abs() < 1e-9, "{x1:?} vs {x:?}");
        assert_eq!(v1, v);
    }
}

#[test]
fn single_axis_matches_scalar_spring() {
    let axis = Vector3::xyz(0.3_f64, -0.5, 0.8).normalized();
    let goal = Quaternion::from_axis_angle(axis, 0.4);

    for angle in [-2.5, -1.0, 0.2, 1.5, 3.0] {
        for angular_speed in [-3.0, 0.0, 2.0] {
            for dt in [0.05, 0.3, 1.0, 2.0] {
                let x = Quaternion::from_axis_angle(axis, angle) * goal;
                let (x1, v1) = orientation::evaluate(x, axis * angular_speed, goal, 0.5, dt);

                let (angle1, speed1) = scalar::evaluate(angle, angular_speed, 0.0, 0.0, 1.0, 0.5, dt);
                let expected = Quaternion::from_axis_angle(axis, angle1) * goal;
                assert!(x1.angle_to(&expected) < 1e-6, "angle {angle}, speed {angular_speed}, dt {dt}");
                assert!(v1.distance_to(&(axis * speed1)) < 1e-9);
            }
        }
    }
}

#[test]
fn monotone_from_rest() {
    let starts = random_orientations(3, 50);
    let goals = random_orientations(4, 50);
    for (x, goal) in starts.into_iter().zip(goals) {
        let mut previous = x.angle_to(&goal);
        for i in 1..300 {
            let (x1, _) = orientation::evaluate(x, Vector3::zero(), goal, 0.5, f64::from(i) * 0.01);
            let angle = x1.angle_to(&goal);
            assert!(angle <= previous + 1e-6);
            previous = angle;
        }
    }
}

#[test]
fn set_value_pins_goal() {
    let mut spring = OrientationSpring::new(0.2_f64).unwrap();
    assert_eq!(spring.value(), Quaternion::IDENTITY);
    assert_eq!(spring.goal_value(), Quaternion::IDENTITY);

    let q = Quaternion::from_axis_angle(Vector3::xyz(1.0, 0.0, 0.0), 1.0);
    spring.set_goal(Quaternion::from_axis_angle(Vector3::xyz(0.0, 1.0, 0.0), 1.0));
    spring.update(0.1);
    spring.set_value(q);

    assert_eq!(spring.value(), q);
    assert_eq!(spring.goal_value(), q);
    assert_eq!(spring.velocity(), Vector3::zero());
    assert_eq!(spring.goal_velocity(), Vector3::zero());

    // No snap towards a stale goal.
    let value = spring.update(0.5);
    assert!(value.angle_to(&q) < 1e-6);
}

#[test]
fn predict_does_not_mutate() {
    let mut spring = OrientationSpring::new(0.4_f32).unwrap();
    spring.set_goal(Quaternion::from_axis_angle(Vector3::xyz(0.0, 0.0, 1.0), 2.0));
    spring.update(0.1);

    let before = spring;
    let ahead = spring.predict(1.0);
    assert_eq!(spring, before);
    assert!(ahead.angle_to(&spring.goal_value()) < spring.distance_to_goal());

    let mut fresh = before;
    assert_eq!(spring.update(0.016), fresh.update(0.016));
}

#[test]
fn half_life_is_validated() {
    assert!(OrientationSpring::new(-1.0_f32).is_err());
    assert!(OrientationSpring::new(f64::NAN).is_err());

    let mut spring = OrientationSpring::new(1.0_f64).unwrap();
    spring.set_half_life(0.25);
    assert_eq!(spring.half_life(), 0.25);
    assert_eq!(OrientationSpring::<f64>::default().half_life(), 1.0);
}
