mod common;

use test_case::test_case;

use exact_springs::linalg::{Vector, Vector2, Vector3};
use exact_springs::{DampedSpring, ScalarSpring, Spring, SpringConfig, Vector2Spring, Vector3Spring};

#[test_case(0.3; "under")]
#[test_case(1.0; "critical")]
#[test_case(2.0; "over")]
fn matches_independent_axes(ratio: f32) {
    let config = SpringConfig::new(0.6, ratio).unwrap();
    let states = common::random_states::<f32>(42, 3);

    let mut spring = Vector3Spring::new(config);
    spring.set_value(Vector::from_fn(|i| states[i].0));
    spring.set_goal(Vector::from_fn(|i| states[i].2));

    let mut scalars = states.iter().map(|&(x, _, goal)| {
        let mut axis = ScalarSpring::new(config);
        axis.set_value(x);
        axis.set_goal(goal);
        axis
    });
    let mut axes: [ScalarSpring<f32>; 3] = core::array::from_fn(|_| scalars.next().unwrap());

    for dt in [0.016, 0.1, 0.5, 2.0, 0.0, 10.0] {
        let expected = Vector3::from_fn(|i| axes[i].update(dt));
        assert_eq!(spring.update(dt), expected, "dt {dt}");
        assert_eq!(spring.velocity(), Vector3::from_fn(|i| axes[i].velocity()));
    }
}

#[test]
fn axes_are_configured_independently() {
    let stiff = SpringConfig::new(0.1_f64, 1.0).unwrap();
    let loose = SpringConfig::new(2.0_f64, 1.0).unwrap();

    let mut spring = Vector2Spring::with_axes([stiff, loose]);
    spring.set_goal(Vector2::xy(1.0, 1.0));
    let value = spring.update(0.5);

    let mut x = ScalarSpring::new(stiff);
    let mut y = ScalarSpring::new(loose);
    x.set_goal(1.0);
    y.set_goal(1.0);
    assert_eq!(value, Vector2::xy(x.update(0.5), y.update(0.5)));
    assert!(value[0] > value[1]);

    assert_eq!(spring.axis(0).config(), &stiff);
    assert_eq!(spring.axis(1).config(), &loose);
}

#[test]
fn distance_is_euclidean() {
    let mut spring = Vector2Spring::new(SpringConfig::default());
    spring.set_value(Vector2::xy(1.0_f64, 2.0));
    spring.set_goal(Vector2::xy(4.0, 6.0));
    assert_eq!(spring.distance_to_goal(), 5.0);
    assert_eq!(spring.goal_value(), Vector2::xy(4.0, 6.0));
    assert_eq!(spring.goal_velocity(), Vector2::zero());
}

#[test]
fn predict_does_not_mutate() {
    let mut spring = Vector3Spring::new(SpringConfig::new(0.25_f32, 0.5).unwrap());
    spring.set_goal(Vector3::xyz(1.0, -2.0, 3.0));
    spring.update(0.1);

    let before = spring;
    let ahead = spring.predict(3.0);
    assert_eq!(spring, before);
    assert!(ahead.distance_to(&spring.goal_value()) < spring.distance_to_goal());
}

#[test]
fn setters_fan_out() {
    let mut spring = Vector3Spring::new(SpringConfig::default());
    spring.set_half_life(0.2_f32);
    spring.set_damping_ratio(1.5);
    for i in 0..3 {
        assert_eq!(spring.axis(i).config(), &SpringConfig::new(0.2, 1.5).unwrap());
    }

    spring.axis_mut(1).set_damping_ratio(0.3);
    assert_eq!(spring.axis(1).config().damping_ratio(), 0.3);
    assert_eq!(spring.axis(2).config().damping_ratio(), 1.5);
}

#[test]
fn converges_in_every_dimension() {
    let mut spring = exact_springs::VectorSpring::<f64, 5>::new(SpringConfig::new(0.5, 0.4).unwrap());
    let goal = Vector::new([1.0, -1.0, 2.0, -2.0, 0.5]);
    spring.set_goal(goal);
    for _ in 0..600 {
        spring.update(1.0 / 60.0);
    }
    assert!(spring.distance_to_goal() < 1e-4);
}
