// tests/test_activities.rs
use std::time::Duration;

use approx::assert_relative_eq;
use trainsum_core::activities::{KMH_IN_MSEC, SWIMMING_LEN_STEP};
use trainsum_core::training::LEN_STEP;
use trainsum_core::{CaloriesCalculator, Running, Swimming, Walking, Workout};

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

#[test]
fn swimming_reference_session() {
    let s = Swimming::new("Swimming", 2000, minutes(90), 85.0, 50, 40);

    assert_eq!(s.training.len_step, SWIMMING_LEN_STEP);
    assert_relative_eq!(s.distance(), 2.76, epsilon = 1e-12);
    assert_relative_eq!(s.mean_speed(), 50.0 * 40.0 / 1000.0 / 1.5, epsilon = 1e-12);
    assert_relative_eq!(s.calories(), (4.0 / 3.0 + 1.1) * 2.0 * 85.0 * 1.5, epsilon = 1e-9);
    assert_relative_eq!(s.calories(), 620.5, epsilon = 1e-9);
}

#[test]
fn walking_reference_session() {
    let w = Walking::new("Walking", 20000, minutes(3 * 60 + 45), 85.0, 185.0);

    assert_eq!(w.training.len_step, LEN_STEP);
    assert_relative_eq!(w.distance(), 13.0, epsilon = 1e-12);
    assert_relative_eq!(w.mean_speed(), 13.0 / 3.75, epsilon = 1e-12);

    let v = 13.0 / 3.75 * KMH_IN_MSEC;
    let expected = (0.035 * 85.0 + (v * v / 1.85) * 0.029 * 85.0) * 3.75 * 60.0;
    assert_relative_eq!(w.calories(), expected, epsilon = 1e-9);
    assert!((w.calories() - 947.82).abs() < 0.005);
}

#[test]
fn running_reference_session() {
    let r = Running::new("Running", 5000, minutes(30), 85.0);

    assert_relative_eq!(r.distance(), 3.25, epsilon = 1e-12);
    assert_relative_eq!(r.mean_speed(), 6.5, epsilon = 1e-12);
    assert_relative_eq!(r.calories(), (18.0 * 6.5 + 1.79) * 85.0 / 1000.0 * 0.5 * 60.0, epsilon = 1e-9);
}

#[test]
fn zero_duration_is_not_an_error() {
    let r = Running::new("Running", 5000, Duration::ZERO, 85.0);
    let info = r.training_info();
    assert_eq!(info.speed, 0.0);
    assert_eq!(info.calories, 0.0);
    assert_relative_eq!(info.distance, 3.25, epsilon = 1e-12);

    let w = Walking::new("Walking", 20000, Duration::ZERO, 85.0, 185.0);
    assert_eq!(w.mean_speed(), 0.0);
    assert_eq!(w.calories(), 0.0);

    let s = Swimming::new("Swimming", 2000, Duration::ZERO, 85.0, 50, 40);
    assert_eq!(s.mean_speed(), 0.0);
    assert_eq!(s.calories(), 0.0);
}

#[test]
fn walking_zero_height_keeps_speed() {
    let w = Walking::new("Walking", 20000, minutes(225), 85.0, 0.0);
    assert_eq!(w.calories(), 0.0);
    assert_relative_eq!(w.mean_speed(), 13.0 / 3.75, epsilon = 1e-12);
}

#[test]
fn swimming_distance_and_speed_use_different_inputs() {
    // 1000 tak * 1.38 m = 1.38 km, men 25 m * 10 = 0.25 km på 1 time
    let s = Swimming::new("Swimming", 1000, minutes(60), 70.0, 25, 10);
    assert_relative_eq!(s.distance(), 1.38, epsilon = 1e-12);
    assert_relative_eq!(s.mean_speed(), 0.25, epsilon = 1e-12);

    let info = s.training_info();
    assert_relative_eq!(info.distance, 1.38, epsilon = 1e-12);
    assert_relative_eq!(info.speed, 0.25, epsilon = 1e-12);
    assert_relative_eq!(info.calories, (0.25 + 1.1) * 2.0 * 70.0, epsilon = 1e-9);
}

#[test]
fn workout_dispatches_to_each_override() {
    let swim = Swimming::new("Swimming", 2000, minutes(90), 85.0, 50, 40);
    let workout: Workout = swim.clone().into();

    assert_eq!(workout.training_info(), swim.training_info());
    assert_relative_eq!(workout.mean_speed(), swim.mean_speed(), epsilon = 1e-12);

    let as_dyn: &dyn CaloriesCalculator = &swim;
    assert_relative_eq!(as_dyn.training_info().speed, 4.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn workout_json_is_tagged() {
    let w: Workout = Walking::new("Walking", 100, minutes(2), 60.0, 170.0).into();
    let v = serde_json::to_value(&w).unwrap();
    assert_eq!(v["kind"], "walking");
    assert_eq!(v["height"], 170.0);
    assert_eq!(v["training"]["duration_min"], 2.0);

    let back: Workout = serde_json::from_value(v).unwrap();
    assert_eq!(back, w);
}
