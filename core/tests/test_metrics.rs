// core/tests/test_metrics.rs
use fitness_tracker_core::metrics::{self, workout_errors_total, workouts_built_total};
use fitness_tracker_core::{read_package, read_package_with, Metrics, WorkoutError, WorkoutType};

#[test]
fn dispatcher_counts_built_and_rejected_packages() {
    let m = Metrics::new().unwrap();

    read_package_with(&m, "RUN", &[15000.0, 1.0, 75.0]).unwrap();
    read_package_with(&m, "RUN", &[5000.0, 0.5, 60.0]).unwrap();
    read_package_with(&m, "SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let _ = read_package_with(&m, "XYZ", &[1.0]);
    let _ = read_package_with(&m, "WLK", &[9000.0, 0.0, 75.0, 180.0]);

    assert_eq!(workouts_built_total(&m, WorkoutType::Running).get(), 2);
    assert_eq!(workouts_built_total(&m, WorkoutType::Swimming).get(), 1);
    assert_eq!(workouts_built_total(&m, WorkoutType::SportsWalking).get(), 0);

    let unknown = WorkoutError::UnknownWorkoutType(String::new());
    assert_eq!(workout_errors_total(&m, &unknown).get(), 1);
    let text = m.gather_text().unwrap();
    assert!(text.contains("workout_errors_total{reason=\"validation\"} 1"), "{text}");
}

#[test]
fn global_counters_only_grow() {
    let g = metrics::global();
    let before = workouts_built_total(g, WorkoutType::SportsWalking).get();
    read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert!(workouts_built_total(g, WorkoutType::SportsWalking).get() >= before + 1);
}
