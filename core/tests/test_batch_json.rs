// core/tests/test_batch_json.rs
use fitness_tracker_core::{
    parse_packages, process_packages_json, training_infos_json, Package, WorkoutError,
};

const BATCH: &str = r#"[
    {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
    {"workout_type": "RUN", "data": [15000, 1, 75]},
    {"workout_type": "WLK", "data": [9000, 1, 75, 180]}
]"#;

#[test]
fn batch_gives_one_line_per_package() {
    let lines = process_packages_json(BATCH).unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].ends_with("Потрачено ккал: 797.805."));
    assert!(lines[2].contains("Дистанция: 5.850 км"));
}

#[test]
fn integers_in_json_parse_as_numbers() {
    let packages =
        parse_packages(r#"[{"workout_type": "RUN", "data": [15000, 1.5, 75]}]"#).unwrap();
    assert_eq!(packages, vec![Package::new("RUN", &[15000.0, 1.5, 75.0])]);
}

#[test]
fn parse_error_reports_json_path() {
    let bad = r#"[{"workout_type": "RUN", "data": [15000, 1, 75]},
                  {"workout_type": "WLK", "data": [9000, "en", 75, 180]}]"#;
    match process_packages_json(bad).unwrap_err() {
        WorkoutError::Parse { path, .. } => assert_eq!(path, "[1].data[1]"),
        other => panic!("forventet Parse, fikk {other:?}"),
    }
}

#[test]
fn missing_field_is_parse_error() {
    let err = parse_packages(r#"[{"workout_type": "RUN"}]"#).unwrap_err();
    assert_eq!(err.reason(), "parse");
}

#[test]
fn trailing_garbage_is_parse_error() {
    let err = parse_packages(r#"[] []"#).unwrap_err();
    assert!(matches!(err, WorkoutError::Parse { .. }), "{err:?}");
}

#[test]
fn first_bad_package_fails_whole_batch() {
    let bad = r#"[{"workout_type": "RUN", "data": [15000, 1, 75]},
                  {"workout_type": "SWM", "data": [720, 1, 80, 25]}]"#;
    let err = process_packages_json(bad).unwrap_err();
    assert!(matches!(err, WorkoutError::Arity { expected: 5, got: 4, .. }), "{err:?}");
}

#[test]
fn empty_batch_is_ok() {
    assert!(process_packages_json("[]").unwrap().is_empty());
}

#[test]
fn structured_batch_serializes_to_json() {
    let infos = training_infos_json(BATCH).unwrap();
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[1].training_type, "Running");

    let v: serde_json::Value = serde_json::to_value(&infos).unwrap();
    assert_eq!(v[0]["training_type"], "Swimming");
    assert_eq!(v[0]["speed"].as_f64(), Some(1.0));
    assert!((v[1]["calories"].as_f64().unwrap() - 797.805).abs() < 1e-9);
    assert!((v[2]["distance"].as_f64().unwrap() - 5.85).abs() < 1e-9);
}

#[test]
fn structured_batch_matches_text_lines() {
    let infos = training_infos_json(BATCH).unwrap();
    let lines = process_packages_json(BATCH).unwrap();
    for (info, line) in infos.iter().zip(&lines) {
        assert_eq!(&info.get_message(), line);
    }
}
