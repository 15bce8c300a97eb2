use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::WorkoutError;
use crate::types::WorkoutType;

/// Prosessvide tellere for dispatcheren.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    built: IntCounterVec,
    errors: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let built = IntCounterVec::new(
            Opts::new("workouts_built_total", "Workouts successfully built from sensor packages"),
            &["workout"],
        )?;
        let errors = IntCounterVec::new(
            Opts::new("workout_errors_total", "Sensor packages rejected by the dispatcher"),
            &["reason"],
        )?;

        registry.register(Box::new(built.clone()))?;
        registry.register(Box::new(errors.clone()))?;

        Ok(Self {
            registry,
            built,
            errors,
        })
    }

    /// Prometheus tekstformat.
    pub fn gather_text(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

static GLOBAL: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric names are valid"));

pub fn global() -> &'static Metrics {
    &GLOBAL
}

pub fn workouts_built_total(metrics: &Metrics, workout: WorkoutType) -> IntCounter {
    metrics.built.with_label_values(&[workout.name()])
}

pub fn workout_errors_total(metrics: &Metrics, err: &WorkoutError) -> IntCounter {
    metrics.errors.with_label_values(&[err.reason()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_text_output() {
        let m = Metrics::new().unwrap();
        workouts_built_total(&m, WorkoutType::Running).inc();
        workout_errors_total(&m, &WorkoutError::UnknownWorkoutType("XYZ".into())).inc_by(2);

        let text = m.gather_text().unwrap();
        assert!(text.contains("workouts_built_total{workout=\"Running\"} 1"), "{text}");
        assert!(text.contains("workout_errors_total{reason=\"unknown_type\"} 2"), "{text}");
    }

    #[test]
    fn separate_instances_do_not_share_counts() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        workouts_built_total(&a, WorkoutType::Swimming).inc();
        assert_eq!(workouts_built_total(&b, WorkoutType::Swimming).get(), 0);
    }
}
