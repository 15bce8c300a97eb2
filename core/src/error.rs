use thiserror::Error;

use crate::types::WorkoutType;

/// Feil ved bygging av en treningsøkt fra sensorpakker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType(String),

    #[error("{workout} expects {expected} values, got {got}")]
    Arity {
        workout: WorkoutType,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}={value}: {reason}")]
    Validation {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
}

impl WorkoutError {
    /// Label brukt i `workout_errors_total{reason=...}`.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_type",
            WorkoutError::Arity { .. } => "arity",
            WorkoutError::Validation { .. } => "validation",
            WorkoutError::Parse { .. } => "parse",
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for WorkoutError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        WorkoutError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}
