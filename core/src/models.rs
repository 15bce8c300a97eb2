use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;
use crate::formulas::{self, LEN_STEP, LEN_STROKE};
use crate::report::InfoMessage;
use crate::types::WorkoutType;

/// Felles oppførsel for alle treningstyper.
///
/// Distanse og snittfart har standardimplementasjoner basert på `len_step()`;
/// en type overstyrer bare det som faktisk er annerledes.
pub trait Training {
    fn workout_type(&self) -> WorkoutType;
    fn action(&self) -> u64;
    /// Varighet i timer.
    fn duration(&self) -> f64;

    /// Lengde på ett skritt/tak i meter.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn distance(&self) -> f64 {
        formulas::distance_km(self.action(), self.len_step())
    }

    /// Snittfart i km/t.
    fn mean_speed(&self) -> f64 {
        formulas::mean_speed_kmh(self.action(), self.len_step(), self.duration())
    }

    /// Forbrukte kalorier (kcal).
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type().name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunningIn")]
pub struct Running {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwimmingIn")]
pub struct Swimming {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Bassenglengde i meter.
    pub length_pool: f64,
    /// Antall lengder svømt.
    pub count_pool: u32,
}

/// Sportsgange (race walking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SportsWalkingIn")]
pub struct SportsWalking {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Høyde i cm.
    pub height: f64,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        validate_common(duration, weight)?;
        let t = Self {
            action,
            duration,
            weight,
        };
        ensure_finite_outputs(&t)?;
        Ok(t)
    }
}

impl Swimming {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, WorkoutError> {
        validate_common(duration, weight)?;
        non_negative("length_pool", length_pool)?;
        let t = Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        };
        ensure_finite_outputs(&t)?;
        Ok(t)
    }
}

impl SportsWalking {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, WorkoutError> {
        validate_common(duration, weight)?;
        positive("height", height)?;
        let t = Self {
            action,
            duration,
            weight,
            height,
        };
        ensure_finite_outputs(&t)?;
        Ok(t)
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn spent_calories(&self) -> f64 {
        formulas::running_calories(self.mean_speed(), self.weight, self.duration)
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    // Fart fra bassenglengder, ikke fra antall tak.
    fn mean_speed(&self) -> f64 {
        formulas::pool_speed_kmh(self.length_pool, self.count_pool, self.duration)
    }

    fn spent_calories(&self) -> f64 {
        formulas::swimming_calories(self.mean_speed(), self.weight, self.duration)
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn spent_calories(&self) -> f64 {
        formulas::walking_calories(self.mean_speed(), self.weight, self.height, self.duration)
    }
}

/// En ferdig validert treningsøkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Workout {
    Running(Running),
    Swimming(Swimming),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Swimming(t) => t,
            Workout::SportsWalking(t) => t,
        }
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    pub fn show_training_info(&self) -> InfoMessage {
        self.as_training().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

// ----- serde-inngang: går alltid via konstruktørene -----

#[derive(Deserialize)]
struct RunningIn {
    action: u64,
    duration: f64,
    weight: f64,
}

#[derive(Deserialize)]
struct SwimmingIn {
    action: u64,
    duration: f64,
    weight: f64,
    length_pool: f64,
    count_pool: u32,
}

#[derive(Deserialize)]
struct SportsWalkingIn {
    action: u64,
    duration: f64,
    weight: f64,
    height: f64,
}

impl TryFrom<RunningIn> for Running {
    type Error = WorkoutError;

    fn try_from(r: RunningIn) -> Result<Self, Self::Error> {
        Running::new(r.action, r.duration, r.weight)
    }
}

impl TryFrom<SwimmingIn> for Swimming {
    type Error = WorkoutError;

    fn try_from(s: SwimmingIn) -> Result<Self, Self::Error> {
        Swimming::new(s.action, s.duration, s.weight, s.length_pool, s.count_pool)
    }
}

impl TryFrom<SportsWalkingIn> for SportsWalking {
    type Error = WorkoutError;

    fn try_from(w: SportsWalkingIn) -> Result<Self, Self::Error> {
        SportsWalking::new(w.action, w.duration, w.weight, w.height)
    }
}

// ----- validering -----

fn validate_common(duration: f64, weight: f64) -> Result<(), WorkoutError> {
    positive("duration", duration)?;
    non_negative("weight", weight)?;
    Ok(())
}

/// Endelige inndata kan fortsatt gi inf (f.eks. varighet 1e-310 eller vekt 1e308).
fn ensure_finite_outputs(t: &dyn Training) -> Result<(), WorkoutError> {
    let outputs = [
        ("distance", t.distance()),
        ("mean_speed", t.mean_speed()),
        ("calories", t.spent_calories()),
    ];
    for (field, value) in outputs {
        if !value.is_finite() {
            return Err(WorkoutError::Validation {
                field,
                value,
                reason: "result is not finite",
            });
        }
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::Validation {
            field,
            value,
            reason: "must be finite",
        })
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::Validation {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::Validation {
            field,
            value,
            reason: "must not be negative",
        })
    }
}

/// Tellinger (skritt, tak, lengder) kommer inn som tall fra sensoren, men må være hele.
pub(crate) fn whole_count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    let v = non_negative(field, value)?;
    if v.fract() != 0.0 || v >= u64::MAX as f64 {
        return Err(WorkoutError::Validation {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_rejected() {
        let err = Running::new(100, 0.0, 70.0).unwrap_err();
        assert_eq!(err.reason(), "validation");
    }

    #[test]
    fn whole_count_rejects_fractions_and_negatives() {
        assert_eq!(whole_count("action", 720.0).unwrap(), 720);
        assert!(whole_count("action", 720.5).is_err());
        assert!(whole_count("action", -1.0).is_err());
        assert!(whole_count("action", f64::NAN).is_err());
    }

    #[test]
    fn swimming_overrides_step_length() {
        let s = Swimming::new(1000, 1.0, 70.0, 25.0, 10).unwrap();
        assert_eq!(s.len_step(), LEN_STROKE);
        let r = Running::new(1000, 1.0, 70.0).unwrap();
        assert_eq!(r.len_step(), LEN_STEP);
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let err = Running::new(15000, 1.0, 1e308).unwrap_err();
        assert!(
            matches!(err, WorkoutError::Validation { field: "calories", .. }),
            "{err:?}"
        );
    }
}
