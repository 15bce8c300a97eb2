//! Fitness tracker core: regner ut distanse, snittfart og kalorier fra sensorpakker
//! for løp, svømming og sportsgange, og formaterer en rapportlinje per økt.

use log::{debug, warn};

pub mod cli;
pub mod error;
pub mod formulas;
pub mod metrics;
pub mod models;
pub mod report;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use error::WorkoutError;
pub use metrics::Metrics;
pub use models::{Running, SportsWalking, Swimming, Training, Workout};
pub use report::InfoMessage;
pub use types::{Package, WorkoutType};

use metrics::{workout_errors_total, workouts_built_total};
use models::whole_count;

/// Les en sensorpakke og bygg riktig treningstype.
///
/// `workout_type` er sensorkoden ("SWM", "RUN", "WLK") og `data` de posisjonelle
/// verdiene i fast rekkefølge: `action, duration, weight` pluss `height` for gange
/// eller `length_pool, count_pool` for svømming.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    read_package_with(metrics::global(), workout_type, data)
}

/// Som [`read_package`], men teller i en gitt [`Metrics`].
pub fn read_package_with(
    metrics: &Metrics,
    workout_type: &str,
    data: &[f64],
) -> Result<Workout, WorkoutError> {
    match build_workout(workout_type, data) {
        Ok(workout) => {
            workouts_built_total(metrics, workout.workout_type()).inc();
            debug!("built {:?}", workout);
            Ok(workout)
        }
        Err(e) => {
            workout_errors_total(metrics, &e).inc();
            warn!("rejected package {workout_type:?} {data:?}: {e}");
            Err(e)
        }
    }
}

fn build_workout(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutType = workout_type.parse()?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::Arity {
            workout: kind,
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let action = whole_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutType::Running => Running::new(action, duration, weight)?.into(),
        WorkoutType::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutType::Swimming => {
            let count_pool = u32::try_from(whole_count("count_pool", data[4])?).map_err(|_| {
                WorkoutError::Validation {
                    field: "count_pool",
                    value: data[4],
                    reason: "out of range",
                }
            })?;
            Swimming::new(action, duration, weight, data[3], count_pool)?.into()
        }
    };
    Ok(workout)
}

/// Pakke inn → ferdig rapportlinje.
pub fn process_package(workout_type: &str, data: &[f64]) -> Result<String, WorkoutError> {
    let info = read_package(workout_type, data)?.show_training_info();
    let line = info.get_message();
    debug!("{line}");
    Ok(line)
}

/// Parse en JSON-liste med pakker: `[{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]`.
pub fn parse_packages(json_in: &str) -> Result<Vec<Package>, WorkoutError> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let parsed: Result<Vec<Package>, WorkoutError> = serde_path_to_error::deserialize(&mut de)
        .map_err(WorkoutError::from)
        .and_then(|packages| {
            de.end().map_err(|e| WorkoutError::Parse {
                path: ".".to_string(),
                message: e.to_string(),
            })?;
            Ok(packages)
        });

    if let Err(e) = &parsed {
        workout_errors_total(metrics::global(), e).inc();
        warn!("{e}");
    }
    parsed
}

/// Batch: én rapportlinje per pakke. Første feil stopper hele batchen.
pub fn process_packages_json(json_in: &str) -> Result<Vec<String>, WorkoutError> {
    Ok(training_infos_json(json_in)?
        .iter()
        .map(InfoMessage::get_message)
        .collect())
}

/// Batch med strukturert resultat: én [`InfoMessage`] per pakke, klar for serde.
pub fn training_infos_json(json_in: &str) -> Result<Vec<InfoMessage>, WorkoutError> {
    training_infos(&parse_packages(json_in)?)
}

pub fn training_infos(packages: &[Package]) -> Result<Vec<InfoMessage>, WorkoutError> {
    packages
        .iter()
        .map(|p| read_package(&p.workout_type, &p.data).map(|w| w.show_training_info()))
        .collect()
}
