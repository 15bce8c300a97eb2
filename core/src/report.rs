use std::fmt;

use serde::Serialize;

/// Informasjonsmelding om en gjennomført treningsøkt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Timer.
    pub duration: f64,
    /// km
    pub distance: f64,
    /// km/t
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Rapportlinjen; alle tall med nøyaktig tre desimaler.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
