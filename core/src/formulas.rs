// core/src/formulas.rs
// Faste konstanter og lukkede formler for distanse, fart og kalorier.
// Rekkefølgen på operasjonene er bevisst lik referansen slik at f64-resultatet blir bit-likt.

pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_H: f64 = 60.0;      // minutter per time
pub const CM_IN_M: f64 = 100.0;      // cm per meter
pub const KMH_IN_MSEC: f64 = 0.278;  // km/t → m/s

pub const LEN_STEP: f64 = 0.65;      // skrittlengde løp/gange (m)
pub const LEN_STROKE: f64 = 1.38;    // taklengde svømming (m)

// Løp
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

// Svømming
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

// Sportsgange
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Distanse (km) = antall bevegelser * lengde / 1000.
#[inline]
pub fn distance_km(action: u64, len_step: f64) -> f64 {
    action as f64 * len_step / M_IN_KM
}

/// Snittfart (km/t) ut fra bevegelser og varighet i timer.
#[inline]
pub fn mean_speed_kmh(action: u64, len_step: f64, duration_h: f64) -> f64 {
    (action as f64 * len_step / M_IN_KM) / duration_h
}

/// Svømmefart (km/t) ut fra bassenglengde og antall lengder.
#[inline]
pub fn pool_speed_kmh(length_pool_m: f64, count_pool: u32, duration_h: f64) -> f64 {
    length_pool_m * count_pool as f64 / M_IN_KM / duration_h
}

/// (18 * fart + 1.79) * vekt / 1000 * minutter
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (CALORIES_MEAN_SPEED_MULTIPLIER * speed_kmh + CALORIES_MEAN_SPEED_SHIFT) * weight_kg
        / M_IN_KM
        * (duration_h * MIN_IN_H)
}

/// (fart + 1.1) * 2 * vekt * timer
pub fn swimming_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg * duration_h
}

/// (0.035 * vekt + (v_ms² / høyde_m) * 0.029 * vekt) * minutter
pub fn walking_calories(speed_kmh: f64, weight_kg: f64, height_cm: f64, duration_h: f64) -> f64 {
    let height_m = height_cm / CM_IN_M;
    let speed_ms = speed_kmh * KMH_IN_MSEC;
    let duration_min = duration_h * MIN_IN_H;
    (CALORIES_WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_min
}
