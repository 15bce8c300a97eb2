use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::WorkoutError;

fn to_py_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// Python-API
// ──────────────────────────────────────────────────────────────────────────────

/// read_package_message("RUN", [15000, 1, 75]) -> rapportlinje
#[pyfunction]
fn read_package_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    crate::process_package(workout_type, &data).map_err(to_py_err)
}

/// JSON-batch inn, én linje per pakke ut.
#[pyfunction]
fn process_packages_json(json_in: &str) -> PyResult<Vec<String>> {
    crate::process_packages_json(json_in).map_err(to_py_err)
}

/// Som `process_packages_json`, men som JSON-liste av strukturerte rapporter.
#[pyfunction]
fn training_infos_json(json_in: &str) -> PyResult<String> {
    let infos = crate::training_infos_json(json_in).map_err(to_py_err)?;
    serde_json::to_string(&infos)
        .map_err(|e| PyValueError::new_err(format!("failed to serialize report: {e}")))
}

/// Tellere i Prometheus tekstformat.
#[pyfunction]
fn metrics_text() -> PyResult<String> {
    crate::metrics::global()
        .gather_text()
        .map_err(|e| PyValueError::new_err(format!("failed to gather metrics: {e}")))
}

#[pymodule]
fn fitness_tracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(process_packages_json, m)?)?;
    m.add_function(wrap_pyfunction!(training_infos_json, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
