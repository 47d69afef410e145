use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::dispatch::{read_package, read_packages_json};
use crate::error::WorkoutError;

fn to_py_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Kode + verdier → ferdig rapportlinje.
#[pyfunction]
fn read_package_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(to_py_err)?;
    Ok(workout.show_training_info().get_message())
}

/// Kode + verdier → oppsummering som JSON-string.
#[pyfunction]
fn read_package_json(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(to_py_err)?;
    serde_json::to_string(&workout.show_training_info())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize summary: {e}")))
}

/// JSON-liste med pakker → liste med rapportlinjer.
#[pyfunction]
fn report_from_json(json_in: &str) -> PyResult<Vec<String>> {
    let workouts = read_packages_json(json_in).map_err(to_py_err)?;
    Ok(workouts
        .iter()
        .map(|w| w.show_training_info().get_message())
        .collect())
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(read_package_json, m)?)?;
    m.add_function(wrap_pyfunction!(report_from_json, m)?)?;
    Ok(())
}
