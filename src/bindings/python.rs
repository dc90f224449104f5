// FFI Facade: the entry point for Python.
// Defines the `_core` module; records, results and letters cross the
// boundary as JSON strings.

use crate::config::EngineConfig;
use crate::compute::{CalculationEngine, CalculationResult};
use crate::dialog::DialogController;
use crate::display::compose_letter;
use crate::model::ContractRecord;
use chrono::NaiveDate;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn engine_for(reference_date: Option<&str>) -> PyResult<CalculationEngine> {
    let mut config = EngineConfig::default();
    if let Some(raw) = reference_date {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| PyValueError::new_err(format!("Invalid reference_date '{}': {}", raw, e)))?;
        config = config.with_reference_date(date);
    }
    Ok(CalculationEngine::new(config))
}

fn parse_record(json: &str) -> PyResult<ContractRecord> {
    ContractRecord::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Runs the calculation and returns the result as JSON.
#[pyfunction]
#[pyo3(signature = (record_json, reference_date=None))]
fn calculate(record_json: &str, reference_date: Option<&str>) -> PyResult<String> {
    let record = parse_record(record_json)?;
    let result = engine_for(reference_date)?
        .calculate(&record)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    result.to_json_string().map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Composes the request letter and returns it as JSON.
#[pyfunction]
#[pyo3(name = "compose_letter", signature = (record_json, result_json, reference_date=None))]
fn compose_letter_json(record_json: &str, result_json: &str, reference_date: Option<&str>) -> PyResult<String> {
    let record = parse_record(record_json)?;
    let result = CalculationResult::from_json_str(result_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let today = engine_for(reference_date)?.config().today();
    let letter = compose_letter(&record, &result, today).map_err(|e| PyValueError::new_err(e.to_string()))?;
    serde_json::to_string(&letter).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pyclass(name = "_DialogController")]
#[derive(Debug, Clone)]
pub struct PyDialogController {
    inner: DialogController,
}

#[pymethods]
impl PyDialogController {
    #[new]
    pub fn new(record_json: &str) -> PyResult<Self> {
        Ok(Self { inner: DialogController::new(parse_record(record_json)?) })
    }

    /// The active question as JSON, or `None` once complete.
    pub fn question(&self) -> PyResult<Option<String>> {
        self.inner
            .question()
            .map(|q| serde_json::to_string(q).map_err(|e| PyRuntimeError::new_err(e.to_string())))
            .transpose()
    }

    /// Returns `(accepted, error_message)`.
    pub fn submit(&mut self, answer: &str) -> (bool, Option<String>) {
        let outcome = self.inner.submit(answer);
        (outcome.accepted, outcome.error_message)
    }

    /// Returns `(current, total, percentage)`.
    pub fn progress(&self) -> (usize, usize, u8) {
        let p = self.inner.progress();
        (p.current, p.total, p.percentage)
    }

    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    pub fn record_json(&self) -> PyResult<String> {
        self.inner.record().to_json_string().map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}

// --- Module Definition ---
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate, m)?)?;
    m.add_function(wrap_pyfunction!(compose_letter_json, m)?)?;
    m.add_class::<PyDialogController>()?;
    Ok(())
}
