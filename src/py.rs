use crate::{cascade, run_text, CascadeRequest, EngineConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3::{wrap_pyfunction, Bound};

// ─── Rust side ──────────────────────────────────────
fn cascade_impl(json_text: &str) -> PyResult<String> {
    let req: CascadeRequest =
        serde_json::from_str(json_text).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let resp = cascade(req).map_err(|e| PyValueError::new_err(e.to_string()))?;
    serde_json::to_string(&resp).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn cascade_text_impl(text: &str) -> PyResult<String> {
    run_text(text, &EngineConfig::default()).map_err(|e| PyValueError::new_err(e.to_string()))
}

// ─── Called from Python ─────────────────────────────
#[pyfunction]
fn cascade_py(json_text: &str) -> PyResult<String> {
    cascade_impl(json_text)
}

#[pyfunction]
fn cascade_text_py(text: &str) -> PyResult<String> {
    cascade_text_impl(text)
}

// ─── Module init ────────────────────────────────────
#[pymodule]
fn dominoes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cascade_py, m)?)?;
    m.add_function(wrap_pyfunction!(cascade_text_py, m)?)?;
    Ok(())
}
