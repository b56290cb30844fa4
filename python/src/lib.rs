//! directlz4-python
//!
//! Python bindings for directlz4-core (PyO3).

use pyo3::prelude::*;

mod ffi;
mod window;

/// Python module entry point
#[pymodule]
fn directlz4(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)?;
    Ok(())
}
