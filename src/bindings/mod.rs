//! Python bindings (feature `python`).

mod context;

pub use context::PySqlContext;

use pyo3::prelude::*;

/// Register classes on the `_rust` module.
pub fn register_module(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySqlContext>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
