//! SQLContext PyO3 wrapper (main API).

use crate::context::SqlContext;
use crate::types::{Record, SqlError, Value};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyBytes, PyDict, PyFloat, PyList, PyLong, PyString, PyTuple};

/// Map a crate error to the matching Python exception.
///
/// Schema conflicts are `ValueError`; everything else is `RuntimeError`.
fn to_py_err(err: SqlError) -> PyErr {
    match err {
        SqlError::SchemaConflict { .. } => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
        other => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(other.to_string()),
    }
}

/// Convert a Python scalar to a `Value`.
///
/// `bool` is checked before `int` since Python booleans are ints.
fn extract_value(obj: &PyAny) -> PyResult<Value> {
    if obj.is_none() {
        Ok(Value::Null)
    } else if let Ok(b) = obj.downcast::<PyBool>() {
        Ok(Value::Boolean(b.is_true()))
    } else if obj.is_instance_of::<PyLong>() {
        Ok(Value::Integer(obj.extract::<i64>()?))
    } else if obj.is_instance_of::<PyFloat>() {
        Ok(Value::Float(obj.extract::<f64>()?))
    } else if let Ok(s) = obj.downcast::<PyString>() {
        Ok(Value::Text(s.to_str()?.to_string()))
    } else if let Ok(b) = obj.downcast::<PyBytes>() {
        Ok(Value::Binary(b.as_bytes().to_vec()))
    } else {
        Err(PyErr::new::<pyo3::exceptions::PyTypeError, _>(format!(
            "Unsupported value type: {}",
            obj.get_type().name()?
        )))
    }
}

fn dict_to_record(dict: &PyDict) -> PyResult<Record> {
    let mut record = Record::new();
    for (key, value) in dict.iter() {
        record.insert(key.extract::<String>()?, extract_value(value)?);
    }
    Ok(record)
}

fn value_to_py(py: Python<'_>, value: &Value) -> PyObject {
    match value {
        Value::Null => py.None(),
        Value::Integer(i) => i.to_object(py),
        Value::Float(f) => f.to_object(py),
        Value::Text(s) => s.to_object(py),
        Value::Binary(b) => PyBytes::new(py, b).to_object(py),
        Value::Boolean(b) => b.to_object(py),
    }
}

/// Python wrapper for SqlContext.
///
/// ```python
/// ctx = SQLContext()
/// ctx.table_from_dicts("t", [{"a": 1, "b": "x"}, {"a": 2}])
/// ctx("SELECT * FROM t")  # [(1, 'x'), (2, None)]
/// ```
#[pyclass(name = "SQLContext")]
pub struct PySqlContext {
    inner: SqlContext,
}

#[pymethods]
impl PySqlContext {
    /// Create a new in-memory session.
    #[new]
    fn new() -> PyResult<Self> {
        let inner = SqlContext::new().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Replace a table with the contents of a list of dicts.
    ///
    /// # Arguments
    ///
    /// * `table_name` - Table to (re)create
    /// * `rows` - Iterable of dicts
    fn table_from_dicts(&mut self, table_name: &str, rows: &PyAny) -> PyResult<()> {
        let mut records = Vec::new();
        for item in rows.iter()? {
            let dict = item?.downcast::<PyDict>()?;
            records.push(dict_to_record(dict)?);
        }

        self.inner
            .table_from_dicts(table_name, &records)
            .map_err(to_py_err)
    }

    /// Execute SQL and return rows as a list of tuples.
    fn __call__(&self, py: Python<'_>, query: &str) -> PyResult<PyObject> {
        let rows = self.inner.query(query).map_err(to_py_err)?;

        let tuples: Vec<&PyTuple> = rows
            .iter()
            .map(|row| PyTuple::new(py, row.iter().map(|v| value_to_py(py, v))))
            .collect();

        Ok(PyList::new(py, tuples).to_object(py))
    }
}
