//! # fastjson-python
//!
//! Python bindings for the fastjson codec, built with PyO3.
//!
//! Exposes the following functions to Python as the `fastjson` module:
//!
//! - `loads(text)` -- JSON string -> Python value
//! - `dumps(obj)` -- Python value -> compact JSON string
//! - `load(fp)` -- read a whole document from a file-like object
//! - `dump(obj, fp)` -- write compact JSON to a file-like object
//!
//! This crate is the Python instance of the codec's conversion layer: the
//! only place where Python's native types meet the `Value` tree. Dispatch
//! is an exhaustive type-switch (bool before int, since Python's bool is an
//! int subclass), dict keys coerce through `MapKey`, and file-like
//! arguments are duck-typed on their `read`/`write` capability.

use fastjson_core::{JsonError, MapKey, Value};
use num_bigint::BigInt;
use pyo3::exceptions::{PyRecursionError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyBytes, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

/// Map a codec error onto the exception class Python callers expect:
/// malformed documents and unusable values raise `ValueError`, the nesting
/// bound raises `RecursionError`. Capability failures (`TypeError`) never
/// come out of the core codec; they are raised directly by this module.
fn codec_err(err: JsonError) -> PyErr {
    match err {
        JsonError::DepthLimit(_) => PyRecursionError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "object".to_string())
}

/// Convert a codec value into native Python objects. Object member order is
/// preserved into the dict's iteration order; integers convert exactly at
/// any magnitude.
fn value_to_py(py: Python<'_>, value: &Value) -> PyResult<PyObject> {
    match value {
        Value::Null => Ok(py.None()),
        Value::Bool(b) => Ok(PyBool::new(py, *b).to_owned().into_any().unbind()),
        Value::Int(i) => Ok(i.into_pyobject(py)?.into_any().unbind()),
        Value::Float(f) => Ok(PyFloat::new(py, *f).into_any().unbind()),
        Value::String(s) => Ok(PyString::new(py, s).into_any().unbind()),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(value_to_py(py, item)?)?;
            }
            Ok(list.into_any().unbind())
        }
        Value::Object(members) => {
            let dict = PyDict::new(py);
            for (key, member) in members {
                dict.set_item(key, value_to_py(py, member)?)?;
            }
            Ok(dict.into_any().unbind())
        }
    }
}

/// Convert a native Python object into a codec value.
///
/// Accepted inputs: `None`, `bool`, `int`, `float`, `str`, `list`, `tuple`,
/// `dict`. Anything else raises `TypeError` naming the offending type --
/// there is no implicit `__dict__` flattening. The depth counter turns
/// self-referential containers into `RecursionError` instead of a crash.
fn py_to_value(obj: &Bound<'_, PyAny>, depth: usize) -> PyResult<Value> {
    if depth > fastjson_core::MAX_DEPTH {
        return Err(PyRecursionError::new_err("value is nested too deeply"));
    }
    if obj.is_none() {
        return Ok(Value::Null);
    }
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if obj.downcast::<PyInt>().is_ok() {
        return Ok(Value::Int(obj.extract::<BigInt>()?));
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(f.value()));
    }
    if obj.downcast::<PyString>().is_ok() {
        return Ok(Value::String(obj.extract::<String>()?));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            items.push(py_to_value(&item, depth + 1)?);
        }
        return Ok(Value::Array(items));
    }
    if let Ok(tuple) = obj.downcast::<PyTuple>() {
        let mut items = Vec::with_capacity(tuple.len());
        for item in tuple.iter() {
            items.push(py_to_value(&item, depth + 1)?);
        }
        return Ok(Value::Array(items));
    }
    if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut pairs = Vec::with_capacity(dict.len());
        for (key, member) in dict.iter() {
            pairs.push((py_key(&key)?, py_to_value(&member, depth + 1)?));
        }
        return fastjson_core::object_from_pairs(pairs).map_err(codec_err);
    }
    Err(PyTypeError::new_err(format!(
        "{} is not JSON serializable",
        type_name(obj)
    )))
}

/// Coerce a dict key. Non-string keys print exactly as they would in number
/// position, so `{-1.99: 1}` serializes as `{"-1.99":1}`.
fn py_key(key: &Bound<'_, PyAny>) -> PyResult<MapKey> {
    if key.downcast::<PyString>().is_ok() {
        return Ok(MapKey::Str(key.extract::<String>()?));
    }
    if let Ok(b) = key.downcast::<PyBool>() {
        return Ok(MapKey::Bool(b.is_true()));
    }
    if key.downcast::<PyInt>().is_ok() {
        return Ok(MapKey::Int(key.extract::<BigInt>()?));
    }
    if let Ok(f) = key.downcast::<PyFloat>() {
        return Ok(MapKey::Float(f.value()));
    }
    Err(PyTypeError::new_err(format!(
        "keys must be str, int, float or bool, not {}",
        type_name(key)
    )))
}

/// Parse a JSON document from a string.
///
/// Args:
///     text: A complete JSON document.
///
/// Returns:
///     The corresponding Python value. Object key order follows the
///     document; integers keep arbitrary precision.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
///     RecursionError: If the document nests deeper than the supported
///         bound.
#[pyfunction]
fn loads(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let value = fastjson_core::loads(text).map_err(codec_err)?;
    value_to_py(py, &value)
}

/// Serialize a Python value to a compact JSON string.
///
/// Args:
///     obj: `None`, `bool`, `int`, `float`, `str`, `list`, `tuple`, or
///         `dict` (nested arbitrarily). Non-string dict keys are coerced
///         to their canonical string form.
///
/// Returns:
///     The compact JSON text (no insignificant whitespace).
///
/// Raises:
///     TypeError: If a value (or dict key) has an unsupported type.
///     ValueError: If a float has no JSON representation (NaN, inf).
#[pyfunction]
fn dumps(obj: &Bound<'_, PyAny>) -> PyResult<String> {
    let value = py_to_value(obj, 0)?;
    fastjson_core::dumps(&value).map_err(codec_err)
}

/// Parse a JSON document from a readable file-like object.
///
/// Args:
///     fp: Any object with a callable `read()` returning `str` or UTF-8
///         `bytes`.
///
/// Returns:
///     The corresponding Python value, as with `loads`.
///
/// Raises:
///     TypeError: If `fp` has no read capability.
///     ValueError: If the stream is closed, empty, exhausted, or does not
///         decode as UTF-8, or if its content is not valid JSON.
#[pyfunction]
fn load(py: Python<'_>, fp: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let read = fp.getattr("read").map_err(|_| {
        PyTypeError::new_err(format!(
            "load() requires a readable stream, got {}",
            type_name(fp)
        ))
    })?;
    if !read.is_callable() {
        return Err(PyTypeError::new_err(
            "load() requires a readable stream: 'read' is not callable",
        ));
    }

    // A closed file raises ValueError from read() itself, which propagates.
    let data = read.call0()?;
    let text = if let Ok(bytes) = data.downcast::<PyBytes>() {
        std::str::from_utf8(bytes.as_bytes())
            .map_err(|_| PyValueError::new_err("stream did not decode as UTF-8"))?
            .to_owned()
    } else if data.downcast::<PyString>().is_ok() {
        data.extract::<String>()?
    } else {
        return Err(PyTypeError::new_err("read() must return str or bytes"));
    };
    if text.is_empty() {
        return Err(PyValueError::new_err("stream is empty or exhausted"));
    }

    let value = fastjson_core::loads(&text).map_err(codec_err)?;
    value_to_py(py, &value)
}

/// Serialize a Python value as compact JSON to a writable file-like object.
///
/// Args:
///     obj: The value to serialize, as with `dumps`.
///     fp: Any object with a callable `write(text)`.
///
/// Raises:
///     TypeError: If `fp` has no write capability, or `obj` has an
///         unsupported type.
///     ValueError: If the stream is closed, or a float has no JSON
///         representation.
#[pyfunction]
fn dump(obj: &Bound<'_, PyAny>, fp: &Bound<'_, PyAny>) -> PyResult<()> {
    let write = fp.getattr("write").map_err(|_| {
        PyTypeError::new_err(format!(
            "dump() requires a writable stream, got {}",
            type_name(fp)
        ))
    })?;
    if !write.is_callable() {
        return Err(PyTypeError::new_err(
            "dump() requires a writable stream: 'write' is not callable",
        ));
    }

    let value = py_to_value(obj, 0)?;
    let text = fastjson_core::dumps(&value).map_err(codec_err)?;
    // A closed file raises ValueError from write() itself, which propagates.
    write.call1((text,))?;
    Ok(())
}

/// The `fastjson` Python module, implemented in Rust via PyO3.
#[pymodule]
fn fastjson(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(loads, m)?)?;
    m.add_function(wrap_pyfunction!(dumps, m)?)?;
    m.add_function(wrap_pyfunction!(load, m)?)?;
    m.add_function(wrap_pyfunction!(dump, m)?)?;
    Ok(())
}
