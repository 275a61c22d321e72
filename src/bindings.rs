//! Python bindings
//!
//! Exposes the shared age control to a Python host. Points cross the
//! boundary as `(x, y)` tuples.

use crate::config::{DirSettings, MemorySettings};
use crate::control;
use crate::offset::Point;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Deserialize settings from a Python dict of `{key: float | str}`
fn deserialize_settings(dict: &Bound<'_, PyDict>) -> PyResult<MemorySettings> {
    let mut settings = MemorySettings::new();
    for (key, value) in dict.iter() {
        let key: String = key.extract()?;
        let text = if let Ok(number) = value.extract::<f64>() {
            number.to_string()
        } else {
            value.extract::<String>()?
        };
        settings.insert(key, text);
    }
    Ok(settings)
}

/// Load age control settings (call once at startup, again to reload)
///
/// # Arguments
/// * `settings` - Optional dict of setting keys, e.g. `{"lifespanMultiplier": 1.5}`.
///   Missing keys use their defaults.
#[pyfunction]
#[pyo3(signature = (settings=None))]
fn init_age_control(settings: Option<&Bound<'_, PyDict>>) -> PyResult<()> {
    let mut source = match settings {
        Some(dict) => deserialize_settings(dict)?,
        None => MemorySettings::new(),
    };
    control::init_age_control(&mut source)?;
    Ok(())
}

/// Load age control settings from a directory of `<key>.ini` files
#[pyfunction]
fn init_age_control_from_dir(path: String) -> PyResult<()> {
    let mut source = DirSettings::new(path);
    control::init_age_control(&mut source)?;
    Ok(())
}

#[pyfunction]
fn is_age_control_initialized() -> bool {
    control::is_initialized()
}

#[pyfunction]
fn compute_display_age(server_age: f64) -> f64 {
    control::compute_display_age(server_age)
}

#[pyfunction]
fn compute_server_age(display_age: f64) -> f64 {
    control::compute_server_age(display_age)
}

/// Head offset for `age` given head, body and front-foot sprite anchors
#[pyfunction]
fn get_age_head_offset(
    age: f64,
    head: (f64, f64),
    body: (f64, f64),
    front_foot: (f64, f64),
) -> (f64, f64) {
    control::get_age_head_offset(age, Point::from(head), Point::from(body), Point::from(front_foot))
        .into()
}

#[pyfunction]
fn get_age_body_offset(age: f64, body: (f64, f64)) -> (f64, f64) {
    control::get_age_body_offset(age, Point::from(body)).into()
}

/// Python module definition
#[pymodule]
fn age_control_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_age_control, m)?)?;
    m.add_function(wrap_pyfunction!(init_age_control_from_dir, m)?)?;
    m.add_function(wrap_pyfunction!(is_age_control_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(compute_display_age, m)?)?;
    m.add_function(wrap_pyfunction!(compute_server_age, m)?)?;
    m.add_function(wrap_pyfunction!(get_age_head_offset, m)?)?;
    m.add_function(wrap_pyfunction!(get_age_body_offset, m)?)?;
    Ok(())
}
