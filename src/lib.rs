use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::travel_time_matrix;
use model::{PyRouteModel, py_create_route_model, py_load_route_model};
use routing::{find_alternative_route, find_route, py_format_duration, route_geojson};

pub mod matrix;
pub mod model;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn campus_route(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyRouteModel>()?;
    m.add_function(wrap_pyfunction!(py_create_route_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_load_route_model, m)?)?;

    m.add_function(wrap_pyfunction!(find_route, m)?)?;
    m.add_function(wrap_pyfunction!(find_alternative_route, m)?)?;
    m.add_function(wrap_pyfunction!(route_geojson, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_duration, m)?)?;

    m.add_function(wrap_pyfunction!(travel_time_matrix, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
