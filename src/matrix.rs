use campus_route_core::prelude::*;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::{PyRouteModel, value_error};
use crate::routing::route_error;

/// All-pairs travel times in minutes for a mode; ``None`` where a landmark
/// cannot be reached. Row ``i`` holds the times from landmark ``i``.
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (route_model, mode="walking"))]
pub fn travel_time_matrix(
    py: Python<'_>,
    route_model: &PyRouteModel,
    mode: &str,
) -> PyResult<Vec<Vec<Option<f64>>>> {
    let mode: Mode = mode.parse().map_err(value_error)?;
    let graph = route_model.model.graph();

    py.detach(|| campus_route_core::travel_time_matrix(graph, WeightKey::duration(mode)))
        .map_err(route_error)
}
