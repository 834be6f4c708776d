use campus_route_core::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::{PyRouteModel, value_error};

/// Convert a route error to the matching Python exception
pub(crate) fn route_error(e: Error) -> PyErr {
    match e {
        Error::InvalidNode(_) | Error::InvalidData(_) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
        }
        _ => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Route calculation failed: {e}"
        )),
    }
}

/// Convert a RouteSummary to a Python dictionary
fn summary_to_py(
    py: Python<'_>,
    model: &RouteModel,
    summary: &RouteSummary,
) -> PyResult<Py<PyAny>> {
    let names = model.landmarks().names(&summary.path).map_err(route_error)?;

    let dict = PyDict::new(py);
    dict.set_item("path", &summary.path)?;
    dict.set_item("names", names)?;
    dict.set_item("mode", summary.mode.profile())?;
    dict.set_item("total_distance_km", summary.total_distance_km)?;
    dict.set_item("total_duration_minutes", summary.total_duration_minutes)?;
    dict.set_item(
        "travel_time",
        format_duration(summary.total_duration_minutes),
    )?;

    Ok(dict.into_any().unbind())
}

/// Find a route between two landmarks
///
/// Without waypoints this is the fastest route for the mode; a walking route
/// that is a single straight edge is bent through the landmark closest to
/// the line between start and end. With waypoints, the landmarks are visited
/// in the given order.
///
/// Returns a dict with ``path``, ``names``, ``mode``, ``total_distance_km``,
/// ``total_duration_minutes`` and a formatted ``travel_time``.
///
/// Raises ValueError for unknown landmark ids or modes and RuntimeError when
/// a landmark cannot be reached.
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (route_model, start, end, mode="walking", waypoints=None))]
pub fn find_route(
    py: Python<'_>,
    route_model: &PyRouteModel,
    start: LandmarkId,
    end: LandmarkId,
    mode: &str,
    waypoints: Option<Vec<LandmarkId>>,
) -> PyResult<Py<PyAny>> {
    let mode: Mode = mode.parse().map_err(value_error)?;
    let waypoints = waypoints.unwrap_or_default();
    let model = &route_model.model;

    let summary = py
        .detach(|| campus_route_core::find_route(model, start, end, mode, &waypoints))
        .map_err(route_error)?;

    summary_to_py(py, model, &summary)
}

/// Find a route that passes through at least one intermediate landmark
///
/// If the fastest route already has an intermediate landmark it is returned
/// as is. Otherwise every other landmark is tried as a via point, in id
/// order. With the default policy a candidate is taken when its duration is
/// below ``best * (1 + threshold)`` of the best one seen so far, so a later
/// candidate within the margin wins over an earlier, slightly faster one.
/// Pass ``global_minimum=True`` to always take the fastest candidate.
///
/// Returns the same dict as ``find_route``, or None when the landmarks are
/// not connected.
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (route_model, start, end, mode="walking", threshold=0.1, global_minimum=false))]
pub fn find_alternative_route(
    py: Python<'_>,
    route_model: &PyRouteModel,
    start: LandmarkId,
    end: LandmarkId,
    mode: &str,
    threshold: f64,
    global_minimum: bool,
) -> PyResult<Option<Py<PyAny>>> {
    let mode: Mode = mode.parse().map_err(value_error)?;
    let options = AlternativeOptions {
        threshold,
        policy: if global_minimum {
            AcceptancePolicy::GlobalMinimum
        } else {
            AcceptancePolicy::RunningThreshold
        },
    };
    let model = &route_model.model;

    let summary = py
        .detach(|| campus_route_core::find_alternative_route(model, start, end, mode, &options))
        .map_err(route_error)?;

    summary
        .map(|summary| summary_to_py(py, model, &summary))
        .transpose()
}

/// Same route as ``find_route``, as a GeoJSON Feature string with a
/// LineString through the visited landmarks
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (route_model, start, end, mode="walking", waypoints=None))]
pub fn route_geojson(
    py: Python<'_>,
    route_model: &PyRouteModel,
    start: LandmarkId,
    end: LandmarkId,
    mode: &str,
    waypoints: Option<Vec<LandmarkId>>,
) -> PyResult<String> {
    let mode: Mode = mode.parse().map_err(value_error)?;
    let waypoints = waypoints.unwrap_or_default();
    let model = &route_model.model;

    py.detach(|| -> Result<String, Error> {
        let summary = campus_route_core::find_route(model, start, end, mode, &waypoints)?;
        let feature = summary.to_geojson(model.landmarks())?;
        Ok(serde_json::to_string(&feature)?)
    })
    .map_err(route_error)
}

/// Format a travel time in minutes as ``"H hour(s) M min(s)"`` or
/// ``"M min(s)"``
#[pyfunction(name = "format_duration")]
#[gen_stub_pyfunction]
pub fn py_format_duration(minutes: f64) -> String {
    format_duration(minutes)
}
