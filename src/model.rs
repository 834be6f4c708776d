use std::path::PathBuf;

use campus_route_core::prelude::*;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

/// RouteModel
///
/// Campus landmarks together with the route graph built from driving and
/// walking travel matrices. Every edge carries four weights: car distance
/// (km), car duration (min), walking distance (km) and walking duration (min).
///
/// The model is immutable once created and can be queried from several
/// Python threads at once.
///
/// Example:
///
/// .. code-block:: python
///
///     model = create_route_model("driving.json", "walking.json")
///     route = find_route(model, 0, 2, "walking")
#[gen_stub_pyclass]
#[pyclass(name = "RouteModel", frozen)]
pub struct PyRouteModel {
    pub(crate) model: RouteModel,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyRouteModel {
    pub fn landmark_count(&self) -> usize {
        self.model.landmark_count()
    }

    pub fn edge_count(&self) -> usize {
        self.model.edge_count()
    }

    /// Landmarks as ``(id, name, latitude, longitude)`` tuples in id order
    pub fn landmarks(&self) -> Vec<(usize, String, f64, f64)> {
        self.model
            .landmarks()
            .iter()
            .map(|l| (l.id, l.name.clone(), l.latitude(), l.longitude()))
            .collect()
    }

    pub fn landmark_name(&self, id: usize) -> PyResult<String> {
        self.model
            .landmarks()
            .get(id)
            .map(|l| l.name.clone())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    fn __repr__(&self) -> String {
        self.model.info()
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Create a route model from saved matrix service responses
///
/// Parameters
/// ----------
/// driving_matrix_path : str
///     JSON response of the matrix service for the driving profile
/// walking_matrix_path : str
///     JSON response of the matrix service for the walking profile
/// landmarks_path : str, optional
///     CSV file with a ``name,latitude,longitude`` header. Row order defines
///     landmark ids and must match the matrices. If None, the built-in
///     University of Ghana landmarks are used.
/// units : str, default="meters_seconds"
///     Units of the matrices, ``"meters_seconds"`` or ``"kilometers_minutes"``
/// symmetry : str, default="last_write"
///     How disagreeing (i, j) / (j, i) cells are merged:
///     ``"first_write"``, ``"last_write"`` or ``"average"``
///
/// Returns
/// -------
/// RouteModel
///
/// Raises
/// ------
/// ValueError
///     If an option name is unknown
/// RuntimeError
///     If the matrices cannot be read or do not fit the landmarks
#[gen_stub_pyfunction]
#[pyfunction(name = "create_route_model")]
#[pyo3(signature = (driving_matrix_path, walking_matrix_path, landmarks_path=None, units="meters_seconds", symmetry="last_write"))]
pub fn py_create_route_model(
    py: Python<'_>,
    driving_matrix_path: &str,
    walking_matrix_path: &str,
    landmarks_path: Option<&str>,
    units: &str,
    symmetry: &str,
) -> PyResult<PyRouteModel> {
    let options = GraphOptions {
        units: units.parse().map_err(value_error)?,
        symmetry: symmetry.parse().map_err(value_error)?,
    };

    let config = RouteModelConfig {
        landmarks_path: landmarks_path.map(PathBuf::from),
        options,
        ..RouteModelConfig::new(
            PathBuf::from(driving_matrix_path),
            PathBuf::from(walking_matrix_path),
        )
    };

    py.detach(|| build_model(&config))
}

/// Create a route model from a JSON configuration file
///
/// The file holds ``driving_matrix_path``, ``walking_matrix_path`` and
/// optionally ``landmarks_path``, ``units`` and ``symmetry``.
#[gen_stub_pyfunction]
#[pyfunction(name = "load_route_model")]
pub fn py_load_route_model(py: Python<'_>, config_path: &str) -> PyResult<PyRouteModel> {
    py.detach(|| {
        let config = RouteModelConfig::from_json_file(&PathBuf::from(config_path)).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to read configuration: {e}"
            ))
        })?;
        build_model(&config)
    })
}

fn build_model(config: &RouteModelConfig) -> PyResult<PyRouteModel> {
    let model = campus_route_core::create_route_model(config).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to create route model: {e}"
        ))
    })?;

    Ok(PyRouteModel { model })
}

pub(crate) fn value_error(e: Error) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}
