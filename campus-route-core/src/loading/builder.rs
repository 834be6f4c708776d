use hashbrown::{HashMap, hash_map::Entry};
use log::info;

use super::config::{EdgeSymmetry, GraphOptions, RouteModelConfig};
use super::matrix::{JsonMatrixSource, MatrixSource, TravelMatrix};
use crate::model::RouteEdge;
use crate::{Error, LandmarkId, LandmarkRegistry, Mode, RouteGraph, RouteModel};

/// Creates a route model based on the provided configuration
///
/// # Errors
///
/// Returns an error if there are problems reading or processing data
pub fn create_route_model(config: &RouteModelConfig) -> Result<RouteModel, Error> {
    config.validate()?;

    let landmarks = match &config.landmarks_path {
        Some(path) => {
            info!("Loading landmarks from {}", path.display());
            LandmarkRegistry::from_csv(path)?
        }
        None => {
            info!("Using built-in campus landmarks");
            LandmarkRegistry::campus()
        }
    };

    let source = JsonMatrixSource {
        driving_path: config.driving_matrix_path.clone(),
        walking_path: config.walking_matrix_path.clone(),
    };

    create_route_model_with_source(landmarks, &source, &config.options)
}

/// Fetches both travel matrices from `source` and builds the route model
///
/// # Errors
///
/// Returns [`Error::DataUnavailable`] if the source fails, or
/// [`Error::InvalidData`] if the matrices do not fit the landmarks
pub fn create_route_model_with_source<S: MatrixSource>(
    landmarks: LandmarkRegistry,
    source: &S,
    options: &GraphOptions,
) -> Result<RouteModel, Error> {
    info!("Fetching travel matrices for {} landmarks", landmarks.len());

    // Both profiles are independent requests
    let (driving, walking) = rayon::join(
        || source.fetch(&landmarks, Mode::Driving),
        || source.fetch(&landmarks, Mode::Walking),
    );
    let (driving, walking) = (driving?, walking?);

    let graph = build_route_graph(&landmarks, &driving, &walking, options)?;
    info!(
        "Route graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    RouteModel::new(landmarks, graph)
}

/// Builds the undirected route graph from a driving and a walking matrix.
///
/// A pair `(i, j)` becomes an edge when the driving distance cell is present
/// and the three other cells are present too; values are converted to
/// kilometers and minutes. Disagreeing `(i, j)` / `(j, i)` cells are merged
/// according to [`GraphOptions::symmetry`].
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if a matrix is not `N x N` or contains a
/// negative or non-finite value.
pub fn build_route_graph(
    landmarks: &LandmarkRegistry,
    driving: &TravelMatrix,
    walking: &TravelMatrix,
    options: &GraphOptions,
) -> Result<RouteGraph, Error> {
    let n = landmarks.len();
    driving.validate_shape(n, Mode::Driving)?;
    walking.validate_shape(n, Mode::Walking)?;

    let mut edges: Vec<(LandmarkId, LandmarkId, RouteEdge)> = Vec::new();
    let mut edge_slots: HashMap<(LandmarkId, LandmarkId), usize> = HashMap::new();
    let mut skipped = 0usize;

    for i in 0..n {
        for j in 0..n {
            if i == j || driving.distances[i][j].is_none() {
                continue;
            }

            let cells = [
                driving.distances[i][j],
                driving.durations[i][j],
                walking.distances[i][j],
                walking.durations[i][j],
            ];
            let [Some(distance_car), Some(duration_car), Some(distance_walk), Some(duration_walk)] =
                cells
            else {
                log::trace!("Skipping ({i}, {j}): incomplete matrix cells {cells:?}");
                skipped += 1;
                continue;
            };

            if let Some(bad) = [distance_car, duration_car, distance_walk, duration_walk]
                .into_iter()
                .find(|v| !v.is_finite() || *v < 0.0)
            {
                return Err(Error::InvalidData(format!(
                    "Matrix cell ({i}, {j}) holds invalid value {bad}"
                )));
            }

            let units = options.units;
            let edge = RouteEdge {
                distance_car: units.to_kilometers(distance_car),
                duration_car: units.to_minutes(duration_car),
                distance_walk: units.to_kilometers(distance_walk),
                duration_walk: units.to_minutes(duration_walk),
            };

            match edge_slots.entry((i.min(j), i.max(j))) {
                Entry::Vacant(entry) => {
                    entry.insert(edges.len());
                    edges.push((i, j, edge));
                }
                Entry::Occupied(entry) => {
                    let slot = &mut edges[*entry.get()].2;
                    *slot = merge_directions(slot, &edge, options.symmetry);
                }
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} matrix pairs with incomplete data");
    }

    RouteGraph::from_edges(landmarks.positions(), edges)
}

fn merge_directions(existing: &RouteEdge, incoming: &RouteEdge, symmetry: EdgeSymmetry) -> RouteEdge {
    match symmetry {
        EdgeSymmetry::FirstWrite => *existing,
        EdgeSymmetry::LastWrite => *incoming,
        EdgeSymmetry::Average => existing.average(incoming),
    }
}
