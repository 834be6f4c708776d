use geo::{Coord, LineString};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use hashbrown::{HashMap, HashSet};
use serde_json::json;

use super::dijkstra::path_cost;
use crate::{Distance, Duration, Error, LandmarkId, LandmarkRegistry, Mode, RouteGraph, WeightKey};

/// A route together with its totals, both summed along the same path
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub path: Vec<LandmarkId>,
    pub mode: Mode,
    pub total_distance_km: Distance,
    pub total_duration_minutes: Duration,
}

/// Sums the distance and duration of `mode` along `path`
///
/// # Errors
///
/// Fails like [`path_cost`] on unknown ids or missing edges
pub fn summarize(graph: &RouteGraph, path: Vec<LandmarkId>, mode: Mode) -> Result<RouteSummary, Error> {
    let total_distance_km = path_cost(graph, &path, WeightKey::distance(mode))?;
    let total_duration_minutes = path_cost(graph, &path, WeightKey::duration(mode))?;

    Ok(RouteSummary {
        path,
        mode,
        total_distance_km,
        total_duration_minutes,
    })
}

impl RouteSummary {
    /// Convert the route to a `GeoJSON` Feature with a LineString through
    /// the visited landmarks
    pub fn to_geojson(&self, landmarks: &LandmarkRegistry) -> Result<Feature, Error> {
        let visited = self
            .path
            .iter()
            .map(|&id| landmarks.get(id))
            .collect::<Result<Vec<_>, _>>()?;

        let coords: Vec<Coord<f64>> = visited.iter().map(|l| l.geometry.into()).collect();
        let names: Vec<&str> = visited.iter().map(|l| l.name.as_str()).collect();
        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "mode": self.mode.profile(),
                "path": self.path,
                "names": names,
                "total_distance_km": self.total_distance_km,
                "total_duration_minutes": self.total_duration_minutes,
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

/// Travel time as shown to people: whole minutes, with hours split off from
/// one hour up (`"1 hour(s) 5 min(s)"`, `"42 min(s)"`). Halves round to even.
pub fn format_duration(minutes: Duration) -> String {
    let total = minutes.max(0.0).round_ties_even() as u64;
    if total >= 60 {
        format!("{} hour(s) {} min(s)", total / 60, total % 60)
    } else {
        format!("{total} min(s)")
    }
}

/// Keeps the first occurrence of every landmark, in path order.
///
/// The result can join two landmarks that were not adjacent in the input;
/// callers check it against the graph.
pub(crate) fn collapse_repeats(path: &[LandmarkId]) -> Vec<LandmarkId> {
    let mut seen: HashSet<LandmarkId> = HashSet::with_capacity(path.len());
    path.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Removes revisits from a stitched path.
///
/// When a landmark shows up again, the loop since its first occurrence is cut
/// out. The result keeps both endpoints, visits every landmark at most once
/// and every consecutive pair is still a pair of the input.
pub(crate) fn erase_loops(path: Vec<LandmarkId>) -> Vec<LandmarkId> {
    let mut simple: Vec<LandmarkId> = Vec::with_capacity(path.len());
    let mut positions: HashMap<LandmarkId, usize> = HashMap::with_capacity(path.len());

    for id in path {
        if let Some(&idx) = positions.get(&id) {
            for removed in simple.drain(idx + 1..) {
                positions.remove(&removed);
            }
        } else {
            positions.insert(id, simple.len());
            simple.push(id);
        }
    }

    simple
}
