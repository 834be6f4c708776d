use super::alternative::{AlternativeOptions, find_alternative};
use super::summary::{RouteSummary, summarize};
use super::waypoints::route_with_waypoints;
use crate::{Error, LandmarkId, Mode, RouteModel, WeightKey};

/// Route between two landmarks for a travel mode, optionally through
/// waypoints, with distance and duration totals of the returned path
///
/// # Errors
///
/// Returns an error if an id is unknown or a segment is unreachable
pub fn find_route(
    model: &RouteModel,
    start: LandmarkId,
    end: LandmarkId,
    mode: Mode,
    waypoints: &[LandmarkId],
) -> Result<RouteSummary, Error> {
    let path = route_with_waypoints(&model.graph, start, end, WeightKey::duration(mode), waypoints)?;
    summarize(&model.graph, path, mode)
}

/// Alternative route through an intermediate landmark; `Ok(None)` when the
/// landmarks are not connected
///
/// # Errors
///
/// Returns an error if an id is unknown or the options are invalid
pub fn find_alternative_route(
    model: &RouteModel,
    start: LandmarkId,
    end: LandmarkId,
    mode: Mode,
    options: &AlternativeOptions,
) -> Result<Option<RouteSummary>, Error> {
    find_alternative(&model.graph, start, end, WeightKey::duration(mode), options)?
        .map(|path| summarize(&model.graph, path, mode))
        .transpose()
}
