use geo::Point;
use itertools::Itertools;

use super::dijkstra::shortest_path;
use super::summary::{collapse_repeats, erase_loops};
use crate::{Error, LandmarkId, Mode, RouteGraph, WeightKey};

/// Routes from `start` to `end` through `waypoints` in the given order.
///
/// Without waypoints this is the plain shortest path, except that a single
/// edge walking route is bent through the landmark nearest to the straight
/// line between the endpoints (see [`nearest_to_line`]).
///
/// With waypoints every consecutive pair of `[start, waypoints.., end]` is
/// routed by the duration weight of the key's mode and the segments are
/// joined, dropping the repeated first landmark of each later segment. A
/// landmark passed twice is kept at its first occurrence.
///
/// # Errors
///
/// [`Error::InvalidNode`] for any unknown id, [`Error::NoPath`] as soon as one
/// segment is unreachable. No partial route is returned.
pub fn route_with_waypoints(
    graph: &RouteGraph,
    start: LandmarkId,
    end: LandmarkId,
    key: WeightKey,
    waypoints: &[LandmarkId],
) -> Result<Vec<LandmarkId>, Error> {
    graph.validate_node(start)?;
    graph.validate_node(end)?;
    for &waypoint in waypoints {
        graph.validate_node(waypoint)?;
    }

    if waypoints.is_empty() {
        let direct = shortest_path(graph, start, end, key)?;
        if direct.len() == 2 && key.mode() == Mode::Walking {
            return Ok(walk_via_nearest_landmark(graph, start, end).unwrap_or(direct));
        }
        return Ok(direct);
    }

    let segment_key = key.paired_duration();
    let stops = std::iter::once(start)
        .chain(waypoints.iter().copied())
        .chain(std::iter::once(end));

    let mut stitched: Vec<LandmarkId> = Vec::new();
    for (i, (from, to)) in stops.tuple_windows().enumerate() {
        let segment = shortest_path(graph, from, to, segment_key)?;
        if i == 0 {
            stitched.extend(segment);
        } else {
            stitched.extend(segment.into_iter().skip(1));
        }
    }

    let path = remove_repeats(graph, stitched, end);
    let dropped: Vec<LandmarkId> = waypoints
        .iter()
        .copied()
        .filter(|w| !path.contains(w))
        .collect();
    if !dropped.is_empty() {
        log::warn!(
            "Route from {start} to {end} doubles back on itself; waypoints {dropped:?} were cut with the loop"
        );
    }

    Ok(path)
}

/// Walking route `start -> k -> end` where `k` is the landmark nearest to the
/// line through both endpoints. `None` when no such landmark exists or it
/// cannot be reached.
fn walk_via_nearest_landmark(
    graph: &RouteGraph,
    start: LandmarkId,
    end: LandmarkId,
) -> Option<Vec<LandmarkId>> {
    let via = nearest_to_line(graph, start, end)?;
    let key = WeightKey::DurationWalk;

    let mut path = shortest_path(graph, start, via, key).ok()?;
    let second = shortest_path(graph, via, end, key).ok()?;
    path.extend(second.into_iter().skip(1));

    log::debug!("Walking route from {start} to {end} bent through landmark {via}");
    Some(remove_repeats(graph, path, end))
}

/// Collapses revisits in a stitched path to their first occurrence. When that
/// would join two landmarks without an edge between them, or lose `end`, the
/// loops are erased instead.
fn remove_repeats(
    graph: &RouteGraph,
    stitched: Vec<LandmarkId>,
    end: LandmarkId,
) -> Vec<LandmarkId> {
    let collapsed = collapse_repeats(&stitched);
    let connected = collapsed
        .iter()
        .tuple_windows()
        .all(|(&a, &b)| graph.edge(a, b).is_some());

    if connected && collapsed.last() == Some(&end) {
        collapsed
    } else {
        log::debug!("First-occurrence collapse of {stitched:?} is not a route, erasing loops");
        erase_loops(stitched)
    }
}

/// Landmark (other than the endpoints) with the smallest perpendicular
/// distance to the infinite line through `start` and `end`.
///
/// Distances are taken on raw longitude/latitude as if they were planar
/// coordinates. That is only a fair approximation over a few kilometers,
/// which is all a campus spans; it is not a geodesic computation. Ties go to
/// the lowest landmark id.
pub fn nearest_to_line(graph: &RouteGraph, start: LandmarkId, end: LandmarkId) -> Option<LandmarkId> {
    let from = graph.position(start)?;
    let to = graph.position(end)?;

    let mut nearest = None;
    let mut shortest = f64::INFINITY;
    for id in graph.landmark_ids() {
        if id == start || id == end {
            continue;
        }
        let Some(distance) = graph
            .position(id)
            .and_then(|p| perpendicular_distance(p, from, to))
        else {
            continue;
        };
        if distance < shortest {
            shortest = distance;
            nearest = Some(id);
        }
    }

    nearest
}

/// `|cross(to - from, from - point)| / |to - from|`, `None` when `from` and
/// `to` coincide
fn perpendicular_distance(point: Point<f64>, from: Point<f64>, to: Point<f64>) -> Option<f64> {
    let direction = to - from;
    let offset = from - point;
    let length = direction.x().hypot(direction.y());
    if length == 0.0 {
        return None;
    }
    let cross = direction.x() * offset.y() - direction.y() * offset.x();
    Some(cross.abs() / length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteEdge;

    fn edge(car: f64, walk: f64) -> RouteEdge {
        RouteEdge {
            distance_car: car,
            duration_car: car,
            distance_walk: walk,
            duration_walk: walk,
        }
    }

    /// 0 and 1 on the x axis, 2 slightly above the segment, 3 far above it
    fn positions() -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 0.5),
            Point::new(1.0, 3.0),
        ]
    }

    fn complete_graph() -> RouteGraph {
        RouteGraph::from_edges(
            positions(),
            vec![
                (0, 1, edge(1.0, 4.0)),
                (0, 2, edge(2.0, 2.5)),
                (1, 2, edge(2.0, 2.5)),
                (0, 3, edge(3.0, 3.5)),
                (1, 3, edge(3.0, 4.5)),
                (2, 3, edge(3.0, 3.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn perpendicular_distance_to_infinite_line() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(2.0, 0.0);
        assert_eq!(perpendicular_distance(Point::new(1.0, 3.0), from, to), Some(3.0));
        // Beyond the segment end the distance is still to the line
        assert_eq!(perpendicular_distance(Point::new(10.0, -2.0), from, to), Some(2.0));
        assert_eq!(perpendicular_distance(Point::new(1.0, 1.0), from, from), None);
    }

    #[test]
    fn nearest_to_line_skips_endpoints() {
        let graph = complete_graph();
        assert_eq!(nearest_to_line(&graph, 0, 1), Some(2));
        assert_eq!(nearest_to_line(&graph, 0, 2), Some(1));
    }

    #[test]
    fn driving_without_waypoints_is_plain_shortest_path() {
        let graph = complete_graph();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationCar, &[]).unwrap();
        assert_eq!(path, shortest_path(&graph, 0, 1, WeightKey::DurationCar).unwrap());
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn single_edge_walk_is_bent_through_nearest_landmark() {
        let graph = complete_graph();
        assert_eq!(
            shortest_path(&graph, 0, 1, WeightKey::DurationWalk).unwrap(),
            vec![0, 1]
        );
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationWalk, &[]).unwrap();
        assert_eq!(path, vec![0, 2, 1]);
    }

    #[test]
    fn multi_hop_walk_is_left_alone() {
        let graph = RouteGraph::from_edges(
            positions(),
            vec![
                (0, 3, edge(1.0, 1.0)),
                (3, 1, edge(1.0, 1.0)),
                (0, 2, edge(1.0, 9.0)),
            ],
        )
        .unwrap();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationWalk, &[]).unwrap();
        assert_eq!(path, vec![0, 3, 1]);
    }

    #[test]
    fn walk_keeps_direct_edge_when_nearest_landmark_is_unreachable() {
        let graph = RouteGraph::from_edges(
            positions(),
            vec![(0, 1, edge(1.0, 1.0)), (0, 3, edge(1.0, 1.0))],
        )
        .unwrap();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationWalk, &[]).unwrap();
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn waypoint_segments_are_joined() {
        let graph = complete_graph();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationCar, &[3]).unwrap();

        let mut expected = shortest_path(&graph, 0, 3, WeightKey::DurationCar).unwrap();
        expected.extend(
            shortest_path(&graph, 3, 1, WeightKey::DurationCar)
                .unwrap()
                .into_iter()
                .skip(1),
        );
        assert_eq!(path, expected);
        assert_eq!(path, vec![0, 3, 1]);
    }

    #[test]
    fn waypoints_are_visited_in_order() {
        let graph = complete_graph();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DistanceCar, &[2, 3]).unwrap();
        assert_eq!(path, vec![0, 2, 3, 1]);
    }

    #[test]
    fn unreachable_waypoint_fails_whole_route() {
        let graph = RouteGraph::from_edges(
            positions(),
            vec![(0, 1, edge(1.0, 1.0)), (0, 2, edge(1.0, 1.0))],
        )
        .unwrap();
        assert!(matches!(
            route_with_waypoints(&graph, 0, 1, WeightKey::DurationCar, &[2, 3]),
            Err(Error::NoPath { start: 2, end: 3 })
        ));
    }

    #[test]
    fn invalid_waypoint_is_rejected_before_routing() {
        let graph = complete_graph();
        assert!(matches!(
            route_with_waypoints(&graph, 0, 1, WeightKey::DurationCar, &[8]),
            Err(Error::InvalidNode(8))
        ));
    }

    #[test]
    fn revisited_landmark_keeps_the_waypoint() {
        // 0 -> 2 goes through 1, and 2 -> 3 comes back through 1
        let graph = RouteGraph::from_edges(
            positions(),
            vec![
                (0, 1, edge(1.0, 1.0)),
                (1, 2, edge(1.0, 1.0)),
                (1, 3, edge(1.0, 1.0)),
                (2, 3, edge(5.0, 5.0)),
            ],
        )
        .unwrap();
        let path = route_with_waypoints(&graph, 0, 3, WeightKey::DurationCar, &[2]).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn coincident_endpoints_keep_the_direct_walk() {
        let positions = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let graph = RouteGraph::from_edges(
            positions,
            vec![
                (0, 1, edge(1.0, 1.0)),
                (0, 2, edge(1.0, 1.0)),
                (1, 2, edge(1.0, 1.0)),
            ],
        )
        .unwrap();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationWalk, &[]).unwrap();
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn doubling_back_keeps_a_simple_path() {
        // Line graph 0 - 1 - 2: visiting 2 on the way from 0 to 1 doubles back
        let graph = RouteGraph::from_edges(
            positions()[..3].to_vec(),
            vec![(0, 1, edge(1.0, 1.0)), (1, 2, edge(1.0, 1.0))],
        )
        .unwrap();
        let path = route_with_waypoints(&graph, 0, 1, WeightKey::DurationCar, &[2]).unwrap();
        assert_eq!(path, vec![0, 1]);
    }
}
