use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use itertools::Itertools;

use super::state::State;
use crate::{Error, LandmarkId, RouteGraph, WeightKey};

/// Dijkstra's algorithm between two landmarks over the selected weight.
/// Returns the landmark sequence from `start` to `end` and its cost.
///
/// # Errors
///
/// [`Error::InvalidNode`] if either endpoint is unknown, [`Error::NoPath`] if
/// they lie in different components.
pub fn shortest_path_with_cost(
    graph: &RouteGraph,
    start: LandmarkId,
    end: LandmarkId,
    key: WeightKey,
) -> Result<(Vec<LandmarkId>, f64), Error> {
    graph.validate_node(start)?;
    graph.validate_node(end)?;

    if start == end {
        return Ok((vec![start], 0.0));
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut predecessors: Vec<Option<LandmarkId>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count);

    distances[start] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Check if we've reached the target
        if node == end {
            break;
        }

        // Skip stale heap entries
        if settled.put(node) {
            continue;
        }

        for (next, edge) in graph.neighbors(node) {
            let next_cost = cost + edge.weight(key);
            if next_cost < distances[next] {
                distances[next] = next_cost;
                predecessors[next] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    if !distances[end].is_finite() {
        return Err(Error::NoPath { start, end });
    }

    // Follow predecessors backward from target to start
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = predecessors[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Ok((path, distances[end]))
}

/// Shortest landmark sequence from `start` to `end` over the selected weight
pub fn shortest_path(
    graph: &RouteGraph,
    start: LandmarkId,
    end: LandmarkId,
    key: WeightKey,
) -> Result<Vec<LandmarkId>, Error> {
    shortest_path_with_cost(graph, start, end, key).map(|(path, _)| path)
}

/// Sum of the selected weight over consecutive edges of `path`.
///
/// The sum always follows the given path, so the distance of a path found by
/// duration is the distance of exactly those edges.
///
/// # Errors
///
/// [`Error::InvalidNode`] for unknown ids, [`Error::MissingEdge`] when two
/// consecutive landmarks are not connected.
pub fn path_cost(graph: &RouteGraph, path: &[LandmarkId], key: WeightKey) -> Result<f64, Error> {
    for &id in path {
        graph.validate_node(id)?;
    }

    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| {
            graph
                .edge(from, to)
                .map(|edge| edge.weight(key))
                .ok_or(Error::MissingEdge { from, to })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::RouteEdge;

    fn edge(duration: f64, distance: f64) -> RouteEdge {
        RouteEdge {
            distance_car: distance,
            duration_car: duration,
            distance_walk: distance,
            duration_walk: duration * 10.0,
        }
    }

    fn graph(n: usize, edges: Vec<(usize, usize, RouteEdge)>) -> RouteGraph {
        let positions = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
        RouteGraph::from_edges(positions, edges).unwrap()
    }

    #[test]
    fn finds_multi_hop_path() {
        let graph = graph(3, vec![(0, 1, edge(5.0, 1.0)), (1, 2, edge(5.0, 1.0))]);

        let (path, cost) = shortest_path_with_cost(&graph, 0, 2, WeightKey::DurationCar).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(cost, 10.0);
        assert_eq!(path_cost(&graph, &path, WeightKey::DurationCar).unwrap(), 10.0);
    }

    #[test]
    fn optimizes_the_selected_weight() {
        // Fast but long direct edge vs slow but short detour
        let graph = graph(
            3,
            vec![
                (0, 2, edge(2.0, 9.0)),
                (0, 1, edge(3.0, 1.0)),
                (1, 2, edge(3.0, 1.0)),
            ],
        );

        assert_eq!(
            shortest_path(&graph, 0, 2, WeightKey::DurationCar).unwrap(),
            vec![0, 2]
        );
        assert_eq!(
            shortest_path(&graph, 0, 2, WeightKey::DistanceCar).unwrap(),
            vec![0, 1, 2]
        );

        // Distance reported for the duration-optimal path comes from its own edges
        let by_duration = shortest_path(&graph, 0, 2, WeightKey::DurationCar).unwrap();
        assert_eq!(
            path_cost(&graph, &by_duration, WeightKey::DurationCar.paired_distance()).unwrap(),
            9.0
        );
    }

    #[test]
    fn same_start_and_end_is_single_node() {
        let graph = graph(2, vec![(0, 1, edge(1.0, 1.0))]);
        let (path, cost) = shortest_path_with_cost(&graph, 1, 1, WeightKey::DurationWalk).unwrap();
        assert_eq!(path, vec![1]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn disconnected_endpoints_have_no_path() {
        let graph = graph(4, vec![(0, 1, edge(1.0, 1.0)), (2, 3, edge(1.0, 1.0))]);
        assert!(matches!(
            shortest_path(&graph, 0, 3, WeightKey::DurationCar),
            Err(Error::NoPath { start: 0, end: 3 })
        ));
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        let graph = graph(2, vec![(0, 1, edge(1.0, 1.0))]);
        assert!(matches!(
            shortest_path(&graph, 0, 2, WeightKey::DurationCar),
            Err(Error::InvalidNode(2))
        ));
        assert!(matches!(
            shortest_path(&graph, 9, 0, WeightKey::DurationCar),
            Err(Error::InvalidNode(9))
        ));
    }

    #[test]
    fn path_cost_requires_edges() {
        let graph = graph(3, vec![(0, 1, edge(1.0, 1.0))]);
        assert!(matches!(
            path_cost(&graph, &[0, 2], WeightKey::DurationCar),
            Err(Error::MissingEdge { from: 0, to: 2 })
        ));
        assert_eq!(path_cost(&graph, &[1], WeightKey::DurationCar).unwrap(), 0.0);
    }
}
