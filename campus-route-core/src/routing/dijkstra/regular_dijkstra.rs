use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{Error, LandmarkId, RouteGraph, WeightKey};

/// Dijkstra's algorithm from a single source over the selected weight.
/// Returns the cost to every landmark, `None` where it is unreachable.
pub fn dijkstra_path_weights(
    graph: &RouteGraph,
    start: LandmarkId,
    key: WeightKey,
) -> Result<Vec<Option<f64>>, Error> {
    graph.validate_node(start)?;

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count);

    distances[start] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled.put(node) {
            continue;
        }

        for (next, edge) in graph.neighbors(node) {
            let next_cost = cost + edge.weight(key);
            if next_cost < distances[next] {
                distances[next] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    Ok(distances
        .into_iter()
        .map(|d| d.is_finite().then_some(d))
        .collect())
}
