use rayon::prelude::*;

use super::dijkstra::dijkstra_path_weights;
use crate::{Error, RouteGraph, WeightKey};

/// All-pairs costs over the selected weight, one Dijkstra run per source.
/// Row `i` holds the costs from landmark `i`; unreachable pairs are `None`.
pub fn travel_time_matrix(graph: &RouteGraph, key: WeightKey) -> Result<Vec<Vec<Option<f64>>>, Error> {
    graph
        .landmark_ids()
        .into_par_iter()
        .map(|source| dijkstra_path_weights(graph, source, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::RouteEdge;

    #[test]
    fn matrix_is_symmetric_with_unreachable_pairs() {
        let positions = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        let graph = RouteGraph::from_edges(
            positions,
            vec![
                (0, 1, RouteEdge::uniform(1.0)),
                (1, 2, RouteEdge::uniform(2.0)),
            ],
        )
        .unwrap();

        let matrix = travel_time_matrix(&graph, WeightKey::DurationWalk).unwrap();
        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix[0], vec![Some(0.0), Some(1.0), Some(3.0), None]);
        assert_eq!(matrix[2][0], Some(3.0));
        assert_eq!(matrix[3], vec![None, None, None, Some(0.0)]);
    }
}
