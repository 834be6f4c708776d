//! Immutable route graph over landmark identifiers

use geo::Point;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::RouteEdge;
use crate::{Error, LandmarkId};

/// Undirected simple graph whose node `i` is landmark `i`.
///
/// The graph is assembled in one go by [`RouteGraph::from_edges`] and has no
/// mutating API afterwards, so a built graph can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: UnGraph<LandmarkId, RouteEdge>,
    positions: Vec<Point<f64>>,
}

impl RouteGraph {
    /// Creates a graph with one node per position and the given edges.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references an unknown node, is a self-loop,
    /// appears twice or carries a negative or non-finite weight.
    pub fn from_edges<I>(positions: Vec<Point<f64>>, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (LandmarkId, LandmarkId, RouteEdge)>,
    {
        let node_count = positions.len();
        let mut graph = UnGraph::with_capacity(node_count, node_count * node_count / 2);
        for id in 0..node_count {
            graph.add_node(id);
        }

        for (from, to, edge) in edges {
            if from >= node_count {
                return Err(Error::InvalidNode(from));
            }
            if to >= node_count {
                return Err(Error::InvalidNode(to));
            }
            if from == to {
                return Err(Error::InvalidData(format!(
                    "Self-loop on landmark {from} is not allowed"
                )));
            }
            if edge.weights().iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(Error::InvalidData(format!(
                    "Edge ({from}, {to}) has a negative or non-finite weight: {edge:?}"
                )));
            }

            let (a, b) = (NodeIndex::new(from), NodeIndex::new(to));
            if graph.find_edge(a, b).is_some() {
                return Err(Error::InvalidData(format!(
                    "Duplicate edge ({from}, {to})"
                )));
            }
            graph.add_edge(a, b, edge);
        }

        Ok(Self { graph, positions })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// check if such landmark exists
    pub fn validate_node(&self, id: LandmarkId) -> Result<(), Error> {
        if id < self.node_count() {
            Ok(())
        } else {
            Err(Error::InvalidNode(id))
        }
    }

    /// Edge between two landmarks, in either direction
    pub fn edge(&self, from: LandmarkId, to: LandmarkId) -> Option<&RouteEdge> {
        if from >= self.node_count() || to >= self.node_count() {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Neighbours of a landmark together with the connecting edge
    pub fn neighbors(
        &self,
        id: LandmarkId,
    ) -> impl Iterator<Item = (LandmarkId, &RouteEdge)> + '_ {
        self.graph
            .edges(NodeIndex::new(id))
            .map(|edge| (edge.target().index(), edge.weight()))
    }

    /// All edges as `(smaller id, larger id, edge)`, sorted by endpoints
    pub fn edges(&self) -> Vec<(LandmarkId, LandmarkId, RouteEdge)> {
        let mut edges: Vec<_> = self
            .graph
            .edge_references()
            .map(|edge| {
                let (a, b) = (edge.source().index(), edge.target().index());
                (a.min(b), a.max(b), *edge.weight())
            })
            .collect();
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges
    }

    /// Coordinate of a landmark (x = longitude, y = latitude)
    pub fn position(&self, id: LandmarkId) -> Option<Point<f64>> {
        self.positions.get(id).copied()
    }

    pub fn landmark_ids(&self) -> std::ops::Range<LandmarkId> {
        0..self.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(n: usize) -> Vec<Point<f64>> {
        (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn builds_undirected_edges() {
        let graph = RouteGraph::from_edges(positions(3), vec![(0, 1, RouteEdge::uniform(2.0))])
            .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge(1, 0), graph.edge(0, 1));
        assert!(graph.edge(0, 2).is_none());
        assert!(graph.edge(0, 7).is_none());
        assert_eq!(graph.neighbors(1).map(|(n, _)| n).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn rejects_bad_edges() {
        let self_loop = RouteGraph::from_edges(positions(2), vec![(1, 1, RouteEdge::uniform(1.0))]);
        assert!(matches!(self_loop, Err(Error::InvalidData(_))));

        let unknown = RouteGraph::from_edges(positions(2), vec![(0, 5, RouteEdge::uniform(1.0))]);
        assert!(matches!(unknown, Err(Error::InvalidNode(5))));

        let negative =
            RouteGraph::from_edges(positions(2), vec![(0, 1, RouteEdge::uniform(-1.0))]);
        assert!(matches!(negative, Err(Error::InvalidData(_))));

        let duplicate = RouteGraph::from_edges(
            positions(2),
            vec![(0, 1, RouteEdge::uniform(1.0)), (1, 0, RouteEdge::uniform(1.0))],
        );
        assert!(matches!(duplicate, Err(Error::InvalidData(_))));
    }

    #[test]
    fn validates_node_ids() {
        let graph = RouteGraph::from_edges(positions(2), Vec::new()).unwrap();
        assert!(graph.validate_node(1).is_ok());
        assert!(matches!(graph.validate_node(2), Err(Error::InvalidNode(2))));
    }
}
