use crate::{Error, LandmarkRegistry, RouteGraph};

/// Landmarks together with the route graph built over them
#[derive(Debug, Clone)]
pub struct RouteModel {
    pub(crate) landmarks: LandmarkRegistry,
    pub(crate) graph: RouteGraph,
}

impl RouteModel {
    /// # Errors
    ///
    /// Returns an error if the graph does not have one node per landmark
    pub fn new(landmarks: LandmarkRegistry, graph: RouteGraph) -> Result<Self, Error> {
        if landmarks.len() != graph.node_count() {
            return Err(Error::InvalidData(format!(
                "Graph has {} nodes but {} landmarks were given",
                graph.node_count(),
                landmarks.len()
            )));
        }
        Ok(Self { landmarks, graph })
    }

    pub fn landmarks(&self) -> &LandmarkRegistry {
        &self.landmarks
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn info(&self) -> String {
        format!(
            "RouteModel with {} landmarks and {} edges",
            self.landmark_count(),
            self.edge_count()
        )
    }
}
