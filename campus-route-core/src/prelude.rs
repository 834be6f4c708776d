pub use crate::DEFAULT_ALTERNATIVE_THRESHOLD;

// Re-export key components
pub use crate::loading::{
    EdgeSymmetry, GraphOptions, JsonMatrixSource, MatrixSource, MatrixUnits, RouteModelConfig,
    StaticMatrixSource, TravelMatrix, build_route_graph, create_route_model,
    create_route_model_with_source,
};
pub use crate::model::{
    Landmark, LandmarkRegistry, Mode, RouteEdge, RouteGraph, RouteModel, WeightKey,
};
pub use crate::routing::{
    AcceptancePolicy, AlternativeOptions, RouteSummary, find_alternative, find_alternative_route,
    find_route, format_duration, nearest_to_line, path_cost, route_with_waypoints, shortest_path,
    shortest_path_with_cost, summarize, travel_time_matrix,
};

pub use crate::Error;

// Core types for landmarks and costs
pub use crate::LandmarkId;
pub use crate::Distance; // kilometers
pub use crate::Duration; // minutes
