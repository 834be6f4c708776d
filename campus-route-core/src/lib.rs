//! Route finding between campus landmarks over a driving/walking travel matrix.
//!
//! The crate is organized the same way the model is assembled:
//!
//! - [`model`]: landmarks and the immutable route graph
//! - [`loading`]: matrix sources, configuration and graph construction
//! - [`routing`]: shortest paths, alternative paths and waypoint routing

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{RouteModelConfig, build_route_graph, create_route_model};
pub use model::{Landmark, LandmarkRegistry, Mode, RouteGraph, RouteModel, WeightKey};
pub use routing::{
    AcceptancePolicy, AlternativeOptions, RouteSummary, find_alternative, find_alternative_route,
    find_route, path_cost, route_with_waypoints, shortest_path, summarize, travel_time_matrix,
};

/// Dense landmark identifier, equal to the row/column of the travel matrices
pub type LandmarkId = usize;

/// Kilometers
pub type Distance = f64;

/// Minutes
pub type Duration = f64;

/// Relative margin used by the alternative path search when none is given
pub const DEFAULT_ALTERNATIVE_THRESHOLD: f64 = 0.1;
