//! Route finding over the campus route graph

mod alternative;
pub mod dijkstra;
mod matrix;
mod request;
mod summary;
mod waypoints;

pub use alternative::{AcceptancePolicy, AlternativeOptions, find_alternative};
pub use dijkstra::{path_cost, shortest_path, shortest_path_with_cost};
pub use matrix::travel_time_matrix;
pub use request::{find_alternative_route, find_route};
pub use summary::{RouteSummary, format_duration, summarize};
pub use waypoints::{nearest_to_line, route_with_waypoints};
