//! Multi-modal route graph - edges carry driving and walking weights

pub mod components;
pub mod network;

pub use components::{Mode, RouteEdge, WeightKey};
pub use network::RouteGraph;
