//! Data model for campus routing
//!
//! Contains the landmark registry and the multi-modal route graph built over it.

pub mod graph;
pub mod landmarks;
pub mod route_model;

pub use graph::{Mode, RouteEdge, RouteGraph, WeightKey};
pub use landmarks::{Landmark, LandmarkRegistry};
pub use route_model::RouteModel;
