//! This module is responsible for loading landmarks and travel matrices
//! and building the multi-modal route graph.

mod builder;
mod config;
pub mod matrix;

pub use builder::{build_route_graph, create_route_model, create_route_model_with_source};
pub use config::{EdgeSymmetry, GraphOptions, MatrixUnits, RouteModelConfig};
pub use matrix::{JsonMatrixSource, MatrixSource, StaticMatrixSource, TravelMatrix};
