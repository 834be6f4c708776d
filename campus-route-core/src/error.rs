use thiserror::Error;

use crate::LandmarkId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid landmark id {0}")]
    InvalidNode(LandmarkId),
    #[error("No path between landmark {start} and landmark {end}")]
    NoPath { start: LandmarkId, end: LandmarkId },
    #[error("No edge between landmark {from} and landmark {to}")]
    MissingEdge { from: LandmarkId, to: LandmarkId },
    #[error("Travel matrix unavailable: {0}")]
    DataUnavailable(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
