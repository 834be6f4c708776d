//! Travel matrices and the sources that provide them
//!
//! A matrix source answers, for the ordered landmark list and one travel
//! profile, with two `N x N` matrices (distances and durations). Cells are
//! `None` where the service found no route. Values stay in the source's own
//! units; conversion happens when the graph is built.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, LandmarkRegistry, Mode};

pub type MatrixCells = Vec<Vec<Option<f64>>>;

/// Pairwise distances and durations for one travel profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TravelMatrix {
    pub distances: MatrixCells,
    pub durations: MatrixCells,
}

/// Body of a Directions Matrix response
#[derive(Debug, Deserialize)]
struct MatrixResponse {
    code: Option<String>,
    message: Option<String>,
    distances: Option<MatrixCells>,
    durations: Option<MatrixCells>,
}

impl TravelMatrix {
    /// Parses a matrix service response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataUnavailable`] if the body is malformed, reports a
    /// non-`Ok` code or lacks one of the annotations.
    pub fn from_json_str(body: &str) -> Result<Self, Error> {
        let response: MatrixResponse = serde_json::from_str(body)
            .map_err(|e| Error::DataUnavailable(format!("Malformed matrix response: {e}")))?;

        if let Some(code) = response.code.as_deref() {
            if code != "Ok" {
                return Err(Error::DataUnavailable(format!(
                    "Matrix service answered '{code}': {}",
                    response.message.as_deref().unwrap_or("no message")
                )));
            }
        }

        match (response.distances, response.durations) {
            (Some(distances), Some(durations)) => Ok(Self {
                distances,
                durations,
            }),
            _ => Err(Error::DataUnavailable(
                "Matrix response lacks distance or duration annotations".to_string(),
            )),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let body = fs::read_to_string(path).map_err(|e| {
            Error::DataUnavailable(format!("Failed to read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&body)
    }

    /// Number of rows of the distance matrix
    pub fn size(&self) -> usize {
        self.distances.len()
    }

    /// Check that both matrices are `n x n`
    pub(crate) fn validate_shape(&self, n: usize, mode: Mode) -> Result<(), Error> {
        for (label, cells) in [("distances", &self.distances), ("durations", &self.durations)] {
            let square = cells.len() == n && cells.iter().all(|row| row.len() == n);
            if !square {
                return Err(Error::InvalidData(format!(
                    "{mode} {label} matrix is not {n}x{n} (got {} rows)",
                    cells.len()
                )));
            }
        }
        Ok(())
    }
}

/// Seam to the external matrix service
pub trait MatrixSource: Sync {
    /// Fetches the matrices for `landmarks` in registry order.
    ///
    /// Failures of the underlying service must surface as
    /// [`Error::DataUnavailable`].
    fn fetch(&self, landmarks: &LandmarkRegistry, mode: Mode) -> Result<TravelMatrix, Error>;
}

/// In-memory matrices, one per profile
#[derive(Debug, Clone)]
pub struct StaticMatrixSource {
    pub driving: TravelMatrix,
    pub walking: TravelMatrix,
}

impl MatrixSource for StaticMatrixSource {
    fn fetch(&self, _landmarks: &LandmarkRegistry, mode: Mode) -> Result<TravelMatrix, Error> {
        Ok(match mode {
            Mode::Driving => self.driving.clone(),
            Mode::Walking => self.walking.clone(),
        })
    }
}

/// Saved matrix service responses, one JSON file per profile
#[derive(Debug, Clone)]
pub struct JsonMatrixSource {
    pub driving_path: PathBuf,
    pub walking_path: PathBuf,
}

impl MatrixSource for JsonMatrixSource {
    fn fetch(&self, landmarks: &LandmarkRegistry, mode: Mode) -> Result<TravelMatrix, Error> {
        let path = match mode {
            Mode::Driving => &self.driving_path,
            Mode::Walking => &self.walking_path,
        };
        log::debug!(
            "Reading {mode} matrix for {} landmarks from {}",
            landmarks.len(),
            path.display()
        );
        TravelMatrix::from_json_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_response_with_nulls() {
        let matrix = TravelMatrix::from_json_str(
            r#"{
                "code": "Ok",
                "distances": [[0.0, 1200.5], [null, 0.0]],
                "durations": [[0.0, 180.0], [null, 0.0]],
                "destinations": [],
                "sources": []
            }"#,
        )
        .unwrap();

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.distances[0][1], Some(1200.5));
        assert_eq!(matrix.distances[1][0], None);
        assert!(matrix.validate_shape(2, Mode::Driving).is_ok());
    }

    #[test]
    fn error_code_is_data_unavailable() {
        let result = TravelMatrix::from_json_str(
            r#"{"code": "InvalidInput", "message": "Coordinate is invalid"}"#,
        );
        assert!(matches!(result, Err(Error::DataUnavailable(msg)) if msg.contains("InvalidInput")));
    }

    #[test]
    fn missing_annotation_is_data_unavailable() {
        let result = TravelMatrix::from_json_str(r#"{"code": "Ok", "durations": [[0.0]]}"#);
        assert!(matches!(result, Err(Error::DataUnavailable(_))));
    }

    #[test]
    fn unreadable_file_is_data_unavailable() {
        let result = TravelMatrix::from_json_file(Path::new("/nonexistent/matrix.json"));
        assert!(matches!(result, Err(Error::DataUnavailable(_))));
    }

    #[test]
    fn ragged_matrix_fails_shape_check() {
        let matrix = TravelMatrix {
            distances: vec![vec![Some(0.0), Some(1.0)], vec![Some(1.0)]],
            durations: vec![vec![Some(0.0), Some(1.0)], vec![Some(1.0), Some(0.0)]],
        };
        assert!(matches!(
            matrix.validate_shape(2, Mode::Walking),
            Err(Error::InvalidData(_))
        ));
    }
}
