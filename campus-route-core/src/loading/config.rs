use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// Units the matrix source reports its values in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixUnits {
    /// Meters and seconds, as returned by the Mapbox matrix service
    #[default]
    MetersSeconds,
    /// Already kilometers and minutes
    KilometersMinutes,
}

impl MatrixUnits {
    pub(crate) fn to_kilometers(self, value: f64) -> f64 {
        match self {
            MatrixUnits::MetersSeconds => value / 1000.0,
            MatrixUnits::KilometersMinutes => value,
        }
    }

    pub(crate) fn to_minutes(self, value: f64) -> f64 {
        match self {
            MatrixUnits::MetersSeconds => value / 60.0,
            MatrixUnits::KilometersMinutes => value,
        }
    }
}

impl FromStr for MatrixUnits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meters_seconds" => Ok(MatrixUnits::MetersSeconds),
            "kilometers_minutes" => Ok(MatrixUnits::KilometersMinutes),
            other => Err(Error::InvalidData(format!("Unknown matrix units '{other}'"))),
        }
    }
}

/// How the `(i, j)` and `(j, i)` cells of a matrix are merged into one
/// undirected edge when they disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSymmetry {
    /// Keep the cell visited first in row-major order (`i < j`)
    FirstWrite,
    /// Keep the cell visited last in row-major order (`i > j`)
    #[default]
    LastWrite,
    /// Arithmetic mean of both directions
    Average,
}

impl FromStr for EdgeSymmetry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_write" => Ok(EdgeSymmetry::FirstWrite),
            "last_write" => Ok(EdgeSymmetry::LastWrite),
            "average" => Ok(EdgeSymmetry::Average),
            other => Err(Error::InvalidData(format!("Unknown edge symmetry '{other}'"))),
        }
    }
}

/// Options for turning travel matrices into a route graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct GraphOptions {
    #[serde(default)]
    pub units: MatrixUnits,
    #[serde(default)]
    pub symmetry: EdgeSymmetry,
}

/// Configuration for building a route model from files
#[derive(Debug, Clone, Deserialize)]
pub struct RouteModelConfig {
    /// CSV with a `name,latitude,longitude` header; the built-in campus
    /// landmarks are used when absent
    #[serde(default)]
    pub landmarks_path: Option<PathBuf>,
    /// Matrix service response for the driving profile
    pub driving_matrix_path: PathBuf,
    /// Matrix service response for the walking profile
    pub walking_matrix_path: PathBuf,
    #[serde(flatten)]
    pub options: GraphOptions,
}

impl RouteModelConfig {
    pub fn new(driving_matrix_path: PathBuf, walking_matrix_path: PathBuf) -> Self {
        Self {
            landmarks_path: None,
            driving_matrix_path,
            walking_matrix_path,
            options: GraphOptions::default(),
        }
    }

    /// Reads a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(path) = &self.landmarks_path {
            if !path.exists() {
                return Err(Error::InvalidData(format!(
                    "Landmarks file not found: {}",
                    path.display()
                )));
            }
        }

        for path in [&self.driving_matrix_path, &self.walking_matrix_path] {
            if !path.exists() {
                return Err(Error::DataUnavailable(format!(
                    "Matrix file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
