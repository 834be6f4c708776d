//! Route graph components - transport modes, weight selectors and edges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Distance, Duration, Error};

/// Transport profile, each with its own edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Driving,
    Walking,
}

impl Mode {
    /// Profile name as used by the matrix service (`driving` / `walking`)
    pub fn profile(self) -> &'static str {
        match self {
            Mode::Driving => "driving",
            Mode::Walking => "walking",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" | "car" => Ok(Mode::Driving),
            "walking" | "foot" => Ok(Mode::Walking),
            other => Err(Error::InvalidData(format!("Unknown travel mode '{other}'"))),
        }
    }
}

/// Selects the edge attribute a path search optimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKey {
    DistanceCar,
    DurationCar,
    DistanceWalk,
    DurationWalk,
}

impl WeightKey {
    pub fn duration(mode: Mode) -> Self {
        match mode {
            Mode::Driving => WeightKey::DurationCar,
            Mode::Walking => WeightKey::DurationWalk,
        }
    }

    pub fn distance(mode: Mode) -> Self {
        match mode {
            Mode::Driving => WeightKey::DistanceCar,
            Mode::Walking => WeightKey::DistanceWalk,
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            WeightKey::DistanceCar | WeightKey::DurationCar => Mode::Driving,
            WeightKey::DistanceWalk | WeightKey::DurationWalk => Mode::Walking,
        }
    }

    /// Distance key of the same mode
    pub fn paired_distance(self) -> Self {
        Self::distance(self.mode())
    }

    /// Duration key of the same mode
    pub fn paired_duration(self) -> Self {
        Self::duration(self.mode())
    }
}

/// Undirected edge between two landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEdge {
    /// Kilometers by car
    pub distance_car: Distance,
    /// Minutes by car
    pub duration_car: Duration,
    /// Kilometers on foot
    pub distance_walk: Distance,
    /// Minutes on foot
    pub duration_walk: Duration,
}

impl RouteEdge {
    pub fn weight(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::DistanceCar => self.distance_car,
            WeightKey::DurationCar => self.duration_car,
            WeightKey::DistanceWalk => self.distance_walk,
            WeightKey::DurationWalk => self.duration_walk,
        }
    }

    /// Edge with the same value for every weight, mostly useful in tests
    pub fn uniform(value: f64) -> Self {
        Self {
            distance_car: value,
            duration_car: value,
            distance_walk: value,
            duration_walk: value,
        }
    }

    pub(crate) fn weights(&self) -> [f64; 4] {
        [
            self.distance_car,
            self.duration_car,
            self.distance_walk,
            self.duration_walk,
        ]
    }

    pub(crate) fn average(&self, other: &Self) -> Self {
        Self {
            distance_car: (self.distance_car + other.distance_car) / 2.0,
            duration_car: (self.duration_car + other.duration_car) / 2.0,
            distance_walk: (self.distance_walk + other.distance_walk) / 2.0,
            duration_walk: (self.duration_walk + other.duration_walk) / 2.0,
        }
    }
}
