//! Landmark registry - named points whose order defines their identifiers

use std::fs::File;
use std::path::Path;

use geo::Point;
use serde::Deserialize;

use crate::{Error, LandmarkId};

/// Named point of interest
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: String,
    /// Landmark coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

impl Landmark {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

#[derive(Debug, Deserialize)]
struct LandmarkRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}

/// University of Ghana (Legon) landmarks, as (latitude, longitude, name)
const CAMPUS_LANDMARKS: [(f64, f64, &str); 24] = [
    (5.65188, -0.18683, "Balme Library"),
    (5.65142, -0.18549, "Department of Physics"),
    (5.65450, -0.18368, "Department of Computer Science"),
    (5.64050, -0.16750, "Great Hall"),
    (5.63900, -0.16650, "University Square"),
    (5.64000, -0.16700, "Commonwealth Hall"),
    (5.64020, -0.16680, "Legon Hall"),
    (5.64080, -0.16730, "Mensah Sarbah Hall"),
    (5.64050, -0.16800, "Nkrumah Hall"),
    (5.63850, -0.16500, "University Hospital"),
    (5.63990, -0.16600, "Institute of African Studies"),
    (5.63800, -0.16400, "Noguchi Memorial Institute for Medical Research"),
    (5.63850, -0.16550, "School of Public Health"),
    (5.63930, -0.16640, "Department of Geography and Resource Development"),
    (5.63970, -0.16710, "Department of Psychology"),
    (5.63950, -0.16690, "Department of Sociology"),
    (5.63980, -0.16720, "Department of Political Science"),
    (5.63850, -0.16800, "Sports Fields"),
    (5.63920, -0.16780, "University Guest Centre"),
    (5.63800, -0.16850, "UG Sports Stadium"),
    (5.64000, -0.16800, "Botanical Gardens"),
    (5.63930, -0.16850, "Athletic Oval"),
    (5.63940, -0.16780, "Legon Pool Side"),
    (5.64960, -0.18720, "University of Ghana Business School"),
];

/// Ordered, immutable list of landmarks.
///
/// Identifiers are dense: the landmark at position `i` has id `i`, which is
/// also its row and column in every travel matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkRegistry {
    landmarks: Vec<Landmark>,
}

impl LandmarkRegistry {
    /// Builds a registry from `(name, latitude, longitude)` entries
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or out of range
    pub fn new<S: Into<String>>(
        entries: impl IntoIterator<Item = (S, f64, f64)>,
    ) -> Result<Self, Error> {
        let landmarks = entries
            .into_iter()
            .enumerate()
            .map(|(id, (name, latitude, longitude))| {
                let name = name.into();
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(Error::InvalidData(format!(
                        "Landmark '{name}' has invalid coordinates ({latitude}, {longitude})"
                    )));
                }
                Ok(Landmark {
                    id,
                    name,
                    geometry: Point::new(longitude, latitude),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { landmarks })
    }

    /// Built-in University of Ghana campus landmarks
    pub fn campus() -> Self {
        let landmarks = CAMPUS_LANDMARKS
            .iter()
            .enumerate()
            .map(|(id, &(latitude, longitude, name))| Landmark {
                id,
                name: name.to_string(),
                geometry: Point::new(longitude, latitude),
            })
            .collect();
        Self { landmarks }
    }

    /// Reads landmarks from a CSV file with a `name,latitude,longitude` header.
    /// Row order defines identifiers.
    pub fn from_csv(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;

        let records = csv::Reader::from_reader(file)
            .deserialize()
            .collect::<Result<Vec<LandmarkRecord>, _>>()?;

        if records.is_empty() {
            return Err(Error::InvalidData(format!(
                "No landmarks found in '{}'",
                path.display()
            )));
        }

        Self::new(
            records
                .into_iter()
                .map(|r| (r.name, r.latitude, r.longitude)),
        )
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, id: LandmarkId) -> Result<&Landmark, Error> {
        self.landmarks.get(id).ok_or(Error::InvalidNode(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    pub fn positions(&self) -> Vec<Point<f64>> {
        self.landmarks.iter().map(|l| l.geometry).collect()
    }

    /// Names along a path, failing on the first unknown id
    pub fn names(&self, path: &[LandmarkId]) -> Result<Vec<&str>, Error> {
        path.iter()
            .map(|&id| self.get(id).map(|l| l.name.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a LandmarkRegistry {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_registry_is_id_ordered() {
        let registry = LandmarkRegistry::campus();
        assert_eq!(registry.len(), 24);
        for (i, landmark) in registry.iter().enumerate() {
            assert_eq!(landmark.id, i);
        }

        let balme = registry.get(0).unwrap();
        assert_eq!(balme.name, "Balme Library");
        assert_eq!(balme.latitude(), 5.65188);
        assert_eq!(balme.longitude(), -0.18683);
    }

    #[test]
    fn unknown_id_is_invalid_node() {
        let registry = LandmarkRegistry::campus();
        assert!(matches!(registry.get(24), Err(Error::InvalidNode(24))));
        assert!(registry.names(&[0, 99]).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let result = LandmarkRegistry::new(vec![("Nowhere", 95.0, 0.0)]);
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }
}
