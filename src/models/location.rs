use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinates(format!("{lat}, {lng}")));
        }
        Ok(Self { lat, lng })
    }
}

/// Where an activity happened. Persisted flat as `location_name` + `coordinates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location_name", alias = "loc", default)]
    pub name: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.coordinates.is_none()
    }

    /// Label used in tables; falls back to the coordinates when unnamed.
    pub fn display(&self) -> String {
        match (&self.name, self.coordinates) {
            (n, _) if !n.trim().is_empty() => n.clone(),
            (_, Some(c)) => format!("{:.4}, {:.4}", c.lat, c.lng),
            _ => "-".to_string(),
        }
    }
}
