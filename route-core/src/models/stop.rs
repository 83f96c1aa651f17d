#[cfg(test)]
#[path = "../../tests/unit/models/stop_test.rs"]
mod stop_test;

use serde::{Deserialize, Serialize};

/// A geographic coordinate: longitude and latitude in degrees. Serialized as `[lon, lat]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lon, coordinate.lat]
    }
}

/// A stop priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can be postponed.
    Low,
    /// A regular collection.
    #[default]
    Medium,
    /// A bin which is almost full.
    High,
    /// An overflowing bin or a reported issue.
    Urgent,
}

/// A stop on a collection route: usually, a waste bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// An opaque stop id.
    pub id: String,
    /// Stop location.
    #[serde(rename = "coordinates")]
    pub location: Coordinate,
    /// Stop priority.
    #[serde(default)]
    pub priority: Priority,
    /// Estimated service time in minutes. When omitted, a default from options is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_time: Option<f64>,
}

impl Stop {
    /// Creates a new stop with default priority and service time.
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self { id: id.into(), location, priority: Priority::default(), service_time: None }
    }

    /// Sets stop priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets stop service time.
    pub fn with_service_time(mut self, service_time: f64) -> Self {
        self.service_time = Some(service_time);
        self
    }
}
