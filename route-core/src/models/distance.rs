#[cfg(test)]
#[path = "../../tests/unit/models/distance_test.rs"]
mod distance_test;

use crate::models::{Coordinate, Stop};
use crate::utils::{OptimizationError, RouteResult};
use serde::{Deserialize, Serialize};

/// Earth radius in km used by great-circle model.
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// Approximate length of one degree in km used by planar model.
pub const PLANAR_KM_PER_DEGREE: f64 = 111.;

/// Specifies how a distance between two coordinates is calculated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DistanceModel {
    /// Euclidean distance in coordinate units scaled to km with a fixed multiplier.
    /// It is intentionally approximate: the multiplier ignores latitude.
    #[serde(rename = "planar")]
    #[serde(rename_all = "camelCase")]
    Planar {
        /// Amount of km in one coordinate unit.
        #[serde(default = "default_km_per_unit")]
        km_per_unit: f64,
    },

    /// Haversine distance on a sphere with Earth radius.
    #[default]
    #[serde(rename = "great-circle")]
    GreatCircle,
}

fn default_km_per_unit() -> f64 {
    PLANAR_KM_PER_DEGREE
}

impl DistanceModel {
    /// Creates a planar model with default degree to km multiplier.
    pub fn planar() -> Self {
        Self::Planar { km_per_unit: PLANAR_KM_PER_DEGREE }
    }
}

/// Calculates a distance in km between two coordinates using given model.
pub fn distance(a: &Coordinate, b: &Coordinate, model: &DistanceModel) -> f64 {
    match model {
        DistanceModel::Planar { km_per_unit } => {
            let dx = a.lon - b.lon;
            let dy = a.lat - b.lat;

            (dx * dx + dy * dy).sqrt() * km_per_unit
        }
        DistanceModel::GreatCircle => {
            let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
            let d_lat = (b.lat - a.lat).to_radians();
            let d_lon = (b.lon - a.lon).to_radians();

            let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);

            // NOTE clamp protects asin from rounding errors slightly above 1
            2. * EARTH_RADIUS_KM * h.sqrt().clamp(0., 1.).asin()
        }
    }
}

/// A square matrix of distances between stops indexed by their position in the input list.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a distance matrix for given stops.
    pub fn new(stops: &[Stop], model: &DistanceModel) -> RouteResult<Self> {
        if let DistanceModel::Planar { km_per_unit } = model {
            if !km_per_unit.is_finite() || *km_per_unit <= 0. {
                return Err(OptimizationError::invalid_input(format!(
                    "planar distance multiplier must be a positive number, got {km_per_unit}"
                )));
            }
        }

        if let Some(stop) = stops.iter().find(|stop| !stop.location.is_finite()) {
            return Err(OptimizationError::invalid_input(format!(
                "stop '{}' has non-finite coordinates: [{}, {}]",
                stop.id, stop.location.lon, stop.location.lat
            )));
        }

        let values = stops
            .iter()
            .flat_map(|from| stops.iter().map(move |to| distance(&from.location, &to.location, model)))
            .collect::<Vec<_>>();

        Ok(Self { size: stops.len(), values })
    }

    /// Creates a matrix from flatten row-major values.
    #[cfg(test)]
    pub(crate) fn from_values(values: Vec<f64>) -> RouteResult<Self> {
        let size = (values.len() as f64).sqrt() as usize;

        if size * size != values.len() {
            return Err(OptimizationError::invalid_input(format!("non-square flatten matrix: {} items", values.len())));
        }

        if values.iter().any(|value| !value.is_finite() || *value < 0.) {
            return Err(OptimizationError::invalid_input("matrix values must be finite and non-negative"));
        }

        Ok(Self { size, values })
    }

    /// Returns a distance between two stops.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Returns amount of stops.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if matrix has no stops.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a length of the closed tour: all consecutive edges plus the edge back to the
    /// first stop. Tours with less than two stops have zero length.
    pub fn tour_distance(&self, sequence: &[usize]) -> f64 {
        if sequence.len() < 2 {
            return 0.;
        }

        let path = sequence.windows(2).map(|pair| self.distance(pair[0], pair[1])).sum::<f64>();
        let closing = self.distance(sequence[sequence.len() - 1], sequence[0]);

        path + closing
    }
}
