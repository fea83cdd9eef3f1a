//! Geographic position type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::validation::ValidationError;

fn default_weight() -> f64 {
    1.0
}

/// A point on the Earth's surface with a routing-friction multiplier.
///
/// `weight` models externally supplied conditions (traffic, weather, road
/// state) around the location. It is not used by [`distance_to`](Self::distance_to).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Position;
///
/// let a = Position::new(52.5075, 13.3295);
/// let b = Position::new(52.5065, 13.3299).with_weight(1.5);
/// assert_eq!(a.weight(), 1.0);
/// assert_eq!(b.weight(), 1.5);
/// assert!(a.distance_to(&b) > 0.0);
/// assert_eq!(a.distance_to(&a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    #[serde(default = "default_weight")]
    weight: f64,
}

impl Position {
    /// Creates a position with friction weight 1.0.
    ///
    /// Coordinates are not checked; see [`validate`](Self::validate).
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            weight: 1.0,
        }
    }

    /// Sets the friction weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Friction multiplier (default 1.0).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Position) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Returns `true` if both positions share latitude and longitude.
    ///
    /// Ignores `weight`.
    pub fn same_coordinates(&self, other: &Position) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }

    /// Checks coordinate ranges and the friction weight.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::InvalidWeight(self.weight));
        }
        Ok(())
    }
}
