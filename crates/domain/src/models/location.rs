//! Geographic location domain model.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A point on the map with a human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_location"))]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
        }
    }

    /// Absolute latitude difference in degrees.
    pub fn latitude_delta(&self, other: &Location) -> f64 {
        (self.lat - other.lat).abs()
    }
}

/// Checks that both coordinates are in range.
pub(crate) fn validate_location(location: &Location) -> Result<(), ValidationError> {
    shared::validation::validate_latitude(location.lat)?;
    shared::validation::validate_longitude(location.lng)
}
