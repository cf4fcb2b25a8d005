//! Common validation utilities.

use validator::ValidationError;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a free-text field is present and not only whitespace.
pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Value is required".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that occupancy does not exceed capacity.
pub fn validate_occupancy(capacity: u32, occupancy: u32) -> Result<(), ValidationError> {
    if occupancy <= capacity {
        Ok(())
    } else {
        let mut err = ValidationError::new("occupancy_range");
        err.message = Some("Current occupancy cannot exceed capacity".into());
        Err(err)
    }
}
