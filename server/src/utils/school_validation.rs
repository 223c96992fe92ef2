//! Input validation for school requests
//!
//! Coordinates are only checked for being numbers; latitude and longitude
//! ranges are accepted as given.

use crate::error::AppError;
use crate::models::NewSchool;

pub const INVALID_SCHOOL_MESSAGE: &str =
    "Invalid input. Please provide name, address, latitude, and longitude.";
pub const MISSING_COORDINATES_MESSAGE: &str = "Latitude and longitude are required";

/// Validates the fields of an add-school request and produces the record to insert.
pub fn validate_new_school(
    name: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<NewSchool, AppError> {
    let name = non_blank(name);
    let address = non_blank(address);

    match (name, address, latitude, longitude) {
        (Some(name), Some(address), Some(latitude), Some(longitude)) => Ok(NewSchool {
            name,
            address,
            latitude,
            longitude,
        }),
        _ => Err(AppError::Validation(INVALID_SCHOOL_MESSAGE.to_string())),
    }
}

/// Parses the `lat`/`lon` query parameters into a numeric pair.
pub fn parse_reference_point(lat: Option<&str>, lon: Option<&str>) -> Result<(f64, f64), AppError> {
    let (lat, lon) = match (lat.map(str::trim), lon.map(str::trim)) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => return Err(AppError::Validation(MISSING_COORDINATES_MESSAGE.to_string())),
    };

    Ok((parse_coordinate("lat", lat)?, parse_coordinate("lon", lon)?))
}

fn parse_coordinate(field: &str, raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>()
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", field, raw)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
