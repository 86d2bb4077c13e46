use thiserror::Error;

/// Errors that can occur at the ephemeris provider boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {planet_id} at JD {julian_day}: {message}")]
    CalculationFailed {
        planet_id: String,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("{body} has no ephemeris code and must be derived")]
    UnsupportedBody { body: String },
}
