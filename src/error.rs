//! Error type shared by the planner logic and the HTTP layer.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GardenError {
    /// Beds are measured in whole squares and must have a positive area.
    #[error("Bed dimensions must be strictly positive (got {width}x{height}).")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid month/day '{0}', expected MM-DD.")]
    InvalidMonthDay(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD.")]
    InvalidDate(String),

    /// Neither an explicit offset nor a catalogue plant was given.
    #[error("Either daysToHarvest or plantId is required to compute a harvest date.")]
    MissingHarvestOffset,

    #[error("Plant '{0}' not found.")]
    PlantNotFound(String),

    #[error("The garden has no beds.")]
    NoBeds,

    #[error("Date arithmetic out of range.")]
    DateOutOfRange,
}

pub type Result<T> = std::result::Result<T, GardenError>;

impl ResponseError for GardenError {
    fn status_code(&self) -> StatusCode {
        match self {
            GardenError::PlantNotFound(_) | GardenError::NoBeds => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = GardenError::PlantNotFound("kale".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Plant 'kale' not found.");
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let err = GardenError::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("0x4"));
    }
}
