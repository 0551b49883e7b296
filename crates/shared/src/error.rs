use thiserror::Error;

use crate::domain::EmployerId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("employer '{name}' has a blank company id")]
    BlankId { name: String },
    #[error("employer {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        id: EmployerId,
        latitude: f64,
        longitude: f64,
    },
}
