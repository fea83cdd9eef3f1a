use thiserror::Error;

/// Reasons a fleet or request batch is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("weight {0} must be finite and non-negative")]
    InvalidWeight(f64),
    #[error("vehicle {vehicle_id} has negative capacity {capacity}")]
    NegativeCapacity { vehicle_id: String, capacity: i32 },
    #[error("request {request_id} has negative demand {demand}")]
    NegativeDemand { request_id: String, demand: i32 },
    #[error("duplicate vehicle id {0}")]
    DuplicateVehicle(String),
    #[error("duplicate request id {0}")]
    DuplicateRequest(String),
    #[error("vehicle {vehicle_id}: {source}")]
    Vehicle {
        vehicle_id: String,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("request {request_id}: {source}")]
    Request {
        request_id: String,
        #[source]
        source: Box<ValidationError>,
    },
}
