use std::collections::HashSet;

use tracing::warn;

use super::ValidationError;
use crate::models::{DeliveryRequest, Vehicle};

/// Rejects malformed fleets and request batches.
///
/// Checks coordinate ranges, friction and priority weights, non-negative
/// capacities and demands, and uniqueness of vehicle and request IDs.
/// Stops at the first problem found.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position, Vehicle};
/// use u_dispatch::validation::{validate_input, ValidationError};
///
/// let p = Position::new(52.5, 13.3);
/// let vehicles = vec![Vehicle::new("V1", 10, p), Vehicle::new("V1", 20, p)];
/// let requests = vec![DeliveryRequest::new("C1", "R1", 4, p)];
///
/// assert_eq!(
///     validate_input(&vehicles, &requests),
///     Err(ValidationError::DuplicateVehicle("V1".to_string()))
/// );
/// assert!(validate_input(&vehicles[..1], &requests).is_ok());
/// ```
pub fn validate_input(
    vehicles: &[Vehicle],
    requests: &[DeliveryRequest],
) -> Result<(), ValidationError> {
    let mut vehicle_ids = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if !vehicle_ids.insert(vehicle.id()) {
            warn!(vehicle_id = vehicle.id(), "duplicate vehicle id");
            return Err(ValidationError::DuplicateVehicle(vehicle.id().to_string()));
        }
        if vehicle.capacity() < 0 {
            return Err(ValidationError::NegativeCapacity {
                vehicle_id: vehicle.id().to_string(),
                capacity: vehicle.capacity(),
            });
        }
        vehicle
            .current_position()
            .validate()
            .map_err(|source| ValidationError::Vehicle {
                vehicle_id: vehicle.id().to_string(),
                source: Box::new(source),
            })?;
    }

    let mut request_ids = HashSet::with_capacity(requests.len());
    for request in requests {
        if !request_ids.insert(request.request_id()) {
            warn!(request_id = request.request_id(), "duplicate request id");
            return Err(ValidationError::DuplicateRequest(
                request.request_id().to_string(),
            ));
        }
        if request.demand() < 0 {
            return Err(ValidationError::NegativeDemand {
                request_id: request.request_id().to_string(),
                demand: request.demand(),
            });
        }
        let wrap = |source| ValidationError::Request {
            request_id: request.request_id().to_string(),
            source: Box::new(source),
        };
        if !request.weight().is_finite() || request.weight() < 0.0 {
            return Err(wrap(ValidationError::InvalidWeight(request.weight())));
        }
        request.location().validate().map_err(wrap)?;
    }

    Ok(())
}
