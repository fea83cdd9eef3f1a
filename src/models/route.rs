//! Per-vehicle route type.

use serde::{Deserialize, Serialize};

use super::{DeliveryRequest, Position};

/// The requests assigned to one vehicle, in visiting order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position, VehicleRoute};
///
/// let mut route = VehicleRoute::new("Driver1");
/// route.push(DeliveryRequest::new("C1", "R1", 10, Position::new(52.50, 13.30)));
/// route.push(DeliveryRequest::new("C2", "R2", 5, Position::new(52.51, 13.31)));
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.total_demand(), 15);
/// assert_eq!(route.last().map(|r| r.request_id()), Some("R2"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    vehicle_id: String,
    requests: Vec<DeliveryRequest>,
}

impl VehicleRoute {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            requests: Vec::new(),
        }
    }

    /// Appends a request to the end of this route.
    pub fn push(&mut self, request: DeliveryRequest) {
        self.requests.push(request);
    }

    /// Returns the vehicle serving this route.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Returns the requests in visiting order.
    pub fn requests(&self) -> &[DeliveryRequest] {
        &self.requests
    }

    /// Last request on the route, if any.
    pub fn last(&self) -> Option<&DeliveryRequest> {
        self.requests.last()
    }

    /// Number of requests on the route.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Request locations in visiting order.
    pub fn positions(&self) -> Vec<Position> {
        self.requests.iter().map(|r| *r.location()).collect()
    }

    /// Sum of the demands on this route.
    pub fn total_demand(&self) -> i32 {
        self.requests.iter().map(|r| r.demand()).sum()
    }

    /// Request IDs in visiting order.
    pub fn request_ids(&self) -> Vec<&str> {
        self.requests.iter().map(|r| r.request_id()).collect()
    }
}
