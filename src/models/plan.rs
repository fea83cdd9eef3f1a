//! Delivery plan and violation types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{DeliveryRequest, VehicleRoute};

/// A type of inconsistency found when replaying a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A request was assigned while the vehicle lacked capacity for it.
    CapacityExceeded {
        /// Vehicle the request was assigned to.
        vehicle_id: String,
        /// Request that did not fit.
        request_id: String,
        /// Demand of the request.
        demand: i32,
        /// Capacity the vehicle had left at that point.
        remaining: i32,
    },
    /// A route refers to a vehicle absent from the fleet.
    UnknownVehicle {
        /// Vehicle ID on the route.
        vehicle_id: String,
    },
    /// A request appears more than once across routes and pending.
    DuplicateRequest {
        /// Request ID seen twice.
        request_id: String,
    },
}

/// An inconsistency in a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// The outcome of one planning pass.
///
/// Routes are keyed by vehicle identity and kept in the order each vehicle
/// received its first request. Vehicles that received nothing have no
/// entry; [`route`](Self::route) answers an empty slice for them.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryPlan, DeliveryRequest, Position};
///
/// let mut plan = DeliveryPlan::new();
/// plan.assign("V1", DeliveryRequest::new("C1", "R1", 3, Position::new(0.0, 0.0)));
/// plan.add_pending(DeliveryRequest::new("C2", "R2", 99, Position::new(0.0, 0.0)));
///
/// assert_eq!(plan.route("V1").len(), 1);
/// assert!(plan.route("V2").is_empty());
/// assert_eq!(plan.num_assigned(), 1);
/// assert_eq!(plan.num_pending(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryPlan {
    routes: Vec<VehicleRoute>,
    pending: Vec<DeliveryRequest>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DeliveryPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `request` to the route of `vehicle_id`, opening it if needed.
    pub fn assign(&mut self, vehicle_id: &str, request: DeliveryRequest) {
        let slot = match self.index.get(vehicle_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.slot(vehicle_id).unwrap_or_else(|| {
                    self.routes.push(VehicleRoute::new(vehicle_id));
                    self.routes.len() - 1
                });
                self.index.insert(vehicle_id.to_string(), slot);
                slot
            }
        };
        self.routes[slot].push(request);
    }

    fn slot(&self, vehicle_id: &str) -> Option<usize> {
        match self.index.get(vehicle_id) {
            Some(&slot) => Some(slot),
            // Deserialized plans carry no index.
            None => self.routes.iter().position(|r| r.vehicle_id() == vehicle_id),
        }
    }

    /// Marks a request as unserved.
    pub fn add_pending(&mut self, request: DeliveryRequest) {
        self.pending.push(request);
    }

    /// Requests assigned to `vehicle_id`, in visiting order.
    pub fn route(&self, vehicle_id: &str) -> &[DeliveryRequest] {
        self.find_route(vehicle_id)
            .map(VehicleRoute::requests)
            .unwrap_or(&[])
    }

    /// The route of `vehicle_id`, if it received any request.
    pub fn find_route(&self, vehicle_id: &str) -> Option<&VehicleRoute> {
        self.slot(vehicle_id).and_then(|slot| self.routes.get(slot))
    }

    /// Last request assigned to `vehicle_id`, if any.
    pub fn last_request(&self, vehicle_id: &str) -> Option<&DeliveryRequest> {
        self.route(vehicle_id).last()
    }

    /// All non-empty routes, in order of first assignment.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    /// Requests that received no vehicle, in the order they were abandoned.
    pub fn pending(&self) -> &[DeliveryRequest] {
        &self.pending
    }

    /// Number of vehicles with at least one request.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of requests assigned across all routes.
    pub fn num_assigned(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Number of pending requests.
    pub fn num_pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if every request was assigned.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}
