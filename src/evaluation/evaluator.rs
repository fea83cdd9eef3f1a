//! Plan evaluator that replays capacity deductions and travel.

use std::collections::HashSet;

use tracing::warn;

use crate::models::{DeliveryPlan, Vehicle, VehicleRoute, Violation, ViolationType};

/// Evaluates plans against the fleet's state *before* assignment.
///
/// Take a snapshot of the vehicles before calling the engine, since the
/// engine mutates capacities and positions in place.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position, Vehicle};
/// use u_dispatch::constructive::optimize;
/// use u_dispatch::evaluation::PlanEvaluator;
///
/// let mut vehicles = vec![Vehicle::new("V1", 10, Position::new(0.0, 0.0))];
/// let initial = vehicles.clone();
/// let requests = vec![DeliveryRequest::new("C1", "R1", 4, Position::new(0.0, 1.0))];
///
/// let plan = optimize(&mut vehicles, requests);
/// let (distance, violations) = PlanEvaluator::new(&initial).evaluate(&plan);
/// assert!((distance - 111.19).abs() < 0.01);
/// assert!(violations.is_empty());
/// ```
pub struct PlanEvaluator<'a> {
    vehicles: &'a [Vehicle],
}

impl<'a> PlanEvaluator<'a> {
    /// Creates an evaluator for the given initial fleet.
    pub fn new(vehicles: &'a [Vehicle]) -> Self {
        Self { vehicles }
    }

    fn vehicle(&self, id: &str) -> Option<&'a Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// Travel distance of a route in kilometres.
    ///
    /// Starts at the vehicle's initial position when the vehicle is known,
    /// otherwise at the first request.
    pub fn route_distance(&self, route: &VehicleRoute) -> f64 {
        let mut positions = route.positions();
        if let Some(vehicle) = self.vehicle(route.vehicle_id()) {
            positions.insert(0, *vehicle.current_position());
        }
        positions
            .windows(2)
            .map(|leg| leg[0].distance_to(&leg[1]))
            .sum()
    }

    /// Replays capacity deductions for one route in visiting order.
    pub fn check_route(&self, route: &VehicleRoute) -> Vec<Violation> {
        let Some(vehicle) = self.vehicle(route.vehicle_id()) else {
            return vec![Violation::new(ViolationType::UnknownVehicle {
                vehicle_id: route.vehicle_id().to_string(),
            })];
        };

        let mut violations = Vec::new();
        let mut remaining = vehicle.capacity();
        for request in route.requests() {
            if request.demand() > remaining {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    vehicle_id: route.vehicle_id().to_string(),
                    request_id: request.request_id().to_string(),
                    demand: request.demand(),
                    remaining,
                }));
            }
            remaining -= request.demand();
        }
        violations
    }

    /// Evaluates a whole plan, returning `(total distance, violations)`.
    pub fn evaluate(&self, plan: &DeliveryPlan) -> (f64, Vec<Violation>) {
        let mut total_distance = 0.0;
        let mut all_violations = Vec::new();

        for route in plan.routes() {
            total_distance += self.route_distance(route);
            all_violations.append(&mut self.check_route(route));
        }

        let mut seen = HashSet::new();
        let placed = plan
            .routes()
            .iter()
            .flat_map(|r| r.requests())
            .chain(plan.pending());
        for request in placed {
            if !seen.insert(request.request_id()) {
                all_violations.push(Violation::new(ViolationType::DuplicateRequest {
                    request_id: request.request_id().to_string(),
                }));
            }
        }

        if !all_violations.is_empty() {
            warn!(violations = all_violations.len(), "plan is inconsistent");
        }
        (total_distance, all_violations)
    }
}
