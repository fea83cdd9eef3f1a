//! Greedy nearest-feasible-vehicle assignment.
//!
//! # Algorithm
//!
//! Requests are ranked by ascending `demand * weight` (stable, so ties keep
//! input order). Vehicles are ordered once by distance to the top-ranked
//! request; this order only breaks ties and is never refreshed. Each request
//! then goes to the feasible vehicle whose route currently ends closest to
//! it. A vehicle is feasible when its remaining capacity covers the demand.
//!
//! Under [`ExhaustionPolicy::Stop`] the pass ends at the first request no
//! vehicle can take, and every request from there on is pending, even ones
//! that would fit. This favours the number of requests served per pass over
//! route length and does no backtracking.
//!
//! # Complexity
//!
//! O(n log n + n·m) where n = requests and m = vehicles.

use tracing::{debug, info, instrument, Level};

use crate::models::{DeliveryPlan, DeliveryRequest, Position, Vehicle};

use super::{AssignmentConfig, ExhaustionPolicy};

/// Assigns requests to vehicles with the default [`AssignmentConfig`].
///
/// Vehicles that receive requests have their remaining capacity reduced
/// and their position moved to their last request. The order of
/// `vehicles` is left as the caller passed it.
///
/// # Arguments
///
/// * `vehicles` — Fleet; IDs must be unique
/// * `requests` — Requests to plan, in arrival order
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position, Vehicle};
/// use u_dispatch::constructive::optimize;
///
/// let depot = Position::new(52.5075, 13.3295);
/// let mut vehicles = vec![Vehicle::new("Driver1", 10, depot)];
/// let requests = vec![
///     DeliveryRequest::new("C1", "R1", 4, Position::new(52.5080, 13.3300)),
///     DeliveryRequest::new("C2", "R2", 8, Position::new(52.5090, 13.3310)),
/// ];
///
/// let plan = optimize(&mut vehicles, requests);
/// assert_eq!(plan.route("Driver1").len(), 1);
/// assert_eq!(plan.pending()[0].request_id(), "R2");
/// assert_eq!(vehicles[0].capacity(), 6);
/// ```
pub fn optimize(vehicles: &mut [Vehicle], requests: Vec<DeliveryRequest>) -> DeliveryPlan {
    RouteAssignmentEngine::default().optimize(vehicles, requests)
}

/// Route assignment engine.
///
/// Holds only configuration; all per-pass state lives in the returned
/// [`DeliveryPlan`] and in the vehicles themselves.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position, Vehicle};
/// use u_dispatch::constructive::{AssignmentConfig, ExhaustionPolicy, RouteAssignmentEngine};
///
/// let p = Position::new(0.0, 0.0);
/// let mut vehicles = vec![Vehicle::new("V1", 10, p)];
/// let requests = vec![
///     DeliveryRequest::new("C1", "R1", 6, p),
///     DeliveryRequest::new("C2", "R2", 5, p).with_weight(2.0),
///     DeliveryRequest::new("C3", "R3", 3, p).with_weight(4.0),
/// ];
///
/// let engine = RouteAssignmentEngine::new(
///     AssignmentConfig::default().with_exhaustion(ExhaustionPolicy::Skip),
/// );
/// let plan = engine.optimize(&mut vehicles, requests);
/// assert_eq!(plan.route("V1").len(), 2);
/// assert_eq!(plan.pending()[0].request_id(), "R2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteAssignmentEngine {
    config: AssignmentConfig,
}

impl RouteAssignmentEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: AssignmentConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Ranking key for a request. Lower is served first.
    pub fn priority(&self, request: &DeliveryRequest) -> f64 {
        if self.config.location_friction() {
            request.priority() * request.location().weight()
        } else {
            request.priority()
        }
    }

    /// Runs one assignment pass. See [`optimize`] for the mutation contract.
    #[instrument(
        skip_all,
        level = Level::DEBUG,
        fields(vehicles = vehicles.len(), requests = requests.len())
    )]
    pub fn optimize(
        &self,
        vehicles: &mut [Vehicle],
        mut requests: Vec<DeliveryRequest>,
    ) -> DeliveryPlan {
        let mut plan = DeliveryPlan::new();
        if requests.is_empty() {
            return plan;
        }

        requests.sort_by(|a, b| self.priority(a).total_cmp(&self.priority(b)));
        let order = vehicle_order(vehicles, requests[0].location());

        let mut queue = requests.into_iter();
        while let Some(request) = queue.next() {
            match nearest_feasible(vehicles, &order, &plan, &request) {
                Some((slot, cost)) => {
                    let vehicle = &mut vehicles[slot];
                    vehicle.take(&request);
                    debug!(
                        vehicle_id = vehicle.id(),
                        request_id = request.request_id(),
                        cost_km = cost,
                        remaining = vehicle.capacity(),
                        "assigned"
                    );
                    plan.assign(vehicle.id(), request);
                }
                None => {
                    debug!(
                        request_id = request.request_id(),
                        demand = request.demand(),
                        "no feasible vehicle"
                    );
                    plan.add_pending(request);
                    if self.config.exhaustion() == ExhaustionPolicy::Stop {
                        for rest in queue.by_ref() {
                            plan.add_pending(rest);
                        }
                        break;
                    }
                }
            }
        }

        info!(
            routes = plan.num_routes(),
            assigned = plan.num_assigned(),
            pending = plan.num_pending(),
            "assignment finished"
        );
        plan
    }
}

/// Vehicle indices sorted by distance from their position to `target`.
fn vehicle_order(vehicles: &[Vehicle], target: &Position) -> Vec<usize> {
    let distances: Vec<f64> = vehicles
        .iter()
        .map(|v| v.current_position().distance_to(target))
        .collect();
    let mut order: Vec<usize> = (0..vehicles.len()).collect();
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
    order
}

/// Finds the feasible vehicle with the cheapest marginal travel to `request`.
///
/// Cost runs from the end of the vehicle's route so far, or from its current
/// position if nothing was assigned in this pass. Ties go to the vehicle
/// earliest in `order`.
fn nearest_feasible(
    vehicles: &[Vehicle],
    order: &[usize],
    plan: &DeliveryPlan,
    request: &DeliveryRequest,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for &slot in order {
        let vehicle = &vehicles[slot];
        if !vehicle.can_serve(request.demand()) {
            continue;
        }
        let from = match plan.last_request(vehicle.id()) {
            Some(last) => last.location(),
            None => vehicle.current_position(),
        };
        let cost = from.distance_to(request.location());
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((slot, cost)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, demand: i32, lat: f64, lon: f64) -> DeliveryRequest {
        DeliveryRequest::new(format!("C-{id}"), id, demand, Position::new(lat, lon))
    }

    fn ids(requests: &[DeliveryRequest]) -> Vec<&str> {
        requests.iter().map(|r| r.request_id()).collect()
    }

    #[test]
    fn test_empty_input() {
        let plan = optimize(&mut [], Vec::new());
        assert_eq!(plan.num_routes(), 0);
        assert_eq!(plan.num_pending(), 0);
    }

    #[test]
    fn test_empty_requests_leave_vehicles_untouched() {
        let start = Position::new(52.5, 13.3);
        let mut vehicles = vec![Vehicle::new("V1", 10, start)];
        let plan = optimize(&mut vehicles, Vec::new());
        assert_eq!(plan.num_routes(), 0);
        assert!(plan.is_complete());
        assert_eq!(vehicles[0].capacity(), 10);
        assert_eq!(*vehicles[0].current_position(), start);
    }

    #[test]
    fn test_empty_fleet_everything_pending() {
        let requests = vec![request("R1", 5, 0.0, 0.0), request("R2", 1, 0.0, 0.0)];
        let plan = optimize(&mut [], requests);
        assert_eq!(plan.num_assigned(), 0);
        // Pending keeps priority order.
        assert_eq!(ids(plan.pending()), vec!["R2", "R1"]);
    }

    #[test]
    fn test_no_feasible_vehicle() {
        let mut vehicles = vec![Vehicle::new("V1", 5, Position::new(0.0, 0.0))];
        let plan = optimize(&mut vehicles, vec![request("R1", 10, 0.0, 0.0)]);
        assert!(plan.route("V1").is_empty());
        assert!(plan.find_route("V1").is_none());
        assert_eq!(ids(plan.pending()), vec!["R1"]);
        assert_eq!(vehicles[0].capacity(), 5);
    }

    #[test]
    fn test_two_vehicles_two_requests() {
        let p0 = Position::new(52.5075, 13.3295);
        let far = Position::new(48.1351, 11.5820);
        let mut vehicles = vec![Vehicle::new("V1", 10, p0), Vehicle::new("V2", 10, far)];
        let requests = vec![
            request("R1", 4, 52.5080, 13.3300),
            request("R2", 4, 48.1355, 11.5825),
        ];

        let plan = optimize(&mut vehicles, requests);
        assert_eq!(ids(plan.route("V1")), vec!["R1"]);
        assert_eq!(ids(plan.route("V2")), vec!["R2"]);
        assert!(plan.is_complete());
        assert_eq!(vehicles[0].capacity(), 6);
        assert_eq!(vehicles[1].capacity(), 6);
        assert_eq!(*vehicles[1].current_position(), Position::new(48.1355, 11.5825));
    }

    #[test]
    fn test_stops_at_first_unservable_request() {
        let p = Position::new(0.0, 0.0);
        let mut vehicles = vec![Vehicle::new("V1", 10, p)];
        let requests = vec![
            request("A", 6, 0.0, 0.0),
            request("B", 5, 0.0, 0.0).with_weight(2.0),
            request("C", 3, 0.0, 0.0).with_weight(4.0),
        ];

        let plan = optimize(&mut vehicles, requests);
        assert_eq!(ids(plan.route("V1")), vec!["A"]);
        // C (demand 3) would fit into the remaining 4 units but is never tried.
        assert_eq!(ids(plan.pending()), vec!["B", "C"]);
        assert_eq!(vehicles[0].capacity(), 4);
    }

    #[test]
    fn test_skip_policy_continues() {
        let p = Position::new(0.0, 0.0);
        let mut vehicles = vec![Vehicle::new("V1", 10, p)];
        let requests = vec![
            request("A", 6, 0.0, 0.0),
            request("B", 5, 0.0, 0.0).with_weight(2.0),
            request("C", 3, 0.0, 0.0).with_weight(4.0),
        ];

        let engine = RouteAssignmentEngine::new(
            AssignmentConfig::default().with_exhaustion(ExhaustionPolicy::Skip),
        );
        let plan = engine.optimize(&mut vehicles, requests);
        assert_eq!(ids(plan.route("V1")), vec!["A", "C"]);
        assert_eq!(ids(plan.pending()), vec!["B"]);
        assert_eq!(vehicles[0].capacity(), 1);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let p = Position::new(0.0, 0.0);
        let mut vehicles = vec![Vehicle::new("V1", 100, p)];
        let requests = vec![
            request("R1", 4, 0.0, 0.0),
            request("R2", 2, 0.0, 0.0).with_weight(2.0),
            request("R3", 1, 0.0, 0.0),
            request("R4", 8, 0.0, 0.0).with_weight(0.5),
        ];
        let plan = optimize(&mut vehicles, requests);
        assert_eq!(ids(plan.route("V1")), vec!["R3", "R1", "R2", "R4"]);
    }

    #[test]
    fn test_location_friction_changes_ranking() {
        let p = Position::new(0.0, 0.0);
        let requests = vec![
            request("R1", 2, 0.0, 0.0),
            DeliveryRequest::new("C2", "R2", 3, p.with_weight(0.5)),
        ];

        let mut plain = vec![Vehicle::new("V1", 100, p)];
        let plan = optimize(&mut plain, requests.clone());
        assert_eq!(ids(plan.route("V1")), vec!["R1", "R2"]);

        let engine =
            RouteAssignmentEngine::new(AssignmentConfig::default().with_location_friction(true));
        let mut weighted = vec![Vehicle::new("V1", 100, p)];
        let plan = engine.optimize(&mut weighted, requests);
        assert_eq!(ids(plan.route("V1")), vec!["R2", "R1"]);
    }

    #[test]
    fn test_cost_measured_from_route_end() {
        let mut vehicles = vec![
            Vehicle::new("V1", 100, Position::new(0.0, 0.0)),
            Vehicle::new("V2", 100, Position::new(0.0, 1.0)),
        ];
        let requests = vec![
            request("R1", 1, 0.0, 0.1),
            request("R2", 2, 0.0, 0.9),
            request("R3", 3, 0.0, 0.2),
        ];
        let plan = optimize(&mut vehicles, requests);
        assert_eq!(ids(plan.route("V1")), vec!["R1", "R3"]);
        assert_eq!(ids(plan.route("V2")), vec!["R2"]);
        assert_eq!(*vehicles[0].current_position(), Position::new(0.0, 0.2));
    }

    #[test]
    fn test_capacity_overrides_distance() {
        let mut vehicles = vec![
            Vehicle::new("Near", 3, Position::new(0.0, 0.0)),
            Vehicle::new("Far", 50, Position::new(1.0, 1.0)),
        ];
        let plan = optimize(&mut vehicles, vec![request("R1", 5, 0.0, 0.0)]);
        assert_eq!(ids(plan.route("Far")), vec!["R1"]);
        assert!(plan.route("Near").is_empty());
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let mut vehicles = vec![Vehicle::new("V1", 5, Position::new(0.0, 0.0))];
        let plan = optimize(&mut vehicles, vec![request("R1", 5, 0.0, 0.0)]);
        assert_eq!(plan.route("V1").len(), 1);
        assert_eq!(vehicles[0].capacity(), 0);
    }

    #[test]
    fn test_tie_goes_to_first_in_presort_order() {
        let p = Position::new(10.0, 10.0);
        let mut vehicles = vec![
            Vehicle::new("A", 10, p),
            Vehicle::new("B", 10, p),
            Vehicle::new("C", 10, Position::new(20.0, 20.0)),
        ];
        let plan = optimize(&mut vehicles, vec![request("R1", 1, 10.5, 10.5)]);
        assert_eq!(ids(plan.route("A")), vec!["R1"]);

        // The caller's slice keeps its order.
        let order: Vec<&str> = vehicles.iter().map(|v| v.id()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_vehicle_order_by_distance() {
        let vehicles = vec![
            Vehicle::new("Far", 1, Position::new(5.0, 5.0)),
            Vehicle::new("Near", 1, Position::new(0.1, 0.1)),
            Vehicle::new("Mid", 1, Position::new(1.0, 1.0)),
        ];
        let order = vehicle_order(&vehicles, &Position::new(0.0, 0.0));
        assert_eq!(order, vec![1, 2, 0]);
    }

    mod properties {
        use std::collections::HashMap;

        use proptest::prelude::*;

        use super::super::*;
        use crate::evaluation::PlanEvaluator;

        fn fleet() -> impl Strategy<Value = Vec<Vehicle>> {
            prop::collection::vec((0i32..60, -1.0f64..1.0, -1.0f64..1.0), 0..6).prop_map(|raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (cap, lat, lon))| {
                        Vehicle::new(format!("V{i}"), cap, Position::new(lat, lon))
                    })
                    .collect()
            })
        }

        fn batch() -> impl Strategy<Value = Vec<DeliveryRequest>> {
            prop::collection::vec(
                (0i32..25, 0.1f64..3.0, -1.0f64..1.0, -1.0f64..1.0),
                0..30,
            )
            .prop_map(|raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (demand, weight, lat, lon))| {
                        DeliveryRequest::new(
                            format!("C{i}"),
                            format!("R{i}"),
                            demand,
                            Position::new(lat, lon),
                        )
                        .with_weight(weight)
                    })
                    .collect()
            })
        }

        fn policy() -> impl Strategy<Value = ExhaustionPolicy> {
            prop_oneof![Just(ExhaustionPolicy::Stop), Just(ExhaustionPolicy::Skip)]
        }

        proptest! {
            #[test]
            fn every_request_lands_exactly_once(
                mut vehicles in fleet(),
                requests in batch(),
                exhaustion in policy(),
            ) {
                let mut expected: Vec<String> =
                    requests.iter().map(|r| r.request_id().to_string()).collect();
                let engine = RouteAssignmentEngine::new(
                    AssignmentConfig::default().with_exhaustion(exhaustion),
                );
                let plan = engine.optimize(&mut vehicles, requests);

                let mut seen: Vec<String> = plan
                    .routes()
                    .iter()
                    .flat_map(|r| r.requests())
                    .chain(plan.pending())
                    .map(|r| r.request_id().to_string())
                    .collect();
                expected.sort();
                seen.sort();
                prop_assert_eq!(seen, expected);
            }

            #[test]
            fn capacity_accounting_holds(
                mut vehicles in fleet(),
                requests in batch(),
                exhaustion in policy(),
            ) {
                let initial = vehicles.clone();
                let engine = RouteAssignmentEngine::new(
                    AssignmentConfig::default().with_exhaustion(exhaustion),
                );
                let plan = engine.optimize(&mut vehicles, requests);

                for (before, after) in initial.iter().zip(&vehicles) {
                    prop_assert!(after.capacity() >= 0);
                    let served: i32 = plan.route(after.id()).iter().map(|r| r.demand()).sum();
                    prop_assert_eq!(before.capacity() - after.capacity(), served);
                }

                let (_, violations) = PlanEvaluator::new(&initial).evaluate(&plan);
                prop_assert!(violations.is_empty(), "{:?}", violations);
            }

            #[test]
            fn stop_policy_pends_a_priority_suffix(
                mut vehicles in fleet(),
                requests in batch(),
            ) {
                let engine = RouteAssignmentEngine::default();
                let mut ranked = requests.clone();
                ranked.sort_by(|a, b| engine.priority(a).total_cmp(&engine.priority(b)));

                let plan = engine.optimize(&mut vehicles, requests);
                let split = ranked.len() - plan.num_pending();
                let suffix: Vec<&str> = ranked[split..].iter().map(|r| r.request_id()).collect();
                let pending: Vec<&str> = plan.pending().iter().map(|r| r.request_id()).collect();
                prop_assert_eq!(pending, suffix);

                // Every assigned request precedes the first pending one.
                let rank: HashMap<&str, usize> = ranked
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (r.request_id(), i))
                    .collect();
                for route in plan.routes() {
                    for r in route.requests() {
                        prop_assert!(rank[r.request_id()] < split);
                    }
                }
            }

            #[test]
            fn identical_input_gives_identical_plan(
                vehicles in fleet(),
                requests in batch(),
            ) {
                let mut first = vehicles.clone();
                let mut second = vehicles;
                let a = optimize(&mut first, requests.clone());
                let b = optimize(&mut second, requests);
                prop_assert_eq!(a.routes(), b.routes());
                prop_assert_eq!(a.pending(), b.pending());
                prop_assert_eq!(first, second);
            }
        }
    }
}
