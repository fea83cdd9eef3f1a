//! Demo data generators for fleet dispatch.
//!
//! Provides a small Berlin fleet of five drivers and a seeded generator for
//! random delivery requests scattered around a centre point. The generator
//! never emits more total demand than the fleet can carry.

use jiff::Timestamp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DeliveryRequest, Position, Vehicle};

/// Drivers, capacities and start coordinates of the demo fleet.
const BERLIN_FLEET: [(&str, i32, f64, f64); 5] = [
    ("Driver1", 100, 52.5075, 13.3295),
    ("Driver2", 120, 52.5065, 13.3299),
    ("Driver3", 80, 52.5057, 13.3304),
    ("Driver4", 90, 52.5055, 13.3307),
    ("Driver5", 110, 52.5047, 13.3311),
];

/// Demo dataset configuration.
///
/// # Examples
///
/// ```
/// use u_dispatch::demo_data::{demo_fleet, generate_requests, DemoConfig};
///
/// let fleet = demo_fleet();
/// let capacity: i32 = fleet.iter().map(|v| v.capacity()).sum();
/// let requests = generate_requests(&DemoConfig::default().with_seed(7), capacity);
/// assert!(requests.len() <= 100);
/// assert!(requests.iter().map(|r| r.demand()).sum::<i32>() <= capacity);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// RNG seed; equal seeds give equal batches.
    pub seed: u64,
    /// Upper bound on generated requests.
    pub request_count: usize,
    /// Demands are drawn from `1..=max_demand`.
    pub max_demand: i32,
    /// Centre of the delivery area.
    pub center: Position,
    /// Side length of the square delivery area, in degrees.
    pub spread: f64,
    /// Timestamp stamped on every generated request.
    pub issued_at: Timestamp,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            request_count: 100,
            max_demand: 20,
            center: Position::new(52.5076, 13.3299),
            spread: 0.01,
            issued_at: Timestamp::UNIX_EPOCH,
        }
    }
}

impl DemoConfig {
    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the maximum number of requests.
    pub fn with_request_count(mut self, count: usize) -> Self {
        self.request_count = count;
        self
    }

    /// Sets the largest demand a request may carry.
    pub fn with_max_demand(mut self, max_demand: i32) -> Self {
        self.max_demand = max_demand.max(1);
        self
    }
}

/// The five-driver Berlin fleet, 500 capacity units in total.
pub fn demo_fleet() -> Vec<Vehicle> {
    BERLIN_FLEET
        .iter()
        .map(|&(id, capacity, lat, lon)| Vehicle::new(id, capacity, Position::new(lat, lon)))
        .collect()
}

/// Generates random requests whose total demand stays within
/// `total_capacity`.
///
/// Stops at `config.request_count` requests or at the first draw that
/// would overflow the fleet, whichever comes first.
pub fn generate_requests(config: &DemoConfig, total_capacity: i32) -> Vec<DeliveryRequest> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut requests = Vec::with_capacity(config.request_count);
    let mut total_demand = 0;

    while requests.len() < config.request_count {
        let demand = rng.random_range(1..=config.max_demand.max(1));
        if total_demand + demand > total_capacity {
            break;
        }
        total_demand += demand;

        let lat = config.center.latitude() + (rng.random::<f64>() - 0.5) * config.spread;
        let lon = config.center.longitude() + (rng.random::<f64>() - 0.5) * config.spread;
        let n = requests.len() + 1;
        requests.push(
            DeliveryRequest::new(
                format!("C{n}"),
                format!("Order{n}"),
                demand,
                Position::new(lat, lon),
            )
            .with_timestamp(config.issued_at),
        );
    }

    debug!(
        seed = config.seed,
        requests = requests.len(),
        total_demand,
        "generated demo requests"
    );
    requests
}
