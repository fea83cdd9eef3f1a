//! Domain model types for fleet dispatch.
//!
//! Provides geographic positions, vehicles with remaining capacity,
//! delivery requests, per-vehicle routes and the plan produced by one
//! assignment pass.

mod plan;
mod position;
mod request;
mod route;
mod vehicle;

pub use plan::{DeliveryPlan, Violation, ViolationType};
pub use position::Position;
pub use request::DeliveryRequest;
pub use route::VehicleRoute;
pub use vehicle::Vehicle;
