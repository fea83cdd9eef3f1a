//! Constructive assignment of delivery requests to vehicles.
//!
//! - [`optimize`] — Greedy nearest-feasible-vehicle assignment, O(n·m)
//! - [`RouteAssignmentEngine`] — The same heuristic with an explicit
//!   [`AssignmentConfig`]

mod assignment;
mod config;

pub use assignment::{optimize, RouteAssignmentEngine};
pub use config::{AssignmentConfig, ExhaustionPolicy};
