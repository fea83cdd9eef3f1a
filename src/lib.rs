//! # u-dispatch
//!
//! Capacity-aware dispatch of delivery requests to a vehicle fleet over
//! geographic coordinates, using a single-pass greedy heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Position, Vehicle, DeliveryRequest, DeliveryPlan)
//! - [`distance`] — Haversine great-circle distance
//! - [`constructive`] — Greedy nearest-feasible-vehicle assignment engine
//! - [`validation`] — Input checks for callers ingesting external data
//! - [`evaluation`] — Plan replay: route distance and consistency checks
//! - [`render`] — GeoJSON rendering of routes
//! - [`demo_data`] — Seeded demo fleet and request generation

pub mod constructive;
pub mod demo_data;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod render;
pub mod validation;
