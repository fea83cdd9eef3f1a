//! Great-circle distance on the Earth's surface.
//!
//! Provides the haversine distance used for every cost comparison in the
//! assignment engine.

mod haversine;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
