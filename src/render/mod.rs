//! Rendering of routes for map viewers.
//!
//! Routes become GeoJSON line strings with `[longitude, latitude]`
//! coordinates.

mod line;

pub use line::{plan_feature_collection, route_feature_collection};
