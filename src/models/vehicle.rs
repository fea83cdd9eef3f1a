//! Vehicle type with remaining capacity and a moving position.

use serde::{Deserialize, Serialize};

use super::{DeliveryRequest, Position};

/// A vehicle that serves delivery requests.
///
/// `capacity` is the *remaining* capacity: the engine decrements it and moves
/// `current_position` to each request it assigns, so after a planning pass
/// the vehicle describes its state at the end of its route.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Position, Vehicle};
///
/// let v = Vehicle::new("Driver1", 100, Position::new(52.5075, 13.3295));
/// assert_eq!(v.id(), "Driver1");
/// assert_eq!(v.capacity(), 100);
/// assert!(v.can_serve(100));
/// assert!(!v.can_serve(101));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    capacity: i32,
    current_position: Position,
}

impl Vehicle {
    /// Creates a vehicle with the given identity, capacity and start position.
    pub fn new(id: impl Into<String>, capacity: i32, position: Position) -> Self {
        Self {
            id: id.into(),
            capacity,
            current_position: position,
        }
    }

    /// Vehicle identity (driver or plate), unique within a fleet.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remaining load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Where the vehicle currently is.
    pub fn current_position(&self) -> &Position {
        &self.current_position
    }

    /// Returns `true` if the remaining capacity covers `demand`.
    pub fn can_serve(&self, demand: i32) -> bool {
        self.capacity >= demand
    }

    /// Loads `request`: consumes its demand and moves to its location.
    pub(crate) fn take(&mut self, request: &DeliveryRequest) {
        self.capacity -= request.demand();
        self.current_position = *request.location();
    }
}
