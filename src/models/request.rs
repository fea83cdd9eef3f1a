//! Delivery request type.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Position;

fn default_weight() -> f64 {
    1.0
}

/// A customer's request to have `demand` units delivered to `location`.
///
/// `weight` is a priority multiplier; requests are served in ascending order
/// of [`priority`](Self::priority).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DeliveryRequest, Position};
///
/// let r = DeliveryRequest::new("C1", "Order1", 12, Position::new(52.5, 13.3))
///     .with_weight(0.5);
/// assert_eq!(r.demand(), 12);
/// assert_eq!(r.priority(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    customer_id: String,
    request_id: String,
    demand: i32,
    location: Position,
    timestamp: Timestamp,
    #[serde(default = "default_weight")]
    weight: f64,
}

impl DeliveryRequest {
    /// Creates a request stamped with the current time and weight 1.0.
    pub fn new(
        customer_id: impl Into<String>,
        request_id: impl Into<String>,
        demand: i32,
        location: Position,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            request_id: request_id.into(),
            demand,
            location,
            timestamp: Timestamp::now(),
            weight: 1.0,
        }
    }

    /// Sets the priority weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the time the request was placed.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Ordering customer.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Request identity, unique within a batch.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Capacity units this request consumes.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Delivery location.
    pub fn location(&self) -> &Position {
        &self.location
    }

    /// When the request was placed.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Priority weight (default 1.0).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Ranking key: `demand * weight`. Lower is served first.
    pub fn priority(&self) -> f64 {
        f64::from(self.demand) * self.weight
    }
}
