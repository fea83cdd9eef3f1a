//! Assignment engine configuration.

use serde::{Deserialize, Serialize};

/// What the engine does when a request finds no feasible vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// End the pass; the request and every request after it become pending.
    #[default]
    Stop,
    /// Mark only this request pending and carry on with the next one.
    Skip,
}

/// Tuning knobs for [`RouteAssignmentEngine`](super::RouteAssignmentEngine).
///
/// The default configuration stops at the first unservable request and ranks
/// requests by `demand * weight` alone.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::{AssignmentConfig, ExhaustionPolicy};
///
/// let config = AssignmentConfig::default()
///     .with_exhaustion(ExhaustionPolicy::Skip)
///     .with_location_friction(true);
/// assert_eq!(config.exhaustion(), ExhaustionPolicy::Skip);
/// assert!(config.location_friction());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    exhaustion: ExhaustionPolicy,
    location_friction: bool,
}

impl AssignmentConfig {
    /// Sets the policy for unservable requests.
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Multiplies each request's priority by its location's friction weight.
    pub fn with_location_friction(mut self, enabled: bool) -> Self {
        self.location_friction = enabled;
        self
    }

    /// Policy for unservable requests.
    pub fn exhaustion(&self) -> ExhaustionPolicy {
        self.exhaustion
    }

    /// Whether location friction takes part in ranking.
    pub fn location_friction(&self) -> bool {
        self.location_friction
    }
}
