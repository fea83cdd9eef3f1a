//! Replay of a delivery plan against the fleet it was planned for.
//!
//! Computes travel distance per route and checks that no request was
//! assigned beyond the vehicle's remaining capacity or placed twice.

mod evaluator;

pub use evaluator::PlanEvaluator;
