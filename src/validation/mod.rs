//! Input checks for the boundary in front of the assignment engine.
//!
//! The engine assumes well-formed input. Callers ingesting data from files
//! or other services run [`validate_input`] first.

mod error;
mod input;

pub use error::ValidationError;
pub use input::validate_input;
