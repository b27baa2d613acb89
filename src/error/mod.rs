//! Validation failure types.

mod validation_error;

pub use validation_error::{Failure, FailureReason, ValidationError};
