//! Errors reported by fold operations.
use thiserror::Error;

/// Returned when a seedless fold is asked to consume an empty sequence.
/// With no seed and no first element there is nothing to accumulate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot fold an empty sequence without an initial value")]
pub struct EmptyInput;
