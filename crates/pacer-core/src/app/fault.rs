//! Fault isolation: decide how the loop reacts to an iteration result.

use std::time::Duration;

use crate::domain::{IterationError, IterationOutcome};

/// Classify the result of `Worker::run_iteration`.
///
/// A cancellation-shaped error only counts as a graceful stop when the
/// loop's own token is cancelled at the time the error is observed.
/// Otherwise it came from something else (a nested timeout, a child
/// token) and is a fault like any other error.
pub fn classify(
    result: Result<Duration, IterationError>,
    cancel_requested: bool,
) -> IterationOutcome {
    match result {
        Ok(delay) => IterationOutcome::Success(delay),
        Err(err) if err.is_cancellation() && cancel_requested => IterationOutcome::Cancelled,
        Err(err) => IterationOutcome::Fault(err),
    }
}
