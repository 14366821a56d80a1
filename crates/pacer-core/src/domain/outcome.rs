//! Outcome model: the classified result of one iteration.

use std::time::Duration;

use super::errors::IterationError;

/// What the loop should do after an iteration returned.
///
/// - `Success`: wait the delay the worker asked for.
/// - `Fault`: log it, then wait the default delay.
/// - `Cancelled`: the failure coincided with an active cancellation request;
///   go straight back to the top-of-loop check without logging or waiting.
#[derive(Debug)]
pub enum IterationOutcome {
    Success(Duration),
    Fault(IterationError),
    Cancelled,
}

impl IterationOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, IterationOutcome::Fault(_))
    }
}
