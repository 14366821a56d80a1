//! Interruptible delay between iterations.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How a wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitResult {
    Elapsed,
    Cancelled,
}

/// Sleep for `delay`, or until `cancel` fires, whichever comes first.
///
/// `Duration::ZERO` and very large durations go through the same path:
/// tokio clamps deadlines that would overflow to a far-future instant.
/// If the token is already cancelled the wait ends immediately.
pub async fn wait(delay: Duration, cancel: &CancellationToken) -> WaitResult {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => WaitResult::Cancelled,
        _ = tokio::time::sleep(delay) => WaitResult::Elapsed,
    }
}
