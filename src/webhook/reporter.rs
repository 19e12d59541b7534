//! Sink for delivery failures the notifier contains.

use std::error::Error;

use super::DeliveryError;

/// Receives delivery failures instead of the caller.
///
/// The notifier calls [`report`](Self::report) exactly once per failed
/// delivery and then returns normally.
pub trait FailureReporter: Send + Sync {
    /// Records one failed delivery.
    fn report(&self, error: &DeliveryError);
}

/// Reports failures as `warn`-level tracing events.
///
/// The event carries the error message and its source chain as `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, error: &DeliveryError) {
        let trace = error_chain(error);
        tracing::warn!(error = %error, trace = ?trace, "Unhandled exception while notifying webhook");
    }
}

/// Collects the messages of an error's `source()` chain, outermost first.
///
/// The error itself is not included.
#[must_use]
pub fn error_chain(error: &dyn Error) -> Vec<String> {
    std::iter::successors(error.source(), |&e| e.source())
        .map(ToString::to_string)
        .collect()
}
