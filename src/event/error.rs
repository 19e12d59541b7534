//! Error types for event decoding.

use thiserror::Error;

/// Error type for turning raw input into an [`Event`](super::Event).
#[derive(Debug, Error)]
pub enum EventError {
    /// The input was not valid JSON, or not a JSON object.
    #[error("Invalid event JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
