//! Error types for webhook delivery.

use thiserror::Error;

use super::HttpResponse;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. The notifier never
/// retries; these errors are reported and dropped.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake and certificate verification failures, and other
    /// network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request URL was rejected before sending.
    ///
    /// Plain `http` URLs end up here since only HTTPS is allowed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A delivery attempt that did not reach the webhook.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP request failed.
    #[error("Webhook request failed: {0}")]
    Http(#[from] HttpError),
}

/// Outcome of one delivery attempt.
///
/// The response is kept for diagnostics only; its status is not validated.
pub type DeliveryResult = Result<HttpResponse, DeliveryError>;
