//! # Gateway Errors
//!
//! Failures crossing the wire to the POS backend.
//!
//! Backend rejection messages are carried verbatim so the UI can show the
//! backend's own wording; the checkout layer decides what each failure means
//! for the state machine (retry, ambiguous outcome, etc.).

use thiserror::Error;

/// Errors from backend round trips.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Order creation was rejected or failed; message surfaced verbatim.
    #[error("Failed to create order: {0}")]
    OrderCreation(String),

    /// Payment processing was rejected or failed; message surfaced verbatim.
    #[error("Payment failed: {0}")]
    Payment(String),

    /// The request timed out. The backend may or may not have processed it -
    /// callers must treat the outcome as unknown, not as failed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Transport-level failure (cannot connect, TLS, aborted stream).
    #[error("Backend request failed: {0}")]
    Http(String),

    /// The backend answered with something we couldn't interpret.
    #[error("Unexpected backend response: {0}")]
    UnexpectedResponse(String),
}

impl GatewayError {
    /// True when the outcome of the request is unknown rather than failed.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, GatewayError::Timeout(_))
    }
}

/// Convenience type alias for Results with GatewayError.
pub type GatewayResult<T> = Result<T, GatewayError>;
