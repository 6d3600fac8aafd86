//! # Checkout Errors
//!
//! What can go wrong between "cashier taps checkout" and "payment recorded".
//!
//! Nothing here is fatal: every error leaves the cart and order state
//! intact, and the state machine in a position to retry or cancel.

use thiserror::Error;

use kasir_core::CoreError;
use kasir_gateway::GatewayError;

use crate::checkout::CheckoutState;

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was started with an empty cart.
    #[error("Cart is empty - add items before checkout")]
    EmptyCart,

    /// The requested action is not valid in the current state.
    #[error("checkout is {state:?}, cannot {action}")]
    InvalidState {
        state: CheckoutState,
        action: &'static str,
    },

    /// A payment submission is already in flight for this order; at most one
    /// request may exist per order.
    #[error("a payment submission is already in flight")]
    SubmissionInFlight,

    /// The tender is not ready to submit (short cash, unparseable entry).
    #[error("payment is not ready: {reason}")]
    NotReady { reason: &'static str },

    /// Order creation failed; the machine stays in Initializing for retry.
    #[error("{0}")]
    OrderCreation(String),

    /// Payment was rejected or the round trip failed; the machine returns to
    /// AwaitingPayment for retry.
    #[error("{0}")]
    PaymentFailed(String),

    /// The payment request timed out - the backend may have processed it.
    /// Surface as "unknown, check order status", never as assumed-failed.
    #[error("payment outcome unknown - check order status ({0})")]
    AmbiguousOutcome(String),

    /// Backend failure outside the order/payment paths (menu, status check).
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Domain rule violation bubbled up from kasir-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
