//! # kasir-checkout: Session + Checkout Orchestration
//!
//! The layer the register shell binds to. Everything stateful about "one
//! cashier ringing up one customer" lives here; the pricing rules live in
//! `kasir-core` and the network lives in `kasir-gateway`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Crate Layout                            │
//! │                                                                     │
//! │  ┌──────────────┐  snapshot   ┌──────────────┐  PosBackend          │
//! │  │ CartSession  │────────────►│   Checkout   │─────────────► POS    │
//! │  │ (live cart,  │             │ (state       │               API    │
//! │  │  watch totals)│            │  machine)    │                      │
//! │  └──────────────┘             └──────┬───────┘                      │
//! │         ▲                            │ PaymentOutcome               │
//! │         │ load_menu                  ▼                              │
//! │    MenuBootstrap               format_receipt                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`session`] - [`CartSession`] and menu bootstrap
//! - [`checkout`] - the [`Checkout`] state machine
//! - [`receipt`] - printable receipt from the payment record
//! - [`error`] - [`CheckoutError`]

pub mod checkout;
pub mod error;
pub mod receipt;
pub mod session;

pub use checkout::{ChangeMismatch, Checkout, CheckoutState, PaymentOutcome};
pub use error::{CheckoutError, CheckoutResult};
pub use receipt::format_receipt;
pub use session::{load_menu, CartSession, MenuBootstrap};

/// Initializes tracing for the register shell.
///
/// `RUST_LOG` overrides the default filter (info globally, debug for the
/// kasir crates). Call once at startup; later calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kasir_core=debug,kasir_gateway=debug,kasir_checkout=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
