//! # kasir-gateway: Backend Gateway for the Kasir POS Client
//!
//! The single place the client touches the network.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Gateway Position                                 │
//! │                                                                     │
//! │  kasir-checkout ──► PosBackend trait ──► HttpBackend ──► POS API    │
//! │                          │                                          │
//! │                          └──► scripted mock (tests)                 │
//! │                                                                     │
//! │  The trait is the seam: the checkout state machine never knows      │
//! │  whether it is talking to reqwest or to a test double.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`api`] - the [`PosBackend`] trait (logical contract)
//! - [`http`] - reqwest implementation + [`BackendConfig`]
//! - [`types`] - wire DTOs
//! - [`error`] - [`GatewayError`]

pub mod api;
pub mod error;
pub mod http;
pub mod types;

pub use api::PosBackend;
pub use error::{GatewayError, GatewayResult};
pub use http::{normalize_base_url, BackendConfig, HttpBackend};
pub use types::{
    CreateOrderItem, CreateOrderRequest, PaymentResponse, ProcessPaymentRequest, TaxSettings,
};
