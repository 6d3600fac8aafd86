//! # kasir-core: Pure Business Logic for the Kasir POS Client
//!
//! This crate is the **heart** of the POS client. It contains all client-side
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Kasir POS Client Architecture                   │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      Cashier GUI                              │  │
//! │  │    Menu Grid ──► Cart Panel ──► Tender Screen ──► Receipt     │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              kasir-checkout (session + state machine)         │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ kasir-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │  │
//! │  │  │  types  │ │  money  │ │ pricing │ │  cart   │ │ tender  │  │  │
//! │  │  │ MenuItem│ │  Money  │ │ Line/   │ │  Cart   │ │ change, │  │  │
//! │  │  │  Order  │ │ TaxCalc │ │ CartSum │ │ LineItem│ │readiness│  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │          kasir-gateway (HTTP to the POS backend)              │  │
//! │  │   the backend owns pricing authority; this crate's totals     │  │
//! │  │   are the responsive pre-checkout estimate                    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, PaymentMethod, TaxRate)
//! - [`money`] - Money type with integer rupiah arithmetic (no floats!)
//! - [`pricing`] - Line/cart subtotal-tax-total calculator
//! - [`cart`] - Cart aggregate with synchronous recompute
//! - [`tender`] - Payment-method selection, cash entry, change
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, everywhere
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all amounts are whole rupiah (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod tender;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kasir_core::Money` instead of
// `use kasir_core::money::Money`

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CartTotals, LineTotals};
pub use tender::Tender;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transactions reviewable on one screen.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
