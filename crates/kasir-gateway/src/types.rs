//! # Wire Types
//!
//! Request/response DTOs for the backend contract.
//!
//! ## Contract Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Backend Contract (JSON over HTTP)                │
//! │                                                                     │
//! │  POST /order/create     CreateOrderRequest   ──► Order              │
//! │  GET  /order/{id}                            ──► Order              │
//! │  DELETE /order/{id}                          ──► bool (best-effort) │
//! │  POST /payment/process  ProcessPaymentRequest──► PaymentResponse    │
//! │  GET  /menu/categories                       ──► [MenuCategory]     │
//! │  GET  /menu/tax-settings                     ──► TaxSettings        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts on the wire are whole rupiah (plain JSON numbers); field names
//! are camelCase. `Order`, `MenuCategory` and `MenuItem` deserialize
//! directly into the core domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kasir_core::{LineItem, Money, PaymentMethod, TaxRate};

// =============================================================================
// Order Creation
// =============================================================================

/// One cart line in an order-creation request. The backend re-prices from
/// its own menu, so only the id and quantity travel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub menu_item_id: i64,
    pub quantity: i64,
}

/// Request to create an order from a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<CreateOrderItem>,
    pub discount_amount: Money,
}

impl CreateOrderRequest {
    /// Builds a request from a cart snapshot (no discount).
    pub fn from_snapshot(items: &[LineItem]) -> Self {
        CreateOrderRequest {
            items: items
                .iter()
                .map(|line| CreateOrderItem {
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                })
                .collect(),
            discount_amount: Money::zero(),
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Request to record a payment against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub order_id: i64,

    pub payment_method: PaymentMethod,

    /// Cash: the tendered amount. QRIS: the order total.
    pub amount_paid: Money,

    /// Stable per order attempt, so a retry after an ambiguous outcome
    /// cannot double-charge.
    pub idempotency_key: Uuid,
}

/// Authoritative payment record returned by the backend. Basis for receipt
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub transaction_id: i64,
    pub order_number: String,
    pub payment_method: PaymentMethod,
    pub amount_paid: Money,
    pub change_amount: Money,
    pub order_total: Money,
    pub tax_amount: Money,
    pub status: String,
    pub transaction_date: DateTime<Utc>,
}

// =============================================================================
// Tax Settings
// =============================================================================

/// Backend tax configuration applied to taxable menu items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    pub tax_name: String,

    /// Default rate in basis points (1000 = 10%).
    pub tax_rate_bps: u32,

    pub is_enabled: bool,
}

impl TaxSettings {
    /// The rate to apply when adding taxable items to the cart; zero when
    /// tax is disabled for the store.
    pub fn effective_rate(&self) -> TaxRate {
        if self.is_enabled {
            TaxRate::from_bps(self.tax_rate_bps)
        } else {
            TaxRate::zero()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
