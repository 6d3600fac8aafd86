//! # Domain Types
//!
//! Core domain types for the Kasir POS client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │   MenuItem     │   │     Order      │   │ PaymentMethod  │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id            │   │  id            │   │  Cash          │      │
//! │  │  name          │   │  order_number  │   │  Qris          │      │
//! │  │  price         │   │  subtotal      │   └────────────────┘      │
//! │  │  is_taxable    │   │  tax / total   │                           │
//! │  └────────────────┘   │  status        │   ┌────────────────┐      │
//! │                       └────────────────┘   │    TaxRate     │      │
//! │  ┌────────────────┐                        │  ────────────  │      │
//! │  │  MenuCategory  │                        │  bps (u32)     │      │
//! │  │  (ordered      │                        │  1000 = 10%    │      │
//! │  │   MenuItems)   │                        └────────────────┘      │
//! │  └────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend owns the authoritative copies of all of these; the client
//! holds read-only mirrors. `Order` totals in particular supersede any
//! client-side cart estimate the moment the order is created.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000.
/// 1000 bps = 10% (the default Indonesian restaurant service/tax rate
/// configured on the backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A menu item available for sale.
///
/// Fetched from the backend menu endpoints; the cashier taps these to build
/// the cart. Pricing is frozen into the [`crate::cart::LineItem`] at add time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Backend identifier.
    pub id: i64,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Optional description for item details.
    pub description: Option<String>,

    /// Unit price in rupiah.
    pub price: Money,

    /// Whether the configured tax rate applies to this item.
    pub is_taxable: bool,

    /// Sort key within its category.
    pub display_order: i32,
}

/// A menu category with its ordered items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub items: Vec<MenuItem>,
}

// =============================================================================
// Order
// =============================================================================

/// The status of a backend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, awaiting payment.
    Pending,
    /// Payment recorded, order finalized.
    Paid,
    /// Order cancelled before payment.
    Cancelled,
}

/// An order created on the backend from a cart snapshot.
///
/// ## Authoritative Totals
/// `subtotal`/`tax`/`total` come from the order-creation response and
/// **replace** whatever the cart estimated locally. All payment validation
/// (change, sufficiency) is done against these figures, never the estimate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub status: OrderStatus,
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment methods accepted at the till.
///
/// Exactly one is active during checkout; selecting one deselects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Physical cash; requires a tendered amount >= the order total.
    Cash,
    /// QR-code instant payment; confirmation is delegated to the payment
    /// rail, the client only records intent.
    #[serde(rename = "QRIS")]
    Qris,
}

// =============================================================================
// Unit Tests
// =============================================================================
