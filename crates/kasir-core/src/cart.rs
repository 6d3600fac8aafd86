//! # Cart Aggregate
//!
//! The cashier's in-progress cart: line items keyed by menu item id, with
//! cart-level totals recomputed synchronously after every mutation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  UI Action                Operation              State Change       │
//! │  ─────────                ─────────              ────────────       │
//! │                                                                     │
//! │  Tap menu item ─────────► add_item() ──────────► merge or append    │
//! │  Change quantity ───────► set_quantity() ──────► qty = n (n >= 1)   │
//! │  Tap +/- ───────────────► increment/decrement ─► qty ± 1            │
//! │  Tap remove ────────────► remove_item() ───────► item deleted       │
//! │  Tap clear ─────────────► clear() ─────────────► empty cart         │
//! │  Tap checkout ──────────► snapshot() ──────────► frozen copy out    │
//! │                                                                     │
//! │  EVERY mutation ends with a full recompute of the cached totals,    │
//! │  so readers never observe a partially-recomputed cart.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Line items are unique by `menu_item_id` (re-adding merges quantity)
//! - Quantity never drops below 1; removal is always explicit
//! - Cached totals always equal [`pricing::compute_cart`] of the items

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, CartTotals, LineTotals};
use crate::types::{MenuItem, TaxRate};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// One menu item entry in the cart.
///
/// ## Price Freezing
/// Name, price, taxability and rate are captured when the item is added.
/// If the menu changes afterwards, the cart keeps the original figures -
/// the backend re-prices authoritatively at order creation anyway.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Backend menu item id (the cart key).
    pub menu_item_id: i64,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// Whether tax applies to this line.
    pub is_taxable: bool,

    /// Rate applied when taxable; zero otherwise.
    pub tax_rate: TaxRate,
}

impl LineItem {
    /// Creates a line item from a menu item with quantity 1.
    ///
    /// Non-taxable items get a zero rate regardless of `default_rate`, so a
    /// later taxability toggle on the backend can't leak into old carts.
    pub fn from_menu_item(item: &MenuItem, default_rate: TaxRate) -> Self {
        LineItem {
            menu_item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            is_taxable: item.is_taxable,
            tax_rate: if item.is_taxable {
                default_rate
            } else {
                TaxRate::zero()
            },
        }
    }

    /// Derived pricing for this line (subtotal, tax, total).
    ///
    /// Inputs are valid by construction (quantity >= 1, price from the menu),
    /// so this never fails.
    pub fn totals(&self) -> LineTotals {
        pricing::line_totals(self.unit_price, self.quantity, self.is_taxable, self.tax_rate)
    }

    #[cfg(test)]
    pub(crate) fn for_test(
        id: i64,
        name: &str,
        unit_price: Money,
        quantity: i64,
        is_taxable: bool,
        tax_rate: TaxRate,
    ) -> Self {
        LineItem {
            menu_item_id: id,
            name: name.to_string(),
            unit_price,
            quantity,
            is_taxable,
            tax_rate,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Totals are cached and recomputed inside every mutating method, so the
/// aggregate is never observable in a partially-recomputed state. The totals
/// are a *pre-checkout estimate*; the backend's order totals supersede them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    totals: CartTotals,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a menu item to the cart.
    ///
    /// ## Behavior
    /// - Already in cart: quantity increases by 1
    /// - Not in cart: appended as a new line with quantity 1
    ///
    /// ## Errors
    /// `CartTooLarge` / `QuantityTooLarge` when the safety caps would be
    /// exceeded; the cart is left unchanged.
    pub fn add_item(&mut self, item: &MenuItem, default_rate: TaxRate) -> CoreResult<()> {
        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item_id == item.id) {
            let new_qty = line.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            self.recompute();
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_menu_item(item, default_rate));
        self.recompute();
        Ok(())
    }

    /// Removes a line by menu item id.
    ///
    /// Returns `true` if a line was removed; removing an absent id is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, menu_item_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.menu_item_id != menu_item_id);
        let removed = self.items.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: rejected as a no-op, existing quantity unchanged.
    ///   Dropping a line is always the explicit [`Cart::remove_item`], never
    ///   an implicit side effect of a quantity edit.
    /// - Absent id: no-op.
    ///
    /// Returns `true` when a line was actually updated.
    pub fn set_quantity(&mut self, menu_item_id: i64, quantity: i64) -> CoreResult<bool> {
        if quantity < 1 {
            return Ok(false);
        }
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.items.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            Some(line) => {
                line.quantity = quantity;
                self.recompute();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Increases a line's quantity by 1.
    pub fn increment(&mut self, menu_item_id: i64) -> CoreResult<bool> {
        match self.quantity_of(menu_item_id) {
            Some(qty) => self.set_quantity(menu_item_id, qty + 1),
            None => Ok(false),
        }
    }

    /// Decreases a line's quantity by 1. Decrementing below 1 is a no-op.
    pub fn decrement(&mut self, menu_item_id: i64) -> CoreResult<bool> {
        match self.quantity_of(menu_item_id) {
            Some(qty) => self.set_quantity(menu_item_id, qty - 1),
            None => Ok(false),
        }
    }

    /// Empties the cart and resets totals to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Returns an immutable copy of the current line items for handoff to
    /// checkout, so later cart edits can't leak into an order in flight.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Current line items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Cached cart totals (subtotal, tax, total).
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    fn quantity_of(&self, menu_item_id: i64) -> Option<i64> {
        self.items
            .iter()
            .find(|l| l.menu_item_id == menu_item_id)
            .map(|l| l.quantity)
    }

    fn recompute(&mut self) {
        self.totals = pricing::compute_cart(&self.items);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
