//! # Cashier Session
//!
//! The live cart behind a lock, with totals published to subscribers after
//! every mutation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Session Data Flow                                │
//! │                                                                     │
//! │  UI event ──► with_cart_mut(f) ──► Cart mutation + recompute        │
//! │                      │                                              │
//! │                      └──► watch::Sender<CartTotals>.send_replace    │
//! │                                    │                                │
//! │                                    ▼                                │
//! │                   subscribers see the fresh totals                  │
//! │                                                                     │
//! │  "Checkout" ──► begin_checkout() ──► snapshot ──► Checkout machine  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recompute-then-emit: the cart recomputes its cached totals inside the
//! mutation, and the session publishes them while the lock is still held,
//! so subscribers can never observe totals older than the items they
//! correspond to.

use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use kasir_core::{Cart, CartTotals, CoreResult, LineItem, MenuCategory, MenuItem, TaxRate};
use kasir_gateway::{GatewayResult, PosBackend, TaxSettings};

use crate::checkout::Checkout;
use crate::error::CheckoutResult;

// =============================================================================
// Cart Session
// =============================================================================

/// One cashier's live cart.
///
/// Cart mutations are synchronous and cheap; the async lock exists because
/// callers live in async context and checkout handoff happens across awaits.
pub struct CartSession {
    cart: Mutex<Cart>,
    totals_tx: watch::Sender<CartTotals>,
}

impl CartSession {
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        let (totals_tx, _) = watch::channel(CartTotals::default());
        CartSession {
            cart: Mutex::new(Cart::new()),
            totals_tx,
        }
    }

    /// Subscribes to cart totals. The receiver sees the current totals
    /// immediately and a fresh value after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.totals_tx.subscribe()
    }

    /// Runs a read-only closure against the cart.
    pub async fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        let cart = self.cart.lock().await;
        f(&cart)
    }

    /// Runs a mutating closure against the cart, then publishes the
    /// recomputed totals before releasing the lock.
    pub async fn with_cart_mut<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.cart.lock().await;
        let result = f(&mut cart);
        self.totals_tx.send_replace(cart.totals());
        result
    }

    /// Adds a menu item (merge or append), applying the store's default rate
    /// to taxable items.
    pub async fn add_item(&self, item: &MenuItem, default_rate: TaxRate) -> CoreResult<()> {
        self.with_cart_mut(|cart| cart.add_item(item, default_rate))
            .await
    }

    /// Removes a line by menu item id.
    pub async fn remove_item(&self, menu_item_id: i64) -> bool {
        self.with_cart_mut(|cart| cart.remove_item(menu_item_id))
            .await
    }

    /// Sets a line's quantity.
    pub async fn set_quantity(&self, menu_item_id: i64, quantity: i64) -> CoreResult<bool> {
        self.with_cart_mut(|cart| cart.set_quantity(menu_item_id, quantity))
            .await
    }

    /// Increases a line's quantity by 1.
    pub async fn increment(&self, menu_item_id: i64) -> CoreResult<bool> {
        self.with_cart_mut(|cart| cart.increment(menu_item_id)).await
    }

    /// Decreases a line's quantity by 1 (no-op below 1).
    pub async fn decrement(&self, menu_item_id: i64) -> CoreResult<bool> {
        self.with_cart_mut(|cart| cart.decrement(menu_item_id)).await
    }

    /// Empties the cart.
    pub async fn clear(&self) {
        self.with_cart_mut(Cart::clear).await;
    }

    /// Current totals without locking (latest published value).
    pub fn totals(&self) -> CartTotals {
        *self.totals_tx.borrow()
    }

    /// Frozen copy of the current line items.
    pub async fn snapshot(&self) -> Vec<LineItem> {
        self.with_cart(Cart::snapshot).await
    }

    /// Hands the current cart off to a checkout.
    ///
    /// The checkout works on a snapshot; the live cart stays editable and is
    /// cleared by the caller only after the payment completes.
    pub async fn begin_checkout<B: PosBackend>(&self, backend: B) -> CheckoutResult<Checkout<B>> {
        let snapshot = self.snapshot().await;
        info!(lines = snapshot.len(), "cart handed off to checkout");
        Checkout::new(backend, snapshot)
    }
}

impl Default for CartSession {
    fn default() -> Self {
        CartSession::new()
    }
}

// =============================================================================
// Menu Bootstrap
// =============================================================================

/// Everything the register screen needs at startup: the menu plus the store
/// tax configuration that governs rates on taxable items.
#[derive(Debug, Clone)]
pub struct MenuBootstrap {
    /// Categories with their items, both sorted by display order then name.
    pub categories: Vec<MenuCategory>,
    pub tax_settings: TaxSettings,
}

impl MenuBootstrap {
    /// The rate to pass to [`CartSession::add_item`]; zero when the store
    /// has tax disabled.
    pub fn default_rate(&self) -> TaxRate {
        self.tax_settings.effective_rate()
    }
}

/// Fetches the menu and tax settings for the register screen.
pub async fn load_menu<B: PosBackend>(backend: &B) -> GatewayResult<MenuBootstrap> {
    let mut categories = backend.menu_categories().await?;
    let tax_settings = backend.tax_settings().await?;

    categories.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    for category in &mut categories {
        category.items.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
    }

    debug!(
        categories = categories.len(),
        tax = %tax_settings.tax_name,
        tax_enabled = tax_settings.is_enabled,
        "menu loaded"
    );
    Ok(MenuBootstrap {
        categories,
        tax_settings,
    })
}
