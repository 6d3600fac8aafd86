//! # Backend Contract
//!
//! The logical operations the client needs from the POS backend, as a trait
//! so the checkout state machine can be driven against a scripted test
//! double as easily as against the real HTTP backend.

use kasir_core::{MenuCategory, Order};

use crate::error::GatewayResult;
use crate::types::{CreateOrderRequest, PaymentResponse, ProcessPaymentRequest, TaxSettings};

/// The POS backend as seen by the client.
///
/// All pricing and order authority lives on the other side of these calls;
/// implementations move data and surface backend rejections verbatim.
pub trait PosBackend {
    /// Creates an order from a cart snapshot. The returned totals are
    /// authoritative and supersede any client-side estimate.
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl std::future::Future<Output = GatewayResult<Order>> + Send;

    /// Fetches an order's current state - the "check order status" path
    /// after an ambiguous payment outcome.
    fn get_order(&self, order_id: i64) -> impl std::future::Future<Output = GatewayResult<Order>> + Send;

    /// Best-effort order cancellation. Returns whether the backend
    /// acknowledged; callers abandoning a checkout swallow failures.
    fn cancel_order(&self, order_id: i64) -> impl std::future::Future<Output = GatewayResult<bool>> + Send;

    /// Records a payment against an order.
    fn process_payment(
        &self,
        request: &ProcessPaymentRequest,
    ) -> impl std::future::Future<Output = GatewayResult<PaymentResponse>> + Send;

    /// Fetches the menu, categories with their ordered items.
    fn menu_categories(&self) -> impl std::future::Future<Output = GatewayResult<Vec<MenuCategory>>> + Send;

    /// Fetches the store's tax configuration.
    fn tax_settings(&self) -> impl std::future::Future<Output = GatewayResult<TaxSettings>> + Send;
}
