//! # Checkout State Machine
//!
//! Drives one checkout from cart snapshot to recorded payment.
//!
//! ## State Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Checkout States                                  │
//! │                                                                     │
//! │   new(snapshot)                                                     │
//! │        │                                                            │
//! │        ▼          create_order ok                                   │
//! │  Initializing ───────────────────► AwaitingPayment                  │
//! │        │  ▲                          │  ▲      │                    │
//! │        │  └── create_order err ──────┘  │      │ begin_submission   │
//! │        │      (stay, retry)             │      ▼                    │
//! │        │                     failure/   │  Submitting               │
//! │        │                     ambiguous ─┘      │                    │
//! │        │                                       │ success            │
//! │        │ cancel()            cancel()          ▼                    │
//! │        └────────► Cancelled ◄────────      Completed                │
//! │                                                                     │
//! │  Submitting and Completed cannot be cancelled: once a submission    │
//! │  is accepted, the payment is terminal.                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Authoritative Totals
//! The cart's totals are an estimate. The totals in the order-creation
//! response are the truth, and the tender validates against those alone.
//!
//! ## Double-Submit Guard
//! Submission is split into `begin_submission` (validates and flips to
//! Submitting) and `complete_submission` (applies the result), so a session
//! holding the machine behind a lock can release it across the network call
//! and still reject a second "Pay" tap with [`CheckoutError::SubmissionInFlight`].
//! A submission whose future is dropped leaves the machine in Submitting;
//! the outcome is unknown and [`Checkout::check_order_status`] is the way out.

use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use kasir_core::pricing;
use kasir_core::{LineItem, Money, Order, OrderStatus, PaymentMethod, Tender};
use kasir_gateway::{
    CreateOrderRequest, PaymentResponse, PosBackend, ProcessPaymentRequest,
};

use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// States
// =============================================================================

/// Where the checkout currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Snapshot taken, order not yet created on the backend.
    Initializing,
    /// Order exists; cashier is choosing method / entering cash.
    AwaitingPayment,
    /// A payment request is in flight; no second submission, no edits.
    Submitting,
    /// Payment recorded. Terminal.
    Completed,
    /// Abandoned before payment. Terminal.
    Cancelled,
}

// =============================================================================
// Outcome Types
// =============================================================================

/// The client's change figure disagrees with the backend's.
///
/// Indicates a reconciliation bug somewhere; surfaced to the operator and
/// logged at error level, never silently papered over. The backend figure
/// still goes on the receipt - it is the authoritative record.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMismatch {
    pub local: Money,
    pub backend: Money,
}

/// A successfully recorded payment.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// Authoritative payment record; basis for the receipt.
    pub payment: PaymentResponse,

    /// Set when local and backend change figures disagree.
    pub change_mismatch: Option<ChangeMismatch>,
}

// =============================================================================
// Checkout
// =============================================================================

/// One checkout attempt over a frozen cart snapshot.
///
/// Owns the transient [`Tender`] for its lifetime; drives a [`PosBackend`]
/// for order creation, payment and cancellation.
#[derive(Debug)]
pub struct Checkout<B> {
    backend: B,
    items: Vec<LineItem>,
    state: CheckoutState,
    order: Option<Order>,
    tender: Option<Tender>,
    /// One key per order attempt, stable across retries, so the backend can
    /// deduplicate a resubmission after an ambiguous outcome.
    idempotency_key: Option<Uuid>,
}

impl<B: PosBackend> Checkout<B> {
    /// Starts a checkout over a cart snapshot.
    ///
    /// The snapshot is the explicit handoff from the cart session: later
    /// cart edits cannot affect this checkout.
    pub fn new(backend: B, items: Vec<LineItem>) -> CheckoutResult<Self> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let estimate = pricing::compute_cart(&items);
        debug!(
            lines = items.len(),
            estimated_total = %estimate.total,
            "checkout started"
        );

        Ok(Checkout {
            backend,
            items,
            state: CheckoutState::Initializing,
            order: None,
            tender: None,
            idempotency_key: None,
        })
    }

    /// Current state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// The frozen cart snapshot this checkout is for.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The backend order, once created.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// The tender, readable from order creation until the checkout ends.
    pub fn tender(&self) -> Option<&Tender> {
        self.tender.as_ref()
    }

    /// Mutable tender access, only while awaiting payment. In any other
    /// state (notably Submitting) edits are refused.
    pub fn tender_mut(&mut self) -> Option<&mut Tender> {
        match self.state {
            CheckoutState::AwaitingPayment => self.tender.as_mut(),
            _ => None,
        }
    }

    /// Whether the payment can be submitted right now. Recomputed from
    /// current state on every call; never cached.
    pub fn can_process_payment(&self) -> bool {
        self.state == CheckoutState::AwaitingPayment
            && self.tender.as_ref().is_some_and(Tender::can_process)
    }

    /// Creates the backend order from the snapshot.
    ///
    /// On success the authoritative totals **replace** the client estimate
    /// and the machine moves to AwaitingPayment, with the cash entry
    /// pre-filled to the exact total. On failure the machine stays in
    /// Initializing and the backend's message is surfaced; retry or cancel.
    pub async fn create_order(&mut self) -> CheckoutResult<&Order> {
        if self.state != CheckoutState::Initializing {
            return Err(CheckoutError::InvalidState {
                state: self.state,
                action: "create order",
            });
        }

        let request = CreateOrderRequest::from_snapshot(&self.items);
        let order = self
            .backend
            .create_order(&request)
            .await
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))?;

        let estimate = pricing::compute_cart(&self.items);
        if estimate.total != order.total {
            debug!(
                estimated = %estimate.total,
                authoritative = %order.total,
                "backend totals replace client estimate"
            );
        }

        info!(
            order_id = order.id,
            order_number = %order.order_number,
            total = %order.total,
            "order created, awaiting payment"
        );

        self.tender = Some(Tender::new(order.total));
        self.state = CheckoutState::AwaitingPayment;
        let order = self.order.insert(order);
        Ok(&*order)
    }

    /// Validates readiness and flips to Submitting, handing back the wire
    /// request. At most one submission may be in flight per order.
    pub fn begin_submission(&mut self) -> CheckoutResult<ProcessPaymentRequest> {
        match self.state {
            CheckoutState::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutState::AwaitingPayment => {}
            _ => {
                return Err(CheckoutError::InvalidState {
                    state: self.state,
                    action: "submit payment",
                })
            }
        }

        // Both exist in AwaitingPayment by construction
        let (order, tender) = match (&self.order, &self.tender) {
            (Some(order), Some(tender)) => (order, tender),
            _ => {
                return Err(CheckoutError::InvalidState {
                    state: self.state,
                    action: "submit payment",
                })
            }
        };

        let amount_paid = tender.amount_to_submit().ok_or(CheckoutError::NotReady {
            reason: "cash received must parse and cover the order total",
        })?;

        let idempotency_key = *self.idempotency_key.get_or_insert_with(Uuid::new_v4);

        info!(
            order_id = order.id,
            method = ?tender.method(),
            amount = %amount_paid,
            %idempotency_key,
            "submitting payment"
        );

        self.state = CheckoutState::Submitting;
        Ok(ProcessPaymentRequest {
            order_id: order.id,
            payment_method: tender.method(),
            amount_paid,
            idempotency_key,
        })
    }

    /// Applies the result of a submission started with [`begin_submission`].
    ///
    /// Failures return the machine to AwaitingPayment (retryable); a timeout
    /// is surfaced as an ambiguous outcome, not a failure. Success completes
    /// the checkout after reconciling the backend's change figure against
    /// the local one.
    ///
    /// [`begin_submission`]: Checkout::begin_submission
    pub fn complete_submission(
        &mut self,
        result: Result<PaymentResponse, kasir_gateway::GatewayError>,
    ) -> CheckoutResult<PaymentOutcome> {
        if self.state != CheckoutState::Submitting {
            return Err(CheckoutError::InvalidState {
                state: self.state,
                action: "complete a submission",
            });
        }

        let payment = match result {
            Ok(payment) => payment,
            Err(e) if e.is_ambiguous() => {
                warn!(error = %e, "payment outcome ambiguous, returning to awaiting payment");
                self.state = CheckoutState::AwaitingPayment;
                return Err(CheckoutError::AmbiguousOutcome(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "payment failed, returning to awaiting payment");
                self.state = CheckoutState::AwaitingPayment;
                return Err(CheckoutError::PaymentFailed(e.to_string()));
            }
        };

        let change_mismatch = self.reconcile_change(&payment);

        if let Some(order) = &mut self.order {
            order.status = OrderStatus::Paid;
        }
        self.state = CheckoutState::Completed;

        info!(
            transaction_id = payment.transaction_id,
            order_number = %payment.order_number,
            change = %payment.change_amount,
            "payment completed"
        );

        Ok(PaymentOutcome {
            payment,
            change_mismatch,
        })
    }

    /// Convenience composition of begin + backend call + complete, for
    /// callers that hold the machine across the await.
    pub async fn submit_payment(&mut self) -> CheckoutResult<PaymentOutcome> {
        let request = self.begin_submission()?;
        let result = self.backend.process_payment(&request).await;
        self.complete_submission(result)
    }

    /// Re-fetches the order after an ambiguous outcome. If the backend did
    /// record the payment, the checkout completes; otherwise it remains
    /// awaiting payment and a retry (same idempotency key) is safe.
    pub async fn check_order_status(&mut self) -> CheckoutResult<OrderStatus> {
        let order_id = match (&self.state, &self.order) {
            (CheckoutState::AwaitingPayment | CheckoutState::Submitting, Some(order)) => order.id,
            _ => {
                return Err(CheckoutError::InvalidState {
                    state: self.state,
                    action: "check order status",
                })
            }
        };

        let fresh = self.backend.get_order(order_id).await?;
        let status = fresh.status;
        self.order = Some(fresh);

        if status == OrderStatus::Paid {
            info!(order_id, "backend shows order paid, completing checkout");
            self.state = CheckoutState::Completed;
        }

        Ok(status)
    }

    /// Abandons the checkout.
    ///
    /// Before order creation this is purely local. While awaiting payment
    /// the backend is asked to cancel the order, best-effort: a declined or
    /// failed cancellation is logged and swallowed, the local state still
    /// becomes Cancelled. Not supported once a submission is in flight or
    /// the payment completed.
    pub async fn cancel(&mut self) -> CheckoutResult<()> {
        match self.state {
            CheckoutState::Initializing => {}
            CheckoutState::AwaitingPayment => {
                if let Some(order) = &self.order {
                    match self.backend.cancel_order(order.id).await {
                        Ok(true) => debug!(order_id = order.id, "backend order cancelled"),
                        Ok(false) => {
                            warn!(order_id = order.id, "backend declined order cancellation")
                        }
                        Err(e) => {
                            warn!(order_id = order.id, error = %e, "order cancellation failed")
                        }
                    }
                }
            }
            _ => {
                return Err(CheckoutError::InvalidState {
                    state: self.state,
                    action: "cancel",
                });
            }
        }

        if let Some(order) = &mut self.order {
            order.status = OrderStatus::Cancelled;
        }
        self.tender = None;
        self.state = CheckoutState::Cancelled;
        info!("checkout cancelled");
        Ok(())
    }

    /// Local change expectation vs. the backend's figure.
    fn reconcile_change(&self, payment: &PaymentResponse) -> Option<ChangeMismatch> {
        let expected = match self.tender.as_ref() {
            Some(tender) => match tender.method() {
                PaymentMethod::Cash => tender.change().unwrap_or_default(),
                PaymentMethod::Qris => Money::zero(),
            },
            None => return None,
        };

        if payment.change_amount == expected {
            return None;
        }

        error!(
            local = %expected,
            backend = %payment.change_amount,
            transaction_id = payment.transaction_id,
            "change reconciliation mismatch"
        );

        Some(ChangeMismatch {
            local: expected,
            backend: payment.change_amount,
        })
    }
}
