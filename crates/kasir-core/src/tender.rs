//! # Tender
//!
//! Payment-method selection and cash entry against an authoritative order
//! total. This is the pure half of the checkout flow: no I/O, just the rules
//! for "is this payment ready to submit".
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Tender Screen Logic                              │
//! │                                                                     │
//! │   Order total: Rp47.000          (authoritative, from backend)      │
//! │                                                                     │
//! │   [ Cash ]  [ QRIS ]             exactly one active                 │
//! │                                                                     │
//! │   Cash received: [ 50000 ]       free text, reparsed every edit     │
//! │   Quick cash:  50.000  100.000   round_up_to per denomination       │
//! │   [ Exact ]                      sets input to the total            │
//! │                                                                     │
//! │   Change: Rp3.000                paid − total, may be negative      │
//! │   [ PAY ] enabled when can_process()                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `can_process()` is computed from the current fields on every call -
//! there is no cached readiness flag to go stale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{parse_cash_input, Money};
use crate::types::PaymentMethod;

/// Common cash denominations for the quick-cash buttons, in rupiah.
pub const QUICK_CASH_DENOMINATIONS: [i64; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];

// =============================================================================
// Tender
// =============================================================================

/// Transient payment selection for one checkout.
///
/// Created when the order exists (so the total is authoritative), mutated as
/// the cashier adjusts method/amount, discarded on payment or cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    method: PaymentMethod,
    cash_input: String,
    order_total: Money,
}

impl Tender {
    /// Creates a tender for the given authoritative order total.
    ///
    /// Cash is pre-selected with the input set to the exact total, so the
    /// common "customer pays exact" case is one tap.
    pub fn new(order_total: Money) -> Self {
        Tender {
            method: PaymentMethod::Cash,
            cash_input: order_total.rupiah().to_string(),
            order_total,
        }
    }

    /// The active payment method.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Selects a payment method. Selection is mutually exclusive by type:
    /// setting one method is setting *the* method.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    /// The authoritative order total this tender validates against.
    pub fn order_total(&self) -> Money {
        self.order_total
    }

    /// Raw cash-entry text as typed.
    pub fn cash_input(&self) -> &str {
        &self.cash_input
    }

    /// Replaces the cash-entry text. Change and readiness are derived on
    /// read, so this is just a store.
    pub fn set_cash_input(&mut self, input: impl Into<String>) {
        self.cash_input = input.into();
    }

    /// The entered cash amount, if the text parses as a non-negative amount.
    pub fn cash_paid(&self) -> Option<Money> {
        parse_cash_input(&self.cash_input)
    }

    /// Change due: `cash_paid − order_total`.
    ///
    /// Negative while the entry is still short of the total (the UI shows
    /// the shortfall); `None` while the entry doesn't parse.
    pub fn change(&self) -> Option<Money> {
        self.cash_paid().map(|paid| paid - self.order_total)
    }

    /// Sets the cash entry to the exact order total.
    pub fn use_exact_amount(&mut self) {
        self.cash_input = self.order_total.rupiah().to_string();
    }

    /// Sets the cash entry to the total rounded up to `denomination`
    /// (`ceil(total / denomination) × denomination`).
    pub fn apply_quick_round(&mut self, denomination: Money) {
        let rounded = self.order_total.round_up_to(denomination);
        self.cash_input = rounded.rupiah().to_string();
    }

    /// Quick-cash amounts for the standard denominations: each is the total
    /// rounded up, deduplicated and in ascending order.
    pub fn quick_cash_options(&self) -> Vec<Money> {
        let mut options: Vec<Money> = QUICK_CASH_DENOMINATIONS
            .iter()
            .map(|&d| self.order_total.round_up_to(Money::from_rupiah(d)))
            .collect();
        options.sort();
        options.dedup();
        options
    }

    /// Whether the payment can be submitted right now.
    ///
    /// - Cash: the entry parses as a non-negative amount AND covers the total
    /// - QRIS: unconditionally ready; confirmation is the payment rail's job
    pub fn can_process(&self) -> bool {
        match self.method {
            PaymentMethod::Cash => self
                .cash_paid()
                .map(|paid| paid >= self.order_total)
                .unwrap_or(false),
            PaymentMethod::Qris => true,
        }
    }

    /// The amount to submit to the backend: the entered value for Cash, the
    /// order total for QRIS. `None` when not ready.
    pub fn amount_to_submit(&self) -> Option<Money> {
        if !self.can_process() {
            return None;
        }
        match self.method {
            PaymentMethod::Cash => self.cash_paid(),
            PaymentMethod::Qris => Some(self.order_total),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tender_for(total: i64) -> Tender {
        Tender::new(Money::from_rupiah(total))
    }

    #[test]
    fn test_defaults_to_cash_with_exact_amount() {
        let tender = tender_for(50_000);
        assert_eq!(tender.method(), PaymentMethod::Cash);
        assert_eq!(tender.cash_paid(), Some(Money::from_rupiah(50_000)));
        assert_eq!(tender.change(), Some(Money::zero()));
        assert!(tender.can_process());
    }

    #[test]
    fn test_exact_cash_payment() {
        let mut tender = tender_for(50_000);
        tender.set_cash_input("50000");

        assert_eq!(tender.change(), Some(Money::zero()));
        assert!(tender.can_process());
        assert_eq!(tender.amount_to_submit(), Some(Money::from_rupiah(50_000)));
    }

    #[test]
    fn test_insufficient_cash_blocks_payment() {
        let mut tender = tender_for(50_000);
        tender.set_cash_input("30000");

        assert_eq!(tender.change(), Some(Money::from_rupiah(-20_000)));
        assert!(!tender.can_process());
        assert_eq!(tender.amount_to_submit(), None);
    }

    #[test]
    fn test_unparseable_cash_blocks_payment() {
        let mut tender = tender_for(50_000);
        tender.set_cash_input("lima puluh ribu");

        assert_eq!(tender.cash_paid(), None);
        assert_eq!(tender.change(), None);
        assert!(!tender.can_process());
    }

    #[test]
    fn test_qris_is_always_ready() {
        let mut tender = tender_for(50_000);
        tender.set_cash_input("garbage");
        tender.select_method(PaymentMethod::Qris);

        assert!(tender.can_process());
        assert_eq!(tender.amount_to_submit(), Some(Money::from_rupiah(50_000)));
    }

    #[test]
    fn test_method_selection_is_exclusive() {
        let mut tender = tender_for(10_000);
        tender.select_method(PaymentMethod::Qris);
        assert_eq!(tender.method(), PaymentMethod::Qris);
        tender.select_method(PaymentMethod::Cash);
        assert_eq!(tender.method(), PaymentMethod::Cash);
    }

    #[test]
    fn test_quick_round() {
        let mut tender = tender_for(47_000);
        tender.apply_quick_round(Money::from_rupiah(50_000));

        assert_eq!(tender.cash_paid(), Some(Money::from_rupiah(50_000)));
        assert_eq!(tender.change(), Some(Money::from_rupiah(3_000)));
        assert!(tender.can_process());
    }

    #[test]
    fn test_quick_cash_options_deduplicated_ascending() {
        let tender = tender_for(47_000);
        let options: Vec<i64> = tender
            .quick_cash_options()
            .into_iter()
            .map(|m| m.rupiah())
            .collect();

        // 1k→47.000, 5k/10k/50k→50.000, 100k→100.000
        assert_eq!(options, vec![47_000, 50_000, 100_000]);
    }

    #[test]
    fn test_use_exact_amount() {
        let mut tender = tender_for(47_000);
        tender.set_cash_input("100000");
        tender.use_exact_amount();

        assert_eq!(tender.cash_paid(), Some(Money::from_rupiah(47_000)));
        assert_eq!(tender.change(), Some(Money::zero()));
    }

    #[test]
    fn test_change_recomputed_on_every_edit() {
        let mut tender = tender_for(20_000);
        tender.set_cash_input("25000");
        assert_eq!(tender.change(), Some(Money::from_rupiah(5_000)));
        tender.set_cash_input("20000");
        assert_eq!(tender.change(), Some(Money::zero()));
        tender.set_cash_input("");
        assert_eq!(tender.change(), None);
    }
}
