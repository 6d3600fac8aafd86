//! # Receipt Formatting
//!
//! Plain-text receipt for a 32-column thermal printer, built from the
//! backend's authoritative payment record plus the line items that were
//! submitted.
//!
//! ```text
//!           Warung Kasir
//! ORD-0042        01/08/2025 16:30
//! --------------------------------
//! Kopi Susu
//!   2 x Rp18.000         Rp36.000
//! Teh Tawar
//!   1 x Rp5.000           Rp5.000
//! --------------------------------
//! Subtotal               Rp41.000
//! Tax                     Rp3.600
//! TOTAL                  Rp44.600
//! --------------------------------
//! Cash                   Rp50.000
//! Change                  Rp5.400
//! ```
//!
//! All amounts come from the backend record; the local line items supply
//! only names, unit prices and quantities for the itemisation.

use kasir_core::{LineItem, PaymentMethod};
use kasir_gateway::PaymentResponse;

/// Printable receipt width in characters.
const WIDTH: usize = 32;

/// Formats a completed payment as a printable receipt.
pub fn format_receipt(store_name: &str, items: &[LineItem], payment: &PaymentResponse) -> String {
    let mut out = String::new();
    let divider = "-".repeat(WIDTH);

    out.push_str(&center(store_name));
    out.push('\n');
    out.push_str(&split_line(
        &payment.order_number,
        &payment
            .transaction_date
            .format("%d/%m/%Y %H:%M")
            .to_string(),
    ));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');

    for item in items {
        out.push_str(&item.name);
        out.push('\n');
        out.push_str(&split_line(
            &format!("  {} x {}", item.quantity, item.unit_price),
            &item.totals().subtotal.to_string(),
        ));
        out.push('\n');
    }

    out.push_str(&divider);
    out.push('\n');
    let subtotal = payment.order_total - payment.tax_amount;
    out.push_str(&split_line("Subtotal", &subtotal.to_string()));
    out.push('\n');
    if !payment.tax_amount.is_zero() {
        out.push_str(&split_line("Tax", &payment.tax_amount.to_string()));
        out.push('\n');
    }
    out.push_str(&split_line("TOTAL", &payment.order_total.to_string()));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');

    let method = match payment.payment_method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Qris => "QRIS",
    };
    out.push_str(&split_line(method, &payment.amount_paid.to_string()));
    out.push('\n');
    if payment.payment_method == PaymentMethod::Cash {
        out.push_str(&split_line("Change", &payment.change_amount.to_string()));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&center("Terima kasih!"));
    out.push('\n');

    out
}

/// Left and right text on one line, right-aligned to the receipt width.
/// Degrades to a single space separator when the texts don't fit.
fn split_line(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    if used >= WIDTH {
        return format!("{left} {right}");
    }
    format!("{left}{}{right}", " ".repeat(WIDTH - used))
}

/// Centers text on the receipt width.
fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    let pad = (WIDTH - len) / 2;
    format!("{}{text}", " ".repeat(pad))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kasir_core::{Cart, MenuItem, Money, TaxRate};

    fn sample_items() -> Vec<LineItem> {
        let mut cart = Cart::new();
        let kopi = MenuItem {
            id: 1,
            name: "Kopi Susu".into(),
            description: None,
            price: Money::from_rupiah(18_000),
            is_taxable: true,
            display_order: 1,
        };
        cart.add_item(&kopi, TaxRate::from_bps(1000)).unwrap();
        cart.add_item(&kopi, TaxRate::from_bps(1000)).unwrap();
        cart.snapshot()
    }

    fn sample_payment(method: PaymentMethod) -> PaymentResponse {
        PaymentResponse {
            transaction_id: 9001,
            order_number: "ORD-0042".into(),
            payment_method: method,
            amount_paid: Money::from_rupiah(50_000),
            change_amount: Money::from_rupiah(10_400),
            order_total: Money::from_rupiah(39_600),
            tax_amount: Money::from_rupiah(3_600),
            status: "completed".into(),
            transaction_date: Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_receipt_contains_backend_figures() {
        let receipt = format_receipt("Warung Kasir", &sample_items(), &sample_payment(PaymentMethod::Cash));

        assert!(receipt.contains("Warung Kasir"));
        assert!(receipt.contains("ORD-0042"));
        assert!(receipt.contains("Kopi Susu"));
        assert!(receipt.contains("2 x Rp18.000"));
        // subtotal = order_total - tax_amount, from the backend record
        assert!(receipt.contains("Rp36.000"));
        assert!(receipt.contains("Rp3.600"));
        assert!(receipt.contains("Rp39.600"));
        assert!(receipt.contains("Change"));
        assert!(receipt.contains("Rp10.400"));
    }

    #[test]
    fn test_qris_receipt_has_no_change_line() {
        let mut payment = sample_payment(PaymentMethod::Qris);
        payment.amount_paid = payment.order_total;
        payment.change_amount = Money::zero();

        let receipt = format_receipt("Warung Kasir", &sample_items(), &payment);
        assert!(receipt.contains("QRIS"));
        assert!(!receipt.contains("Change"));
    }

    #[test]
    fn test_lines_fit_receipt_width() {
        let receipt = format_receipt("Warung Kasir", &sample_items(), &sample_payment(PaymentMethod::Cash));
        for line in receipt.lines() {
            assert!(line.chars().count() <= WIDTH, "too wide: {line:?}");
        }
    }
}
