//! # Validation Module
//!
//! Input validation for user-entered fields (admin forms, cash entry).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend                                                  │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  └── Business rule validation before anything hits the wire         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Backend                                                   │
//! │  └── Authoritative validation; its rejections surface verbatim      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::{parse_cash_input, Money};
use crate::pricing::MAX_TAX_RATE_BPS;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates and parses a user-entered price.
///
/// Accepts the same free-text shapes as cash entry (`Rp` prefix, grouping);
/// an unparseable entry is the "invalid price format" case on admin forms.
pub fn validate_price_input(input: &str) -> ValidationResult<Money> {
    match parse_cash_input(input) {
        Some(price) => Ok(price),
        None => Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a valid rupiah amount".to_string(),
        }),
    }
}

/// Validates a cart quantity.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 || quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a tax rate in basis points (must stay below 100%).
pub fn validate_tax_rate_bps(bps: i64) -> ValidationResult<()> {
    if !(0..MAX_TAX_RATE_BPS as i64).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64 - 1,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Nasi Goreng Spesial").is_ok());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_input() {
        assert_eq!(
            validate_price_input("Rp 12.500").unwrap(),
            Money::from_rupiah(12_500)
        );
        assert!(validate_price_input("twelve").is_err());
        assert!(validate_price_input("-500").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1000).is_ok());
        assert!(validate_tax_rate_bps(9_999).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_err());
        assert!(validate_tax_rate_bps(-1).is_err());
    }
}
