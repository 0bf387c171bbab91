//! Storage limits for amounts and quantities.
//!
//! Prices and totals are `NUMERIC(12, 2)` columns and quantities are `INTEGER`. Values past
//! these bounds are rejected as invalid input before they reach storage.

use rust_decimal::Decimal;

/// Largest price, line sub-total or order total that can be stored (`9 999 999 999.99`).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

/// Largest line quantity that can be stored.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Whether `amount` is a non-negative value that fits an amount column.
pub fn is_storable_amount(amount: Decimal) -> bool {
    amount >= Decimal::ZERO && amount <= MAX_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_amount_is_twelve_digits_with_cents() {
        assert_eq!(MAX_AMOUNT, Decimal::new(999_999_999_999, 2));
        assert_eq!(MAX_AMOUNT.to_string(), "9999999999.99");
    }

    #[test]
    fn storable_amounts_are_bounded_on_both_sides() {
        assert!(is_storable_amount(Decimal::ZERO));
        assert!(is_storable_amount(MAX_AMOUNT));
        assert!(!is_storable_amount(Decimal::NEGATIVE_ONE));
        assert!(!is_storable_amount(MAX_AMOUNT + Decimal::new(1, 2)));
    }

    #[test]
    fn max_quantity_fits_a_postgres_integer() {
        assert_eq!(i32::try_from(MAX_QUANTITY).ok(), Some(i32::MAX));
        assert!(i32::try_from(MAX_QUANTITY + 1).is_err());
    }
}
