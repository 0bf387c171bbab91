//! Money amount conversions.
//!
//! Amounts are stored as exact decimals and travel as JSON numbers.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::prelude::StatusError;

/// Decimal places kept for submitted amounts.
const AMOUNT_SCALE: u32 = 2;

pub(crate) trait AmountExt {
    /// Parse a submitted JSON number into an exact amount.
    fn into_decimal(self) -> Result<Decimal, StatusError>;
}

impl AmountExt for f64 {
    fn into_decimal(self) -> Result<Decimal, StatusError> {
        Decimal::from_f64(self)
            .map(|amount| amount.round_dp(AMOUNT_SCALE))
            .ok_or_else(|| StatusError::bad_request().brief("could not parse amount"))
    }
}

pub(crate) trait DecimalExt {
    fn to_amount(&self) -> f64;
}

impl DecimalExt for Decimal {
    fn to_amount(&self) -> f64 {
        self.to_f64().unwrap_or_default()
    }
}
