//! Order numbering
//!
//! Orders carry a human-facing sequential number next to their UUID. The next number is
//! derived from the highest number currently stored, so two concurrent creations can pick
//! the same value; storage must enforce uniqueness and the loser retries.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Sequential, human-facing order number. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderNumber(u64);

impl OrderNumber {
    /// The number given to the very first order.
    pub const FIRST: Self = Self(1);

    /// Returns `None` for zero.
    pub const fn new(value: u64) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Number to assign to a new order given the current maximum, if any.
    #[must_use]
    pub fn next_after(current_max: Option<Self>) -> Self {
        current_max.map_or(Self::FIRST, |max| Self(max.0.saturating_add(1)))
    }

    /// Raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for OrderNumber {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_is_number_one() {
        assert_eq!(OrderNumber::next_after(None), OrderNumber::FIRST);
        assert_eq!(OrderNumber::FIRST.get(), 1);
    }

    #[test]
    fn next_number_follows_the_maximum() {
        let max = OrderNumber::new(41);

        assert_eq!(OrderNumber::next_after(max).get(), 42);
    }

    #[test]
    fn zero_and_negative_values_are_not_order_numbers() {
        assert_eq!(OrderNumber::new(0), None);
        assert_eq!(OrderNumber::try_from(0_i64), Err(0));
        assert_eq!(OrderNumber::try_from(-3_i64), Err(-3));
        assert_eq!(OrderNumber::try_from(7_i64).map(OrderNumber::get), Ok(7));
    }
}
