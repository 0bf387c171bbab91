//! Order aggregate errors.

use thiserror::Error;

use crate::{orders::OrderStatus, products::ProductUuid};

/// Errors raised by order aggregate operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Quantities below one are removals, not edits.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// The order has no line for the product.
    #[error("order has no item for product {0}")]
    ItemNotFound(ProductUuid),

    /// A line sub-total or the order total would not fit an amount column.
    #[error("amount exceeds the storable maximum")]
    AmountOutOfRange,

    /// The order is already paid or cancelled.
    #[error("order is {0}, expected open")]
    InvalidState(OrderStatus),
}
