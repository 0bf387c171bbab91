//! Orders Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use adisyon::{
    limits::{MAX_QUANTITY, is_storable_amount},
    orders::{OrderItem, OrderStatus, PaymentMethod},
    products::ProductUuid,
};

use crate::domain::orders::errors::OrdersServiceError;

/// Replacement line item, as submitted by a client that edits the tab itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product: ProductUuid,
    pub quantity: u32,
    pub price: Decimal,
}

impl NewOrderItem {
    /// Whether the line fits the item columns.
    pub(crate) fn is_storable(&self) -> bool {
        (1..=MAX_QUANTITY).contains(&self.quantity) && is_storable_amount(self.price)
    }
}

impl From<&OrderItem> for NewOrderItem {
    fn from(item: &OrderItem) -> Self {
        Self {
            product: item.product_uuid(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Partial order update.
///
/// `None` leaves the stored value untouched. A provided `items` list replaces every line.
/// The caller is trusted to keep `total_amount` consistent with the items it sends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub items: Option<Vec<NewOrderItem>>,
    pub total_amount: Option<Decimal>,
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub paid_at: Option<Timestamp>,
}

impl OrderUpdate {
    /// Checks field shapes only: line quantities fit `1..=MAX_QUANTITY` and amounts are
    /// storable.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::InvalidData`] on the first offending field.
    pub fn validated(self) -> Result<Self, OrdersServiceError> {
        let items_valid = self.items.iter().flatten().all(NewOrderItem::is_storable);

        if !items_valid {
            return Err(OrdersServiceError::InvalidData);
        }

        if self.total_amount.is_some_and(|total| !is_storable_amount(total)) {
            return Err(OrdersServiceError::InvalidData);
        }

        Ok(self)
    }
}
