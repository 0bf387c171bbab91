//! Orders
//!
//! An order (adisyon) is a running tab. Its line items and total are kept consistent by the
//! operations on [`Order`]: every edit re-prices the touched line and recomputes the total
//! from scratch, and payment or cancellation close the tab for good.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    limits::{MAX_QUANTITY, is_storable_amount},
    products::{Product, ProductUuid},
    uuids::TypedUuid,
};

mod errors;
mod items;
mod numbering;
mod status;

pub use errors::OrderError;
pub use items::{OrderItem, items_total};
pub use numbering::OrderNumber;
pub use status::{OrderStatus, ParseStatusError, PaymentMethod};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// A tab and its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier
    pub uuid: OrderUuid,

    /// Human-facing sequential number
    pub number: OrderNumber,

    /// Line items in insertion order
    pub items: Vec<OrderItem>,

    /// Sum of line sub-totals
    pub total_amount: Decimal,

    /// Lifecycle status
    pub status: OrderStatus,

    /// Set together with `paid_at` when the order is paid
    pub payment_method: Option<PaymentMethod>,

    /// Set together with `payment_method` when the order is paid
    pub paid_at: Option<Timestamp>,

    /// Creation time
    pub created_at: Timestamp,

    /// Last write time
    pub updated_at: Timestamp,
}

impl Order {
    /// An empty, open tab.
    pub fn open(uuid: OrderUuid, number: OrderNumber, now: Timestamp) -> Self {
        Self {
            uuid,
            number,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            status: OrderStatus::Open,
            payment_method: None,
            paid_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Line for `product`, if present.
    pub fn item(&self, product: ProductUuid) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.product_uuid() == product)
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line is bumped by one and re-priced at `product.price`; otherwise a new
    /// single-unit line is appended.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_uuid() == product.uuid)
        {
            item.product = product.clone();

            let quantity = item.quantity.saturating_add(1);

            item.reprice(quantity);
        } else {
            self.items.push(OrderItem::new(product.clone()));
        }

        self.recompute_total();
    }

    /// Sets the quantity of an existing line and re-prices it.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidQuantity`] for zero (use [`Order::remove_item`]) or a
    /// quantity past [`MAX_QUANTITY`], [`OrderError::ItemNotFound`] when the order has no line
    /// for `product`, and [`OrderError::AmountOutOfRange`] when the line or the order total
    /// would grow past the storable maximum. The order is unchanged on error.
    pub fn set_quantity(&mut self, product: ProductUuid, quantity: u32) -> Result<(), OrderError> {
        if quantity < 1 || quantity > MAX_QUANTITY {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let current = self.item(product).ok_or(OrderError::ItemNotFound(product))?;

        let price = current
            .product
            .price
            .checked_mul(Decimal::from(quantity))
            .filter(|price| is_storable_amount(*price))
            .ok_or(OrderError::AmountOutOfRange)?;

        let total = items_total(&self.items) - current.price + price;

        if !is_storable_amount(total) {
            return Err(OrderError::AmountOutOfRange);
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_uuid() == product)
        {
            item.quantity = quantity;
            item.price = price;
        }

        self.total_amount = total;

        Ok(())
    }

    /// Drops the line for `product`. Absent lines are ignored.
    pub fn remove_item(&mut self, product: ProductUuid) {
        self.items.retain(|item| item.product_uuid() != product);

        self.recompute_total();
    }

    /// Marks an open order as paid.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidState`] unless the order is open.
    pub fn record_payment(
        &mut self,
        method: PaymentMethod,
        now: Timestamp,
    ) -> Result<(), OrderError> {
        self.ensure_open()?;

        self.status = OrderStatus::Paid;
        self.payment_method = Some(method);
        self.paid_at = Some(now);

        Ok(())
    }

    /// Marks an open order as cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidState`] unless the order is open.
    pub fn record_cancellation(&mut self) -> Result<(), OrderError> {
        self.ensure_open()?;

        self.status = OrderStatus::Cancelled;

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::InvalidState(self.status));
        }

        Ok(())
    }

    fn recompute_total(&mut self) {
        self.total_amount = items_total(&self.items);
    }
}
