//! Order Items

use rust_decimal::Decimal;

use crate::products::{Product, ProductUuid};

/// One product line on a tab.
///
/// `price` is the line sub-total (`quantity` × unit price at the time of the last edit), not
/// the unit price. `product` is the catalog entry as loaded alongside the order, so its price
/// reflects the catalog at read time and may differ from the price the line was last
/// computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Catalog entry the line was rung up from.
    pub product: Product,
    /// Units on the line, at least one.
    pub quantity: u32,
    /// Line sub-total.
    pub price: Decimal,
}

impl OrderItem {
    /// A single unit of `product` at its current price.
    pub fn new(product: Product) -> Self {
        let price = product.price;

        Self {
            product,
            quantity: 1,
            price,
        }
    }

    /// Product identifier of this line.
    pub fn product_uuid(&self) -> ProductUuid {
        self.product.uuid
    }

    /// Sets the quantity and re-prices the line from the product's current price.
    pub(crate) fn reprice(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.price = self.product.price * Decimal::from(quantity);
    }
}

/// Sum of line sub-totals.
pub fn items_total(items: &[OrderItem]) -> Decimal {
    items.iter().map(|item| item.price).sum()
}
