//! Products

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// A catalog entry that can be put on a tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub uuid: ProductUuid,

    /// Display name, trimmed and non-empty
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Menu category, trimmed and non-empty
    pub category: String,

    /// Whether the product is currently offered
    pub is_available: bool,

    /// Creation time
    pub created_at: Timestamp,
}
