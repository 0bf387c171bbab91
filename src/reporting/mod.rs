//! Reporting
//!
//! Monthly sales aggregates over paid orders. The aggregation itself runs in storage; this
//! module defines the window it runs over and the shapes it produces.

use jiff::civil::Date;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::products::{Product, ProductUuid};

mod window;

pub use window::ReportingWindow;

/// Number of best sellers reported.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Totals over every paid order in the window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySales {
    /// Sum of paid order totals.
    pub total_amount: Decimal,
    /// Number of paid orders.
    pub order_count: u64,
}

/// A best-selling product, joined with its current catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    /// Current catalog entry.
    pub product: Product,
    /// Units sold in the window.
    pub total_quantity: u64,
    /// Sum of the line sub-totals sold in the window.
    pub total_revenue: Decimal,
}

impl TopProduct {
    /// Product identifier the line items were grouped by.
    pub fn product_uuid(&self) -> ProductUuid {
        self.product.uuid
    }
}

/// Paid order totals for one local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    /// Local calendar day the orders were paid on.
    pub day: Date,
    /// Sum of paid order totals that day.
    pub total_amount: Decimal,
    /// Number of orders paid that day.
    pub order_count: u64,
}

/// Line item revenue and volume for one product category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySales {
    /// Catalog category name.
    pub category: String,
    /// Sum of line sub-totals in the category.
    pub total_amount: Decimal,
    /// Units sold in the category.
    pub total_quantity: u64,
}

/// Best sellers, most units first.
pub type TopProducts = SmallVec<[TopProduct; TOP_PRODUCTS_LIMIT]>;

/// Everything the admin dashboard shows for one month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    /// Month totals.
    pub monthly_sales: MonthlySales,
    /// Best sellers, most units first.
    pub top_products: TopProducts,
    /// One entry per day with paid orders, oldest first.
    pub daily_sales: Vec<DailySales>,
    /// Per-category totals, highest revenue first.
    pub category_sales: Vec<CategorySales>,
}
