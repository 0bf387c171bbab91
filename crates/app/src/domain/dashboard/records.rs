//! Dashboard Records
//!
//! Aggregate rows. Counts come back from `PostgreSQL` as `BIGINT` and are never negative.

use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Row, postgres::PgRow};

use adisyon::reporting::{CategorySales, DailySales, MonthlySales, TopProduct};

use crate::domain::products::records::ProductRecord;

fn try_get_count(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let count: i64 = row.try_get(col)?;

    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone)]
pub(crate) struct MonthlySalesRecord(pub(crate) MonthlySales);

impl<'r> FromRow<'r, PgRow> for MonthlySalesRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(MonthlySales {
            total_amount: row.try_get("total_amount")?,
            order_count: try_get_count(row, "order_count")?,
        }))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TopProductRecord(pub(crate) TopProduct);

impl<'r> FromRow<'r, PgRow> for TopProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(TopProduct {
            product: ProductRecord::from_prefixed_row(row, "product_")?,
            total_quantity: try_get_count(row, "total_quantity")?,
            total_revenue: row.try_get("total_revenue")?,
        }))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DailySalesRecord(pub(crate) DailySales);

impl<'r> FromRow<'r, PgRow> for DailySalesRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(DailySales {
            day: row.try_get::<SqlxDate, _>("day")?.to_jiff(),
            total_amount: row.try_get("total_amount")?,
            order_count: try_get_count(row, "order_count")?,
        }))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CategorySalesRecord(pub(crate) CategorySales);

impl<'r> FromRow<'r, PgRow> for CategorySalesRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(CategorySales {
            category: row.try_get("category")?,
            total_amount: row.try_get("total_amount")?,
            total_quantity: try_get_count(row, "total_quantity")?,
        }))
    }
}
