//! Product Records

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

use adisyon::products::{Product, ProductUuid};

/// Product Record
#[derive(Debug, Clone)]
pub(crate) struct ProductRecord(pub(crate) Product);

impl ProductRecord {
    /// Decodes product columns whose names carry `prefix`, as produced by joins.
    pub(crate) fn from_prefixed_row(row: &PgRow, prefix: &str) -> sqlx::Result<Product> {
        let column = |name: &str| format!("{prefix}{name}");

        Ok(Product {
            uuid: ProductUuid::from_uuid(row.try_get::<Uuid, _>(column("uuid").as_str())?),
            name: row.try_get(column("name").as_str())?,
            price: row.try_get::<Decimal, _>(column("price").as_str())?,
            category: row.try_get(column("category").as_str())?,
            is_available: row.try_get(column("is_available").as_str())?,
            created_at: row
                .try_get::<SqlxTimestamp, _>(column("created_at").as_str())?
                .to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Self::from_prefixed_row(row, "").map(Self)
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        record.0
    }
}
