//! Order Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

use adisyon::orders::{Order, OrderItem, OrderNumber, OrderStatus, OrderUuid, PaymentMethod};

use crate::domain::products::records::ProductRecord;

/// Order row without its lines.
#[derive(Debug, Clone)]
pub(crate) struct OrderRecord {
    pub(crate) uuid: OrderUuid,
    pub(crate) number: OrderNumber,
    pub(crate) total_amount: Decimal,
    pub(crate) status: OrderStatus,
    pub(crate) payment_method: Option<PaymentMethod>,
    pub(crate) paid_at: Option<Timestamp>,
    pub(crate) created_at: Timestamp,
    pub(crate) updated_at: Timestamp,
}

impl OrderRecord {
    pub(crate) fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            uuid: self.uuid,
            number: self.number,
            items,
            total_amount: self.total_amount,
            status: self.status,
            payment_method: self.payment_method,
            paid_at: self.paid_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let number: i64 = row.try_get("order_number")?;
        let status: String = row.try_get("status")?;
        let payment_method: Option<String> = row.try_get("payment_method")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            number: OrderNumber::try_from(number).map_err(|number| sqlx::Error::ColumnDecode {
                index: "order_number".to_string(),
                source: format!("order number {number} is out of range").into(),
            })?,
            total_amount: row.try_get("total_amount")?,
            status: status.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?,
            payment_method: payment_method
                .map(|method| method.parse::<PaymentMethod>())
                .transpose()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "payment_method".to_string(),
                    source: Box::new(e),
                })?,
            paid_at: row
                .try_get::<Option<SqlxTimestamp>, _>("paid_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Line item row joined with its current product.
#[derive(Debug, Clone)]
pub(crate) struct OrderItemRecord {
    pub(crate) order_uuid: OrderUuid,
    pub(crate) item: OrderItem,
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get::<Uuid, _>("order_uuid")?),
            item: OrderItem {
                product: ProductRecord::from_prefixed_row(row, "product_")?,
                quantity: u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "quantity".to_string(),
                    source: Box::new(e),
                })?,
                price: row.try_get("price")?,
            },
        })
    }
}
