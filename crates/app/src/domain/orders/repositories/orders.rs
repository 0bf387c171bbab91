//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Transaction, query_as, query_scalar};

use adisyon::orders::{Order, OrderNumber, OrderStatus, OrderUuid};

use crate::domain::orders::{data::OrderUpdate, records::OrderRecord};

const MAX_ORDER_NUMBER_SQL: &str = include_str!("../sql/max_order_number.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const GET_ORDER_FOR_UPDATE_SQL: &str = include_str!("../sql/get_order_for_update.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const UPDATE_ORDER_SQL: &str = include_str!("../sql/update_order.sql");
const SAVE_ORDER_SQL: &str = include_str!("../sql/save_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn max_order_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<OrderNumber>, sqlx::Error> {
        let max = query_scalar::<Postgres, Option<i64>>(MAX_ORDER_NUMBER_SQL)
            .fetch_one(&mut **tx)
            .await?;

        max.map(OrderNumber::try_from)
            .transpose()
            .map_err(|number| sqlx::Error::ColumnDecode {
                index: "max".to_string(),
                source: format!("order number {number} is out of range").into(),
            })
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OrderUuid,
        number: OrderNumber,
    ) -> Result<OrderRecord, sqlx::Error> {
        let number = i64::try_from(number.get()).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(uuid.into_uuid())
            .bind(number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Loads an order and locks its row until the transaction ends.
    pub(crate) async fn get_order_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_FOR_UPDATE_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(status.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    /// Applies the scalar fields of a partial update. Absent fields keep their stored value.
    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OrderUuid,
        update: &OrderUpdate,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(uuid.into_uuid())
            .bind(update.total_amount)
            .bind(update.status.map(|status| status.as_str()))
            .bind(update.payment_method.map(|method| method.as_str()))
            .bind(update.paid_at.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await
    }

    /// Writes every scalar field of `order` back.
    pub(crate) async fn save_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &Order,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(SAVE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.total_amount)
            .bind(order.status.as_str())
            .bind(order.payment_method.map(|method| method.as_str()))
            .bind(order.paid_at.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await
    }
}
