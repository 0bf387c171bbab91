//! Order Items Repository

use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction, query, query_as};
use uuid::Uuid;

use adisyon::orders::OrderUuid;

use crate::domain::orders::{data::NewOrderItem, records::OrderItemRecord};

const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");
const DELETE_ORDER_ITEMS_SQL: &str = include_str!("../sql/delete_order_items.sql");
const CREATE_ORDER_ITEMS_SQL: &str = include_str!("../sql/create_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Lines of every order in `orders`, each joined with its current product, in line order.
    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let orders: Vec<Uuid> = orders.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    /// Replaces every line of `order` with `items`, keeping their order.
    pub(crate) async fn replace_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        items: &[NewOrderItem],
    ) -> Result<(), sqlx::Error> {
        query(DELETE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?;

        if items.is_empty() {
            return Ok(());
        }

        let mut positions = Vec::with_capacity(items.len());
        let mut products = Vec::with_capacity(items.len());
        let mut quantities = Vec::with_capacity(items.len());
        let mut prices: Vec<Decimal> = Vec::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            positions.push(i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?);
            products.push(item.product.into_uuid());
            quantities
                .push(i32::try_from(item.quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?);
            prices.push(item.price);
        }

        query(CREATE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(positions)
            .bind(products)
            .bind(quantities)
            .bind(prices)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
