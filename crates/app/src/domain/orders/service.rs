//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::warn;

use adisyon::{
    limits::is_storable_amount,
    orders::{Order, OrderItem, OrderNumber, OrderStatus, OrderUuid, PaymentMethod},
    products::ProductUuid,
};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{NewOrderItem, OrderUpdate},
            errors::OrdersServiceError,
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        products::repository::PgProductsRepository,
    },
};

/// Order creation reads the highest number and inserts the next one, so a concurrent
/// creation can take the number first. One retry is made before reporting the conflict.
const CREATE_ORDER_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    async fn try_create_order(&self) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let max = self.orders_repository.max_order_number(&mut tx).await?;

        let created = self
            .orders_repository
            .create_order(&mut tx, OrderUuid::new(), OrderNumber::next_after(max))
            .await?;

        tx.commit().await?;

        Ok(created.into_order(Vec::new()))
    }

    async fn load_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, OrdersServiceError> {
        let items = self.items_repository.get_order_items(tx, &[order]).await?;

        Ok(items.into_iter().map(|record| record.item).collect())
    }

    /// Loads the full order and holds its row lock for the rest of `tx`. Only open orders
    /// can be edited.
    async fn lock_open_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let record = self.orders_repository.get_order_for_update(tx, uuid).await?;
        if record.status.is_terminal() {
            return Err(OrdersServiceError::InvalidState(record.status));
        }

        let items = self.load_items(tx, uuid).await?;

        Ok(record.into_order(items))
    }

    /// Writes the order row and its lines. Aggregates that grew past the column limits are
    /// rejected before anything is written.
    async fn save_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Order,
    ) -> Result<Order, OrdersServiceError> {
        let items: Vec<NewOrderItem> = order.items.iter().map(NewOrderItem::from).collect();

        if !is_storable_amount(order.total_amount) || !items.iter().all(NewOrderItem::is_storable)
        {
            return Err(OrdersServiceError::InvalidData);
        }

        let record = self.orders_repository.save_order(tx, &order).await?;

        self.items_repository
            .replace_order_items(tx, order.uuid, &items)
            .await?;

        Ok(record.into_order(order.items))
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self, status: OrderStatus) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.orders_repository.list_orders(&mut tx, status).await?;

        let uuids: Vec<OrderUuid> = records.iter().map(|record| record.uuid).collect();

        let items = self
            .items_repository
            .get_order_items(&mut tx, &uuids)
            .await?;

        tx.commit().await?;

        let mut items_by_order: HashMap<OrderUuid, Vec<OrderItem>> = HashMap::new();

        for record in items {
            items_by_order
                .entry(record.order_uuid)
                .or_default()
                .push(record.item);
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let items = items_by_order.remove(&record.uuid).unwrap_or_default();

                record.into_order(items)
            })
            .collect())
    }

    async fn get_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.orders_repository.get_order(&mut tx, uuid).await?;
        let items = self.load_items(&mut tx, uuid).await?;

        tx.commit().await?;

        Ok(record.into_order(items))
    }

    async fn create_order(&self) -> Result<Order, OrdersServiceError> {
        let mut attempt = 1;

        loop {
            match self.try_create_order().await {
                Err(OrdersServiceError::Conflict) if attempt < CREATE_ORDER_ATTEMPTS => {
                    warn!(attempt, "order number taken by a concurrent creation, retrying");

                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn update_order(
        &self,
        uuid: OrderUuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError> {
        let update = update.validated()?;

        let mut tx = self.db.begin().await?;

        let record = self
            .orders_repository
            .update_order(&mut tx, uuid, &update)
            .await?;

        if let Some(items) = &update.items {
            self.items_repository
                .replace_order_items(&mut tx, uuid, items)
                .await?;
        }

        let items = self.load_items(&mut tx, uuid).await?;

        tx.commit().await?;

        Ok(record.into_order(items))
    }

    async fn add_item(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.lock_open_order(&mut tx, uuid).await?;

        let product = self
            .products_repository
            .get_product(&mut tx, product)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => OrdersServiceError::InvalidReference,
                error => OrdersServiceError::from(error),
            })?;

        order.add_item(&product);

        let order = self.save_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn set_item_quantity(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.lock_open_order(&mut tx, uuid).await?;

        order.set_quantity(product, quantity)?;

        let order = self.save_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn remove_item(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.lock_open_order(&mut tx, uuid).await?;

        order.remove_item(product);

        let order = self.save_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn record_payment(
        &self,
        uuid: OrderUuid,
        method: PaymentMethod,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.lock_open_order(&mut tx, uuid).await?;

        order.record_payment(method, Timestamp::now())?;

        let order = self.save_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn cancel_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.lock_open_order(&mut tx, uuid).await?;

        order.record_cancellation()?;

        let order = self.save_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Orders in `status`, newest first, with their lines and current products.
    async fn list_orders(&self, status: OrderStatus) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Opens an empty tab under the next order number.
    async fn create_order(&self) -> Result<Order, OrdersServiceError>;

    /// Overwrites the provided fields of an order as-is.
    async fn update_order(
        &self,
        uuid: OrderUuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError>;

    /// Adds one unit of a product to the order.
    async fn add_item(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Sets the quantity of an existing line.
    async fn set_item_quantity(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Order, OrdersServiceError>;

    /// Removes the line for a product.
    async fn remove_item(
        &self,
        uuid: OrderUuid,
        product: ProductUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Closes an open order as paid.
    async fn record_payment(
        &self,
        uuid: OrderUuid,
        method: PaymentMethod,
    ) -> Result<Order, OrdersServiceError>;

    /// Closes an open order as cancelled.
    async fn cancel_order(&self, uuid: OrderUuid) -> Result<Order, OrdersServiceError>;
}
