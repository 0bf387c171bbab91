//! Update Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adisyon_app::domain::orders::data::{NewOrderItem, OrderUpdate};

use crate::{
    extensions::*,
    observability::observe_order_closed,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, OrderStatusBody, PaymentMethodBody},
    },
    state::State,
};

/// Product reference on a submitted line: a bare id or an expanded product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum ProductReference {
    Id(Uuid),
    Expanded {
        #[serde(rename = "_id")]
        id: Uuid,
    },
}

impl ProductReference {
    fn uuid(self) -> Uuid {
        match self {
            Self::Id(id) | Self::Expanded { id } => id,
        }
    }
}

/// Update Order Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderItemRequest {
    pub product: ProductReference,
    pub quantity: u32,
    pub price: f64,
}

/// Update Order Request
///
/// Absent or `null` fields are left untouched. `items` replaces every line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateOrderRequest {
    #[serde(default)]
    pub items: Option<Vec<UpdateOrderItemRequest>>,

    #[serde(default)]
    pub total_amount: Option<f64>,

    #[serde(default)]
    pub status: Option<OrderStatusBody>,

    #[serde(default)]
    pub payment_method: Option<PaymentMethodBody>,

    #[serde(default)]
    pub paid_at: Option<String>,
}

impl TryFrom<UpdateOrderRequest> for OrderUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateOrderRequest) -> Result<Self, Self::Error> {
        let items = request
            .items
            .map(|items| {
                items
                    .into_iter()
                    .map(|item| {
                        Ok(NewOrderItem {
                            product: item.product.uuid().into(),
                            quantity: item.quantity,
                            price: item.price.into_decimal()?,
                        })
                    })
                    .collect::<Result<Vec<_>, StatusError>>()
            })
            .transpose()?;

        Ok(OrderUpdate {
            items,
            total_amount: request
                .total_amount
                .map(|amount| amount.into_decimal())
                .transpose()?,
            status: request.status.map(Into::into),
            payment_method: request.payment_method.map(Into::into),
            paid_at: request
                .paid_at
                .map(|value| value.parse::<Timestamp>())
                .transpose()
                .or_400("could not parse \"paidAt\"")?,
        })
    }
}

/// Update Order Handler
///
/// Overwrites the submitted fields as-is. The caller keeps items and total consistent.
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.update",
    skip(order, json, depot),
    fields(
        order_uuid = tracing::field::Empty,
        items_count = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = order.into_inner();
    let update = OrderUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));

    if let Some(items) = &update.items {
        span.record("items_count", items.len());
    }

    if let Some(status) = update.status {
        span.record("status", tracing::field::display(status));
    }

    let closes_order = update.status.is_some_and(|status| status.is_terminal());

    let updated = state
        .app
        .orders
        .update_order(order.into(), update)
        .await
        .map_err(into_status_error)?;

    if closes_order {
        observe_order_closed(&updated);
    }

    tracing::info!(order_uuid = %order, status = %updated.status, "updated order");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use adisyon::{
        orders::{OrderStatus, OrderUuid, PaymentMethod},
        products::ProductUuid,
    };
    use adisyon_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{make_order_with_item, make_product, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/orders/{order}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_payment_fields_keeps_total() -> TestResult {
        let uuid = OrderUuid::new();
        let paid_at: Timestamp = "2024-05-01T10:00:00Z".parse()?;
        let latte = make_product(ProductUuid::new(), "Latte", 25);

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == OrderUpdate {
                            status: Some(OrderStatus::Paid),
                            payment_method: Some(PaymentMethod::Cash),
                            paid_at: Some(paid_at),
                            ..OrderUpdate::default()
                        }
            })
            .return_once(move |_, _| {
                let mut order = make_order_with_item(uuid, latte, 2);

                order.status = OrderStatus::Paid;
                order.payment_method = Some(PaymentMethod::Cash);
                order.paid_at = Some(paid_at);

                Ok(order)
            });

        let mut res = TestClient::patch(format!("http://example.com/api/orders/{uuid}"))
            .json(&json!({
                "status": "paid",
                "paymentMethod": "cash",
                "paidAt": "2024-05-01T10:00:00Z"
            }))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, OrderStatusBody::Paid);
        assert_eq!(body.payment_method, Some(PaymentMethodBody::Cash));
        assert_eq!(body.paid_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert!((body.total_amount - 50.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_accepts_expanded_and_bare_products() -> TestResult {
        let uuid = OrderUuid::new();
        let latte = ProductUuid::new();
        let cake = ProductUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .withf(move |_, update| {
                *update
                    == OrderUpdate {
                        items: Some(vec![
                            NewOrderItem {
                                product: latte,
                                quantity: 2,
                                price: Decimal::from(50),
                            },
                            NewOrderItem {
                                product: cake,
                                quantity: 1,
                                price: Decimal::new(4050, 2),
                            },
                        ]),
                        total_amount: Some(Decimal::new(9050, 2)),
                        ..OrderUpdate::default()
                    }
            })
            .return_once(move |_, _| {
                Ok(make_order_with_item(uuid, make_product(latte, "Latte", 25), 2))
            });

        let res = TestClient::patch(format!("http://example.com/api/orders/{uuid}"))
            .json(&json!({
                "items": [
                    {
                        "product": { "_id": latte.to_string(), "name": "Latte", "price": 25 },
                        "quantity": 2,
                        "price": 50
                    },
                    { "product": cake.to_string(), "quantity": 1, "price": 40.5 }
                ],
                "totalAmount": 90.5
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_null_fields_are_left_untouched() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .withf(|_, update| *update == OrderUpdate::default())
            .return_once(move |_, _| {
                Ok(make_order_with_item(uuid, make_product(ProductUuid::new(), "Tea", 10), 1))
            });

        let res = TestClient::patch(format!("http://example.com/api/orders/{uuid}"))
            .json(&json!({ "paymentMethod": null, "paidAt": null }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_bad_paid_at_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_order().never();

        let res = TestClient::patch(format!("http://example.com/api/orders/{}", OrderUuid::new()))
            .json(&json!({ "paidAt": "yesterday" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_status_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_order().never();

        let res = TestClient::patch(format!("http://example.com/api/orders/{}", OrderUuid::new()))
            .json(&json!({ "status": "refunded" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::patch(format!("http://example.com/api/orders/{}", OrderUuid::new()))
            .json(&json!({ "totalAmount": 10 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_product_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::InvalidReference));

        let res = TestClient::patch(format!("http://example.com/api/orders/{}", OrderUuid::new()))
            .json(&json!({
                "items": [{ "product": ProductUuid::new().to_string(), "quantity": 1, "price": 5 }]
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
