//! Create Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Create Order Handler
///
/// Opens an empty tab under the next order number.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::CONFLICT, description = "Order number taken by a concurrent request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(depot, res),
    fields(order_uuid = tracing::field::Empty, order_number = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .create_order()
        .await
        .map_err(into_status_error)?;

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order.uuid));
    span.record("order_number", order.number.get());

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(order_uuid = %order.uuid, order_number = %order.number, "opened order");

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use adisyon::orders::OrderUuid;
    use adisyon_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::{
        orders::models::OrderStatusBody,
        test_helpers::{make_order, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/orders").post(handler))
    }

    #[tokio::test]
    async fn test_create_order_returns_empty_open_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(move || Ok(make_order(uuid)));

        let mut res = TestClient::post("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/orders/{uuid}").as_str()));
        assert_eq!(body.order_number, 1);
        assert_eq!(body.status, OrderStatusBody::Open);
        assert!(body.items.is_empty());
        assert!(body.total_amount.abs() < f64::EPSILON);
        assert!(body.payment_method.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_conflict_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|| Err(OrdersServiceError::Conflict));

        let res = TestClient::post("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
