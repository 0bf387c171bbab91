//! Add Order Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Add Order Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddOrderItemRequest {
    pub product: Uuid,
}

/// Add Order Item Handler
///
/// Adds one unit of the product, bumping the existing line when there is one.
#[endpoint(
    tags("orders"),
    summary = "Add Item to Order",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown product"),
        (status_code = StatusCode::CONFLICT, description = "Order is not open"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.items.create",
    skip(order, json, depot),
    fields(order_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<AddOrderItemRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = order.into_inner();
    let product = json.into_inner().product;

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));
    span.record("product_uuid", tracing::field::display(product));

    let updated = state
        .app
        .orders
        .add_item(order.into(), product.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
