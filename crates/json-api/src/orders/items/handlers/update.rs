//! Update Order Item Handler

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

/// Update Order Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderItemRequest {
    /// New unit count, at least one
    pub quantity: u32,
}

/// Update Order Item Handler
#[endpoint(
    tags("orders"),
    summary = "Set Order Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Order is not open"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.items.update",
    skip(order, product, json, depot),
    fields(
        order_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    product: PathParam<Uuid>,
    json: JsonBody<UpdateOrderItemRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = order.into_inner();
    let product = product.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity);

    let updated = state
        .app
        .orders
        .set_item_quantity(order.into(), product.into(), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
