//! Delete Order Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Delete Order Item Handler
///
/// Removing a product that is not on the order leaves it unchanged.
#[endpoint(
    tags("orders"),
    summary = "Remove Item from Order",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is not open"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(name = "orders.items.delete", skip(order, product, depot), err)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .orders
        .remove_item(order.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
