//! Record Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    observability::observe_order_closed,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, PaymentMethodBody},
    },
    state::State,
};

/// Record Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordPaymentRequest {
    pub payment_method: PaymentMethodBody,
}

/// Record Payment Handler
///
/// Closes an open order as paid, stamping the payment time server-side.
#[endpoint(
    tags("orders"),
    summary = "Record Payment",
    responses(
        (status_code = StatusCode::OK, description = "Order paid"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is not open"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.payment",
    skip(order, json, depot),
    fields(order_uuid = tracing::field::Empty, payment_method = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<RecordPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = order.into_inner();
    let method = json.into_inner().payment_method.into();

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));
    span.record("payment_method", tracing::field::display(method));

    let paid = state
        .app
        .orders
        .record_payment(order.into(), method)
        .await
        .map_err(into_status_error)?;

    observe_order_closed(&paid);

    tracing::info!(
        order_uuid = %order,
        order_number = %paid.number,
        total_amount = %paid.total_amount,
        "recorded payment"
    );

    Ok(Json(paid.into()))
}
