//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use adisyon::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns orders in one status, newest first. A missing or empty `status` means open orders.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    responses(
        (status_code = StatusCode::OK, description = "Order list"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<OrderStatus>())
        .transpose()
        .or_400("could not parse \"status\" query parameter")?
        .unwrap_or_default();

    let orders = state
        .app
        .orders
        .list_orders(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
