//! Dashboard Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    dashboard::{errors::into_status_error, models::DashboardResponse},
    extensions::*,
    state::State,
};

/// Dashboard Handler
///
/// Sales figures for the calendar month containing `at` (default now) in the configured
/// reporting time zone.
#[endpoint(
    tags("dashboard"),
    summary = "Get Dashboard",
    responses(
        (status_code = StatusCode::OK, description = "Dashboard"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "dashboard.get",
    skip(at, depot),
    fields(window_start = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let window = at.into_reporting_window(&state.reporting_time_zone)?;

    tracing::Span::current().record("window_start", tracing::field::display(window.start()));

    let dashboard = state
        .app
        .dashboard
        .dashboard(window)
        .await
        .map_err(into_status_error)?;

    Ok(Json(dashboard.into()))
}
