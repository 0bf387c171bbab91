//! Dashboard Errors

use salvo::http::StatusError;
use tracing::error;

use adisyon_app::domain::dashboard::DashboardServiceError;

pub(crate) fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::Sql(source) => {
            error!("storage error while building dashboard: {source}");

            StatusError::internal_server_error()
        }
    }
}
