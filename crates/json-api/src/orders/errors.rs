//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use adisyon_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::ItemNotFound => {
            StatusError::not_found().brief("Order has no line for that product")
        }
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product")
        }
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Conflict => {
            StatusError::conflict().brief("Order number was taken, try again")
        }
        OrdersServiceError::InvalidState(status) => {
            StatusError::conflict().brief(format!("Order is already {status}"))
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use adisyon::orders::OrderStatus;

    use super::*;

    #[test]
    fn lifecycle_errors_are_conflicts() {
        let error = into_status_error(OrdersServiceError::InvalidState(OrderStatus::Paid));

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert_eq!(error.brief, "Order is already paid");
    }

    #[test]
    fn missing_lines_are_not_found() {
        assert_eq!(
            into_status_error(OrdersServiceError::ItemNotFound).code,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_failures_hide_their_cause() {
        let error = into_status_error(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.brief.contains("pool"), "brief should not leak storage details");
    }
}
