//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use adisyon::orders::{OrderError, OrderStatus};

use crate::database::is_numeric_out_of_range;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("order has no line for that product")]
    ItemNotFound,

    #[error("referenced product does not exist")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("order number already taken")]
    Conflict,

    #[error("order is {0}")]
    InvalidState(OrderStatus),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_numeric_out_of_range(&error) {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<OrderError> for OrdersServiceError {
    fn from(error: OrderError) -> Self {
        match error {
            OrderError::InvalidQuantity(_) | OrderError::AmountOutOfRange => Self::InvalidData,
            OrderError::ItemNotFound(_) => Self::ItemNotFound,
            OrderError::InvalidState(status) => Self::InvalidState(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use adisyon::products::ProductUuid;

    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = OrdersServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, OrdersServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn aggregate_errors_keep_their_meaning() {
        assert!(matches!(
            OrdersServiceError::from(OrderError::InvalidQuantity(0)),
            OrdersServiceError::InvalidData
        ));
        assert!(matches!(
            OrdersServiceError::from(OrderError::AmountOutOfRange),
            OrdersServiceError::InvalidData
        ));
        assert!(matches!(
            OrdersServiceError::from(OrderError::ItemNotFound(ProductUuid::new())),
            OrdersServiceError::ItemNotFound
        ));
        assert!(matches!(
            OrdersServiceError::from(OrderError::InvalidState(OrderStatus::Paid)),
            OrdersServiceError::InvalidState(OrderStatus::Paid)
        ));
    }
}
