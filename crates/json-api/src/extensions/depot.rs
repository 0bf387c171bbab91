//! Depot extraction helpers.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

pub(crate) trait DepotExt {
    /// Injected state by type. Missing state is a wiring bug, reported as a bare 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                state = std::any::type_name::<T>(),
                "state missing from depot, is the inject hoop installed?"
            );

            StatusError::internal_server_error()
        })
    }
}
