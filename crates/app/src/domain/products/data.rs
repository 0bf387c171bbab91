//! Products Data

use rust_decimal::Decimal;

use adisyon::{limits::is_storable_amount, products::ProductUuid};

use crate::domain::products::errors::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl NewProduct {
    /// Trims text fields and checks the catalog constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::MissingRequiredData`] when the name or category is
    /// blank and [`ProductsServiceError::InvalidData`] for a negative price or one past
    /// [`adisyon::limits::MAX_AMOUNT`].
    pub fn validated(self) -> Result<Self, ProductsServiceError> {
        let name = self.name.trim();
        let category = self.category.trim();

        if name.is_empty() || category.is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if !is_storable_amount(self.price) {
            return Err(ProductsServiceError::InvalidData);
        }

        Ok(Self {
            uuid: self.uuid,
            name: name.to_string(),
            price: self.price,
            category: category.to_string(),
        })
    }
}
