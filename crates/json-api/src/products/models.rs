//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adisyon::products::Product;

use crate::extensions::*;

/// Product Response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Current unit price
    pub price: f64,

    /// Menu category
    pub category: String,

    /// Whether the product can be ordered
    pub is_available: bool,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.uuid.into_uuid(),
            name: product.name,
            price: product.price.to_amount(),
            category: product.category,
            is_available: product.is_available,
            created_at: product.created_at.to_string(),
        }
    }
}
