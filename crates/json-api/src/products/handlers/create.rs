//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use adisyon::products::ProductUuid;
use adisyon_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Display name
    pub name: String,

    /// Unit price, not negative
    pub price: f64,

    /// Menu category
    pub category: String,
}

impl CreateProductRequest {
    fn into_new_product(self, uuid: ProductUuid) -> Result<NewProduct, StatusError> {
        Ok(NewProduct {
            uuid,
            name: self.name,
            price: self.price.into_decimal()?,
            category: self.category,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty, category = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = ProductUuid::new();
    let product = json.into_inner().into_new_product(uuid)?;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(uuid));
    span.record("category", tracing::field::display(&product.category));

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %uuid, name = %product.name, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use adisyon::products::Product;
    use adisyon_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("api/products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| {
                new.name == "Latte" && new.price == Decimal::new(2550, 2) && new.category == "Coffee"
            })
            .return_once(|new| {
                Ok(Product {
                    uuid: new.uuid,
                    name: new.name,
                    price: new.price,
                    category: new.category,
                    is_available: true,
                    created_at: jiff::Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Latte", "price": 25.5, "category": "Coffee" }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/products/{}", body.id).as_str()));
        assert_eq!(body.name, "Latte");
        assert!(body.is_available);
        assert!((body.price - 25.5).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_payload_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "  ", "price": 10, "category": "Coffee" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_fields_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Latte" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
