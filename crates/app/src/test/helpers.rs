//! Test Helpers

use rust_decimal::Decimal;

use adisyon::products::{Product, ProductUuid};

use crate::{
    domain::products::{ProductsService, ProductsServiceError, data::NewProduct},
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: i64,
    category: &str,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price: Decimal::from(price),
            category: category.to_string(),
        })
        .await
}
