//! Products service.

use async_trait::async_trait;
use mockall::automock;

use adisyon::products::Product;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct, errors::ProductsServiceError, repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let product = product.validated()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the whole catalog, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Validates and stores a new catalog entry. New products are always available.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use adisyon::products::ProductUuid;

    use crate::test::TestContext;

    use super::*;

    fn latte() -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
            name: "Latte".to_string(),
            price: Decimal::from(25),
            category: "Coffee".to_string(),
        }
    }

    #[tokio::test]
    async fn create_product_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let new = latte();

        let product = ctx.products.create_product(new.clone()).await?;

        assert_eq!(product.uuid, new.uuid);
        assert_eq!(product.name, "Latte");
        assert_eq!(product.price, Decimal::from(25));
        assert_eq!(product.category, "Coffee");
        assert!(product.is_available, "new products should be available");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_trims_name_and_category() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(NewProduct {
                name: "  Türk Kahvesi  ".to_string(),
                category: " Coffee ".to_string(),
                ..latte()
            })
            .await?;

        assert_eq!(product.name, "Türk Kahvesi");
        assert_eq!(product.category, "Coffee");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_negative_price_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(NewProduct {
                price: Decimal::NEGATIVE_ONE,
                ..latte()
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let new = latte();

        ctx.products.create_product(new.clone()).await?;

        let result = ctx.products.create_product(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_returns_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.products.create_product(latte()).await?;
        let second = ctx.products.create_product(latte()).await?;

        let products = ctx.products.list_products().await?;
        let uuids: Vec<ProductUuid> = products.iter().map(|p| p.uuid).collect();

        assert_eq!(uuids, vec![second.uuid, first.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }
}
