//! Products store.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsStore {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, ProductsServiceError> {
        self.db.begin().await.map_err(Into::into)
    }
}

#[async_trait]
impl ProductsStore for PgProductsStore {
    async fn find_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(&self, update: ProductUpdate) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.begin().await?;

        let updated = self.repository.update_product(&mut tx, update).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

/// Keyed storage for product records.
///
/// The store applies no business rules; callers validate before writing.
#[automock]
#[async_trait]
pub trait ProductsStore: Send + Sync {
    /// Retrieve a single product.
    async fn find_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Insert a new product.
    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError>;

    /// Replace the stored product with the same UUID and return the persisted row.
    async fn update_product(&self, update: ProductUpdate) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_product(uuid: ProductUuid) -> NewProduct {
        NewProduct {
            uuid,
            name: "Produto Dez".to_string(),
            manufacturer: "Empresa Dez".to_string(),
            barcode: "7899137500100".to_string(),
            price: Decimal::new(45000, 2),
        }
    }

    #[tokio::test]
    async fn create_product_returns_inserted_row() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx.store.create_product(new_product(uuid)).await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.name, "Produto Dez");
        assert_eq!(product.price, Decimal::new(45000, 2));
        assert_eq!(product.created_at, product.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn find_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let created = ctx.store.create_product(new_product(uuid)).await?;
        let found = ctx.store.find_product(uuid).await?;

        assert_eq!(found, created);

        Ok(())
    }

    #[tokio::test]
    async fn find_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.store.find_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.store.create_product(new_product(uuid)).await?;

        let result = ctx.store.create_product(new_product(uuid)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let created = ctx.store.create_product(new_product(uuid)).await?;

        let updated = ctx
            .store
            .update_product(ProductUpdate {
                uuid,
                name: "Produto Dez Atualizado".to_string(),
                manufacturer: "Empresa Onze".to_string(),
                barcode: "7899137510000".to_string(),
                price: Decimal::new(500, 0),
            })
            .await?;

        assert_eq!(updated.uuid, uuid);
        assert_eq!(updated.name, "Produto Dez Atualizado");
        assert_eq!(updated.manufacturer, "Empresa Onze");
        assert_eq!(updated.barcode, "7899137510000");
        assert_eq!(updated.price, Decimal::new(50000, 2));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let found = ctx.store.find_product(uuid).await?;

        assert_eq!(found, updated);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let result = ctx
            .store
            .update_product(ProductUpdate {
                uuid,
                name: "Produto".to_string(),
                manufacturer: "Empresa".to_string(),
                barcode: "7899137500100".to_string(),
                price: Decimal::ONE,
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn store_keeps_records_that_predate_barcode_rules() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.store
            .create_product(NewProduct {
                barcode: "123".to_string(),
                ..new_product(uuid)
            })
            .await?;

        let found = ctx.store.find_product(uuid).await?;

        assert_eq!(found.barcode, "123");

        Ok(())
    }
}
