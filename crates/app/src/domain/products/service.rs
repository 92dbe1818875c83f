//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, warn};

use crate::domain::products::{
    data::ProductCandidate,
    errors::ProductsServiceError,
    records::{ProductRecord, ProductUuid},
    store::ProductsStore,
    validation::validate_candidate,
};

/// Products service that validates candidates before handing them to a store.
#[derive(Clone)]
pub struct ValidatingProductsService {
    store: Arc<dyn ProductsStore>,
}

impl ValidatingProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn ProductsStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for ValidatingProductsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatingProductsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for ValidatingProductsService {
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        self.store.find_product(product).await
    }

    #[tracing::instrument(
        name = "products.service.update",
        skip(self, candidate),
        fields(product_uuid = ?candidate.uuid)
    )]
    async fn update_product(
        &self,
        candidate: ProductCandidate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let update = validate_candidate(candidate).inspect_err(|error| {
            warn!(%error, "rejected product update");
        })?;

        let updated = self.store.update_product(update).await?;

        debug!(product_uuid = %updated.uuid, "updated product");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Validate a candidate and persist it.
    ///
    /// The store is only called when every rule passes; its result is
    /// returned unchanged.
    async fn update_product(
        &self,
        candidate: ProductCandidate,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
