//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsStore, ProductsService, ProductsStore, ValidatingProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Services wired against one database pool.
///
/// `products` validates before writing; `store` writes as-is and is meant for
/// seeding and operator tooling.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub store: Arc<dyn ProductsStore>,
}

impl AppContext {
    /// Wire the services on top of an existing store.
    #[must_use]
    pub fn with_store(store: Arc<dyn ProductsStore>) -> Self {
        Self {
            products: Arc::new(ValidatingProductsService::new(Arc::clone(&store))),
            store,
        }
    }

    /// Connect to `PostgreSQL` and wire the services against it.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::with_store(Arc::new(PgProductsStore::new(Db::new(pool)))))
    }
}
