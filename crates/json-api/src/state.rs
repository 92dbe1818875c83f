//! Handler state

use std::{fmt, sync::Arc};

use catalog_app::{context::AppContext, domain::products::ProductsService};

/// Everything handlers pull out of the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub(crate) fn shared(products: Arc<dyn ProductsService>) -> Arc<Self> {
        Arc::new(Self { products })
    }
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        Self {
            products: app.products,
        }
    }
}
