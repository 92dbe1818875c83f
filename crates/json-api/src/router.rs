//! App Router

use salvo::Router;

use crate::products;

pub(crate) fn app_router() -> Router {
    Router::with_path("products").push(
        Router::with_path("{product}")
            .get(products::get::handler)
            .put(products::update::handler),
    )
}
