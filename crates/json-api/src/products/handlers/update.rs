//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::products::{data::ProductCandidate, records::ProductUuid};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Fields left out of the payload reach the updater as absent and are
/// rejected there.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// Display name
    pub name: Option<String>,

    /// Manufacturer name
    pub manufacturer: Option<String>,

    /// EAN-13 barcode
    pub barcode: Option<String>,

    /// Unit price, must be positive
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    fn into_candidate(self, uuid: ProductUuid) -> ProductCandidate {
        ProductCandidate {
            uuid: Some(uuid),
            name: self.name,
            manufacturer: self.manufacturer,
            barcode: self.barcode,
            price: self.price,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product failed validation"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot, res),
    fields(
        product_uuid = tracing::field::Empty,
        barcode = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));

    if let Some(barcode) = &request.barcode {
        span.record("barcode", tracing::field::display(barcode));
    }

    let updated = state
        .products
        .update_product(request.into_candidate(product.into()))
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(product_uuid = %product, "updated product");

    Ok(Json(updated.into()))
}
