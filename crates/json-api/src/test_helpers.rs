//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::domain::products::{
    MockProductsService,
    records::{ProductRecord, ProductUuid},
};

use crate::state::State;

/// Mount `route` behind the same state injection the server uses.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(Arc::new(products))))
            .push(route),
    )
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Produto Dez".to_string(),
        manufacturer: "Empresa Dez".to_string(),
        barcode: "7899137500100".to_string(),
        price: Decimal::new(45000, 2),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
