//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
///
/// A row as persisted by the store. Records written before barcode
/// validation existed may not satisfy the barcode rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub manufacturer: String,
    pub barcode: String,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
