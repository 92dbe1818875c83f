//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::records::{ProductRecord, ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub manufacturer: String,
    pub barcode: String,
    pub price: Decimal,
}

/// Product Candidate
///
/// A product as submitted for update. Every field may be absent; the updater
/// decides which absences are errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCandidate {
    pub uuid: Option<ProductUuid>,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<Decimal>,
}

impl From<ProductRecord> for ProductCandidate {
    fn from(record: ProductRecord) -> Self {
        Self {
            uuid: Some(record.uuid),
            name: Some(record.name),
            manufacturer: Some(record.manufacturer),
            barcode: Some(record.barcode),
            price: Some(record.price),
        }
    }
}

/// Product Update Data
///
/// A candidate that passed validation, ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub uuid: ProductUuid,
    pub name: String,
    pub manufacturer: String,
    pub barcode: String,
    pub price: Decimal,
}
