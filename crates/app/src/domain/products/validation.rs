//! Product Update Validation

use rust_decimal::Decimal;

use crate::domain::products::{
    barcode::validate_barcode,
    data::{ProductCandidate, ProductUpdate},
    errors::ProductsServiceError,
};

/// Fractional digits the price column keeps.
const PRICE_SCALE: u32 = 2;

/// Prices must stay below this many whole units to fit `NUMERIC(12, 2)`.
const PRICE_LIMIT: i64 = 10_000_000_000;

/// Validate a candidate and turn it into a storable update.
///
/// Rules run in a fixed order and the first violation is returned:
///
/// 1. name, manufacturer, barcode and uuid are present
/// 2. price is strictly positive and storable without rounding
/// 3. barcode length, country prefix, manufacturer code and check digit
///
/// # Errors
///
/// Returns the [`ProductsServiceError`] of the first rule the candidate violates.
pub fn validate_candidate(candidate: ProductCandidate) -> Result<ProductUpdate, ProductsServiceError> {
    let ProductCandidate {
        uuid: Some(uuid),
        name: Some(name),
        manufacturer: Some(manufacturer),
        barcode: Some(barcode),
        price,
    } = candidate
    else {
        return Err(ProductsServiceError::IncompleteArguments);
    };

    // An absent price is not a positive price.
    let price = price
        .filter(is_storable_price)
        .ok_or(ProductsServiceError::InvalidPrice)?;

    validate_barcode(&barcode)?;

    Ok(ProductUpdate {
        uuid,
        name,
        manufacturer,
        barcode,
        price,
    })
}

/// Positive, at most cent precision, and inside the column's range. Anything
/// else would be rounded to zero or overflow in the store.
fn is_storable_price(price: &Decimal) -> bool {
    *price > Decimal::ZERO
        && price.normalize().scale() <= PRICE_SCALE
        && *price < Decimal::from(PRICE_LIMIT)
}
