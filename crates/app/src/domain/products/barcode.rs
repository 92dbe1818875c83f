//! Product Barcodes
//!
//! The catalog only carries one assortment: 13-digit retail barcodes issued
//! under a single country prefix and a single manufacturer range. The final
//! digit is a mod-10 check digit over the first twelve, weighted 1 and 3
//! alternately from the left.

use thiserror::Error;

/// Number of characters in a barcode.
pub const BARCODE_LENGTH: usize = 13;

/// Required country prefix, positions 0 to 2.
pub const COUNTRY_PREFIX: [char; 3] = ['7', '8', '9'];

/// Required manufacturer code, positions 3 to 7.
pub const MANUFACTURER_CODE: [char; 5] = ['9', '1', '3', '7', '5'];

const MANUFACTURER_CODE_END: usize = COUNTRY_PREFIX.len() + MANUFACTURER_CODE.len();

/// Reasons a barcode is rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("barcode must have exactly 13 characters")]
    Length,

    #[error("country code mismatch")]
    CountryCode,

    #[error("manufacturer code mismatch")]
    ManufacturerCode,

    #[error("barcode contains a non-digit character")]
    NotNumeric,

    #[error("check digit mismatch")]
    CheckDigit,
}

/// Validate a barcode against the assortment rules.
///
/// Rules are applied in order and the first failure is returned: length,
/// country prefix, manufacturer code, then the check digit.
///
/// # Errors
///
/// Returns the [`BarcodeError`] of the first rule the barcode violates.
pub fn validate_barcode(barcode: &str) -> Result<(), BarcodeError> {
    let chars: Vec<char> = barcode.chars().collect();

    if chars.len() != BARCODE_LENGTH {
        return Err(BarcodeError::Length);
    }

    if chars.get(..COUNTRY_PREFIX.len()) != Some(COUNTRY_PREFIX.as_slice()) {
        return Err(BarcodeError::CountryCode);
    }

    if chars.get(COUNTRY_PREFIX.len()..MANUFACTURER_CODE_END) != Some(MANUFACTURER_CODE.as_slice()) {
        return Err(BarcodeError::ManufacturerCode);
    }

    let [payload @ .., check] = parse_digits(&chars)?;

    if check != check_digit(&payload) {
        return Err(BarcodeError::CheckDigit);
    }

    Ok(())
}

/// Compute the check digit for the first twelve digits of a barcode.
///
/// Digits at even indices count once and digits at odd indices count three
/// times; the check digit brings the weighted sum up to a multiple of ten.
pub fn check_digit(payload: &[u32; BARCODE_LENGTH - 1]) -> u32 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(index, digit)| if index % 2 == 0 { *digit } else { digit * 3 })
        .sum();

    (10 - sum % 10) % 10
}

fn parse_digits(chars: &[char]) -> Result<[u32; BARCODE_LENGTH], BarcodeError> {
    let mut digits = [0; BARCODE_LENGTH];

    for (slot, c) in digits.iter_mut().zip(chars) {
        *slot = c.to_digit(10).ok_or(BarcodeError::NotNumeric)?;
    }

    Ok(digits)
}
