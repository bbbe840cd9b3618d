//! GTIN check digit helper
//!
//! Derives the GTIN-13 (EAN-13) display form from SGTIN fields. Not part
//! of the binary codec itself, but every consumer of SGTIN data wants it.

use epc_core::{EpcError, EpcResult};

/// Compute the GS1 mod-10 check digit for a decimal payload.
///
/// Weights alternate 3/1 starting from the rightmost digit. A leading
/// zero is prepended first so that the weight-3 digits always land on
/// even indexes regardless of payload length.
///
/// # Errors
///
/// Returns `EpcError::Format` if the payload contains a non-digit.
pub fn check_digit(payload: &str) -> EpcResult<u8> {
    let mut weighted = 0u32;
    let mut plain = 0u32;
    for (i, c) in std::iter::once('0').chain(payload.chars()).enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| EpcError::Format(format!("GTIN payload must be decimal: {:?}", c)))?;
        if i % 2 == 0 {
            weighted += digit;
        } else {
            plain += digit;
        }
    }
    Ok(((10 - (3 * weighted + plain) % 10) % 10) as u8)
}

/// Compose a GTIN-13 from a company prefix and item reference.
///
/// The payload is the concatenation of both fields; the check digit is
/// appended to produce the 13-digit display form.
pub fn gtin13(company_prefix: &str, item_reference: &str) -> EpcResult<String> {
    let payload = format!("{}{}", company_prefix, item_reference);
    let check = check_digit(&payload)?;
    Ok(format!("{}{}", payload, check))
}
