//! Field parsing helpers shared by the tag schemes

use crate::scheme::TagScheme;
use epc_core::{EpcError, EpcResult};

/// Ensure a binary text has exactly the scheme's hex length.
pub(crate) fn expect_hex_len(text: &str, scheme: TagScheme) -> EpcResult<()> {
    if text.len() != scheme.hex_len() {
        return Err(EpcError::Format(format!(
            "EpcCode must be {} characters long (was {})",
            scheme.hex_len(),
            text.len()
        )));
    }
    Ok(())
}

/// Parse the filter part of a tag URI.
pub(crate) fn parse_filter(part: &str) -> EpcResult<u8> {
    part.parse::<u8>()
        .map_err(|_| EpcError::Format(format!("Filter is not a number: {}", part)))
}

/// Validate a filter value against its 3-bit field.
pub(crate) fn validate_filter(filter: u8) -> EpcResult<()> {
    if filter > 7 {
        return Err(EpcError::Format(format!(
            "Filter must be in [0..7] (was {})",
            filter
        )));
    }
    Ok(())
}

/// Validate a partition selector against the 7-row tables.
pub(crate) fn validate_partition(partition: u8) -> EpcResult<()> {
    if partition > 6 {
        return Err(EpcError::Format(format!(
            "Partition must be in [0..6] (was {})",
            partition
        )));
    }
    Ok(())
}

/// Split a combined field into its leading single digit and remainder.
///
/// The one-digit convention for the indicator (SGTIN) and extension
/// (SSCC) digit is fixed by the standard.
pub(crate) fn split_leading_digit(combined: &str, name: &str) -> EpcResult<(String, String)> {
    let mut chars = combined.chars();
    let first = chars
        .next()
        .ok_or_else(|| EpcError::Format(format!("{} must not be empty", name)))?;
    Ok((first.to_string(), chars.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_hex_len() {
        assert!(expect_hex_len("302D28B329B0F6C000000001", TagScheme::Sgtin96).is_ok());
        assert!(expect_hex_len("302D28B329B0F6C00000001", TagScheme::Sgtin96).is_err());
        assert!(expect_hex_len("302D28B329B0F6C0000000011", TagScheme::Sgtin96).is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("2").unwrap(), 2);
        assert!(parse_filter("x").is_err());
    }

    #[test]
    fn test_split_leading_digit() {
        let (first, rest) = split_leading_digit("0781321", "IndicatorAndItemReference").unwrap();
        assert_eq!(first, "0");
        assert_eq!(rest, "781321");

        let (first, rest) = split_leading_digit("0", "IndicatorAndItemReference").unwrap();
        assert_eq!(first, "0");
        assert_eq!(rest, "");

        assert!(split_leading_digit("", "IndicatorAndItemReference").is_err());
    }
}
