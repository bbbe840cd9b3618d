//! Common SGTIN behavior shared by pure ids and SGTIN-xx tags

use crate::fields::split_leading_digit;
use crate::uri::{EpcUri, EpcUriKind};
use epc_codec::PartitionEntry;
use epc_codec::gtin;
use epc_core::EpcResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition table shared by SGTIN-96 and SGTIN-198.
///
/// Company prefix digits and indicator+item reference digits always sum
/// to 13; the bit widths sum to 44.
pub(crate) const SGTIN_PARTITIONS: [PartitionEntry; 7] = [
    PartitionEntry { bits1: 40, digits1: 12, bits2: 4, digits2: 1 },
    PartitionEntry { bits1: 37, digits1: 11, bits2: 7, digits2: 2 },
    PartitionEntry { bits1: 34, digits1: 10, bits2: 10, digits2: 3 },
    PartitionEntry { bits1: 30, digits1: 9, bits2: 14, digits2: 4 },
    PartitionEntry { bits1: 27, digits1: 8, bits2: 17, digits2: 5 },
    PartitionEntry { bits1: 24, digits1: 7, bits2: 20, digits2: 6 },
    PartitionEntry { bits1: 20, digits1: 6, bits2: 24, digits2: 7 },
];

/// Common SGTIN properties provided by pure SGTIN ids and SGTIN-xx tags.
pub trait Sgtin {
    /// The GS1 company prefix.
    fn company_prefix(&self) -> &str;

    /// The single indicator digit.
    fn indicator(&self) -> &str;

    /// The item reference digits.
    fn item_reference(&self) -> &str;

    /// The serial number.
    fn serial(&self) -> &str;

    /// The combined indicator digit and item reference, as carried in URIs.
    fn indicator_and_item_reference(&self) -> String {
        format!("{}{}", self.indicator(), self.item_reference())
    }

    /// The GTIN-13 (EAN-13) display form derived from the SGTIN fields.
    fn gtin13(&self) -> EpcResult<String> {
        gtin::gtin13(self.company_prefix(), self.item_reference())
    }
}

/// An EPC pure SGTIN identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SgtinId {
    company_prefix: String,
    indicator: String,
    item_reference: String,
    serial: String,
}

impl SgtinId {
    /// The id URI scheme token.
    pub const SCHEME: &'static str = "sgtin";

    /// Construct an SGTIN id from split indicator and item reference.
    pub fn new(company_prefix: &str, indicator: &str, item_reference: &str, serial: &str) -> Self {
        Self {
            company_prefix: company_prefix.to_string(),
            indicator: indicator.to_string(),
            item_reference: item_reference.to_string(),
            serial: serial.to_string(),
        }
    }

    /// Construct an SGTIN id from the combined indicator+item reference
    /// field carried in URIs.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the combined field is empty.
    pub fn from_combined(
        company_prefix: &str,
        indicator_and_item_reference: &str,
        serial: &str,
    ) -> EpcResult<Self> {
        let (indicator, item_reference) =
            split_leading_digit(indicator_and_item_reference, "IndicatorAndItemReference")?;
        Ok(Self {
            company_prefix: company_prefix.to_string(),
            indicator,
            item_reference,
            serial: serial.to_string(),
        })
    }

    /// Parse an SGTIN id from its URI text.
    pub fn from_uri_str(uri: &str) -> EpcResult<Self> {
        Self::from_uri(&EpcUri::from_string(uri)?)
    }

    /// Create an SGTIN id from the specified URI.
    ///
    /// Id URI parts are `[companyPrefix, indicator+itemReference, serial]`.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        uri.expect_id(Self::SCHEME, 3)?;
        let parts = uri.parts();
        Self::from_combined(&parts[0], &parts[1], &parts[2])
    }

    /// Convert to the URI representation.
    pub fn to_uri(&self) -> EpcUri {
        EpcUri::new(
            EpcUriKind::Id,
            Self::SCHEME,
            vec![
                self.company_prefix.clone(),
                self.indicator_and_item_reference(),
                self.serial.clone(),
            ],
        )
    }
}

impl Sgtin for SgtinId {
    fn company_prefix(&self) -> &str {
        &self.company_prefix
    }

    fn indicator(&self) -> &str {
        &self.indicator
    }

    fn item_reference(&self) -> &str {
        &self.item_reference
    }

    fn serial(&self) -> &str {
        &self.serial
    }
}

impl fmt::Display for SgtinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri() {
        let id = SgtinId::from_uri_str("urn:epc:id:sgtin:311112347.0781321.1").unwrap();
        assert_eq!(id.company_prefix(), "311112347");
        assert_eq!(id.indicator_and_item_reference(), "0781321");
        assert_eq!(id.indicator(), "0");
        assert_eq!(id.item_reference(), "781321");
        assert_eq!(id.serial(), "1");
    }

    #[test]
    fn test_from_uri_matches_to_uri() {
        let uri = "urn:epc:id:sgtin:311112347.0781321.1";
        let id = SgtinId::from_uri_str(uri).unwrap();
        assert_eq!(id.to_string(), uri);
        assert_eq!(id.to_uri().to_string(), uri);
    }

    #[test]
    fn test_from_uri_rejects_tag_uri() {
        assert!(SgtinId::from_uri_str("urn:epc:tag:sgtin:311112347.0781321.1").is_err());
    }

    #[test]
    fn test_gtin13() {
        let id = SgtinId::new("348338", "0", "781321", "1");
        assert_eq!(id.gtin13().unwrap(), "3483387813215");
    }
}
