//! Common SSCC behavior shared by pure ids and the SSCC-96 tag

use crate::fields::split_leading_digit;
use crate::uri::{EpcUri, EpcUriKind};
use epc_codec::PartitionEntry;
use epc_core::EpcResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition table for SSCC-96.
///
/// Company prefix digits and extension+serial digits always sum to 17;
/// the bit widths sum to 58. The trailing 24 bits of the 96-bit
/// encoding are unallocated and stay zero.
pub(crate) const SSCC_PARTITIONS: [PartitionEntry; 7] = [
    PartitionEntry { bits1: 40, digits1: 12, bits2: 18, digits2: 5 },
    PartitionEntry { bits1: 37, digits1: 11, bits2: 21, digits2: 6 },
    PartitionEntry { bits1: 34, digits1: 10, bits2: 24, digits2: 7 },
    PartitionEntry { bits1: 30, digits1: 9, bits2: 28, digits2: 8 },
    PartitionEntry { bits1: 27, digits1: 8, bits2: 31, digits2: 9 },
    PartitionEntry { bits1: 24, digits1: 7, bits2: 34, digits2: 10 },
    PartitionEntry { bits1: 20, digits1: 6, bits2: 38, digits2: 11 },
];

/// Common SSCC properties provided by pure SSCC ids and SSCC-96 tags.
pub trait Sscc {
    /// The GS1 company prefix.
    fn company_prefix(&self) -> &str;

    /// The single extension digit.
    fn extension(&self) -> &str;

    /// The serial reference digits.
    fn serial(&self) -> &str;

    /// The combined extension digit and serial, as carried in URIs.
    fn extension_and_serial(&self) -> String {
        format!("{}{}", self.extension(), self.serial())
    }
}

/// An EPC pure SSCC identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SsccId {
    company_prefix: String,
    extension: String,
    serial: String,
}

impl SsccId {
    /// The id URI scheme token.
    pub const SCHEME: &'static str = "sscc";

    /// Construct an SSCC id from split extension and serial.
    pub fn new(company_prefix: &str, extension: &str, serial: &str) -> Self {
        Self {
            company_prefix: company_prefix.to_string(),
            extension: extension.to_string(),
            serial: serial.to_string(),
        }
    }

    /// Construct an SSCC id from the combined extension+serial field
    /// carried in URIs.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the combined field is empty.
    pub fn from_combined(company_prefix: &str, extension_and_serial: &str) -> EpcResult<Self> {
        let (extension, serial) = split_leading_digit(extension_and_serial, "ExtensionAndSerial")?;
        Ok(Self {
            company_prefix: company_prefix.to_string(),
            extension,
            serial,
        })
    }

    /// Parse an SSCC id from its URI text.
    pub fn from_uri_str(uri: &str) -> EpcResult<Self> {
        Self::from_uri(&EpcUri::from_string(uri)?)
    }

    /// Create an SSCC id from the specified URI.
    ///
    /// Id URI parts are `[companyPrefix, extension+serial]`.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        uri.expect_id(Self::SCHEME, 2)?;
        let parts = uri.parts();
        Self::from_combined(&parts[0], &parts[1])
    }

    /// Convert to the URI representation.
    pub fn to_uri(&self) -> EpcUri {
        EpcUri::new(
            EpcUriKind::Id,
            Self::SCHEME,
            vec![self.company_prefix.clone(), self.extension_and_serial()],
        )
    }
}

impl Sscc for SsccId {
    fn company_prefix(&self) -> &str {
        &self.company_prefix
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn serial(&self) -> &str {
        &self.serial
    }
}

impl fmt::Display for SsccId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri() {
        let id = SsccId::from_uri_str("urn:epc:id:sscc:348338.00000000001").unwrap();
        assert_eq!(id.company_prefix(), "348338");
        assert_eq!(id.extension(), "0");
        assert_eq!(id.serial(), "0000000001");
        assert_eq!(id.extension_and_serial(), "00000000001");
    }

    #[test]
    fn test_from_uri_matches_to_uri() {
        let uri = "urn:epc:id:sscc:348338.00000000001";
        let id = SsccId::from_uri_str(uri).unwrap();
        assert_eq!(id.to_string(), uri);
        assert_eq!(id.to_uri().to_string(), uri);
    }

    #[test]
    fn test_from_uri_rejects_wrong_part_count() {
        assert!(SsccId::from_uri_str("urn:epc:id:sscc:348338.0.1").is_err());
    }
}
