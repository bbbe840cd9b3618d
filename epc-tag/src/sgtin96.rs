//! SGTIN-96 tag codec
//!
//! Layout: header [0,8), filter [8,11), partition fields from bit 11,
//! numeric serial in bits [58,96).

use crate::fields::{expect_hex_len, parse_filter, validate_filter, validate_partition};
use crate::scheme::TagScheme;
use crate::sgtin::{SGTIN_PARTITIONS, Sgtin, SgtinId};
use crate::uri::{EpcUri, EpcUriKind};
use epc_codec::{decode_partition, encode_partition, partition_for_prefix_len};
use epc_core::{BitBuffer, EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const SERIAL_FIRST_BIT: usize = 58;
const SERIAL_BITS: usize = 38;

/// An SGTIN-96 tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sgtin96Tag {
    filter: u8,
    partition: u8,
    company_prefix: String,
    indicator: String,
    item_reference: String,
    serial: String,
}

impl Sgtin96Tag {
    /// The scheme descriptor for SGTIN-96.
    pub const SCHEME: TagScheme = TagScheme::Sgtin96;

    /// Construct a tag from split indicator and item reference.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the filter or partition is out of
    /// range.
    pub fn new(
        filter: u8,
        partition: u8,
        company_prefix: &str,
        indicator: &str,
        item_reference: &str,
        serial: &str,
    ) -> EpcResult<Self> {
        validate_filter(filter)?;
        validate_partition(partition)?;
        Ok(Self {
            filter,
            partition,
            company_prefix: company_prefix.to_string(),
            indicator: indicator.to_string(),
            item_reference: item_reference.to_string(),
            serial: serial.to_string(),
        })
    }

    /// Construct a tag from the combined indicator+item reference field
    /// carried in URIs.
    pub fn from_combined(
        filter: u8,
        partition: u8,
        company_prefix: &str,
        indicator_and_item_reference: &str,
        serial: &str,
    ) -> EpcResult<Self> {
        let id = SgtinId::from_combined(company_prefix, indicator_and_item_reference, serial)?;
        Self::new(
            filter,
            partition,
            company_prefix,
            id.indicator(),
            id.item_reference(),
            serial,
        )
    }

    /// Decode a tag from its binary representation in hexadecimal text.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the text is not exactly 24 hex
    /// characters or the header byte does not match the scheme.
    pub fn from_binary(epc_text: &str) -> EpcResult<Self> {
        expect_hex_len(epc_text, Self::SCHEME)?;
        Self::from_bit_buffer(&BitBuffer::from_hex(epc_text)?)
    }

    /// Decode a tag from a raw bit buffer.
    pub fn from_bit_buffer(bits: &BitBuffer) -> EpcResult<Self> {
        let header = bits.read_byte(0, 8)?;
        if header != Self::SCHEME.binary_header() {
            return Err(EpcError::Format(format!(
                "Invalid EPC header: 0x{:02X} (expected 0x{:02X})",
                header,
                Self::SCHEME.binary_header()
            )));
        }

        let filter = bits.read_byte(8, 3)?;
        let (partition, company_prefix, indicator_and_item_reference) =
            decode_partition(bits, 11, &SGTIN_PARTITIONS)?;
        let serial = bits.read_uint(SERIAL_FIRST_BIT, SERIAL_BITS)?.to_string();

        Self::from_combined(
            filter,
            partition,
            &company_prefix,
            &indicator_and_item_reference,
            &serial,
        )
    }

    /// Encode the tag into a bit buffer.
    pub fn to_bit_buffer(&self) -> EpcResult<BitBuffer> {
        let mut bits = BitBuffer::new(Self::SCHEME.total_bits());
        bits.write_byte(Self::SCHEME.binary_header(), 0, 8)?;
        bits.write_byte(self.filter, 8, 3)?;
        encode_partition(
            &mut bits,
            11,
            &SGTIN_PARTITIONS,
            self.partition,
            &self.company_prefix,
            &self.indicator_and_item_reference(),
        )?;
        let serial = self
            .serial
            .parse::<u64>()
            .map_err(|_| EpcError::Format(format!("Serial is not a number: {}", self.serial)))?;
        bits.write_uint(serial, SERIAL_FIRST_BIT, SERIAL_BITS)?;
        Ok(bits)
    }

    /// Encode the tag into its hexadecimal text form.
    pub fn to_binary(&self) -> EpcResult<String> {
        Ok(self.to_bit_buffer()?.to_hex())
    }

    /// Parse a tag from its URI text.
    pub fn from_uri_str(uri: &str) -> EpcResult<Self> {
        Self::from_uri(&EpcUri::from_string(uri)?)
    }

    /// Create a tag from the specified URI.
    ///
    /// Tag URI parts are `[filter, companyPrefix, indicator+itemReference,
    /// serial]`; the partition is derived from the company prefix length.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        uri.expect_tag(Self::SCHEME.uri_token(), 4)?;
        let parts = uri.parts();
        let filter = parse_filter(&parts[0])?;
        let partition = partition_for_prefix_len(parts[1].len())?;
        Self::from_combined(filter, partition, &parts[1], &parts[2], &parts[3])
    }

    /// Convert to the tag URI representation.
    pub fn to_uri(&self) -> EpcUri {
        EpcUri::new(
            EpcUriKind::Tag,
            Self::SCHEME.uri_token(),
            vec![
                self.filter.to_string(),
                self.company_prefix.clone(),
                self.indicator_and_item_reference(),
                self.serial.clone(),
            ],
        )
    }

    /// The corresponding pure SGTIN identity, without filter and partition.
    pub fn to_id(&self) -> SgtinId {
        SgtinId::new(
            &self.company_prefix,
            &self.indicator,
            &self.item_reference,
            &self.serial,
        )
    }

    /// The filter value.
    pub fn filter(&self) -> u8 {
        self.filter
    }

    /// The partition selector.
    pub fn partition(&self) -> u8 {
        self.partition
    }
}

impl Sgtin for Sgtin96Tag {
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

impl fmt::Display for Sgtin96Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One row per partition, from the GS1 tag translation examples.
    const VECTORS: [(&str, u8, &str, &str, &str, &str); 7] = [
        ("3039542C82FB024000000001", 6, "348338", "0", "781321", "3483387813215"),
        ("3034C8470C0796C000000001", 5, "3281347", "0", "07771", "3281347077710"),
        ("3030F380DE001EC000000001", 4, "31916476", "0", "0123", "3191647601235"),
        ("302D28B329B0F6C000000001", 3, "311112347", "0", "987", "3111123479875"),
        ("3028B3A7F7390E0000000001", 2, "3014129465", "0", "56", "3014129465562"),
        ("3024DFD31D1DE0C000000001", 1, "30041237743", "0", "3", "3004123774333"),
        ("302117688465380000000001", 0, "300012345678", "0", "", "3000123456781"),
    ];

    #[test]
    fn test_parse_binary_text() {
        for (text, partition, company_prefix, indicator, item_reference, ean13) in VECTORS {
            let tag = Sgtin96Tag::from_binary(text).unwrap();
            assert_eq!(tag.partition(), partition, "partition for {}", text);
            assert_eq!(tag.company_prefix(), company_prefix);
            assert_eq!(tag.indicator(), indicator);
            assert_eq!(tag.item_reference(), item_reference);
            assert_eq!(tag.serial(), "1");
            assert_eq!(tag.gtin13().unwrap(), ean13);
        }
    }

    #[test]
    fn test_binary_round_trip() {
        for (text, ..) in VECTORS {
            let tag = Sgtin96Tag::from_binary(text).unwrap();
            assert_eq!(tag.to_binary().unwrap(), text);
        }
    }

    #[test]
    fn test_from_binary_rejects_wrong_length() {
        assert!(Sgtin96Tag::from_binary("302D28B329B0F6C00000001").is_err());
        assert!(Sgtin96Tag::from_binary("302D28B329B0F6C0000000011").is_err());
    }

    #[test]
    fn test_from_binary_rejects_wrong_header() {
        let result = Sgtin96Tag::from_binary("3159542C8000000001000000");
        assert!(matches!(result, Err(EpcError::Format(_))));
    }

    #[test]
    fn test_from_uri() {
        let tag = Sgtin96Tag::from_uri_str("urn:epc:tag:sgtin-96:1.311112347.0781321.1").unwrap();
        assert_eq!(tag.filter(), 1);
        assert_eq!(tag.partition(), 3);
        assert_eq!(tag.company_prefix(), "311112347");
        assert_eq!(tag.indicator_and_item_reference(), "0781321");
        assert_eq!(tag.indicator(), "0");
        assert_eq!(tag.item_reference(), "781321");
        assert_eq!(tag.serial(), "1");
    }

    #[test]
    fn test_from_uri_matches_to_uri() {
        let uri = "urn:epc:tag:sgtin-96:1.311112347.0781321.1";
        let tag = Sgtin96Tag::from_uri_str(uri).unwrap();
        assert_eq!(tag.to_string(), uri);
        assert_eq!(tag.to_uri().to_string(), uri);
    }

    #[test]
    fn test_from_uri_rejects_bad_prefix_length() {
        assert!(Sgtin96Tag::from_uri_str("urn:epc:tag:sgtin-96:1.34833.0781321.1").is_err());
    }

    #[test]
    fn test_from_uri_rejects_filter_out_of_range() {
        assert!(Sgtin96Tag::from_uri_str("urn:epc:tag:sgtin-96:8.311112347.0781321.1").is_err());
    }

    #[test]
    fn test_serial_must_fit_38_bits() {
        let tag = Sgtin96Tag::from_combined(1, 3, "311112347", "0987", "274877906944").unwrap();
        assert!(matches!(tag.to_binary(), Err(EpcError::Range(_))));
    }

    #[test]
    fn test_to_id() {
        let tag = Sgtin96Tag::from_binary("302D28B329B0F6C000000001").unwrap();
        let id = tag.to_id();
        assert_eq!(id.to_string(), "urn:epc:id:sgtin:311112347.0987.1");
    }
}
