//! SGTIN-198 tag codec
//!
//! Same field layout as SGTIN-96 up to bit 58, but the serial is an
//! alphanumeric 7-bit string field occupying bits [58,198).

use crate::fields::{expect_hex_len, parse_filter, validate_filter, validate_partition};
use crate::scheme::TagScheme;
use crate::sgtin::{SGTIN_PARTITIONS, Sgtin, SgtinId};
use crate::uri::{EpcUri, EpcUriKind};
use epc_codec::{decode_partition, decode_string, encode_partition, encode_string,
    partition_for_prefix_len};
use epc_core::{BitBuffer, EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const SERIAL_FIRST_BIT: usize = 58;
const SERIAL_BITS: usize = 140;

/// An SGTIN-198 tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sgtin198Tag {
    filter: u8,
    partition: u8,
    company_prefix: String,
    indicator: String,
    item_reference: String,
    serial: String,
}

impl Sgtin198Tag {
    /// The scheme descriptor for SGTIN-198.
    pub const SCHEME: TagScheme = TagScheme::Sgtin198;

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
    /// Returns `EpcError::Format` if the text is not exactly 52 hex
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
        let serial = decode_string(bits, SERIAL_FIRST_BIT, SERIAL_BITS)?;

        Self::from_combined(
            filter,
            partition,
            &company_prefix,
            &indicator_and_item_reference,
            &serial,
        )
    }

    /// Encode the tag into a bit buffer.
    ///
    /// The buffer is zero-filled first, so the string serial is
    /// implicitly terminated by a zero septet when shorter than its
    /// field.
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
        encode_string(&mut bits, &self.serial, SERIAL_FIRST_BIT, SERIAL_BITS)?;
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

impl Sgtin for Sgtin198Tag {
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

impl fmt::Display for Sgtin198Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}
