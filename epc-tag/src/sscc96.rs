//! SSCC-96 tag codec
//!
//! Layout: header [0,8), filter [8,11), partition fields from bit 11.
//! The extension digit and serial reference are packed together as
//! partition field 2; bits [72,96) are unallocated and stay zero.

use crate::fields::{expect_hex_len, parse_filter, validate_filter, validate_partition};
use crate::scheme::TagScheme;
use crate::sscc::{SSCC_PARTITIONS, Sscc, SsccId};
use crate::uri::{EpcUri, EpcUriKind};
use epc_codec::{decode_partition, encode_partition, partition_for_prefix_len};
use epc_core::{BitBuffer, EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An SSCC-96 tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sscc96Tag {
    filter: u8,
    partition: u8,
    company_prefix: String,
    extension: String,
    serial: String,
}

impl Sscc96Tag {
    /// The scheme descriptor for SSCC-96.
    pub const SCHEME: TagScheme = TagScheme::Sscc96;

    /// Construct a tag from split extension and serial.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the filter or partition is out of
    /// range.
    pub fn new(
        filter: u8,
        partition: u8,
        company_prefix: &str,
        extension: &str,
        serial: &str,
    ) -> EpcResult<Self> {
        validate_filter(filter)?;
        validate_partition(partition)?;
        Ok(Self {
            filter,
            partition,
            company_prefix: company_prefix.to_string(),
            extension: extension.to_string(),
            serial: serial.to_string(),
        })
    }

    /// Construct a tag from the combined extension+serial field carried
    /// in URIs.
    pub fn from_combined(
        filter: u8,
        partition: u8,
        company_prefix: &str,
        extension_and_serial: &str,
    ) -> EpcResult<Self> {
        let id = SsccId::from_combined(company_prefix, extension_and_serial)?;
        Self::new(filter, partition, company_prefix, id.extension(), id.serial())
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
        let (partition, company_prefix, extension_and_serial) =
            decode_partition(bits, 11, &SSCC_PARTITIONS)?;

        Self::from_combined(filter, partition, &company_prefix, &extension_and_serial)
    }

    /// Encode the tag into a bit buffer.
    ///
    /// The partition fields end at bit 72; the remaining 24 bits of the
    /// zero-filled buffer are left untouched.
    pub fn to_bit_buffer(&self) -> EpcResult<BitBuffer> {
        let mut bits = BitBuffer::new(Self::SCHEME.total_bits());
        bits.write_byte(Self::SCHEME.binary_header(), 0, 8)?;
        bits.write_byte(self.filter, 8, 3)?;
        encode_partition(
            &mut bits,
            11,
            &SSCC_PARTITIONS,
            self.partition,
            &self.company_prefix,
            &self.extension_and_serial(),
        )?;
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
    /// Tag URI parts are `[filter, companyPrefix, extension+serial]`; the
    /// partition is derived from the company prefix length.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        uri.expect_tag(Self::SCHEME.uri_token(), 3)?;
        let parts = uri.parts();
        let filter = parse_filter(&parts[0])?;
        let partition = partition_for_prefix_len(parts[1].len())?;
        Self::from_combined(filter, partition, &parts[1], &parts[2])
    }

    /// Convert to the tag URI representation.
    pub fn to_uri(&self) -> EpcUri {
        EpcUri::new(
            EpcUriKind::Tag,
            Self::SCHEME.uri_token(),
            vec![
                self.filter.to_string(),
                self.company_prefix.clone(),
                self.extension_and_serial(),
            ],
        )
    }

    /// The corresponding pure SSCC identity, without filter and partition.
    pub fn to_id(&self) -> SsccId {
        SsccId::new(&self.company_prefix, &self.extension, &self.serial)
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

impl Sscc for Sscc96Tag {
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

impl fmt::Display for Sscc96Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}
