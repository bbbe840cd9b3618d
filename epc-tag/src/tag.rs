//! EPC tag dispatch
//!
//! `EpcTag` is the universal entry point for tag encodings: it reads the
//! binary header byte or the URI scheme token and delegates to the
//! matching scheme codec. The scheme set is closed, so dispatch is an
//! exhaustive match over `TagScheme`.

use crate::id::EpcId;
use crate::scheme::TagScheme;
use crate::sgtin96::Sgtin96Tag;
use crate::sgtin198::Sgtin198Tag;
use crate::sscc96::Sscc96Tag;
use crate::uri::{EpcUri, EpcUriKind};
use epc_core::{BitBuffer, EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A decoded EPC tag of any supported scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpcTag {
    Sgtin96(Sgtin96Tag),
    Sgtin198(Sgtin198Tag),
    Sscc96(Sscc96Tag),
}

impl EpcTag {
    /// Decode a tag from its binary representation in hexadecimal text.
    ///
    /// The first byte selects the scheme; the scheme codec re-validates
    /// the full text length.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the text is too short, the header is
    /// not hexadecimal, or no scheme carries the header byte.
    pub fn from_binary(epc_text: &str) -> EpcResult<Self> {
        let header_text = epc_text
            .get(0..2)
            .ok_or_else(|| EpcError::Format(format!("EpcCode is too short: {:?}", epc_text)))?;
        let header = u8::from_str_radix(header_text, 16)
            .map_err(|_| EpcError::Format(format!("Invalid hex digit: {:?}", header_text)))?;

        match TagScheme::from_header(header) {
            Some(TagScheme::Sgtin96) => Ok(Self::Sgtin96(Sgtin96Tag::from_binary(epc_text)?)),
            Some(TagScheme::Sgtin198) => Ok(Self::Sgtin198(Sgtin198Tag::from_binary(epc_text)?)),
            Some(TagScheme::Sscc96) => Ok(Self::Sscc96(Sscc96Tag::from_binary(epc_text)?)),
            None => Err(EpcError::Format(format!(
                "Invalid binary header value: 0x{:02X}",
                header
            ))),
        }
    }

    /// Parse a tag from its URI text.
    pub fn from_uri_str(uri: &str) -> EpcResult<Self> {
        Self::from_uri(&EpcUri::from_string(uri)?)
    }

    /// Create a tag from the specified URI.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the URI is not a tag URI and
    /// `EpcError::NotSupported` if no scheme carries its token.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        if uri.kind() != EpcUriKind::Tag {
            return Err(EpcError::Format("EPC uri type is invalid".to_string()));
        }

        match TagScheme::from_uri_token(uri.scheme()) {
            Some(TagScheme::Sgtin96) => Ok(Self::Sgtin96(Sgtin96Tag::from_uri(uri)?)),
            Some(TagScheme::Sgtin198) => Ok(Self::Sgtin198(Sgtin198Tag::from_uri(uri)?)),
            Some(TagScheme::Sscc96) => Ok(Self::Sscc96(Sscc96Tag::from_uri(uri)?)),
            None => Err(EpcError::NotSupported(format!(
                "EPC tag uri scheme is not supported: {}",
                uri.scheme()
            ))),
        }
    }

    /// The scheme of this tag.
    pub fn scheme(&self) -> TagScheme {
        match self {
            Self::Sgtin96(_) => TagScheme::Sgtin96,
            Self::Sgtin198(_) => TagScheme::Sgtin198,
            Self::Sscc96(_) => TagScheme::Sscc96,
        }
    }

    /// Convert to the tag URI representation.
    pub fn to_uri(&self) -> EpcUri {
        match self {
            Self::Sgtin96(tag) => tag.to_uri(),
            Self::Sgtin198(tag) => tag.to_uri(),
            Self::Sscc96(tag) => tag.to_uri(),
        }
    }

    /// Encode the tag into a bit buffer.
    pub fn to_bit_buffer(&self) -> EpcResult<BitBuffer> {
        match self {
            Self::Sgtin96(tag) => tag.to_bit_buffer(),
            Self::Sgtin198(tag) => tag.to_bit_buffer(),
            Self::Sscc96(tag) => tag.to_bit_buffer(),
        }
    }

    /// Encode the tag into its hexadecimal text form.
    pub fn to_binary(&self) -> EpcResult<String> {
        Ok(self.to_bit_buffer()?.to_hex())
    }

    /// The corresponding pure identity, without filter and partition.
    pub fn to_id(&self) -> EpcId {
        match self {
            Self::Sgtin96(tag) => EpcId::Sgtin(tag.to_id()),
            Self::Sgtin198(tag) => EpcId::Sgtin(tag.to_id()),
            Self::Sscc96(tag) => EpcId::Sscc(tag.to_id()),
        }
    }
}

impl FromStr for EpcTag {
    type Err = EpcError;

    fn from_str(s: &str) -> EpcResult<Self> {
        Self::from_uri_str(s)
    }
}

impl fmt::Display for EpcTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}
