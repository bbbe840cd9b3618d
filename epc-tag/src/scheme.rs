//! Tag scheme registry
//!
//! Binds each supported tag scheme to its binary header byte, total bit
//! width and URI scheme token. The set of schemes is closed at compile
//! time, so dispatch over it is an exhaustive match and the tables are
//! safe for unrestricted concurrent reads.

use serde::{Deserialize, Serialize};

/// The supported EPC tag schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagScheme {
    Sgtin96,
    Sgtin198,
    Sscc96,
}

impl TagScheme {
    /// The header byte identifying this scheme in binary encodings.
    pub const fn binary_header(self) -> u8 {
        match self {
            TagScheme::Sgtin96 => 0x30,
            TagScheme::Sgtin198 => 0x36,
            TagScheme::Sscc96 => 0x31,
        }
    }

    /// Total bit width of the scheme's binary encoding.
    pub const fn total_bits(self) -> usize {
        match self {
            TagScheme::Sgtin96 => 96,
            TagScheme::Sgtin198 => 198,
            TagScheme::Sscc96 => 96,
        }
    }

    /// Exact length of the scheme's hexadecimal text form.
    ///
    /// The bit width is padded up to a multiple of 16 before rendering,
    /// so SGTIN-198 occupies 52 hex digits.
    pub const fn hex_len(self) -> usize {
        (self.total_bits() + 15) / 16 * 4
    }

    /// The scheme token used in tag URIs, e.g. `sgtin-96`.
    pub const fn uri_token(self) -> &'static str {
        match self {
            TagScheme::Sgtin96 => "sgtin-96",
            TagScheme::Sgtin198 => "sgtin-198",
            TagScheme::Sscc96 => "sscc-96",
        }
    }

    /// Look up a scheme by its binary header byte.
    pub fn from_header(header: u8) -> Option<Self> {
        match header {
            0x30 => Some(TagScheme::Sgtin96),
            0x36 => Some(TagScheme::Sgtin198),
            0x31 => Some(TagScheme::Sscc96),
            _ => None,
        }
    }

    /// Look up a scheme by its tag URI token.
    pub fn from_uri_token(token: &str) -> Option<Self> {
        match token {
            "sgtin-96" => Some(TagScheme::Sgtin96),
            "sgtin-198" => Some(TagScheme::Sgtin198),
            "sscc-96" => Some(TagScheme::Sscc96),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup() {
        assert_eq!(TagScheme::from_header(0x30), Some(TagScheme::Sgtin96));
        assert_eq!(TagScheme::from_header(0x36), Some(TagScheme::Sgtin198));
        assert_eq!(TagScheme::from_header(0x31), Some(TagScheme::Sscc96));
        assert_eq!(TagScheme::from_header(0x35), None);
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(
            TagScheme::from_uri_token("sgtin-198"),
            Some(TagScheme::Sgtin198)
        );
        assert_eq!(TagScheme::from_uri_token("sgtin"), None);
    }

    #[test]
    fn test_hex_len() {
        assert_eq!(TagScheme::Sgtin96.hex_len(), 24);
        assert_eq!(TagScheme::Sscc96.hex_len(), 24);
        assert_eq!(TagScheme::Sgtin198.hex_len(), 52);
    }
}
