//! EPC URI value object
//!
//! An EPC URI has exactly five colon-separated segments:
//! `urn:epc:<id|tag>:<scheme>:<part1>.<part2>...`. The last segment is a
//! dot-separated list whose count and meaning are scheme-specific.

use epc_core::{EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Prefix common to all EPC URIs
pub const EPC_PREFIX: &str = "urn:epc";

/// URI kind: pure identity or tag encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpcUriKind {
    Id,
    Tag,
}

impl fmt::Display for EpcUriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpcUriKind::Id => write!(f, "id"),
            EpcUriKind::Tag => write!(f, "tag"),
        }
    }
}

/// An immutable EPC URI.
///
/// Equality and hashing are defined by the canonical string form, so two
/// URIs are equal exactly when their text representations are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpcUri {
    kind: EpcUriKind,
    scheme: String,
    parts: Vec<String>,
}

impl EpcUri {
    pub fn new(kind: EpcUriKind, scheme: &str, parts: Vec<String>) -> Self {
        Self {
            kind,
            scheme: scheme.to_string(),
            parts,
        }
    }

    /// The URI kind (id or tag).
    pub fn kind(&self) -> EpcUriKind {
        self.kind
    }

    /// The URI scheme token, e.g. `sgtin-96`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The scheme-specific parts.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Parse an EPC URI from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the text does not have five colon
    /// segments, does not start with `urn:epc:`, or carries a kind token
    /// other than `id` or `tag`.
    pub fn from_string(uri: &str) -> EpcResult<Self> {
        let segments: Vec<&str> = uri.split(':').collect();
        if segments.len() != 5 {
            return Err(EpcError::Format(
                "URI must have the format 'urn:epc:<id|tag>:<scheme>:<part1>[.<part2>]...'"
                    .to_string(),
            ));
        }
        if segments[0] != "urn" || segments[1] != "epc" {
            return Err(EpcError::Format(
                "URI must start with 'urn:epc:'".to_string(),
            ));
        }

        let kind = match segments[2] {
            "id" => EpcUriKind::Id,
            "tag" => EpcUriKind::Tag,
            other => {
                return Err(EpcError::Format(format!(
                    "EPC URI type is invalid (must be 'id' or 'tag'): {}",
                    other
                )));
            }
        };

        let parts = segments[4].split('.').map(str::to_string).collect();
        Ok(Self::new(kind, segments[3], parts))
    }

    /// Ensure the URI is a tag URI with the expected scheme and part count.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` when a criterion does not hold.
    pub fn expect_tag(&self, scheme: &str, part_count: usize) -> EpcResult<()> {
        if self.kind != EpcUriKind::Tag {
            return Err(EpcError::Format("EPC uri type is invalid".to_string()));
        }
        if self.scheme != scheme {
            return Err(EpcError::Format(format!(
                "EPC tag uri scheme is invalid (expected: {}, found: {})",
                scheme, self.scheme
            )));
        }
        self.expect_part_count(part_count)
    }

    /// Ensure the URI is an id URI with the expected scheme and part count.
    pub fn expect_id(&self, scheme: &str, part_count: usize) -> EpcResult<()> {
        if self.kind != EpcUriKind::Id {
            return Err(EpcError::Format("EPC uri type is invalid".to_string()));
        }
        if self.scheme != scheme {
            return Err(EpcError::Format(format!(
                "EPC id uri scheme is invalid (expected: {}, found: {})",
                scheme, self.scheme
            )));
        }
        self.expect_part_count(part_count)
    }

    fn expect_part_count(&self, part_count: usize) -> EpcResult<()> {
        if self.parts.len() != part_count {
            return Err(EpcError::Format(format!(
                "EPC {} uri has invalid number of parts (expected {}, found {})",
                self.scheme,
                part_count,
                self.parts.len()
            )));
        }
        Ok(())
    }
}

impl FromStr for EpcUri {
    type Err = EpcError;

    fn from_str(s: &str) -> EpcResult<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for EpcUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            EPC_PREFIX,
            self.kind,
            self.scheme,
            self.parts.join(".")
        )
    }
}

impl PartialEq for EpcUri {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for EpcUri {}

impl Hash for EpcUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string_is_parsable_by_from_string() {
        let uri = EpcUri::new(
            EpcUriKind::Tag,
            "sgtin-96",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        );
        let parsed = EpcUri::from_string(&uri.to_string()).unwrap();
        assert_eq!(uri, parsed);
    }

    #[test]
    fn test_from_string_fields() {
        let uri = EpcUri::from_string("urn:epc:tag:sgtin-96:1.311112347.0987.1").unwrap();
        assert_eq!(uri.kind(), EpcUriKind::Tag);
        assert_eq!(uri.scheme(), "sgtin-96");
        assert_eq!(uri.parts(), ["1", "311112347", "0987", "1"]);
    }

    #[test]
    fn test_from_string_rejects_wrong_segment_count() {
        assert!(EpcUri::from_string("urn:epc:tag:sgtin-96").is_err());
        assert!(EpcUri::from_string("urn:epc:tag:sgtin-96:1.2:extra").is_err());
    }

    #[test]
    fn test_from_string_rejects_wrong_prefix() {
        assert!(EpcUri::from_string("urn:x:tag:sgtin-96:1.2.3.4").is_err());
        assert!(EpcUri::from_string("epc:urn:tag:sgtin-96:1.2.3.4").is_err());
    }

    #[test]
    fn test_from_string_rejects_unknown_kind() {
        assert!(EpcUri::from_string("urn:epc:raw:sgtin-96:1.2.3.4").is_err());
    }

    #[test]
    fn test_expect_tag() {
        let uri = EpcUri::from_string("urn:epc:tag:sscc-96:2.348338.00000000001").unwrap();
        assert!(uri.expect_tag("sscc-96", 3).is_ok());
        assert!(uri.expect_tag("sscc-96", 4).is_err());
        assert!(uri.expect_tag("sgtin-96", 3).is_err());
        assert!(uri.expect_id("sscc-96", 3).is_err());
    }
}
