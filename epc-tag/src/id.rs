//! EPC pure identity dispatch
//!
//! `EpcId` routes pure identity URIs to the matching identity type. Pure
//! identities carry no filter or partition; they are derived from tags
//! via `EpcTag::to_id` or parsed from `urn:epc:id:` URIs directly.

use crate::sgtin::SgtinId;
use crate::sscc::SsccId;
use crate::uri::{EpcUri, EpcUriKind};
use epc_core::{EpcError, EpcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pure EPC identity of any supported scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpcId {
    Sgtin(SgtinId),
    Sscc(SsccId),
}

impl EpcId {
    /// Parse an identity from its URI text.
    pub fn from_uri_str(uri: &str) -> EpcResult<Self> {
        Self::from_uri(&EpcUri::from_string(uri)?)
    }

    /// Create an identity from the specified URI.
    ///
    /// # Errors
    ///
    /// Returns `EpcError::Format` if the URI is not an id URI and
    /// `EpcError::NotSupported` if no identity scheme carries its token.
    pub fn from_uri(uri: &EpcUri) -> EpcResult<Self> {
        if uri.kind() != EpcUriKind::Id {
            return Err(EpcError::Format("EPC uri type is invalid".to_string()));
        }

        match uri.scheme() {
            SgtinId::SCHEME => Ok(Self::Sgtin(SgtinId::from_uri(uri)?)),
            SsccId::SCHEME => Ok(Self::Sscc(SsccId::from_uri(uri)?)),
            other => Err(EpcError::NotSupported(format!(
                "EPC id uri scheme is not supported: {}",
                other
            ))),
        }
    }

    /// Convert to the id URI representation.
    pub fn to_uri(&self) -> EpcUri {
        match self {
            Self::Sgtin(id) => id.to_uri(),
            Self::Sscc(id) => id.to_uri(),
        }
    }
}

impl FromStr for EpcId {
    type Err = EpcError;

    fn from_str(s: &str) -> EpcResult<Self> {
        Self::from_uri_str(s)
    }
}

impl fmt::Display for EpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_dispatch() {
        let id = EpcId::from_uri_str("urn:epc:id:sgtin:311112347.0987.1").unwrap();
        assert!(matches!(id, EpcId::Sgtin(_)));

        let id = EpcId::from_uri_str("urn:epc:id:sscc:348338.00000000001").unwrap();
        assert!(matches!(id, EpcId::Sscc(_)));
    }

    #[test]
    fn test_uri_dispatch_rejects_unknown_scheme() {
        let result = EpcId::from_uri_str("urn:epc:id:grai:311112347.0987.1");
        assert!(matches!(result, Err(EpcError::NotSupported(_))));
    }

    #[test]
    fn test_uri_dispatch_rejects_tag_uri() {
        let result = EpcId::from_uri_str("urn:epc:tag:sgtin-96:1.311112347.0987.1");
        assert!(matches!(result, Err(EpcError::Format(_))));
    }

    #[test]
    fn test_round_trip_through_display() {
        let uri = "urn:epc:id:sscc:348338.00000000001";
        let id: EpcId = uri.parse().unwrap();
        assert_eq!(id.to_string(), uri);
    }
}
