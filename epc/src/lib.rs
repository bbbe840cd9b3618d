//! epc - Rust implementation of the GS1 EPC tag data standard
//!
//! This library converts between the binary, tag URI and pure identity
//! representations of GS1 Electronic Product Codes.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `epc-core`: Error handling and the bit-addressable buffer
//! - `epc-codec`: Partition, 7-bit string and GTIN check digit codecs
//! - `epc-tag`: Tag schemes, URIs and pure identities
//!
//! # Supported schemes
//!
//! - SGTIN-96 (header 0x30, 96 bits)
//! - SGTIN-198 (header 0x36, 198 bits)
//! - SSCC-96 (header 0x31, 96 bits)
//!
//! # Usage
//!
//! ```no_run
//! use epc::EpcTag;
//!
//! let tag = EpcTag::from_binary("302D28B329B0F6C000000001").unwrap();
//! println!("{}", tag.to_uri());
//! println!("{}", tag.to_id());
//! ```

// Re-export core types
pub use epc_core::{BitBuffer, EpcError, EpcResult};

// Re-export the tag API
pub use epc_tag::{
    EpcId, EpcTag, EpcUri, EpcUriKind, Sgtin, Sgtin96Tag, Sgtin198Tag, SgtinId, Sscc, Sscc96Tag,
    SsccId, TagScheme,
};

// Re-export the field codecs
pub mod codec {
    pub use epc_codec::*;
}
