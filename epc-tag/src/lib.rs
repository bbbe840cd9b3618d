//! EPC tag schemes, URIs and pure identities
//!
//! This crate binds the field codecs to the supported tag schemes
//! (SGTIN-96, SGTIN-198, SSCC-96). `EpcTag` and `EpcId` dispatch over
//! the binary header byte or the URI scheme token; the per-scheme types
//! expose the structured fields, the binary text form and the URI form.

pub mod id;
pub mod scheme;
pub mod sgtin;
pub mod sgtin96;
pub mod sgtin198;
pub mod sscc;
pub mod sscc96;
pub mod tag;
pub mod uri;

mod fields;

pub use id::EpcId;
pub use scheme::TagScheme;
pub use sgtin::{Sgtin, SgtinId};
pub use sgtin96::Sgtin96Tag;
pub use sgtin198::Sgtin198Tag;
pub use sscc::{Sscc, SsccId};
pub use sscc96::Sscc96Tag;
pub use tag::EpcTag;
pub use uri::{EpcUri, EpcUriKind};
