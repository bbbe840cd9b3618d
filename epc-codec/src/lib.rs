//! Field codecs for GS1 EPC binary encodings
//!
//! This crate provides the partition-table-driven variable-width integer
//! codec, the 7-bit escaped string codec, and the GTIN check digit
//! helper. The tag layer composes these over a `BitBuffer` according to
//! each scheme's field layout.

pub mod gs1_string;
pub mod gtin;
pub mod partition;

pub use gs1_string::{decode_string, encode_string};
pub use partition::{PartitionEntry, decode_partition, encode_partition, partition_for_prefix_len};
