//! Core types and utilities for GS1 EPC tag encoding
//!
//! This crate provides the error taxonomy and the bit-addressable buffer
//! used throughout the EPC binary codec implementation.

pub mod bit_buffer;
pub mod error;

pub use bit_buffer::{BitBuffer, decode_hex_digit};
pub use error::{EpcError, EpcResult};
