//! Core types and utilities for EMV kernel parameter encoding
//!
//! This crate provides the error taxonomy and the hex/byte helpers
//! used throughout the emvparam implementation.

pub mod error;
pub mod bytes;

pub use error::{EmvParamError, EmvParamResult};
pub use bytes::{bytes_to_hex, concat, hex_to_bytes, strip_whitespace, sub_bytes, xor};
