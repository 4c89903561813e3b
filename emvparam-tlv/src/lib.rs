//! BER-TLV encoder and decoder for EMV kernel parameter records
//!
//! EMV kernels take their configuration as concatenated BER-TLV elements:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! - One byte when the low 5 bits of the first byte are not `11111`
//! - Otherwise further bytes follow; every byte with bit 8 set announces
//!   one more, the first byte with bit 8 clear ends the tag
//!
//! ## Length Encoding
//!
//! - **Short form** (1 byte): lengths 0-127
//! - **Long form**: `0x81 LL` for 128-255, `0x82 LL LL` for 256-65535
//!
//! # Implementation Notes
//!
//! 1. Every decode is bounds-checked and reports `TruncatedData` instead of
//!    reading past the input.
//! 2. Every append is capacity-checked and reports `BufferOverflow` before
//!    writing, so a record never holds a partial element.
//! 3. Indefinite lengths are rejected.

pub mod types;
pub mod element;
pub mod decoder;
pub mod encoder;
pub mod buffer;
pub mod list;

pub use types::{TlvLength, TlvTag, MAX_TAG_LEN, MAX_VALUE_LEN};
pub use element::TlvElement;
pub use decoder::{decode_all, decode_one, TlvDecoder};
pub use encoder::{append_tlv, encode_one};
pub use buffer::{RecordBuffer, DEFAULT_RECORD_CAPACITY};
pub use list::TlvList;
