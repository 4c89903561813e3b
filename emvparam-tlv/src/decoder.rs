//! BER-TLV decoder for EMV parameter records
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use emvparam_tlv::decode_all;
//!
//! let list = decode_all(&[0x9A, 0x01, 0x01, 0x5A, 0x01, 0x03])?;
//! assert!(list.contains("5A"));
//! # Ok::<(), emvparam_core::EmvParamError>(())
//! ```

use emvparam_core::{sub_bytes, EmvParamResult};

use crate::element::TlvElement;
use crate::list::TlvList;
use crate::types::{TlvLength, TlvTag};

/// BER-TLV decoder
///
/// The decoder maintains a position that advances by the raw length of each
/// decoded element, so a buffer of concatenated elements is read in order.
/// Every read is bounds-checked; nothing is read past the end of the buffer.
pub struct TlvDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> TlvDecoder<'a> {
    /// Create a new decoder over `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Decode the element at the current position and advance past it
    pub fn decode_next(&mut self) -> EmvParamResult<TlvElement> {
        let element = decode_one(self.buffer, self.position)?;
        self.position += element.raw_bytes().len();
        Ok(element)
    }
}

impl Iterator for TlvDecoder<'_> {
    type Item = EmvParamResult<TlvElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_remaining() {
            return None;
        }
        let item = self.decode_next();
        if item.is_err() {
            // Stop after the first malformed element
            self.position = self.buffer.len();
        }
        Some(item)
    }
}

/// Decode one TLV element starting at `data[offset]`
///
/// # Decoding Process
/// 1. Tag: length by the continuation rule
/// 2. Length field: short form, or `0x80 | n` plus `n` big-endian bytes
/// 3. Value: `length` bytes, sliced together with tag and length into the
///    element's raw encoding
///
/// # Error Handling
/// Returns `TruncatedData` when the element extends past the end of `data`.
pub fn decode_one(data: &[u8], offset: usize) -> EmvParamResult<TlvElement> {
    let (tag, tag_len) = TlvTag::decode(data, offset)?;
    let (length, length_len) = TlvLength::decode(data, offset + tag_len)?;

    let value_len = length.value();
    let raw = sub_bytes(data, offset, tag_len + length_len + value_len)?;
    Ok(TlvElement::from_parts(raw.to_vec(), tag, value_len))
}

/// Decode a buffer of concatenated elements into a list
///
/// An empty buffer yields an empty list. Each element consumes at least
/// two bytes, so decoding always terminates.
pub fn decode_all(data: &[u8]) -> EmvParamResult<TlvList> {
    let mut list = TlvList::new();
    for element in TlvDecoder::new(data) {
        list.push(element?)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emvparam_core::EmvParamError;
    use crate::encoder::encode_one;

    #[test]
    fn test_decode_one_two_byte_tag() {
        let data = [0x9F, 0x06, 0x07, 0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10];
        let element = decode_one(&data, 0).unwrap();
        assert_eq!(element.tag(), "9F06");
        assert_eq!(element.length(), 7);
        assert_eq!(element.value(), &data[3..]);
        assert_eq!(element.raw_bytes(), &data[..]);
    }

    #[test]
    fn test_decode_one_at_offset() {
        let data = [0x9A, 0x01, 0x01, 0x9C, 0x01, 0x02];
        let element = decode_one(&data, 3).unwrap();
        assert_eq!(element.tag(), "9C");
        assert_eq!(element.value(), &[0x02]);
    }

    #[test]
    fn test_decode_one_long_length() {
        let mut data = vec![0xDF, 0x81, 0x31, 0x81, 0x80];
        data.extend(std::iter::repeat(0x55).take(128));
        let element = decode_one(&data, 0).unwrap();
        assert_eq!(element.tag(), "DF8131");
        assert_eq!(element.length(), 128);
        assert_eq!(element.raw_bytes().len(), 3 + 2 + 128);
    }

    #[test]
    fn test_decode_one_truncated_value() {
        let data = [0x5A, 0x05, 0x01, 0x02];
        assert_eq!(
            decode_one(&data, 0),
            Err(EmvParamError::TruncatedData { offset: 0, needed: 7, available: 4 })
        );
    }

    #[test]
    fn test_decode_one_truncated_length() {
        assert!(matches!(decode_one(&[0x9F, 0x06], 0), Err(EmvParamError::TruncatedData { .. })));
        assert!(matches!(decode_one(&[0x5A, 0x01, 0x00], 3), Err(EmvParamError::TruncatedData { .. })));
    }

    #[test]
    fn test_decode_all() {
        let data = [0x9A, 0x01, 0x01, 0x9C, 0x01, 0x02, 0x5A, 0x01, 0x03];
        let list = decode_all(&data).unwrap();
        let tags: Vec<String> = list.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["9A", "9C", "5A"]);
        assert_eq!(list.to_binary(), data.to_vec());
    }

    #[test]
    fn test_decode_all_empty() {
        assert!(decode_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_all_trailing_garbage() {
        let data = [0x5A, 0x01, 0x03, 0x9F];
        assert!(matches!(decode_all(&data), Err(EmvParamError::TruncatedData { offset: 3, .. })));
    }

    #[test]
    fn test_decoder_iterator_stops_on_error() {
        let data = [0x5A, 0x01, 0x03, 0x5A, 0x09];
        let mut decoder = TlvDecoder::new(&data);
        assert!(decoder.next().unwrap().is_ok());
        assert_eq!(decoder.position(), 3);
        assert!(decoder.next().unwrap().is_err());
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_round_trip_sizes() {
        for (tag, len) in [(&[0x5A][..], 0usize), (&[0x9F, 0x1C][..], 127), (&[0xDF, 0x81, 0x20][..], 128), (&[0x1F, 0x46][..], 256)] {
            let value = vec![0xA5; len];
            let encoded = encode_one(tag, &value).unwrap();
            let decoded = decode_one(encoded.raw_bytes(), 0).unwrap();
            assert_eq!(decoded, encoded);
            assert_eq!(decoded.value(), &value[..]);
        }
    }
}
