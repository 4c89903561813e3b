//! BER-TLV encoder for EMV parameter records
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use emvparam_tlv::{append_tlv, encode_one};
//!
//! let element = encode_one(&[0x9F, 0x1C], b"12345678")?;
//! assert_eq!(element.raw_bytes()[2], 8);
//!
//! let mut buffer = [0u8; 16];
//! let mut cursor = 0;
//! append_tlv(&mut buffer, &mut cursor, &[0x5A], &[0x47, 0x61])?;
//! assert_eq!(cursor, 4);
//! # Ok::<(), emvparam_core::EmvParamError>(())
//! ```

use emvparam_core::{concat, EmvParamError, EmvParamResult};

use crate::element::TlvElement;
use crate::types::{TlvLength, TlvTag, MAX_VALUE_LEN};

/// Validate `tag` and pick the length field for `value`
fn prepare(tag: &[u8], value: &[u8]) -> EmvParamResult<(TlvTag, TlvLength)> {
    let tag = TlvTag::from_bytes(tag)?;
    if value.len() > MAX_VALUE_LEN {
        return Err(EmvParamError::ValueTooLong(value.len()));
    }
    Ok((tag, TlvLength::new(value.len())))
}

/// Compose a TLV element from a tag and a value
///
/// # Encoding Process
/// 1. Tag bytes as given; their length follows from the continuation rule
///    and must match the slice length
/// 2. Length field: short form below 128, `0x81 LL` up to 255,
///    `0x82 LL LL` up to 65535
/// 3. Value bytes
///
/// # Error Handling
/// Returns `InvalidTag` for a malformed tag and `ValueTooLong` for values of
/// 65536 bytes or more.
pub fn encode_one(tag: &[u8], value: &[u8]) -> EmvParamResult<TlvElement> {
    let (tag, length) = prepare(tag, value)?;

    let raw = concat(&[tag.as_bytes(), length.encode().as_slice(), value]);

    Ok(TlvElement::from_parts(raw, tag, value.len()))
}

/// Write one TLV element into `dest` at `*cursor`
///
/// On success `*cursor` advances by the number of bytes written.
///
/// # Error Handling
/// Returns `BufferOverflow` if the element does not fit in
/// `dest[*cursor..]`. The check happens before any byte is written, so a
/// failed call leaves `dest` and `*cursor` untouched.
pub fn append_tlv(dest: &mut [u8], cursor: &mut usize, tag: &[u8], value: &[u8]) -> EmvParamResult<()> {
    let (tag, length) = prepare(tag, value)?;
    let length_bytes = length.encode();
    let total = tag.len() + length_bytes.len() + value.len();

    let start = *cursor;
    if start + total > dest.len() {
        return Err(EmvParamError::BufferOverflow {
            offset: start,
            needed: total,
            capacity: dest.len(),
        });
    }

    let mut pos = start;
    for part in [tag.as_bytes(), &length_bytes[..], value] {
        dest[pos..pos + part.len()].copy_from_slice(part);
        pos += part.len();
    }
    *cursor = pos;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_one_simple() {
        let element = encode_one(&[0x9F, 0x06], &[0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]).unwrap();
        assert_eq!(
            element.raw_bytes(),
            &[0x9F, 0x06, 0x07, 0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]
        );
        assert_eq!(element.tag(), "9F06");
        assert_eq!(element.length(), 7);
    }

    #[test]
    fn test_encode_one_length_boundaries() {
        let element = encode_one(&[0x5A], &[0u8; 127]).unwrap();
        assert_eq!(&element.raw_bytes()[1..2], &[0x7F]);

        let element = encode_one(&[0x5A], &[0u8; 128]).unwrap();
        assert_eq!(&element.raw_bytes()[1..3], &[0x81, 0x80]);

        let element = encode_one(&[0x5A], &[0u8; 256]).unwrap();
        assert_eq!(&element.raw_bytes()[1..4], &[0x82, 0x01, 0x00]);
        assert_eq!(element.value().len(), 256);
    }

    #[test]
    fn test_encode_one_rejects_bad_input() {
        assert!(matches!(encode_one(&[0x9F], &[1]), Err(EmvParamError::InvalidTag(_))));
        assert!(matches!(encode_one(&[0x5A, 0x5A], &[1]), Err(EmvParamError::InvalidTag(_))));
        assert_eq!(encode_one(&[0x5A], &vec![0u8; 65536]), Err(EmvParamError::ValueTooLong(65536)));
    }

    #[test]
    fn test_append_tlv_advances_cursor() {
        let mut buffer = [0u8; 32];
        let mut cursor = 0;
        append_tlv(&mut buffer, &mut cursor, &[0x9F, 0x1C], b"00000123").unwrap();
        append_tlv(&mut buffer, &mut cursor, &[0x1F, 0x60], &[0x02]).unwrap();
        assert_eq!(cursor, 11 + 4);
        assert_eq!(&buffer[11..15], &[0x1F, 0x60, 0x01, 0x02]);
    }

    #[test]
    fn test_append_tlv_overflow_leaves_buffer_untouched() {
        let mut buffer = [0u8; 8];
        let mut cursor = 3;
        let err = append_tlv(&mut buffer, &mut cursor, &[0x5A], &[0xFF; 4]).unwrap_err();
        assert_eq!(err, EmvParamError::BufferOverflow { offset: 3, needed: 6, capacity: 8 });
        assert_eq!(cursor, 3);
        assert_eq!(buffer, [0u8; 8]);
    }

    #[test]
    fn test_append_tlv_exact_fit() {
        let mut buffer = [0u8; 6];
        let mut cursor = 0;
        append_tlv(&mut buffer, &mut cursor, &[0x5A], &[1, 2, 3, 4]).unwrap();
        assert_eq!(cursor, 6);
        assert_eq!(buffer, [0x5A, 0x04, 1, 2, 3, 4]);
    }
}
