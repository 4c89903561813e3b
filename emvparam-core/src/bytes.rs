//! Hex and byte-array helpers
//!
//! Configuration values arrive as hex strings; these helpers convert them
//! to bytes and back, and cover the small set of array operations the
//! record encoders need.

use crate::error::{EmvParamError, EmvParamResult};

/// Decode a hex string into bytes
///
/// Upper and lower case digits are accepted. Whitespace is not; callers
/// strip it first with [`strip_whitespace`].
///
/// # Error Handling
/// Returns `OddHexLength` when the digit count is odd and `InvalidHex`
/// when a non-hex character is present.
pub fn hex_to_bytes(s: &str) -> EmvParamResult<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(EmvParamError::OddHexLength(s.to_string(), s.len()));
    }
    hex::decode(s).map_err(|_| EmvParamError::InvalidHex(s.to_string()))
}

/// Encode bytes as an upper-case hex string without separators
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Bounds-checked sub-range `data[start..start + len]`
pub fn sub_bytes(data: &[u8], start: usize, len: usize) -> EmvParamResult<&[u8]> {
    let end = start.checked_add(len).filter(|&end| end <= data.len());
    match end {
        Some(end) => Ok(&data[start..end]),
        None => Err(EmvParamError::TruncatedData {
            offset: start,
            needed: len,
            available: data.len().saturating_sub(start),
        }),
    }
}

/// Concatenate any number of byte slices
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut result = Vec::with_capacity(total);
    for part in parts {
        result.extend_from_slice(part);
    }
    result
}

/// Byte-wise XOR of two equal-length arrays
pub fn xor(a: &[u8], b: &[u8]) -> EmvParamResult<Vec<u8>> {
    if a.len() != b.len() {
        return Err(EmvParamError::LengthMismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Remove every whitespace character from a configuration value
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("A0000000041010").unwrap(), vec![0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]);
        assert_eq!(hex_to_bytes("9f06").unwrap(), vec![0x9F, 0x06]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_to_bytes_odd_length() {
        let err = hex_to_bytes("ABC").unwrap_err();
        assert_eq!(err, EmvParamError::OddHexLength("ABC".to_string(), 3));
    }

    #[test]
    fn test_hex_to_bytes_invalid_digit() {
        assert!(matches!(hex_to_bytes("ZZ"), Err(EmvParamError::InvalidHex(_))));
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x9F, 0x1C, 0x08]), "9F1C08");
    }

    #[test]
    fn test_sub_bytes() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(sub_bytes(&data, 1, 3).unwrap(), &[2, 3, 4]);
        assert_eq!(sub_bytes(&data, 5, 0).unwrap(), &[] as &[u8]);
        assert!(matches!(
            sub_bytes(&data, 3, 3),
            Err(EmvParamError::TruncatedData { offset: 3, needed: 3, available: 2 })
        ));
    }

    #[test]
    fn test_concat_and_xor() {
        assert_eq!(concat(&[&[1, 2], &[], &[3]]), vec![1, 2, 3]);
        assert_eq!(xor(&[0xFF, 0x0F], &[0x0F, 0x0F]).unwrap(), vec![0xF0, 0x00]);
        assert_eq!(xor(&[1], &[1, 2]), Err(EmvParamError::LengthMismatch(1, 2)));
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" A0 00\n00\t04 "), "A0000004");
    }
}
