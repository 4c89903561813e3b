//! BER-TLV encoding types (Tag, Length)

use emvparam_core::{bytes_to_hex, hex_to_bytes, EmvParamError, EmvParamResult};

/// Longest tag accepted by the decoder
pub const MAX_TAG_LEN: usize = 4;

/// Largest value length a record field may carry
pub const MAX_VALUE_LEN: usize = 0xFFFF;

/// BER-TLV Tag
///
/// An EMV tag is 1 to 4 bytes long. Its length is never declared separately
/// but follows from the bytes themselves:
///
/// ```text
/// First byte:      x x x T T T T T   (TTTTT != 11111: single-byte tag)
/// First byte:      x x x 1 1 1 1 1   (subsequent bytes follow)
/// Following bytes: 1 t t t t t t t   (more bytes follow)
///                  0 t t t t t t t   (last tag byte)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TlvTag {
    bytes: Vec<u8>,
}

impl TlvTag {
    /// Build a tag from its encoded bytes
    ///
    /// # Error Handling
    /// Returns `InvalidTag` if the bytes are not exactly one well-formed tag.
    pub fn from_bytes(bytes: &[u8]) -> EmvParamResult<Self> {
        let (tag, consumed) = Self::decode(bytes, 0).map_err(|_| {
            EmvParamError::InvalidTag(format!("incomplete tag {}", bytes_to_hex(bytes)))
        })?;
        if consumed != bytes.len() {
            return Err(EmvParamError::InvalidTag(format!(
                "{} declares a {}-byte tag",
                bytes_to_hex(bytes),
                consumed
            )));
        }
        Ok(tag)
    }

    /// Build a tag from a hex string such as `"9F06"`
    pub fn from_hex(tag: &str) -> EmvParamResult<Self> {
        let bytes = hex_to_bytes(tag)
            .map_err(|_| EmvParamError::InvalidTag(format!("not a hex tag: {:?}", tag)))?;
        Self::from_bytes(&bytes)
    }

    /// Encoded tag bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of tag bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Upper-case hex form, e.g. `"9F06"`
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.bytes)
    }

    /// Decode a tag starting at `data[offset]`
    ///
    /// # Returns
    /// Returns `Ok((TlvTag, bytes_consumed))` if successful
    ///
    /// # Error Handling
    /// Returns `TruncatedData` if the tag runs past the end of `data`,
    /// `InvalidTag` if it is longer than [`MAX_TAG_LEN`].
    pub fn decode(data: &[u8], offset: usize) -> EmvParamResult<(Self, usize)> {
        let truncated = |needed: usize| EmvParamError::TruncatedData {
            offset,
            needed,
            available: data.len().saturating_sub(offset),
        };

        let first_byte = *data.get(offset).ok_or_else(|| truncated(1))?;
        let mut len = 1;

        if first_byte & 0x1F == 0x1F {
            // Subsequent bytes: continue while bit 8 is set
            loop {
                let byte = *data.get(offset + len).ok_or_else(|| truncated(len + 1))?;
                len += 1;
                if byte & 0x80 == 0 {
                    break;
                }
                if len >= MAX_TAG_LEN {
                    return Err(EmvParamError::InvalidTag(format!(
                        "tag at offset {} longer than {} bytes",
                        offset, MAX_TAG_LEN
                    )));
                }
            }
        }

        Ok((
            Self {
                bytes: data[offset..offset + len].to_vec(),
            },
            len,
        ))
    }
}

/// BER-TLV Length encoding
///
/// - **Short form**: lengths 0-127 in one byte with bit 8 clear
/// - **Long form**: `0x80 | n` followed by `n` big-endian length bytes;
///   EMV records use `0x81 LL` and `0x82 LL LL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlvLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length > 127, encoded with length-of-length
    Long(usize),
}

impl TlvLength {
    /// Create a new length, choosing short or long form from the value
    pub fn new(length: usize) -> Self {
        if length < 128 {
            TlvLength::Short(length as u8)
        } else {
            TlvLength::Long(length)
        }
    }

    /// Get the length value
    pub fn value(&self) -> usize {
        match self {
            TlvLength::Short(l) => *l as usize,
            TlvLength::Long(l) => *l,
        }
    }

    /// Number of bytes the encoded length occupies
    pub fn encoded_len(&self) -> usize {
        match self {
            TlvLength::Short(_) => 1,
            TlvLength::Long(length) => 1 + Self::long_form_bytes(*length),
        }
    }

    fn long_form_bytes(length: usize) -> usize {
        let mut num_bytes = 0;
        let mut temp = length;
        while temp > 0 {
            num_bytes += 1;
            temp >>= 8;
        }
        num_bytes.max(1)
    }

    /// Encode length to bytes
    pub fn encode(&self) -> Vec<u8> {
        match self {
            TlvLength::Short(length) => vec![*length],
            TlvLength::Long(length) => {
                let num_bytes = Self::long_form_bytes(*length);
                let mut result = vec![0x80 | (num_bytes as u8)];
                for i in (0..num_bytes).rev() {
                    result.push(((*length >> (i * 8)) & 0xFF) as u8);
                }
                result
            }
        }
    }

    /// Decode a length field starting at `data[offset]`
    ///
    /// # Returns
    /// Returns `Ok((TlvLength, bytes_consumed))` if successful
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is too short (`TruncatedData`)
    /// - Indefinite length or more than 4 length bytes (`InvalidLength`)
    pub fn decode(data: &[u8], offset: usize) -> EmvParamResult<(Self, usize)> {
        let available = data.len().saturating_sub(offset);
        let first_byte = *data.get(offset).ok_or(EmvParamError::TruncatedData {
            offset,
            needed: 1,
            available,
        })?;

        if first_byte & 0x80 == 0 {
            return Ok((TlvLength::Short(first_byte), 1));
        }

        let num_bytes = (first_byte & 0x7F) as usize;
        if num_bytes == 0 {
            return Err(EmvParamError::InvalidLength(format!(
                "indefinite length at offset {}",
                offset
            )));
        }
        if num_bytes > 4 {
            return Err(EmvParamError::InvalidLength(format!(
                "{} length bytes at offset {} (max 4)",
                num_bytes, offset
            )));
        }
        if available < 1 + num_bytes {
            return Err(EmvParamError::TruncatedData {
                offset,
                needed: 1 + num_bytes,
                available,
            });
        }

        let length = data[offset + 1..offset + 1 + num_bytes]
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize);

        Ok((TlvLength::Long(length), 1 + num_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_single_byte() {
        let (tag, consumed) = TlvTag::decode(&[0x5A, 0x01, 0x03], 0).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(tag.to_hex(), "5A");
    }

    #[test]
    fn test_tag_two_byte() {
        let (tag, consumed) = TlvTag::decode(&[0x9F, 0x06, 0x07], 0).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(tag.to_hex(), "9F06");
    }

    #[test]
    fn test_tag_three_byte() {
        let (tag, consumed) = TlvTag::decode(&[0x00, 0xDF, 0x81, 0x20, 0x06], 1).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(tag.to_hex(), "DF8120");
    }

    #[test]
    fn test_tag_truncated() {
        assert!(matches!(
            TlvTag::decode(&[0x9F], 0),
            Err(EmvParamError::TruncatedData { offset: 0, needed: 2, available: 1 })
        ));
        assert!(TlvTag::decode(&[0xDF, 0x81], 0).is_err());
    }

    #[test]
    fn test_tag_from_bytes_rejects_extra_bytes() {
        assert!(TlvTag::from_bytes(&[0x9F, 0x06]).is_ok());
        assert!(matches!(TlvTag::from_bytes(&[0x5A, 0x01]), Err(EmvParamError::InvalidTag(_))));
        assert!(matches!(TlvTag::from_bytes(&[0x9F]), Err(EmvParamError::InvalidTag(_))));
    }

    #[test]
    fn test_tag_from_hex() {
        assert_eq!(TlvTag::from_hex("df8121").unwrap().as_bytes(), &[0xDF, 0x81, 0x21]);
        assert!(TlvTag::from_hex("9F0").is_err());
    }

    #[test]
    fn test_length_boundaries() {
        assert_eq!(TlvLength::new(127).encode(), vec![0x7F]);
        assert_eq!(TlvLength::new(128).encode(), vec![0x81, 0x80]);
        assert_eq!(TlvLength::new(255).encode(), vec![0x81, 0xFF]);
        assert_eq!(TlvLength::new(256).encode(), vec![0x82, 0x01, 0x00]);
        assert_eq!(TlvLength::new(65535).encode(), vec![0x82, 0xFF, 0xFF]);
        assert_eq!(TlvLength::new(256).encoded_len(), 3);
    }

    #[test]
    fn test_length_decode() {
        assert_eq!(TlvLength::decode(&[0x7F], 0).unwrap(), (TlvLength::Short(127), 1));
        assert_eq!(TlvLength::decode(&[0x81, 0x80], 0).unwrap(), (TlvLength::Long(128), 2));
        assert_eq!(TlvLength::decode(&[0x82, 0x01, 0x00], 0).unwrap(), (TlvLength::Long(256), 3));
    }

    #[test]
    fn test_length_decode_errors() {
        assert!(matches!(TlvLength::decode(&[0x80], 0), Err(EmvParamError::InvalidLength(_))));
        assert!(matches!(TlvLength::decode(&[0x85, 0, 0, 0, 0, 1], 0), Err(EmvParamError::InvalidLength(_))));
        assert!(matches!(TlvLength::decode(&[0x82, 0x01], 0), Err(EmvParamError::TruncatedData { .. })));
        assert!(matches!(TlvLength::decode(&[], 0), Err(EmvParamError::TruncatedData { .. })));
    }
}
