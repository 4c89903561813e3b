//! A single decoded or composed TLV element

use crate::types::TlvTag;

/// One BER-TLV element
///
/// The element keeps its complete encoding (`raw`); tag, length and value
/// are views over it. It is immutable once built:
///
/// - `raw.len() == tag_len + length_field_len + length`
/// - `value() == &raw[raw.len() - length..]`
///
/// `TlvElement::default()` is the unconstructed element with no raw bytes;
/// [`TlvList::push`](crate::TlvList::push) rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvElement {
    raw: Vec<u8>,
    tag: TlvTag,
    length: usize,
}

impl TlvElement {
    pub(crate) fn from_parts(raw: Vec<u8>, tag: TlvTag, length: usize) -> Self {
        debug_assert!(raw.len() >= tag.len() + 1 + length);
        Self { raw, tag, length }
    }

    /// Complete encoding: tag, length field and value
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Tag as an upper-case hex string, e.g. `"9F06"`
    pub fn tag(&self) -> String {
        self.tag.to_hex()
    }

    pub fn tag_bytes(&self) -> &[u8] {
        self.tag.as_bytes()
    }

    /// Value length in bytes
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn value(&self) -> &[u8] {
        &self.raw[self.raw.len() - self.length..]
    }

    /// Whether this element carries an encoding
    pub fn is_built(&self) -> bool {
        !self.raw.is_empty()
    }

    /// Case-insensitive comparison against a hex tag such as `"9f06"`
    pub fn has_tag(&self, tag: &str) -> bool {
        !self.raw.is_empty() && self.tag.to_hex().eq_ignore_ascii_case(tag)
    }
}
