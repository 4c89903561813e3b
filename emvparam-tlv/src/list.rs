//! Ordered, tag-searchable TLV element list

use emvparam_core::{EmvParamError, EmvParamResult};

use crate::element::TlvElement;

/// An ordered sequence of TLV elements
///
/// Insertion order is kept for re-serialization. Lookups scan in order and
/// return the first match; tags are compared case-insensitively as hex
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvList {
    elements: Vec<TlvElement>,
}

impl TlvList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element
    ///
    /// # Error Handling
    /// Returns `InvalidElement` if the element has no raw bytes.
    pub fn push(&mut self, element: TlvElement) -> EmvParamResult<()> {
        if !element.is_built() {
            return Err(EmvParamError::InvalidElement(
                "element has no raw bytes".to_string(),
            ));
        }
        self.elements.push(element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TlvElement> {
        self.elements.iter()
    }

    /// Check whether any element carries `tag`
    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// First element carrying `tag`
    pub fn find(&self, tag: &str) -> Option<&TlvElement> {
        self.elements.iter().find(|e| e.has_tag(tag))
    }

    /// Elements whose tag is in `tags`, in list order
    ///
    /// Returns `None` when no tag matched, so an absent subset can be told
    /// apart from an empty list.
    pub fn find_all(&self, tags: &[&str]) -> Option<TlvList> {
        let elements: Vec<TlvElement> = self
            .elements
            .iter()
            .filter(|e| Self::matches_any(e, tags))
            .cloned()
            .collect();
        if elements.is_empty() {
            None
        } else {
            Some(TlvList { elements })
        }
    }

    /// Keep only the elements whose tag is in `tags`, preserving order
    pub fn retain(&mut self, tags: &[&str]) {
        self.elements.retain(|e| Self::matches_any(e, tags));
    }

    /// Drop every element carrying `tag`
    pub fn remove(&mut self, tag: &str) {
        self.elements.retain(|e| !e.has_tag(tag));
    }

    /// Drop every element whose tag is in `tags`
    pub fn remove_all(&mut self, tags: &[&str]) {
        self.elements.retain(|e| !Self::matches_any(e, tags));
    }

    /// Concatenate the raw bytes of every element in list order
    pub fn to_binary(&self) -> Vec<u8> {
        let total = self.elements.iter().map(|e| e.raw_bytes().len()).sum();
        let mut result = Vec::with_capacity(total);
        for element in &self.elements {
            result.extend_from_slice(element.raw_bytes());
        }
        result
    }

    fn matches_any(element: &TlvElement, tags: &[&str]) -> bool {
        tags.iter().any(|tag| element.has_tag(tag))
    }
}

impl<'a> IntoIterator for &'a TlvList {
    type Item = &'a TlvElement;
    type IntoIter = std::slice::Iter<'a, TlvElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
