//! Fixed-capacity record buffer with an owned write cursor

use emvparam_core::{EmvParamError, EmvParamResult};

use crate::encoder::append_tlv;

/// Default record capacity expected by EMV kernels
pub const DEFAULT_RECORD_CAPACITY: usize = 1024;

/// Output buffer for one parameter record
///
/// Bytes are only ever appended; the cursor is monotonic. A write that does
/// not fit fails with `BufferOverflow` and leaves the bytes already written
/// unchanged.
#[derive(Debug, Clone)]
pub struct RecordBuffer {
    buffer: Vec<u8>,
    cursor: usize,
}

impl RecordBuffer {
    /// Create a buffer of [`DEFAULT_RECORD_CAPACITY`] bytes
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECORD_CAPACITY)
    }

    /// Create a buffer holding at most `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity],
            cursor: 0,
        }
    }

    /// Append one TLV element
    pub fn append_tlv(&mut self, tag: &[u8], value: &[u8]) -> EmvParamResult<()> {
        append_tlv(&mut self.buffer, &mut self.cursor, tag, value)
    }

    /// Append bytes that are already TLV-encoded
    pub fn append_raw(&mut self, bytes: &[u8]) -> EmvParamResult<()> {
        if bytes.len() > self.remaining() {
            return Err(EmvParamError::BufferOverflow {
                offset: self.cursor,
                needed: bytes.len(),
                capacity: self.capacity(),
            });
        }
        self.buffer[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
        Ok(())
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// The valid part of the buffer, `buffer[..len]`
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.cursor]
    }

    /// Consume the buffer, returning the valid bytes and their length
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        self.buffer.truncate(self.cursor);
        (self.buffer, self.cursor)
    }
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_buffer_append_and_finish() {
        let mut buffer = RecordBuffer::new();
        buffer.append_tlv(&[0x1F, 0x60], &[0x02]).unwrap();
        buffer.append_raw(&[0x9F, 0x33, 0x03, 0xE0, 0xF8, 0xC8]).unwrap();
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.remaining(), DEFAULT_RECORD_CAPACITY - 10);

        let (bytes, len) = buffer.finish();
        assert_eq!(len, 10);
        assert_eq!(bytes, vec![0x1F, 0x60, 0x01, 0x02, 0x9F, 0x33, 0x03, 0xE0, 0xF8, 0xC8]);
    }

    #[test]
    fn test_record_buffer_overflow_keeps_prior_bytes() {
        let mut buffer = RecordBuffer::with_capacity(6);
        buffer.append_tlv(&[0x5A], &[0x01]).unwrap();
        assert!(matches!(
            buffer.append_tlv(&[0x5A], &[0x01, 0x02]),
            Err(EmvParamError::BufferOverflow { offset: 3, needed: 4, capacity: 6 })
        ));
        assert!(buffer.append_raw(&[0; 4]).is_err());
        assert_eq!(buffer.as_bytes(), &[0x5A, 0x01, 0x01]);

        buffer.append_raw(&[0x5A, 0x01, 0x02]).unwrap();
        assert_eq!(buffer.remaining(), 0);
    }
}
