//! Shared per-field encoding for every record kind

use emvparam_core::{bytes_to_hex, hex_to_bytes, strip_whitespace, EmvParamError, EmvParamResult};
use emvparam_tlv::{decode_all, RecordBuffer, TlvTag};

use crate::config::{EncoderConfig, FieldPolicy};
use crate::fields::FieldRule;
use crate::kind::RecordKind;
use crate::tables::EXTRA_TAGS;

/// One positional slot of a record header
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderSlot {
    pub field: &'static str,
    pub required: bool,
}

impl HeaderSlot {
    pub const fn required(field: &'static str) -> Self {
        Self { field, required: true }
    }

    pub const fn optional(field: &'static str) -> Self {
        Self { field, required: false }
    }
}

/// Output buffer plus the encoding rules common to all record kinds
#[derive(Debug, Clone)]
pub(crate) struct RecordWriter {
    kind: RecordKind,
    config: EncoderConfig,
    buffer: RecordBuffer,
    header_set: bool,
}

impl RecordWriter {
    pub fn new(kind: RecordKind, config: EncoderConfig) -> Self {
        let buffer = RecordBuffer::with_capacity(config.record_capacity());
        Self {
            kind,
            config,
            buffer,
            header_set: false,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn buffer(&self) -> &RecordBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> RecordBuffer {
        self.buffer
    }

    /// Pair positional header values with their field names
    ///
    /// Empty optional values are dropped; a missing or empty required value
    /// fails with `MissingHeaderValue`. Nothing is written: callers encode
    /// the pairs on a staged copy of the record and call
    /// [`seal_header`](Self::seal_header) once every value has been appended.
    pub fn header_fields<'v>(
        &self,
        slots: &[HeaderSlot],
        values: &[&'v str],
    ) -> EmvParamResult<Vec<(&'static str, &'v str)>> {
        if self.header_set {
            return Err(EmvParamError::HeaderAlreadySet);
        }

        let mut fields = Vec::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            match values.get(i).filter(|v| !v.trim().is_empty()) {
                Some(value) => fields.push((slot.field, *value)),
                None if slot.required => return Err(EmvParamError::MissingHeaderValue(slot.field)),
                None => {}
            }
        }
        if values.len() > slots.len() {
            log::warn!(
                "{}: ignoring {} extra header value(s)",
                self.kind,
                values.len() - slots.len()
            );
        }

        Ok(fields)
    }

    /// Mark the header as written
    pub fn seal_header(&mut self) {
        self.header_set = true;
    }

    /// Resolve `name` against the record's table
    ///
    /// Returns `Ok(None)` for no-op calls (no value, or a value that is
    /// empty once whitespace is stripped), and `Ok(Some((tag, value)))` with
    /// whitespace stripped from the value. A tag of `None` marks the
    /// passthrough field.
    pub fn resolve(&self, name: &str, values: &[&str]) -> EmvParamResult<Option<(Option<&'static str>, String)>> {
        let value = match values.first().map(|v| strip_whitespace(v)) {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(None),
        };

        if name == EXTRA_TAGS {
            return Ok(Some((None, value)));
        }

        match self.kind.table().tag_for(name) {
            Some(tag) => Ok(Some((Some(tag), value))),
            None => Err(EmvParamError::UnknownField(name.to_string())),
        }
    }

    /// Encode `value` under `tag` and append it
    pub fn write_field(&mut self, name: &str, tag: &str, value: &str) -> EmvParamResult<()> {
        let bytes = FieldRule::for_tag(tag).encode(name, value)?;
        if bytes.len() > self.config.value_capacity() {
            return Err(EmvParamError::FieldTooLong {
                field: name.to_string(),
                actual: bytes.len(),
                max: self.config.value_capacity(),
            });
        }

        let tag_bytes = TlvTag::from_hex(tag)?;
        self.buffer.append_tlv(tag_bytes.as_bytes(), &bytes)?;
        log::debug!("{}: {} [{}] = {}", self.kind, name, tag, bytes_to_hex(&bytes));
        Ok(())
    }

    /// Append an already TLV-encoded value verbatim
    ///
    /// Under [`FieldPolicy::Strict`] the payload must decode as complete
    /// TLV elements.
    pub fn write_passthrough(&mut self, value: &str) -> EmvParamResult<()> {
        let bytes = hex_to_bytes(value)?;
        if self.config.field_policy() == FieldPolicy::Strict {
            decode_all(&bytes)?;
        }
        self.buffer.append_raw(&bytes)?;
        log::debug!("{}: {} = {}", self.kind, EXTRA_TAGS, bytes_to_hex(&bytes));
        Ok(())
    }

    /// Resolve and write one field with no kind-specific handling
    pub fn apply(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        match self.resolve(name, values)? {
            None => Ok(()),
            Some((None, value)) => self.write_passthrough(&value),
            Some((Some(tag), value)) => self.write_field(name, tag, &value),
        }
    }

    /// Apply the configured field policy to the outcome of a field call
    pub fn settle(&self, name: &str, result: EmvParamResult<()>) -> EmvParamResult<()> {
        match result {
            Err(e) if self.config.field_policy().tolerates(&e) => {
                log::warn!("{}: skipping field {}: {}", self.kind, name, e);
                Ok(())
            }
            other => other,
        }
    }
}
