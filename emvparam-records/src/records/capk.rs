//! Certificate Authority public key records

use emvparam_core::{hex_to_bytes, EmvParamError, EmvParamResult};

use crate::config::{EncoderConfig, FieldPolicy};
use crate::kind::RecordKind;
use crate::tables::tags;
use crate::writer::{HeaderSlot, RecordWriter};

/// Length of the SHA-1 key checksum in bytes
pub const CHECKSUM_LEN: usize = 20;

const HEADER: [HeaderSlot; 2] = [HeaderSlot::required("RID"), HeaderSlot::required("KeyIndex")];

/// Encoder for one `CAPK` record
#[derive(Debug, Clone)]
pub struct CaPublicKey {
    writer: RecordWriter,
    strict: bool,
}

impl CaPublicKey {
    pub fn new(config: EncoderConfig) -> Self {
        let strict = config.field_policy() == FieldPolicy::Strict;
        Self {
            writer: RecordWriter::new(RecordKind::CaPublicKey, config),
            strict,
        }
    }

    /// Positional header: RID, key index
    pub fn set_header(&mut self, values: &[&str]) -> EmvParamResult<()> {
        let fields = self.writer.header_fields(&HEADER, values)?;
        let mut staged = self.clone();
        for (name, value) in fields {
            staged.set_field(name, &[value])?;
        }
        staged.writer.seal_header();
        *self = staged;
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        let result = self.apply(name, values);
        self.writer.settle(name, result)
    }

    fn apply(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        match self.writer.resolve(name, values)? {
            None => Ok(()),
            Some((None, value)) => self.writer.write_passthrough(&value),
            Some((Some(tag), value)) => {
                // Checksum is a SHA-1 digest given as hex
                if self.strict && tag == tags::CAPK_CHECKSUM {
                    let digest = hex_to_bytes(&value)?;
                    if digest.len() != CHECKSUM_LEN {
                        return Err(EmvParamError::LengthMismatch(digest.len(), CHECKSUM_LEN));
                    }
                }
                self.writer.write_field(name, tag, &value)
            }
        }
    }

    pub(crate) fn writer(&self) -> &RecordWriter {
        &self.writer
    }

    pub(crate) fn into_writer(self) -> RecordWriter {
        self.writer
    }
}
