//! PAN exception list entries

use emvparam_core::EmvParamResult;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::writer::{HeaderSlot, RecordWriter};

const HEADER: [HeaderSlot; 2] = [
    HeaderSlot::required("PAN"),
    HeaderSlot::optional("PANSequenceNumber"),
];

/// Encoder for one `ExceptionList` entry
#[derive(Debug, Clone)]
pub struct ExceptionEntry {
    writer: RecordWriter,
}

impl ExceptionEntry {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: RecordWriter::new(RecordKind::ExceptionList, config),
        }
    }

    /// Positional header: PAN [, PAN sequence number]
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
        let result = self.writer.apply(name, values);
        self.writer.settle(name, result)
    }

    pub(crate) fn writer(&self) -> &RecordWriter {
        &self.writer
    }

    pub(crate) fn into_writer(self) -> RecordWriter {
        self.writer
    }
}
