//! Contactless domestic routing list entries

use emvparam_core::EmvParamResult;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::writer::{HeaderSlot, RecordWriter};

const HEADER: [HeaderSlot; 2] = [HeaderSlot::required("ProgramID"), HeaderSlot::optional("KernelID")];

/// Encoder for one `DRL` entry
#[derive(Debug, Clone)]
pub struct DrlEntry {
    writer: RecordWriter,
}

impl DrlEntry {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: RecordWriter::new(RecordKind::DomesticRoutingList, config),
        }
    }

    /// Positional header: program ID [, kernel ID]
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
