//! Contactless application parameters
//!
//! The richest record kind: besides the generic field rules it packs the
//! transaction-type group into a bitmask and, for the PayPass kernel,
//! moves the terminal action codes to the kernel's proprietary tags.

use emvparam_core::EmvParamResult;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::tables::tags;
use crate::writer::{HeaderSlot, RecordWriter};

/// Kernel ID of the PayPass kernel
pub const PAYPASS_KERNEL_ID: &str = "02";

const HEADER: [HeaderSlot; 3] = [
    HeaderSlot::required("ApplicationIdentifier"),
    HeaderSlot::required("KernelID"),
    HeaderSlot::optional("TransactionTypeGroup"),
];

/// Encoder for one `ContactlessApplication` record
#[derive(Debug, Clone)]
pub struct ContactlessApplicationParameters {
    writer: RecordWriter,
    kernel_id: Option<String>,
}

impl ContactlessApplicationParameters {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: RecordWriter::new(RecordKind::ContactlessApplication, config),
            kernel_id: None,
        }
    }

    /// Positional header: AID, kernel ID [, transaction-type group]
    ///
    /// The transaction-type group is a comma-separated list of type codes,
    /// e.g. `"00,09"`.
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

    /// Kernel ID recorded so far in this record
    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    fn apply(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        let (tag, value) = match self.writer.resolve(name, values)? {
            None => return Ok(()),
            Some((None, value)) => return self.writer.write_passthrough(&value),
            Some((Some(tag), value)) => (tag, value),
        };

        let tag = self.effective_tag(tag);
        self.writer.write_field(name, tag, &value)?;

        if tag == tags::KERNEL_ID {
            self.kernel_id = Some(value);
        }
        Ok(())
    }

    /// Terminal action code tags used by the selected kernel
    fn effective_tag(&self, tag: &'static str) -> &'static str {
        if self.kernel_id.as_deref() != Some(PAYPASS_KERNEL_ID) {
            return tag;
        }
        match tag {
            tags::TAC_DEFAULT => tags::PAYPASS_TAC_DEFAULT,
            tags::TAC_DENIAL => tags::PAYPASS_TAC_DENIAL,
            tags::TAC_ONLINE => tags::PAYPASS_TAC_ONLINE,
            other => other,
        }
    }

    pub(crate) fn writer(&self) -> &RecordWriter {
        &self.writer
    }

    pub(crate) fn into_writer(self) -> RecordWriter {
        self.writer
    }
}
