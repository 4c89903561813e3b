//! Certificate revocation list entries

use emvparam_core::{hex_to_bytes, EmvParamError, EmvParamResult};

use crate::config::{EncoderConfig, FieldPolicy};
use crate::kind::RecordKind;
use crate::tables::tags;
use crate::writer::{HeaderSlot, RecordWriter};

/// Length of an issuer certificate serial number in bytes
pub const SERIAL_NUMBER_LEN: usize = 3;

const HEADER: [HeaderSlot; 3] = [
    HeaderSlot::required("RID"),
    HeaderSlot::required("KeyIndex"),
    HeaderSlot::required("CertificateSerialNumber"),
];

/// Encoder for one `RevocationList` entry
#[derive(Debug, Clone)]
pub struct RevocationEntry {
    writer: RecordWriter,
    strict: bool,
}

impl RevocationEntry {
    pub fn new(config: EncoderConfig) -> Self {
        let strict = config.field_policy() == FieldPolicy::Strict;
        Self {
            writer: RecordWriter::new(RecordKind::RevocationList, config),
            strict,
        }
    }

    /// Positional header: RID, CA key index, certificate serial number
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
                if self.strict && tag == tags::CERTIFICATE_SERIAL_NUMBER {
                    let serial = hex_to_bytes(&value)?;
                    if serial.len() != SERIAL_NUMBER_LEN {
                        return Err(EmvParamError::LengthMismatch(serial.len(), SERIAL_NUMBER_LEN));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revocation_entry() {
        let mut record = RevocationEntry::new(EncoderConfig::default());
        record.set_header(&["A000000004", "FE", "001234"]).unwrap();
        assert_eq!(
            record.writer().buffer().as_bytes(),
            &[
                0x9F, 0x06, 0x05, 0xA0, 0x00, 0x00, 0x00, 0x04,
                0x9F, 0x22, 0x01, 0xFE,
                0x1F, 0x50, 0x03, 0x00, 0x12, 0x34,
            ]
        );
    }

    #[test]
    fn test_serial_number_length() {
        let mut record = RevocationEntry::new(EncoderConfig::default());
        assert_eq!(
            record.set_field("CertificateSerialNumber", &["1234"]),
            Err(EmvParamError::LengthMismatch(2, SERIAL_NUMBER_LEN))
        );
        assert_eq!(
            record.set_field("CertificateSerialNumber", &["12345"]),
            Err(EmvParamError::OddHexLength("12345".to_string(), 5))
        );
        assert!(record.writer().buffer().is_empty());
    }
}
