//! Acquirer parameters: terminal-wide merchant and terminal identity

use emvparam_core::EmvParamResult;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::writer::{HeaderSlot, RecordWriter};

const HEADER: [HeaderSlot; 2] = [
    HeaderSlot::required("AcquirerIdentifier"),
    HeaderSlot::optional("MerchantCategoryCode"),
];

/// Encoder for one `AcquirerParameters` record
#[derive(Debug, Clone)]
pub struct AcquirerParameters {
    writer: RecordWriter,
}

impl AcquirerParameters {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: RecordWriter::new(RecordKind::Acquirer, config),
        }
    }

    /// Positional header: acquirer identifier [, merchant category code]
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

#[cfg(test)]
mod tests {
    use super::*;
    use emvparam_core::EmvParamError;

    #[test]
    fn test_terminal_id_padding() {
        let mut record = AcquirerParameters::new(EncoderConfig::default());
        record.set_field("TerminalIdentification", &["123"]).unwrap();
        assert_eq!(
            record.writer().buffer().as_bytes(),
            &[0x9F, 0x1C, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x31, 0x32, 0x33]
        );
    }

    #[test]
    fn test_merchant_fields() {
        let mut record = AcquirerParameters::new(EncoderConfig::default());
        record.set_field("MerchantIdentifier", &["MID 42"]).unwrap();
        record.set_field("MerchantNameAndLocation", &["Cafe Paris"]).unwrap();

        let bytes = record.writer().buffer().as_bytes();
        assert_eq!(&bytes[..3], &[0x9F, 0x16, 0x0F]);
        assert_eq!(&bytes[3..18], b"\0\0\0\0\0\0\0\0\0\0MID42");
        // Whitespace is stripped before encoding
        assert_eq!(&bytes[18..], b"\x9F\x4E\x09CafeParis");
    }

    #[test]
    fn test_header() {
        let mut record = AcquirerParameters::new(EncoderConfig::default());
        record.set_header(&["000000123456", "5999"]).unwrap();
        assert_eq!(
            record.writer().buffer().as_bytes(),
            &[0x9F, 0x01, 0x06, 0x00, 0x00, 0x00, 0x12, 0x34, 0x56, 0x9F, 0x15, 0x02, 0x59, 0x99]
        );
        assert_eq!(record.set_header(&["00"]), Err(EmvParamError::HeaderAlreadySet));
    }

    #[test]
    fn test_header_missing_value() {
        let mut record = AcquirerParameters::new(EncoderConfig::default());
        assert_eq!(
            record.set_header(&[]),
            Err(EmvParamError::MissingHeaderValue("AcquirerIdentifier"))
        );
    }

    #[test]
    fn test_ifd_serial_too_long() {
        let mut record = AcquirerParameters::new(EncoderConfig::legacy());
        let err = record.set_field("IFDSerialNumber", &["123456789"]).unwrap_err();
        assert!(matches!(err, EmvParamError::FieldTooLong { max: 8, .. }));
        assert!(record.writer().buffer().is_empty());
    }
}
