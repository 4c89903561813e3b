//! Contact EMV application parameters

use emvparam_core::EmvParamResult;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::writer::{HeaderSlot, RecordWriter};

const HEADER: [HeaderSlot; 2] = [
    HeaderSlot::required("ApplicationIdentifier"),
    HeaderSlot::optional("ApplicationSelectionIndicator"),
];

/// Encoder for one contact `EmvApplication` record
#[derive(Debug, Clone)]
pub struct ContactApplicationParameters {
    writer: RecordWriter,
}

impl ContactApplicationParameters {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            writer: RecordWriter::new(RecordKind::ContactApplication, config),
        }
    }

    /// Positional header: AID [, application selection indicator]
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
    fn test_header_and_tacs() {
        let mut record = ContactApplicationParameters::new(EncoderConfig::default());
        record.set_header(&["A0000000031010", "01"]).unwrap();
        record.set_field("TerminalActionCodeDefault", &["DC4000A800"]).unwrap();

        let bytes = record.writer().buffer().as_bytes();
        assert_eq!(&bytes[..10], &[0x9F, 0x06, 0x07, 0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10]);
        assert_eq!(&bytes[10..14], &[0x1F, 0x01, 0x01, 0x01]);
        // Contact kernels keep the generic action code tags
        assert_eq!(&bytes[14..], &[0x1F, 0x04, 0x05, 0xDC, 0x40, 0x00, 0xA8, 0x00]);
    }

    #[test]
    fn test_application_label_is_hex() {
        let mut record = ContactApplicationParameters::new(EncoderConfig::default());
        record.set_field("ApplicationLabel", &["56495341"]).unwrap();
        assert_eq!(record.writer().buffer().as_bytes(), &[0x50, 0x04, 0x56, 0x49, 0x53, 0x41]);
    }

    #[test]
    fn test_empty_value_is_noop() {
        let mut record = ContactApplicationParameters::new(EncoderConfig::default());
        record.set_field("TerminalFloorLimit", &[""]).unwrap();
        record.set_field("TerminalFloorLimit", &[]).unwrap();
        record.set_field("NotAField", &[""]).unwrap();
        // Whitespace-only values from indented parameter files
        record.set_field("TerminalFloorLimit", &["   "]).unwrap();
        record.set_field("TerminalCountryCode", &[" \n "]).unwrap();
        assert!(record.writer().buffer().is_empty());

        record.set_field("TerminalCountryCode", &[" 08 40\n"]).unwrap();
        assert_eq!(record.writer().buffer().as_bytes(), &[0x9F, 0x1A, 0x02, 0x08, 0x40]);
    }

    #[test]
    fn test_strict_and_legacy_policies() {
        let mut strict = ContactApplicationParameters::new(EncoderConfig::default());
        assert_eq!(
            strict.set_field("NotAField", &["01"]),
            Err(EmvParamError::UnknownField("NotAField".to_string()))
        );
        assert!(matches!(
            strict.set_field("TerminalFloorLimit", &["0001F"]),
            Err(EmvParamError::OddHexLength(..))
        ));

        let mut legacy = ContactApplicationParameters::new(EncoderConfig::legacy());
        legacy.set_field("NotAField", &["01"]).unwrap();
        legacy.set_field("TerminalFloorLimit", &["0001F"]).unwrap();
        legacy.set_field("ThresholdValue", &["XYZW"]).unwrap();
        assert!(legacy.writer().buffer().is_empty());
    }
}
