//! Parameter loader
//!
//! Drives record encoders from a stream of parameter-file events
//! (record start with its header, named fields, record end) and hands each
//! finished record to a [`KernelSink`].
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use emvparam_records::{EncoderConfig, ParameterLoader, RecordKind};
//!
//! let sink: Vec<(RecordKind, Vec<u8>)> = Vec::new();
//! let mut loader = ParameterLoader::new(sink, EncoderConfig::default());
//! loader.begin(RecordKind::Acquirer, &["000001", "5999"])?;
//! loader.field("TerminalIdentification", &["TERM0001"])?;
//! let written = loader.end()?;
//! # Ok::<(), emvparam_core::EmvParamError>(())
//! ```

use emvparam_core::{EmvParamError, EmvParamResult};

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::records::ParameterRecord;
use crate::sink::KernelSink;

/// Streams encoded records into a [`KernelSink`]
#[derive(Debug)]
pub struct ParameterLoader<S: KernelSink> {
    sink: S,
    config: EncoderConfig,
    current: Option<ParameterRecord>,
    records_loaded: usize,
}

impl<S: KernelSink> ParameterLoader<S> {
    pub fn new(sink: S, config: EncoderConfig) -> Self {
        Self {
            sink,
            config,
            current: None,
            records_loaded: 0,
        }
    }

    /// Open a record of `kind` and write its header
    ///
    /// # Error Handling
    /// Returns `RecordInProgress` if a record is already open. If the header
    /// fails, no record is opened.
    pub fn begin(&mut self, kind: RecordKind, header: &[&str]) -> EmvParamResult<()> {
        if let Some(open) = &self.current {
            return Err(EmvParamError::RecordInProgress(open.kind().to_string()));
        }

        let mut record = ParameterRecord::new(kind, self.config.clone());
        record.set_header(header)?;
        self.current = Some(record);
        Ok(())
    }

    /// Open a record by its parameter-file element name
    pub fn begin_element(&mut self, element: &str, header: &[&str]) -> EmvParamResult<()> {
        let kind = RecordKind::from_element(element)
            .ok_or_else(|| EmvParamError::UnknownField(element.to_string()))?;
        self.begin(kind, header)
    }

    /// Set one field of the open record
    ///
    /// A failed field leaves the record open with its earlier fields intact.
    pub fn field(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        self.current
            .as_mut()
            .ok_or(EmvParamError::NoOpenRecord)?
            .set_field(name, values)
    }

    /// Close the open record and hand it to the sink
    ///
    /// Returns the record length in bytes. Empty records are closed without
    /// reaching the sink.
    pub fn end(&mut self) -> EmvParamResult<usize> {
        let record = self.current.take().ok_or(EmvParamError::NoOpenRecord)?;
        let kind = record.kind();
        let (bytes, len) = record.finalize();

        if len == 0 {
            log::debug!("{}: empty record not loaded", kind);
            return Ok(0);
        }

        self.sink.load(kind, &bytes[..len])?;
        self.records_loaded += 1;
        log::info!("{}: loaded record of {} bytes", kind, len);
        Ok(len)
    }

    /// Drop the open record, if any
    pub fn abort(&mut self) {
        if let Some(record) = self.current.take() {
            log::warn!("{}: record aborted after {} bytes", record.kind(), record.len());
        }
    }

    /// Kind of the open record
    pub fn current_kind(&self) -> Option<RecordKind> {
        self.current.as_ref().map(ParameterRecord::kind)
    }

    /// Number of records handed to the sink
    pub fn records_loaded(&self) -> usize {
        self.records_loaded
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Collected = Vec<(RecordKind, Vec<u8>)>;

    struct RejectingSink;

    impl KernelSink for RejectingSink {
        fn load(&mut self, _kind: RecordKind, _record: &[u8]) -> EmvParamResult<()> {
            Err(EmvParamError::Sink("setParam returned -1".to_string()))
        }
    }

    #[test]
    fn test_load_two_records() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());

        loader.begin(RecordKind::ExceptionList, &["4761739001010010", "01"]).unwrap();
        assert_eq!(loader.current_kind(), Some(RecordKind::ExceptionList));
        assert_eq!(loader.end().unwrap(), 14);

        loader.begin_element("CAPK", &["A000000003", "92"]).unwrap();
        loader.field("Exponent", &["03"]).unwrap();
        assert_eq!(loader.end().unwrap(), 16);

        assert_eq!(loader.records_loaded(), 2);
        let sink = loader.into_sink();
        assert_eq!(sink[0].0, RecordKind::ExceptionList);
        assert_eq!(
            sink[0].1,
            vec![0x5A, 0x08, 0x47, 0x61, 0x73, 0x90, 0x01, 0x01, 0x00, 0x10, 0x5F, 0x34, 0x01, 0x01]
        );
        assert_eq!(sink[1].0, RecordKind::CaPublicKey);
    }

    #[test]
    fn test_begin_while_open() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());
        loader.begin(RecordKind::Acquirer, &["000001"]).unwrap();
        assert_eq!(
            loader.begin(RecordKind::Acquirer, &["000002"]),
            Err(EmvParamError::RecordInProgress("AcquirerParameters".to_string()))
        );
    }

    #[test]
    fn test_field_without_record() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());
        assert_eq!(loader.field("TerminalCountryCode", &["0840"]), Err(EmvParamError::NoOpenRecord));
        assert_eq!(loader.end(), Err(EmvParamError::NoOpenRecord));
    }

    #[test]
    fn test_unknown_element() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());
        assert_eq!(
            loader.begin_element("Terminal", &[]),
            Err(EmvParamError::UnknownField("Terminal".to_string()))
        );
        assert_eq!(loader.current_kind(), None);
    }

    #[test]
    fn test_failed_field_keeps_record_open() {
        let mut sink = Collected::new();
        let mut loader = ParameterLoader::new(&mut sink, EncoderConfig::default());
        loader.begin(RecordKind::Acquirer, &["000001"]).unwrap();
        assert!(loader.field("TerminalCountryCode", &["084"]).is_err());
        loader.field("TerminalCountryCode", &["0840"]).unwrap();
        assert_eq!(loader.end().unwrap(), 6 + 5);
        drop(loader);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].1, vec![0x9F, 0x01, 0x03, 0x00, 0x00, 0x01, 0x9F, 0x1A, 0x02, 0x08, 0x40]);
    }

    #[test]
    fn test_empty_record_skips_sink() {
        // Legacy policy skips the unparsable header value, leaving no bytes
        let mut loader = ParameterLoader::new(RejectingSink, EncoderConfig::legacy());
        loader.begin(RecordKind::DomesticRoutingList, &["XYZ1"]).unwrap();
        assert_eq!(loader.end(), Ok(0));

        loader.begin(RecordKind::DomesticRoutingList, &["0102030405"]).unwrap();
        assert!(matches!(loader.end(), Err(EmvParamError::Sink(_))));
        assert_eq!(loader.records_loaded(), 0);
    }

    #[test]
    fn test_abort() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());
        loader.begin(RecordKind::ContactApplication, &["A0000000031010"]).unwrap();
        loader.abort();
        assert_eq!(loader.current_kind(), None);
        loader.begin(RecordKind::ContactApplication, &["A0000000041010"]).unwrap();
        assert_eq!(loader.end(), Ok(10));
        assert_eq!(loader.records_loaded(), 1);
    }

    #[test]
    fn test_header_error_opens_nothing() {
        let mut loader = ParameterLoader::new(Collected::new(), EncoderConfig::default());
        assert_eq!(
            loader.begin(RecordKind::RevocationList, &["A000000003", "92"]),
            Err(EmvParamError::MissingHeaderValue("CertificateSerialNumber"))
        );
        assert_eq!(loader.current_kind(), None);
        assert!(loader.sink().is_empty());
    }
}
