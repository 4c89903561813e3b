//! Parameter record encoders
//!
//! One variant per record kind. Every variant accepts a positional header,
//! name-keyed fields, and is finalized into the bytes handed to the kernel.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use emvparam_records::{EncoderConfig, ParameterRecord, RecordKind};
//!
//! let mut record = ParameterRecord::new(RecordKind::ContactlessApplication, EncoderConfig::default());
//! record.set_header(&["A0000000041010", "02", "00,09"])?;
//! record.set_field("TerminalActionCodeDefault", &["F45084800C"])?;
//! let (bytes, len) = record.finalize();
//! # Ok::<(), emvparam_core::EmvParamError>(())
//! ```

pub mod acquirer;
pub mod capk;
pub mod contact;
pub mod contactless;
pub mod drl;
pub mod exception;
pub mod revocation;

use emvparam_core::EmvParamResult;
use emvparam_tlv::{decode_all, TlvList};

pub use acquirer::AcquirerParameters;
pub use capk::CaPublicKey;
pub use contact::ContactApplicationParameters;
pub use contactless::ContactlessApplicationParameters;
pub use drl::DrlEntry;
pub use exception::ExceptionEntry;
pub use revocation::RevocationEntry;

use crate::config::EncoderConfig;
use crate::kind::RecordKind;
use crate::writer::RecordWriter;

/// One configuration record under construction
#[derive(Debug, Clone)]
pub enum ParameterRecord {
    Acquirer(AcquirerParameters),
    ContactApplication(ContactApplicationParameters),
    ContactlessApplication(ContactlessApplicationParameters),
    CaPublicKey(CaPublicKey),
    RevocationList(RevocationEntry),
    DomesticRoutingList(DrlEntry),
    ExceptionList(ExceptionEntry),
}

impl ParameterRecord {
    /// Create an empty record of `kind`
    pub fn new(kind: RecordKind, config: EncoderConfig) -> Self {
        match kind {
            RecordKind::Acquirer => Self::Acquirer(AcquirerParameters::new(config)),
            RecordKind::ContactApplication => {
                Self::ContactApplication(ContactApplicationParameters::new(config))
            }
            RecordKind::ContactlessApplication => {
                Self::ContactlessApplication(ContactlessApplicationParameters::new(config))
            }
            RecordKind::CaPublicKey => Self::CaPublicKey(CaPublicKey::new(config)),
            RecordKind::RevocationList => Self::RevocationList(RevocationEntry::new(config)),
            RecordKind::DomesticRoutingList => Self::DomesticRoutingList(DrlEntry::new(config)),
            RecordKind::ExceptionList => Self::ExceptionList(ExceptionEntry::new(config)),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.writer().kind()
    }

    /// Set the positional record header
    ///
    /// # Error Handling
    /// Returns `MissingHeaderValue` when a mandatory value is absent or
    /// empty and `HeaderAlreadySet` on a second call. Field errors from the
    /// header values propagate as from [`set_field`](Self::set_field). A
    /// failed call writes nothing and the header may be set again.
    pub fn set_header(&mut self, values: &[&str]) -> EmvParamResult<()> {
        match self {
            Self::Acquirer(r) => r.set_header(values),
            Self::ContactApplication(r) => r.set_header(values),
            Self::ContactlessApplication(r) => r.set_header(values),
            Self::CaPublicKey(r) => r.set_header(values),
            Self::RevocationList(r) => r.set_header(values),
            Self::DomesticRoutingList(r) => r.set_header(values),
            Self::ExceptionList(r) => r.set_header(values),
        }
    }

    /// Encode one named field and append it to the record
    ///
    /// Only the first value is used; an empty value is a no-op. On error
    /// the bytes written by earlier calls are left unchanged.
    pub fn set_field(&mut self, name: &str, values: &[&str]) -> EmvParamResult<()> {
        match self {
            Self::Acquirer(r) => r.set_field(name, values),
            Self::ContactApplication(r) => r.set_field(name, values),
            Self::ContactlessApplication(r) => r.set_field(name, values),
            Self::CaPublicKey(r) => r.set_field(name, values),
            Self::RevocationList(r) => r.set_field(name, values),
            Self::DomesticRoutingList(r) => r.set_field(name, values),
            Self::ExceptionList(r) => r.set_field(name, values),
        }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.writer().buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer().buffer().is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.writer().buffer().as_bytes()
    }

    /// Decode the record written so far
    pub fn inspect(&self) -> EmvParamResult<TlvList> {
        decode_all(self.as_bytes())
    }

    /// Consume the record, returning its bytes and their length
    pub fn finalize(self) -> (Vec<u8>, usize) {
        self.into_writer().into_buffer().finish()
    }

    fn writer(&self) -> &RecordWriter {
        match self {
            Self::Acquirer(r) => r.writer(),
            Self::ContactApplication(r) => r.writer(),
            Self::ContactlessApplication(r) => r.writer(),
            Self::CaPublicKey(r) => r.writer(),
            Self::RevocationList(r) => r.writer(),
            Self::DomesticRoutingList(r) => r.writer(),
            Self::ExceptionList(r) => r.writer(),
        }
    }

    fn into_writer(self) -> RecordWriter {
        match self {
            Self::Acquirer(r) => r.into_writer(),
            Self::ContactApplication(r) => r.into_writer(),
            Self::ContactlessApplication(r) => r.into_writer(),
            Self::CaPublicKey(r) => r.into_writer(),
            Self::RevocationList(r) => r.into_writer(),
            Self::DomesticRoutingList(r) => r.into_writer(),
            Self::ExceptionList(r) => r.into_writer(),
        }
    }
}
