//! emvparam - EMV kernel parameter encoding
//!
//! Encodes terminal configuration (acquirer data, contact and contactless
//! application parameters, CA public keys, revocation, routing and exception
//! lists) into the BER-TLV records EMV kernels load.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `emvparam-core`: Error type and hex/byte utilities
//! - `emvparam-tlv`: BER-TLV encoder, decoder and element list
//! - `emvparam-records`: Per-kind record encoders and the parameter loader
//!
//! # Usage
//!
//! ```no_run
//! use emvparam::{EncoderConfig, ParameterLoader, RecordKind};
//!
//! let sink: Vec<(RecordKind, Vec<u8>)> = Vec::new();
//! let mut loader = ParameterLoader::new(sink, EncoderConfig::default());
//! loader.begin(RecordKind::ContactlessApplication, &["A0000000041010", "02", "00,09"])?;
//! loader.field("TerminalActionCodeOnline", &["F45084800C"])?;
//! loader.end()?;
//! # Ok::<(), emvparam::EmvParamError>(())
//! ```

// Re-export core types
pub use emvparam_core::{EmvParamError, EmvParamResult};

// Re-export the loader API
pub use emvparam_records::{EncoderConfig, FieldPolicy, KernelSink, ParameterLoader, ParameterRecord, RecordKind};

// Re-export hex/byte helpers
pub mod bytes {
    pub use emvparam_core::bytes::*;
}

// Re-export the TLV codec
pub mod tlv {
    pub use emvparam_tlv::*;
}

// Re-export record encoders
pub mod records {
    pub use emvparam_records::*;
}
