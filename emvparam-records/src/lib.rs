//! EMV kernel parameter record encoders
//!
//! Turns name-keyed configuration fields into the concatenated BER-TLV
//! records an EMV kernel loads at start-up.
//!
//! # Architecture
//!
//! - `kind`: the record kinds and their parameter-file element names
//! - `tables`: field name → tag tables, one per kind
//! - `fields`: value encoding rules (hex, fixed-width ASCII, bitmasks)
//! - `records`: one encoder per kind, unified by [`ParameterRecord`]
//! - `loader`: drives encoders and hands finished records to a [`KernelSink`]
//! - `config`: buffer capacities and the unknown/malformed field policy

pub mod config;
pub mod fields;
pub mod kind;
pub mod loader;
pub mod records;
pub mod sink;
pub mod tables;

mod writer;

pub use config::{EncoderConfig, EncoderConfigBuilder, FieldPolicy};
pub use fields::{FieldRule, Justify};
pub use kind::RecordKind;
pub use loader::ParameterLoader;
pub use records::{
    AcquirerParameters, CaPublicKey, ContactApplicationParameters, ContactlessApplicationParameters,
    DrlEntry, ExceptionEntry, ParameterRecord, RevocationEntry,
};
pub use sink::KernelSink;
pub use tables::{tags, FieldTable, EXTRA_TAGS};
