use thiserror::Error;

/// Main error type for EMV parameter encoding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmvParamError {
    #[error("Odd hex length: {0:?} has {1} digits")]
    OddHexLength(String, usize),

    #[error("Invalid hex digit in {0:?}")]
    InvalidHex(String),

    #[error("Field {field} too long: {actual} bytes (max {max})")]
    FieldTooLong {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Buffer overflow: need {needed} bytes at offset {offset}, capacity {capacity}")]
    BufferOverflow {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    #[error("Truncated data: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid element: {0}")]
    InvalidElement(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid length encoding: {0}")]
    InvalidLength(String),

    #[error("Value too long: {0} bytes (max 65535)")]
    ValueTooLong(usize),

    #[error("Length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("Missing header value: {0}")]
    MissingHeaderValue(&'static str),

    #[error("Record header already set")]
    HeaderAlreadySet,

    #[error("Record already in progress: {0}")]
    RecordInProgress(String),

    #[error("No open record")]
    NoOpenRecord,

    #[error("Kernel sink error: {0}")]
    Sink(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for EMV parameter encoding operations
pub type EmvParamResult<T> = Result<T, EmvParamError>;
