//! Encoder configuration

use emvparam_core::{EmvParamError, EmvParamResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest record or value capacity accepted by the builder
pub const MIN_CAPACITY: usize = 16;

/// Default capacity of a single field value
pub const DEFAULT_VALUE_CAPACITY: usize = 256;

/// How recoverable field errors are treated
///
/// `UnknownField`, `OddHexLength` and `InvalidHex` are recoverable: the
/// field can be dropped without affecting the rest of the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Report recoverable field errors to the caller
    #[default]
    Strict,
    /// Log recoverable field errors and skip the field
    Legacy,
}

impl FieldPolicy {
    /// Whether `error` is dropped with a warning under this policy
    pub fn tolerates(&self, error: &EmvParamError) -> bool {
        *self == FieldPolicy::Legacy
            && matches!(
                error,
                EmvParamError::UnknownField(_)
                    | EmvParamError::OddHexLength(..)
                    | EmvParamError::InvalidHex(_)
            )
    }
}

/// Encoder configuration builder
#[derive(Debug, Clone)]
pub struct EncoderConfigBuilder {
    field_policy: FieldPolicy,
    record_capacity: usize,
    value_capacity: usize,
}

impl EncoderConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        let defaults = EncoderConfig::default();
        Self {
            field_policy: defaults.field_policy,
            record_capacity: defaults.record_capacity,
            value_capacity: defaults.value_capacity,
        }
    }

    /// Set the field policy
    pub fn field_policy(mut self, policy: FieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    /// Set the record buffer capacity in bytes
    pub fn record_capacity(mut self, capacity: usize) -> Self {
        self.record_capacity = capacity;
        self
    }

    /// Set the maximum encoded length of a single value
    pub fn value_capacity(mut self, capacity: usize) -> Self {
        self.value_capacity = capacity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> EmvParamResult<EncoderConfig> {
        let config = EncoderConfig {
            field_policy: self.field_policy,
            record_capacity: self.record_capacity,
            value_capacity: self.value_capacity,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for EncoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoder configuration
///
/// Deserialized configurations should be checked with [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    field_policy: FieldPolicy,
    record_capacity: usize,
    value_capacity: usize,
}

impl EncoderConfig {
    /// Create a new configuration builder
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::new()
    }

    /// Default settings with [`FieldPolicy::Legacy`]
    pub fn legacy() -> Self {
        Self {
            field_policy: FieldPolicy::Legacy,
            ..Self::default()
        }
    }

    /// Get the field policy
    pub fn field_policy(&self) -> FieldPolicy {
        self.field_policy
    }

    /// Get the record buffer capacity
    pub fn record_capacity(&self) -> usize {
        self.record_capacity
    }

    /// Get the single value capacity
    pub fn value_capacity(&self) -> usize {
        self.value_capacity
    }

    /// Check capacity limits
    pub fn validate(&self) -> EmvParamResult<()> {
        if self.record_capacity < MIN_CAPACITY {
            return Err(EmvParamError::Config(format!(
                "record capacity {} below minimum {}",
                self.record_capacity, MIN_CAPACITY
            )));
        }
        if self.value_capacity < MIN_CAPACITY {
            return Err(EmvParamError::Config(format!(
                "value capacity {} below minimum {}",
                self.value_capacity, MIN_CAPACITY
            )));
        }
        if self.value_capacity > self.record_capacity {
            return Err(EmvParamError::Config(format!(
                "value capacity {} exceeds record capacity {}",
                self.value_capacity, self.record_capacity
            )));
        }
        Ok(())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            field_policy: FieldPolicy::Strict,
            record_capacity: emvparam_tlv::DEFAULT_RECORD_CAPACITY,
            value_capacity: DEFAULT_VALUE_CAPACITY,
        }
    }
}

impl fmt::Display for EncoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncoderConfig(policy={:?}, record={}, value={})",
            self.field_policy, self.record_capacity, self.value_capacity
        )
    }
}
