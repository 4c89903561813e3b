//! Field name to EMV tag tables
//!
//! One immutable table per record kind, built on first use and shared
//! read-only afterwards. Tag values are the wire contract with the kernel.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Field name handled without a table lookup: the value is already
/// TLV-encoded and is appended verbatim
pub const EXTRA_TAGS: &str = "ExtraTags";

/// EMV and kernel-proprietary tags used by the record encoders
pub mod tags {
    // Application selection
    pub const AID: &str = "9F06";
    pub const APPLICATION_LABEL: &str = "50";
    pub const APPLICATION_VERSION_NUMBER: &str = "9F09";
    pub const APPLICATION_SELECTION_INDICATOR: &str = "1F01";

    // Acquirer and merchant
    pub const ACQUIRER_IDENTIFIER: &str = "9F01";
    pub const MERCHANT_CATEGORY_CODE: &str = "9F15";
    pub const MERCHANT_ID: &str = "9F16";
    pub const TERMINAL_ID: &str = "9F1C";
    pub const IFD_SERIAL_NUMBER: &str = "9F1E";
    pub const MERCHANT_NAME_LOCATION: &str = "9F4E";

    // Terminal
    pub const TERMINAL_COUNTRY_CODE: &str = "9F1A";
    pub const TERMINAL_CAPABILITIES: &str = "9F33";
    pub const ADDITIONAL_TERMINAL_CAPABILITIES: &str = "9F40";
    pub const TERMINAL_TYPE: &str = "9F35";
    pub const TERMINAL_FLOOR_LIMIT: &str = "9F1B";
    pub const TERMINAL_RISK_MANAGEMENT_DATA: &str = "9F1D";
    pub const TERMINAL_TRANSACTION_QUALIFIERS: &str = "9F66";

    // Currency
    pub const CURRENCY_CODE: &str = "5F2A";
    pub const CURRENCY_EXPONENT: &str = "5F36";
    pub const REFERENCE_CURRENCY_CODE: &str = "9F3C";
    pub const REFERENCE_CURRENCY_EXPONENT: &str = "9F3D";

    // Terminal risk management (kernel proprietary)
    pub const TARGET_PERCENTAGE: &str = "1F02";
    pub const MAX_TARGET_PERCENTAGE: &str = "1F03";
    pub const TAC_DEFAULT: &str = "1F04";
    pub const TAC_DENIAL: &str = "1F05";
    pub const TAC_ONLINE: &str = "1F06";
    pub const THRESHOLD_VALUE: &str = "1F07";
    pub const DEFAULT_DDOL: &str = "1F08";
    pub const DEFAULT_TDOL: &str = "1F09";

    // Contactless limits (kernel proprietary)
    pub const CL_TRANSACTION_LIMIT: &str = "1F0A";
    pub const CL_CVM_REQUIRED_LIMIT: &str = "1F0B";
    pub const CL_FLOOR_LIMIT: &str = "1F0C";
    pub const STATUS_CHECK_SUPPORTED: &str = "1F0D";
    pub const ZERO_AMOUNT_ALLOWED: &str = "1F0E";
    pub const EXTENDED_SELECTION_SUPPORTED: &str = "1F0F";
    pub const KERNEL_ID: &str = "1F60";
    pub const TRANSACTION_TYPE_GROUP: &str = "1F61";

    // CA public keys and revocation
    pub const CAPK_INDEX: &str = "9F22";
    pub const CAPK_KEY_ALGORITHM: &str = "1F42";
    pub const CAPK_HASH_ALGORITHM: &str = "1F43";
    pub const CAPK_CHECKSUM: &str = "1F44";
    pub const CAPK_EXPONENT: &str = "1F45";
    pub const CAPK_MODULUS: &str = "1F46";
    pub const CAPK_EXPIRY_DATE: &str = "1F47";
    pub const CERTIFICATE_SERIAL_NUMBER: &str = "1F50";

    // Domestic routing list and exception list
    pub const PROGRAM_ID: &str = "9F5A";
    pub const PAN: &str = "5A";
    pub const PAN_SEQUENCE_NUMBER: &str = "5F34";

    // PayPass kernel terminal action codes
    pub const PAYPASS_TAC_DEFAULT: &str = "DF8120";
    pub const PAYPASS_TAC_DENIAL: &str = "DF8121";
    pub const PAYPASS_TAC_ONLINE: &str = "DF8122";
}

/// Immutable name→tag mapping for one record kind
#[derive(Debug)]
pub struct FieldTable {
    entries: HashMap<&'static str, &'static str>,
}

impl FieldTable {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Tag for `name`, if the field is known to this record kind
    pub fn tag_for(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }

    /// Whether `name` is either in the table or handled specially
    pub fn accepts(&self, name: &str) -> bool {
        name == EXTRA_TAGS || self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in unspecified order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

pub static ACQUIRER_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("AcquirerIdentifier", tags::ACQUIRER_IDENTIFIER),
        ("MerchantCategoryCode", tags::MERCHANT_CATEGORY_CODE),
        ("MerchantIdentifier", tags::MERCHANT_ID),
        ("TerminalIdentification", tags::TERMINAL_ID),
        ("IFDSerialNumber", tags::IFD_SERIAL_NUMBER),
        ("MerchantNameAndLocation", tags::MERCHANT_NAME_LOCATION),
        ("TerminalCountryCode", tags::TERMINAL_COUNTRY_CODE),
        ("TransactionCurrencyCode", tags::CURRENCY_CODE),
        ("TransactionCurrencyExponent", tags::CURRENCY_EXPONENT),
        ("TransactionReferenceCurrencyCode", tags::REFERENCE_CURRENCY_CODE),
        ("TransactionReferenceCurrencyExponent", tags::REFERENCE_CURRENCY_EXPONENT),
        ("TerminalCapabilities", tags::TERMINAL_CAPABILITIES),
        ("AdditionalTerminalCapabilities", tags::ADDITIONAL_TERMINAL_CAPABILITIES),
        ("TerminalType", tags::TERMINAL_TYPE),
    ])
});

pub static CONTACT_APPLICATION_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("ApplicationIdentifier", tags::AID),
        ("ApplicationSelectionIndicator", tags::APPLICATION_SELECTION_INDICATOR),
        ("ApplicationLabel", tags::APPLICATION_LABEL),
        ("ApplicationVersionNumber", tags::APPLICATION_VERSION_NUMBER),
        ("TerminalFloorLimit", tags::TERMINAL_FLOOR_LIMIT),
        ("ThresholdValue", tags::THRESHOLD_VALUE),
        ("TargetPercentage", tags::TARGET_PERCENTAGE),
        ("MaxTargetPercentage", tags::MAX_TARGET_PERCENTAGE),
        ("TerminalActionCodeDefault", tags::TAC_DEFAULT),
        ("TerminalActionCodeDenial", tags::TAC_DENIAL),
        ("TerminalActionCodeOnline", tags::TAC_ONLINE),
        ("DefaultDDOL", tags::DEFAULT_DDOL),
        ("DefaultTDOL", tags::DEFAULT_TDOL),
        ("TerminalCapabilities", tags::TERMINAL_CAPABILITIES),
        ("AdditionalTerminalCapabilities", tags::ADDITIONAL_TERMINAL_CAPABILITIES),
        ("TerminalType", tags::TERMINAL_TYPE),
        ("TerminalCountryCode", tags::TERMINAL_COUNTRY_CODE),
        ("TransactionCurrencyCode", tags::CURRENCY_CODE),
        ("TransactionCurrencyExponent", tags::CURRENCY_EXPONENT),
        ("MerchantCategoryCode", tags::MERCHANT_CATEGORY_CODE),
        ("TerminalRiskManagementData", tags::TERMINAL_RISK_MANAGEMENT_DATA),
    ])
});

pub static CONTACTLESS_APPLICATION_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("ApplicationIdentifier", tags::AID),
        ("KernelID", tags::KERNEL_ID),
        ("TransactionTypeGroup", tags::TRANSACTION_TYPE_GROUP),
        ("ApplicationLabel", tags::APPLICATION_LABEL),
        ("ApplicationVersionNumber", tags::APPLICATION_VERSION_NUMBER),
        ("TerminalFloorLimit", tags::TERMINAL_FLOOR_LIMIT),
        ("TerminalActionCodeDefault", tags::TAC_DEFAULT),
        ("TerminalActionCodeDenial", tags::TAC_DENIAL),
        ("TerminalActionCodeOnline", tags::TAC_ONLINE),
        ("TerminalCapabilities", tags::TERMINAL_CAPABILITIES),
        ("AdditionalTerminalCapabilities", tags::ADDITIONAL_TERMINAL_CAPABILITIES),
        ("TerminalType", tags::TERMINAL_TYPE),
        ("TerminalCountryCode", tags::TERMINAL_COUNTRY_CODE),
        ("TransactionCurrencyCode", tags::CURRENCY_CODE),
        ("TransactionCurrencyExponent", tags::CURRENCY_EXPONENT),
        ("MerchantCategoryCode", tags::MERCHANT_CATEGORY_CODE),
        ("TerminalTransactionQualifiers", tags::TERMINAL_TRANSACTION_QUALIFIERS),
        ("TerminalRiskManagementData", tags::TERMINAL_RISK_MANAGEMENT_DATA),
        ("ContactlessTransactionLimit", tags::CL_TRANSACTION_LIMIT),
        ("ContactlessCVMRequiredLimit", tags::CL_CVM_REQUIRED_LIMIT),
        ("ContactlessFloorLimit", tags::CL_FLOOR_LIMIT),
        ("StatusCheckSupported", tags::STATUS_CHECK_SUPPORTED),
        ("ZeroAmountAllowed", tags::ZERO_AMOUNT_ALLOWED),
        ("ExtendedSelectionSupported", tags::EXTENDED_SELECTION_SUPPORTED),
        ("DefaultDDOL", tags::DEFAULT_DDOL),
        ("DefaultUDOL", "DF811A"),
        ("MagStripeApplicationVersionNumber", "9F6D"),
        ("MobileSupportIndicator", "9F7E"),
        ("CardDataInputCapability", "DF8117"),
        ("CVMCapabilityCVMRequired", "DF8118"),
        ("CVMCapabilityNoCVMRequired", "DF8119"),
        ("KernelConfiguration", "DF811B"),
        ("MaxLifetimeOfTornTransactionLogRecord", "DF811C"),
        ("MaxNumberOfTornTransactionLogRecords", "DF811D"),
        ("MagStripeCVMCapabilityCVMRequired", "DF811E"),
        ("SecurityCapability", "DF811F"),
        ("ReaderContactlessFloorLimit", "DF8123"),
        ("ReaderContactlessTransactionLimitNoOnDeviceCVM", "DF8124"),
        ("ReaderContactlessTransactionLimitOnDeviceCVM", "DF8125"),
        ("ReaderCVMRequiredLimit", "DF8126"),
        ("TimeOutValue", "DF8127"),
        ("MagStripeCVMCapabilityNoCVMRequired", "DF812C"),
        ("MessageHoldTime", "DF812D"),
        ("HoldTimeValue", "DF8130"),
        ("PhoneMessageTable", "DF8131"),
        ("MinimumRelayResistanceGracePeriod", "DF8132"),
        ("MaximumRelayResistanceGracePeriod", "DF8133"),
        ("TerminalExpectedTransmissionTimeForRelayResistanceCAPDU", "DF8134"),
        ("TerminalExpectedTransmissionTimeForRelayResistanceRAPDU", "DF8135"),
        ("RelayResistanceAccuracyThreshold", "DF8136"),
        ("RelayResistanceTransmissionTimeMismatchThreshold", "DF8137"),
    ])
});

pub static CA_PUBLIC_KEY_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("RID", tags::AID),
        ("KeyIndex", tags::CAPK_INDEX),
        ("KeyAlgorithmIndicator", tags::CAPK_KEY_ALGORITHM),
        ("HashAlgorithmIndicator", tags::CAPK_HASH_ALGORITHM),
        ("Checksum", tags::CAPK_CHECKSUM),
        ("Exponent", tags::CAPK_EXPONENT),
        ("Modulus", tags::CAPK_MODULUS),
        ("ExpiryDate", tags::CAPK_EXPIRY_DATE),
    ])
});

pub static REVOCATION_LIST_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("RID", tags::AID),
        ("KeyIndex", tags::CAPK_INDEX),
        ("CertificateSerialNumber", tags::CERTIFICATE_SERIAL_NUMBER),
    ])
});

pub static DOMESTIC_ROUTING_LIST_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("ProgramID", tags::PROGRAM_ID),
        ("KernelID", tags::KERNEL_ID),
        ("ContactlessTransactionLimit", tags::CL_TRANSACTION_LIMIT),
        ("ContactlessCVMRequiredLimit", tags::CL_CVM_REQUIRED_LIMIT),
        ("ContactlessFloorLimit", tags::CL_FLOOR_LIMIT),
        ("StatusCheckSupported", tags::STATUS_CHECK_SUPPORTED),
        ("ZeroAmountAllowed", tags::ZERO_AMOUNT_ALLOWED),
    ])
});

pub static EXCEPTION_LIST_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(&[
        ("PAN", tags::PAN),
        ("PANSequenceNumber", tags::PAN_SEQUENCE_NUMBER),
    ])
});
