//! Parameter record kinds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tables::{
    FieldTable, ACQUIRER_FIELDS, CA_PUBLIC_KEY_FIELDS, CONTACTLESS_APPLICATION_FIELDS,
    CONTACT_APPLICATION_FIELDS, DOMESTIC_ROUTING_LIST_FIELDS, EXCEPTION_LIST_FIELDS,
    REVOCATION_LIST_FIELDS,
};

/// Kind of configuration record handed to the EMV kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Terminal-wide acquirer parameters
    Acquirer,
    /// Contact EMV application parameters
    ContactApplication,
    /// Contactless application parameters
    ContactlessApplication,
    /// Certificate Authority public key
    CaPublicKey,
    /// Certificate revocation list entry
    RevocationList,
    /// Contactless domestic routing list entry
    DomesticRoutingList,
    /// PAN exception list entry
    ExceptionList,
}

impl RecordKind {
    /// Every record kind
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Acquirer,
        RecordKind::ContactApplication,
        RecordKind::ContactlessApplication,
        RecordKind::CaPublicKey,
        RecordKind::RevocationList,
        RecordKind::DomesticRoutingList,
        RecordKind::ExceptionList,
    ];

    /// Map a parameter file element name to its record kind
    pub fn from_element(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.element_name() == name)
    }

    /// Element name of this kind in parameter files
    pub fn element_name(&self) -> &'static str {
        match self {
            RecordKind::Acquirer => "AcquirerParameters",
            RecordKind::ContactApplication => "EmvApplication",
            RecordKind::ContactlessApplication => "ContactlessApplication",
            RecordKind::CaPublicKey => "CAPK",
            RecordKind::RevocationList => "RevocationList",
            RecordKind::DomesticRoutingList => "DRL",
            RecordKind::ExceptionList => "ExceptionList",
        }
    }

    /// Field name→tag table of this kind
    pub fn table(&self) -> &'static FieldTable {
        match self {
            RecordKind::Acquirer => &ACQUIRER_FIELDS,
            RecordKind::ContactApplication => &CONTACT_APPLICATION_FIELDS,
            RecordKind::ContactlessApplication => &CONTACTLESS_APPLICATION_FIELDS,
            RecordKind::CaPublicKey => &CA_PUBLIC_KEY_FIELDS,
            RecordKind::RevocationList => &REVOCATION_LIST_FIELDS,
            RecordKind::DomesticRoutingList => &DOMESTIC_ROUTING_LIST_FIELDS,
            RecordKind::ExceptionList => &EXCEPTION_LIST_FIELDS,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}
