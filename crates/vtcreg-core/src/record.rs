//! The typed licensee record republished from a registry page.
//!
//! ## Serialized shape
//!
//! ```json
//! {
//!   "legal_entity_type": "COMPANY",
//!   "company": { "name": "TAXI BLEU", "company_type": "SAS", "contact": {} },
//!   "company_number": "123456789",
//!   "registration_number": "EVTC075180001",
//!   "expiration_date": "2026-01-01",
//!   "address": { "postal_code": "75011", "city": "PARIS" }
//! }
//! ```
//!
//! Individuals carry an `individual` object instead of `company`; an
//! unrecognised status serializes as `"OTHER"` with neither object. Absent
//! text fields and fallback enum values are omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocab::{BusinessEntityType, LegalEntityKind, PersonTitle, Vocabulary};

/// One licensee as read from a single registry page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseeRecord {
    #[serde(flatten)]
    pub legal_entity: LegalEntity,

    /// SIREN number. Never empty: a page without one is not a record.
    pub company_number: String,

    pub registration_number: String,

    /// `None` when the page had no date or an unparsable one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,

    pub address: Address,
}

impl LicenseeRecord {
    #[must_use]
    pub fn legal_entity_kind(&self) -> LegalEntityKind {
        self.legal_entity.kind()
    }

    #[must_use]
    pub fn company(&self) -> Option<&CompanyPayload> {
        match &self.legal_entity {
            LegalEntity::Company { company } => Some(company),
            _ => None,
        }
    }

    #[must_use]
    pub fn individual(&self) -> Option<&IndividualPayload> {
        match &self.legal_entity {
            LegalEntity::Individual { individual } => Some(individual),
            _ => None,
        }
    }
}

/// Licensee-kind specific details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "legal_entity_type", rename_all = "UPPERCASE")]
pub enum LegalEntity {
    Company {
        company: CompanyPayload,
    },
    Individual {
        individual: IndividualPayload,
    },
    #[serde(rename = "OTHER")]
    Unknown,
}

impl LegalEntity {
    #[must_use]
    pub fn kind(&self) -> LegalEntityKind {
        match self {
            Self::Company { .. } => LegalEntityKind::Company,
            Self::Individual { .. } => LegalEntityKind::Individual,
            Self::Unknown => LegalEntityKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Legal representative named on the page.
    pub contact: PersonName,
    #[serde(default, skip_serializing_if = "Vocabulary::is_fallback")]
    pub company_type: BusinessEntityType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualPayload {
    #[serde(default, skip_serializing_if = "Vocabulary::is_fallback")]
    pub title: PersonTitle,
    pub name: PersonName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
