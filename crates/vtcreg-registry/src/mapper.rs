//! Conversion from a [`LabelValueMap`] to a [`LicenseeRecord`].

use chrono::NaiveDate;
use vtcreg_core::{
    Address, BusinessEntityType, CompanyPayload, IndividualPayload, LegalEntity, LegalEntityKind,
    LicenseeRecord, PersonName, PersonTitle, Vocabulary,
};

use crate::error::RegistryError;
use crate::extract::LabelValueMap;
use crate::labels;

/// Date layout printed by the registry (`31/12/2025`).
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Builds a record from the captions found on a registry page.
///
/// Missing captions read as empty text. An empty status, or one outside the
/// known vocabulary, yields [`LegalEntity::Unknown`].
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] when the SIREN number is missing or
/// empty, which is how the registry signals a search without a match.
pub fn map_record(map: &LabelValueMap) -> Result<LicenseeRecord, RegistryError> {
    let company_number = map.get(labels::COMPANY_NUMBER);
    if company_number.is_empty() {
        return Err(RegistryError::NotFound);
    }

    let legal_entity = match LegalEntityKind::resolve(map.get(labels::LEGAL_ENTITY_TYPE)) {
        LegalEntityKind::Company => LegalEntity::Company {
            company: CompanyPayload {
                name: non_empty(map, labels::COMPANY_NAME),
                acronym: non_empty(map, labels::ACRONYM),
                brand: non_empty(map, labels::BRAND),
                contact: PersonName {
                    last_name: non_empty(map, labels::CONTACT_LAST_NAME),
                    first_name: non_empty(map, labels::CONTACT_FIRST_NAME),
                },
                company_type: BusinessEntityType::resolve(map.get(labels::COMPANY_TYPE)),
            },
        },
        LegalEntityKind::Individual => LegalEntity::Individual {
            individual: IndividualPayload {
                title: PersonTitle::resolve(map.get(labels::INDIVIDUAL_TITLE)),
                name: PersonName {
                    last_name: non_empty(map, labels::INDIVIDUAL_LAST_NAME),
                    first_name: non_empty(map, labels::INDIVIDUAL_FIRST_NAME),
                },
            },
        },
        LegalEntityKind::Unknown => LegalEntity::Unknown,
    };

    Ok(LicenseeRecord {
        legal_entity,
        company_number: company_number.to_owned(),
        registration_number: map.get(labels::REGISTRATION_NUMBER).to_owned(),
        expiration_date: parse_expiration_date(map.get(labels::EXPIRATION_DATE)),
        address: Address {
            postal_code: non_empty(map, labels::POSTAL_CODE),
            city: non_empty(map, labels::CITY),
            country: non_empty(map, labels::COUNTRY),
            department: non_empty(map, labels::DEPARTMENT),
        },
    })
}

/// Parses a `dd/mm/yyyy` expiration date.
///
/// Returns `None` for empty or malformed input instead of failing the whole
/// record. Malformed non-empty input is logged so broken pages stay visible.
#[must_use]
pub fn parse_expiration_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }

    // chrono accepts single-digit fields and short years; the registry
    // always prints `dd/mm/yyyy`, so anything else is malformed.
    if !has_date_shape(raw) {
        tracing::warn!(raw, "malformed expiration date; leaving it unset");
        return None;
    }

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(raw, error = %e, "unparsable expiration date; leaving it unset");
            None
        }
    }
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

fn non_empty(map: &LabelValueMap, label: &str) -> Option<String> {
    Some(map.get(label))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod tests;
