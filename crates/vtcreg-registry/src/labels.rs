//! Captions printed next to each value on a registry detail page.

pub const COMPANY_NAME: &str = "Dénomination";
pub const COMPANY_NUMBER: &str = "Numéro SIREN";
pub const REGISTRATION_NUMBER: &str = "Numéro d'inscription";
pub const CONTACT_FIRST_NAME: &str = "Prénom";
pub const CONTACT_LAST_NAME: &str = "Nom";
pub const CITY: &str = "Ville";
pub const ACRONYM: &str = "Sigle";
pub const EXPIRATION_DATE: &str = "Valide jusqu'au";
pub const LEGAL_ENTITY_TYPE: &str = "Statut";
pub const COMPANY_TYPE: &str = "Forme juridique";
pub const BRAND: &str = "Marque/Nom commercial";
pub const POSTAL_CODE: &str = "Code Postal";
pub const DEPARTMENT: &str = "Département";
pub const COUNTRY: &str = "Pays";
pub const INDIVIDUAL_TITLE: &str = "Civilité";
pub const INDIVIDUAL_FIRST_NAME: &str = "Prénom principal";
pub const INDIVIDUAL_LAST_NAME: &str = "Nom d'usage";

/// CSS selector matching every caption element.
pub const LABEL_SELECTOR: &str = ".cLabel";
