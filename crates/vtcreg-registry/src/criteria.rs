//! Advanced-search criteria and their form encoding.

/// Filters accepted by the registry's advanced search.
///
/// Unset criteria are submitted as empty strings; the form always carries
/// every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub registration_number: Option<String>,
    pub person_name: Option<String>,
    pub company_name: Option<String>,
    pub company_number: Option<String>,
    pub acronym: Option<String>,
    pub brand: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub department: Option<String>,
}

/// Form field that selects the search action; its value is the button label.
pub const SUBMIT_FIELD: &str = "action:/public/rechercheExploitant.liste.avancee";
pub const SUBMIT_VALUE: &str = "Rechercher";

impl SearchCriteria {
    #[must_use]
    pub fn by_company_number(company_number: impl Into<String>) -> Self {
        Self {
            company_number: Some(company_number.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_registration_number(registration_number: impl Into<String>) -> Self {
        Self {
            registration_number: Some(registration_number.into()),
            ..Self::default()
        }
    }

    /// The complete form body, in the order the registry's own form sends it.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            (
                "rechercheCriteres.numeroInscription",
                or_empty(self.registration_number.as_deref()),
            ),
            (
                "rechercheCriteres.nomRepresentantLegal",
                or_empty(self.person_name.as_deref()),
            ),
            (
                "rechercheCriteres.nomDenomination",
                or_empty(self.company_name.as_deref()),
            ),
            (
                "rechercheCriteres.numeroSiren",
                or_empty(self.company_number.as_deref()),
            ),
            ("rechercheCriteres.sigle", or_empty(self.acronym.as_deref())),
            ("rechercheCriteres.marque", or_empty(self.brand.as_deref())),
            ("rechercheCriteres.autreFormeJuridique", ""),
            ("rechercheCriteres.idFormeJuridique", ""),
            ("rechercheCriteres.ville", or_empty(self.city.as_deref())),
            ("rechercheCriteres.idPays", ""),
            (
                "rechercheCriteres.codePostal",
                or_empty(self.postal_code.as_deref()),
            ),
            ("rechercheCriteres.idRegion", ""),
            (
                "rechercheCriteres.idDepartement",
                or_empty(self.department.as_deref()),
            ),
            (SUBMIT_FIELD, SUBMIT_VALUE),
        ]
    }
}

fn or_empty(field: Option<&str>) -> &str {
    field.unwrap_or_default()
}
