//! Closed vocabularies recognised on registry pages.
//!
//! Each enum pairs its known values with the exact French phrase the registry
//! prints for them. Matching is byte-for-byte: no case folding, no accent
//! stripping, no trimming beyond what the extractor already did. Anything
//! outside the table resolves to the enum's fallback value.

use serde::{Deserialize, Serialize};

/// A closed enumeration resolvable from registry free text.
pub trait Vocabulary: Copy + PartialEq + 'static {
    /// Value returned when no phrase matches.
    const FALLBACK: Self;

    /// Ordered `(value, canonical phrase)` pairs.
    const PHRASES: &'static [(Self, &'static str)];

    /// Resolves `text` to the value whose phrase equals it exactly.
    fn resolve(text: &str) -> Self {
        Self::PHRASES
            .iter()
            .find(|(_, phrase)| *phrase == text)
            .map_or(Self::FALLBACK, |(value, _)| *value)
    }

    fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Civility printed for individual licensees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonTitle {
    #[default]
    Other,
    Mr,
    Mrs,
}

impl Vocabulary for PersonTitle {
    const FALLBACK: Self = Self::Other;
    const PHRASES: &'static [(Self, &'static str)] = &[(Self::Mr, "M."), (Self::Mrs, "Mme")];
}

/// Whether the licensee is a legal person or a natural person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegalEntityKind {
    #[default]
    #[serde(rename = "OTHER")]
    Unknown,
    Company,
    Individual,
}

impl Vocabulary for LegalEntityKind {
    const FALLBACK: Self = Self::Unknown;
    const PHRASES: &'static [(Self, &'static str)] = &[
        (Self::Company, "Personne morale"),
        (Self::Individual, "Personne physique"),
    ];
}

/// French legal business forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessEntityType {
    #[default]
    Other,
    Sa,
    Sarl,
    Sas,
    Sasu,
    Eurl,
}

impl Vocabulary for BusinessEntityType {
    const FALLBACK: Self = Self::Other;
    const PHRASES: &'static [(Self, &'static str)] = &[
        (Self::Sa, "Société anonyme"),
        (Self::Sarl, "Société à responsabilité limitée"),
        (Self::Sas, "Société par actions simplifiée"),
        (Self::Sasu, "Société par actions simplifiée unipersonnelle"),
        (Self::Eurl, "Entreprise unipersonnelle à responsabilité limitée"),
    ];
}
