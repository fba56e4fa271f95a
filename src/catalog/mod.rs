//! Closed select-field vocabularies for the product forms.
//!
//! The catalog is externally supplied, read-only configuration: the forms
//! never consult it (a field store accepts any string), the presenting layer
//! does. A standard set ships built in and can be extended from a CSV export.

mod import;

pub use import::{CatalogImportError, CatalogImporter};

use serde::{Deserialize, Serialize};

/// Products offered through the quote intake forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteProduct {
    MarineCargo,
    GolfersSportsman,
    FamilyMedisure,
}

impl QuoteProduct {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::MarineCargo,
            Self::GolfersSportsman,
            Self::FamilyMedisure,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MarineCargo => "Marine Cargo",
            Self::GolfersSportsman => "Golfers & Sportsman",
            Self::FamilyMedisure => "Family Medisure",
        }
    }

    pub(crate) fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "marine_cargo" => Some(Self::MarineCargo),
            "golfers_sportsman" => Some(Self::GolfersSportsman),
            "family_medisure" => Some(Self::FamilyMedisure),
            _ => None,
        }
    }
}

/// One closed vocabulary: the options a select field offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub product: QuoteProduct,
    pub field: String,
    pub options: Vec<String>,
}

/// Read-only select-field options for every product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    vocabularies: Vec<Vocabulary>,
}

impl ProductCatalog {
    /// The built-in vocabularies shipped with the brokerage's product set.
    pub fn standard() -> Self {
        Self {
            vocabularies: standard_vocabularies(),
        }
    }

    /// Options for one select field, when the catalog knows it.
    pub fn options(&self, product: QuoteProduct, field: &str) -> Option<&[String]> {
        self.vocabularies
            .iter()
            .find(|vocabulary| vocabulary.product == product && vocabulary.field == field)
            .map(|vocabulary| vocabulary.options.as_slice())
    }

    /// Vocabularies for one product, in declaration order.
    pub fn vocabularies_for(&self, product: QuoteProduct) -> Vec<&Vocabulary> {
        self.vocabularies
            .iter()
            .filter(|vocabulary| vocabulary.product == product)
            .collect()
    }

    pub fn vocabularies(&self) -> &[Vocabulary] {
        &self.vocabularies
    }

    /// Append an option to a vocabulary, creating the vocabulary when the
    /// field is new. Duplicate options are ignored.
    pub(crate) fn push_option(&mut self, product: QuoteProduct, field: &str, option: String) {
        match self
            .vocabularies
            .iter_mut()
            .find(|vocabulary| vocabulary.product == product && vocabulary.field == field)
        {
            Some(vocabulary) => {
                if !vocabulary.options.iter().any(|existing| existing == &option) {
                    vocabulary.options.push(option);
                }
            }
            None => self.vocabularies.push(Vocabulary {
                product,
                field: field.to_string(),
                options: vec![option],
            }),
        }
    }
}

fn vocabulary(product: QuoteProduct, field: &str, options: &[&str]) -> Vocabulary {
    Vocabulary {
        product,
        field: field.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
    }
}

fn standard_vocabularies() -> Vec<Vocabulary> {
    vec![
        vocabulary(
            QuoteProduct::MarineCargo,
            "cargo_type",
            &[
                "General Cargo",
                "Containerized Goods",
                "Perishable Goods",
                "Machinery & Equipment",
                "Motor Vehicles",
                "Hazardous Materials",
            ],
        ),
        vocabulary(
            QuoteProduct::MarineCargo,
            "transport_mode",
            &["Sea Freight", "Air Freight", "Road Transport"],
        ),
        vocabulary(
            QuoteProduct::GolfersSportsman,
            "sport_type",
            &[
                "Golf",
                "Tennis",
                "Polo",
                "Target Shooting",
                "Fishing",
                "Cycling",
            ],
        ),
        vocabulary(
            QuoteProduct::GolfersSportsman,
            "coverage_type",
            &[
                "Equipment Only",
                "Personal Accident",
                "Third Party Liability",
                "Comprehensive",
            ],
        ),
        vocabulary(
            QuoteProduct::FamilyMedisure,
            "plan_type",
            &["Essential", "Standard", "Premium", "Executive"],
        ),
        vocabulary(
            QuoteProduct::FamilyMedisure,
            "hospital_preference",
            &[
                "Nairobi Hospital",
                "Aga Khan University Hospital",
                "Kenyatta National Hospital",
                "MP Shah Hospital",
                "Mater Misericordiae Hospital",
            ],
        ),
        vocabulary(
            QuoteProduct::FamilyMedisure,
            "relationship",
            &["Spouse", "Child", "Parent", "Sibling", "Other Dependant"],
        ),
    ]
}
