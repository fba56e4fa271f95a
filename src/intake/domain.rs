use serde::{Deserialize, Serialize};

use super::numeric;

/// Identity token for a committed line item.
///
/// Unique per session, assigned at commit time, never reused after removal.
/// Distinct from any business key; it only addresses entries for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemId(pub u64);

/// Validation failures raised by commit and submit checks.
///
/// At most one is visible on a form at a time; a new validation attempt
/// overwrites the previous value. Neither kind is fatal: the user corrects
/// the input and triggers the action again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{subject}: please fill in all required fields")]
    MissingRequiredField { subject: &'static str },
    #[error("{field} must be a positive amount")]
    InvalidNumericValue { field: &'static str },
}

/// Committed entry in a line-item collection.
pub trait LineItem: std::fmt::Debug + Clone {
    fn id(&self) -> LineItemId;
}

/// Staging-buffer contract: a draft validates itself and promotes into a
/// committed line item carrying a fresh identity. Promotion must not mutate
/// the draft, so a failed commit leaves the buffer byte-for-byte intact.
pub trait LineItemDraft: std::fmt::Debug + Clone + Default + PartialEq {
    type Item: LineItem;

    fn promote(&self, id: LineItemId) -> Result<Self::Item, IntakeError>;
}

/// In-progress dependant entry, mutated attribute-by-attribute from the
/// family medisure form. Date of birth stays an opaque string; the source
/// system never imposed a format on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FamilyMemberDraft {
    pub name: String,
    pub relationship: String,
    pub date_of_birth: String,
}

/// Committed dependant on a family medisure quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMember {
    pub id: LineItemId,
    pub name: String,
    pub relationship: String,
    pub date_of_birth: String,
}

impl LineItem for FamilyMember {
    fn id(&self) -> LineItemId {
        self.id
    }
}

impl LineItemDraft for FamilyMemberDraft {
    type Item = FamilyMember;

    fn promote(&self, id: LineItemId) -> Result<FamilyMember, IntakeError> {
        if self.name.trim().is_empty()
            || self.relationship.trim().is_empty()
            || self.date_of_birth.trim().is_empty()
        {
            return Err(IntakeError::MissingRequiredField {
                subject: "family member",
            });
        }

        Ok(FamilyMember {
            id,
            name: self.name.clone(),
            relationship: self.relationship.clone(),
            date_of_birth: self.date_of_birth.clone(),
        })
    }
}

/// In-progress equipment entry for the golfers/sportsman form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EquipmentDraft {
    pub equipment_type: String,
    pub description: String,
    pub value: String,
}

/// Committed equipment entry.
///
/// `value` holds the stripped numeric text (e.g. "KES 50,000" commits as
/// "50000"); the monetary amount is re-derived from it on demand rather than
/// stored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentEntry {
    pub id: LineItemId,
    pub equipment_type: String,
    pub description: String,
    pub value: String,
}

impl EquipmentEntry {
    /// Parsed monetary value. Commit validation guarantees the stored text
    /// parses; a hand-built entry with garbage text contributes zero.
    pub fn amount(&self) -> f64 {
        self.value.parse().unwrap_or_default()
    }
}

impl LineItem for EquipmentEntry {
    fn id(&self) -> LineItemId {
        self.id
    }
}

impl LineItemDraft for EquipmentDraft {
    type Item = EquipmentEntry;

    fn promote(&self, id: LineItemId) -> Result<EquipmentEntry, IntakeError> {
        if self.equipment_type.trim().is_empty()
            || self.description.trim().is_empty()
            || self.value.trim().is_empty()
        {
            return Err(IntakeError::MissingRequiredField {
                subject: "equipment item",
            });
        }

        numeric::parse_amount("equipment value", &self.value)?;

        Ok(EquipmentEntry {
            id,
            equipment_type: self.equipment_type.clone(),
            description: self.description.clone(),
            value: numeric::strip_formatting(&self.value),
        })
    }
}
