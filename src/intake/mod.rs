//! Multi-entity form state for the product quote-intake forms.
//!
//! Each form owns scalar primary-entity fields ([`FieldStore`]), an optional
//! line-item collection with a staging buffer ([`LineItemEditor`]), a
//! single-slot validation error, and a submission pipeline that validates,
//! assembles an immutable snapshot, hands it to a [`SubmissionSink`] exactly
//! once, and resets. Forms never manage their own visibility; the modal
//! chrome toggling them is a host concern.

pub mod domain;
pub mod fields;
pub mod forms;
pub mod items;
mod numeric;
pub mod sink;

#[cfg(test)]
mod tests;

pub use domain::{
    EquipmentDraft, EquipmentEntry, FamilyMember, FamilyMemberDraft, IntakeError, LineItem,
    LineItemDraft, LineItemId,
};
pub use fields::FieldStore;
pub use forms::{
    FamilyMedisureForm, FamilyMedisureQuote, GolfersForm, GolfersQuote, MarineCargoForm,
    MarineCargoQuote,
};
pub use items::LineItemEditor;
pub use numeric::parse_amount;
pub use sink::SubmissionSink;
