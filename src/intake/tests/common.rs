use std::sync::Mutex;

use crate::intake::domain::{EquipmentDraft, FamilyMemberDraft};
use crate::intake::forms::{FamilyMedisureForm, GolfersForm, MarineCargoForm};
use crate::intake::sink::SubmissionSink;

/// Sink recording every snapshot it receives so tests can assert on
/// exactly-once delivery and snapshot contents.
pub(super) struct RecordingSink<S> {
    events: Mutex<Vec<S>>,
}

impl<S> Default for RecordingSink<S> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<S: Clone> RecordingSink<S> {
    pub(super) fn events(&self) -> Vec<S> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl<S: Send> SubmissionSink<S> for RecordingSink<S> {
    fn accept(&self, snapshot: S) {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(snapshot);
    }
}

pub(super) fn filled_marine_form() -> MarineCargoForm {
    let mut form = MarineCargoForm::new();
    form.set_field("company_name", "Acme Ltd");
    form.set_field("contact_person", "J. Doe");
    form.set_field("phone", "+254700000000");
    form.set_field("email", "j@acme.com");
    form.set_field("cargo_type", "General Cargo");
    form.set_field("transport_mode", "Sea Freight");
    form.set_field("origin", "Mombasa");
    form.set_field("destination", "Durban");
    form.set_field("cargo_value", "1,000,000");
    form
}

pub(super) fn filled_golfers_form() -> GolfersForm {
    let mut form = GolfersForm::new();
    form.set_field("full_name", "A. Wanjiru");
    form.set_field("phone", "+254711111111");
    form.set_field("email", "a.wanjiru@example.com");
    form.set_field("sport_type", "Golf");
    form.set_field("coverage_type", "Comprehensive");
    form
}

pub(super) fn filled_medisure_form() -> FamilyMedisureForm {
    let mut form = FamilyMedisureForm::new();
    form.set_field("principal_name", "P. Otieno");
    form.set_field("id_number", "12345678");
    form.set_field("phone", "+254722222222");
    form.set_field("email", "p.otieno@example.com");
    form.set_field("plan_type", "Premium");
    form.set_field("hospital_preference", "Nairobi Hospital");
    form
}

pub(super) fn equipment_draft(
    equipment_type: &str,
    description: &str,
    value: &str,
) -> EquipmentDraft {
    EquipmentDraft {
        equipment_type: equipment_type.to_string(),
        description: description.to_string(),
        value: value.to_string(),
    }
}

pub(super) fn member_draft(name: &str, relationship: &str, date_of_birth: &str) -> FamilyMemberDraft {
    FamilyMemberDraft {
        name: name.to_string(),
        relationship: relationship.to_string(),
        date_of_birth: date_of_birth.to_string(),
    }
}
