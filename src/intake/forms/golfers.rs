use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{EquipmentDraft, EquipmentEntry, IntakeError, LineItemId};
use super::super::fields::FieldStore;
use super::super::items::LineItemEditor;
use super::super::sink::SubmissionSink;

/// Primary-entity fields a golfers/sportsman quote must carry before
/// submission.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "full_name",
    "phone",
    "email",
    "sport_type",
    "coverage_type",
];

/// Finalized golfers/sportsman quote handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GolfersQuote {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub sport_type: String,
    pub coverage_type: String,
    pub equipment: Vec<EquipmentEntry>,
    pub equipment_total: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Intake state for the golfers/sportsman quote form.
#[derive(Debug, Clone, Default)]
pub struct GolfersForm {
    fields: FieldStore,
    equipment: LineItemEditor<EquipmentDraft>,
    error: Option<IntakeError>,
    submitting: bool,
}

impl GolfersForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Staging buffer for the equipment entry under construction; validation
    /// waits for [`GolfersForm::add_equipment`].
    pub fn equipment_draft(&self) -> &EquipmentDraft {
        self.equipment.staging()
    }

    pub fn equipment_draft_mut(&mut self) -> &mut EquipmentDraft {
        self.equipment.staging_mut()
    }

    pub fn equipment(&self) -> &[EquipmentEntry] {
        self.equipment.items()
    }

    /// Sum of the parsed values of every committed entry, recomputed from the
    /// collection on every call.
    pub fn equipment_total(&self) -> f64 {
        self.equipment.items().iter().map(EquipmentEntry::amount).sum()
    }

    /// Validate the staged entry and append it to the collection.
    ///
    /// Success clears the staging buffer and any visible error; failure sets
    /// the error slot and leaves both the buffer and the collection intact.
    pub fn add_equipment(&mut self) -> Result<LineItemId, IntakeError> {
        match self.equipment.commit_staging() {
            Ok(id) => {
                self.error = None;
                Ok(id)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Remove a committed entry by identity; unknown identities are ignored.
    pub fn remove_equipment(&mut self, id: LineItemId) {
        self.equipment.remove(id);
    }

    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate, assemble, and emit the quote snapshot, then reset.
    ///
    /// The snapshot carries the committed equipment entries and their total;
    /// a call arriving while another submit is in flight is ignored.
    pub fn submit<S>(&mut self, sink: &S) -> Result<(), IntakeError>
    where
        S: SubmissionSink<GolfersQuote>,
    {
        if self.submitting {
            return Ok(());
        }
        self.submitting = true;
        self.error = None;

        if self.fields.first_missing(&REQUIRED_FIELDS).is_some() {
            return Err(self.reject(IntakeError::MissingRequiredField {
                subject: "golfers/sportsman quote",
            }));
        }

        let equipment = self.equipment.items().to_vec();
        let equipment_total = self.equipment_total();

        let quote = GolfersQuote {
            full_name: self.fields.get("full_name").to_string(),
            phone: self.fields.get("phone").to_string(),
            email: self.fields.get("email").to_string(),
            sport_type: self.fields.get("sport_type").to_string(),
            coverage_type: self.fields.get("coverage_type").to_string(),
            equipment,
            equipment_total,
            submitted_at: Utc::now(),
        };

        tracing::debug!(
            product = "golfers_sportsman",
            items = quote.equipment.len(),
            equipment_total,
            "quote emitted"
        );
        sink.accept(quote);

        self.fields.reset();
        self.equipment.clear();
        self.error = None;
        self.submitting = false;
        Ok(())
    }

    fn reject(&mut self, error: IntakeError) -> IntakeError {
        tracing::debug!(product = "golfers_sportsman", %error, "submission rejected");
        self.error = Some(error.clone());
        self.submitting = false;
        error
    }
}
