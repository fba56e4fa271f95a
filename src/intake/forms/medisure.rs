use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{FamilyMember, FamilyMemberDraft, IntakeError, LineItemId};
use super::super::fields::FieldStore;
use super::super::items::LineItemEditor;
use super::super::sink::SubmissionSink;

/// Primary-entity fields a family medisure quote must carry before
/// submission. The ID number is accepted as an opaque string.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "principal_name",
    "id_number",
    "phone",
    "email",
    "plan_type",
    "hospital_preference",
];

/// Finalized family medisure quote handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyMedisureQuote {
    pub principal_name: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub plan_type: String,
    pub hospital_preference: String,
    pub family_members: Vec<FamilyMember>,
    pub submitted_at: DateTime<Utc>,
}

/// Intake state for the family medisure quote form.
#[derive(Debug, Clone, Default)]
pub struct FamilyMedisureForm {
    fields: FieldStore,
    family: LineItemEditor<FamilyMemberDraft>,
    error: Option<IntakeError>,
    submitting: bool,
}

impl FamilyMedisureForm {
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

    /// Staging buffer for the dependant under construction; validation waits
    /// for [`FamilyMedisureForm::add_family_member`].
    pub fn member_draft(&self) -> &FamilyMemberDraft {
        self.family.staging()
    }

    pub fn member_draft_mut(&mut self) -> &mut FamilyMemberDraft {
        self.family.staging_mut()
    }

    pub fn family_members(&self) -> &[FamilyMember] {
        self.family.items()
    }

    /// Validate the staged dependant and append it to the collection.
    pub fn add_family_member(&mut self) -> Result<LineItemId, IntakeError> {
        match self.family.commit_staging() {
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

    /// Remove a committed dependant by identity; unknown identities are
    /// ignored.
    pub fn remove_family_member(&mut self, id: LineItemId) {
        self.family.remove(id);
    }

    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate, assemble, and emit the quote snapshot, then reset.
    pub fn submit<S>(&mut self, sink: &S) -> Result<(), IntakeError>
    where
        S: SubmissionSink<FamilyMedisureQuote>,
    {
        if self.submitting {
            return Ok(());
        }
        self.submitting = true;
        self.error = None;

        if self.fields.first_missing(&REQUIRED_FIELDS).is_some() {
            return Err(self.reject(IntakeError::MissingRequiredField {
                subject: "family medisure quote",
            }));
        }

        let quote = FamilyMedisureQuote {
            principal_name: self.fields.get("principal_name").to_string(),
            id_number: self.fields.get("id_number").to_string(),
            phone: self.fields.get("phone").to_string(),
            email: self.fields.get("email").to_string(),
            plan_type: self.fields.get("plan_type").to_string(),
            hospital_preference: self.fields.get("hospital_preference").to_string(),
            family_members: self.family.items().to_vec(),
            submitted_at: Utc::now(),
        };

        tracing::debug!(
            product = "family_medisure",
            dependants = quote.family_members.len(),
            "quote emitted"
        );
        sink.accept(quote);

        self.fields.reset();
        self.family.clear();
        self.error = None;
        self.submitting = false;
        Ok(())
    }

    fn reject(&mut self, error: IntakeError) -> IntakeError {
        tracing::debug!(product = "family_medisure", %error, "submission rejected");
        self.error = Some(error.clone());
        self.submitting = false;
        error
    }
}
