use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::IntakeError;
use super::super::fields::FieldStore;
use super::super::numeric;
use super::super::sink::SubmissionSink;

/// Primary-entity fields a marine cargo quote must carry before submission.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "company_name",
    "contact_person",
    "phone",
    "email",
    "cargo_type",
    "transport_mode",
    "origin",
    "destination",
    "cargo_value",
];

/// Finalized marine cargo quote handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarineCargoQuote {
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub cargo_type: String,
    pub transport_mode: String,
    pub origin: String,
    pub destination: String,
    pub cargo_value: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Intake state for the marine cargo quote form.
#[derive(Debug, Clone, Default)]
pub struct MarineCargoForm {
    fields: FieldStore,
    error: Option<IntakeError>,
    submitting: bool,
}

impl MarineCargoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one primary-entity field.
    pub fn set_field(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    /// Current value of a primary-entity field, or the empty default.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// The validation message currently visible, if any.
    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate, assemble, and emit the quote snapshot, then reset.
    ///
    /// A call arriving while another submit is in flight is ignored. On a
    /// validation failure the error slot is set and every field value is
    /// preserved; on success the sink receives the snapshot exactly once and
    /// the form returns to its default state.
    pub fn submit<S>(&mut self, sink: &S) -> Result<(), IntakeError>
    where
        S: SubmissionSink<MarineCargoQuote>,
    {
        if self.submitting {
            return Ok(());
        }
        self.submitting = true;
        self.error = None;

        if self.fields.first_missing(&REQUIRED_FIELDS).is_some() {
            return Err(self.reject(IntakeError::MissingRequiredField {
                subject: "marine cargo quote",
            }));
        }

        let cargo_value = match numeric::parse_amount("cargo value", self.fields.get("cargo_value"))
        {
            Ok(amount) => amount,
            Err(err) => return Err(self.reject(err)),
        };

        let quote = MarineCargoQuote {
            company_name: self.fields.get("company_name").to_string(),
            contact_person: self.fields.get("contact_person").to_string(),
            phone: self.fields.get("phone").to_string(),
            email: self.fields.get("email").to_string(),
            cargo_type: self.fields.get("cargo_type").to_string(),
            transport_mode: self.fields.get("transport_mode").to_string(),
            origin: self.fields.get("origin").to_string(),
            destination: self.fields.get("destination").to_string(),
            cargo_value,
            submitted_at: Utc::now(),
        };

        tracing::debug!(product = "marine_cargo", cargo_value, "quote emitted");
        sink.accept(quote);

        self.fields.reset();
        self.error = None;
        self.submitting = false;
        Ok(())
    }

    fn reject(&mut self, error: IntakeError) -> IntakeError {
        tracing::debug!(product = "marine_cargo", %error, "submission rejected");
        self.error = Some(error.clone());
        self.submitting = false;
        error
    }
}
