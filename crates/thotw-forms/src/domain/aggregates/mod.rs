//! Form Aggregate
//!
//! [`FormController`] binds an immutable [`RecordSchema`] to the live state
//! of one form instance and mediates submission. Values are stored as-is on
//! change; validation only happens on submit. Accepted submissions and
//! [`FormController::reset`] return the values to the baseline the form was
//! opened with.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::events::FormEvent;
use crate::domain::schema::{RecordSchema, ValidationErrors};
use crate::domain::value_objects::{FieldValue, FormValues};
use crate::ports::outbound::{Acknowledgement, HandlerError, SubmitHandler};
use crate::{FormsError, Result};

/// Mutable per-instance state: current values and current error messages.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: FormValues,
    errors: HashMap<String, Vec<String>>,
    form_error: Option<String>,
    acknowledgement: Option<Acknowledgement>,
}

impl FormState {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// First error message for `name`, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .and_then(|m| m.first())
            .map(String::as_str)
    }

    /// Every error message for `name`, in the order they were found.
    pub fn messages(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Record-level error reported by the success handler.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Receipt from the last accepted submission.
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }
}

/// Result of [`FormController::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handler ran and accepted the record; state was reset.
    Accepted(Acknowledgement),
    /// Validation failed; handler was not invoked.
    Rejected(ValidationErrors),
    /// Handler ran and reported a record-level failure; values kept.
    Failed(HandlerError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Runtime binder between a schema, live values and a success handler.
pub struct FormController<H> {
    schema: Arc<RecordSchema>,
    handler: H,
    baseline: FormValues,
    state: FormState,
    events: Vec<FormEvent>,
}

impl<H: SubmitHandler> FormController<H> {
    /// New form instance with every field at its untouched default.
    pub fn new(schema: Arc<RecordSchema>, handler: H) -> Self {
        let baseline = schema.defaults();
        Self {
            schema,
            handler,
            state: FormState {
                values: baseline.clone(),
                ..FormState::default()
            },
            baseline,
            events: vec![],
        }
    }

    /// New form instance pre-filled with `initial`, which also becomes the
    /// baseline for resets. Unknown names are ignored.
    pub fn with_values(schema: Arc<RecordSchema>, handler: H, initial: &FormValues) -> Self {
        let mut controller = Self::new(schema, handler);
        for (name, value) in initial.iter() {
            if controller.schema.contains(name) {
                controller.baseline.set(name, value.clone());
            }
        }
        controller.state.values = controller.baseline.clone();
        controller
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    /// Store a new value. Does not revalidate.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        if !self.schema.contains(name) {
            return Err(FormsError::FieldNotFound {
                form: self.schema.form().to_string(),
                field: name.to_string(),
            });
        }
        self.state.values.set(name, value);
        Ok(())
    }

    /// Flip a boolean field.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let next = !self.state.values.flag(name);
        self.set_field_value(name, next)?;
        Ok(next)
    }

    /// Validate the whole record; on success hand it to the handler and
    /// reset the state.
    pub fn submit(&mut self) -> SubmitOutcome {
        let form = self.schema.form().to_string();
        self.state.form_error = None;
        self.state.acknowledgement = None;

        let record = match self.schema.validate_record(&self.state.values) {
            Ok(record) => record,
            Err(errors) => {
                self.state.errors.clear();
                for e in errors.iter() {
                    self.state
                        .errors
                        .entry(e.field.clone())
                        .or_default()
                        .push(e.message.clone());
                }
                tracing::debug!(form = %form, errors = errors.len(), "form rejected");
                self.events.push(FormEvent::Rejected {
                    form,
                    error_count: errors.len(),
                    fields: errors.fields().into_iter().map(String::from).collect(),
                });
                return SubmitOutcome::Rejected(errors);
            }
        };

        self.state.errors.clear();
        match self.handler.on_submit(&record) {
            Ok(ack) => {
                self.clear_values();
                self.state.acknowledgement = Some(ack.clone());
                self.events.push(FormEvent::Submitted {
                    form,
                    reference: ack.reference,
                    submitted_at: Utc::now(),
                });
                SubmitOutcome::Accepted(ack)
            }
            Err(e) => {
                self.state.form_error = Some(e.to_string());
                self.events.push(FormEvent::Failed {
                    form,
                    reason: e.to_string(),
                });
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Discard values, errors and any acknowledgement.
    pub fn reset(&mut self) {
        self.clear_values();
        self.state.form_error = None;
        self.state.acknowledgement = None;
        self.events.push(FormEvent::Reset {
            form: self.schema.form().to_string(),
        });
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    fn clear_values(&mut self) {
        self.state.values = self.baseline.clone();
        self.state.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{FieldSchema, ValidatedRecord};
    use std::cell::Cell;

    fn contact_schema() -> Arc<RecordSchema> {
        Arc::new(
            RecordSchema::builder("contact")
                .field(FieldSchema::text("firstName").min_length(2).message("First name must be at least 2 characters"))
                .field(FieldSchema::email("email").required().message("Please enter a valid email address"))
                .field(FieldSchema::boolean("subscribe"))
                .build()
                .unwrap(),
        )
    }

    fn ack(_: &ValidatedRecord) -> std::result::Result<Acknowledgement, HandlerError> {
        Ok(Acknowledgement::new("Thanks"))
    }

    #[test]
    fn test_starts_untouched() {
        let form = FormController::new(contact_schema(), ack);
        assert_eq!(form.state().values().text("firstName"), "");
        assert!(!form.state().values().flag("subscribe"));
        assert!(!form.state().has_errors());
    }

    #[test]
    fn test_set_value_does_not_validate() {
        let mut form = FormController::new(contact_schema(), ack);
        form.set_field_value("email", "nope").unwrap();
        assert!(form.state().error("email").is_none());
    }

    #[test]
    fn test_unknown_field() {
        let mut form = FormController::new(contact_schema(), ack);
        let err = form.set_field_value("nickname", "x").unwrap_err();
        assert!(matches!(err, FormsError::FieldNotFound { .. }));
    }

    #[test]
    fn test_valid_submit_invokes_handler_once_and_resets() {
        let calls = Cell::new(0);
        let handler = |record: &ValidatedRecord| -> std::result::Result<Acknowledgement, HandlerError> {
            calls.set(calls.get() + 1);
            assert_eq!(record.text("email").as_deref(), Some("maria@example.com"));
            Ok(Acknowledgement::new("Thanks"))
        };
        let mut form = FormController::new(contact_schema(), handler);
        form.set_field_value("firstName", "Maria").unwrap();
        form.set_field_value("email", "maria@example.com").unwrap();

        let outcome = form.submit();

        assert!(outcome.is_accepted());
        assert_eq!(calls.get(), 1);
        assert_eq!(form.state().values().text("firstName"), "");
        assert_eq!(form.state().values().text("email"), "");
        assert!(!form.state().has_errors());
        assert_eq!(form.state().acknowledgement().unwrap().message, "Thanks");
    }

    #[test]
    fn test_invalid_submit_never_invokes_handler() {
        let calls = Cell::new(0);
        let handler = |_: &ValidatedRecord| -> std::result::Result<Acknowledgement, HandlerError> {
            calls.set(calls.get() + 1);
            Ok(Acknowledgement::new("Thanks"))
        };
        let mut form = FormController::new(contact_schema(), handler);
        form.set_field_value("firstName", "Maria").unwrap();
        form.set_field_value("email", "not-an-email").unwrap();

        let outcome = form.submit();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(calls.get(), 0);
        assert_eq!(form.state().error("email"), Some("Please enter a valid email address"));
        assert!(form.state().error("firstName").is_none());
        assert!(form.state().error("subscribe").is_none());
        assert_eq!(form.state().values().text("email"), "not-an-email");
    }

    #[test]
    fn test_resubmit_clears_stale_errors() {
        let mut form = FormController::new(contact_schema(), ack);
        form.submit();
        assert_eq!(form.state().error_count(), 2);

        form.set_field_value("firstName", "Jo").unwrap();
        form.submit();
        assert!(form.state().error("firstName").is_none());
        assert!(form.state().error("email").is_some());
    }

    #[test]
    fn test_handler_failure_keeps_values() {
        let failing = |_: &ValidatedRecord| -> std::result::Result<Acknowledgement, HandlerError> {
            Err(HandlerError::Unavailable("backend offline".into()))
        };
        let mut form = FormController::new(contact_schema(), failing);
        form.set_field_value("firstName", "Maria").unwrap();
        form.set_field_value("email", "maria@example.com").unwrap();

        let outcome = form.submit();

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.state().form_error(), Some("service unavailable: backend offline"));
        assert_eq!(form.state().values().text("firstName"), "Maria");
    }

    #[test]
    fn test_with_values_prefills_known_fields() {
        let initial = FormValues::new().with("firstName", "John").with("unknown", "x");
        let form = FormController::with_values(contact_schema(), ack, &initial);
        assert_eq!(form.state().values().text("firstName"), "John");
        assert!(form.state().value("unknown").is_none());
    }

    #[test]
    fn test_accepted_submit_returns_to_baseline() {
        let initial = FormValues::new().with("firstName", "John").with("email", "john.doe@example.com");
        let mut form = FormController::with_values(contact_schema(), ack, &initial);
        form.set_field_value("firstName", "Johnny").unwrap();

        assert!(form.submit().is_accepted());
        assert_eq!(form.state().values().text("firstName"), "John");

        form.set_field_value("email", "x").unwrap();
        form.reset();
        assert_eq!(form.state().values().text("email"), "john.doe@example.com");
    }

    #[test]
    fn test_toggle_flag() {
        let mut form = FormController::new(contact_schema(), ack);
        assert!(form.toggle("subscribe").unwrap());
        assert!(!form.toggle("subscribe").unwrap());
    }

    #[test]
    fn test_events_recorded() {
        let mut form = FormController::new(contact_schema(), ack);
        form.submit();
        form.reset();
        let events = form.take_events();
        assert!(matches!(events[0], FormEvent::Rejected { error_count: 2, .. }));
        assert!(matches!(events[1], FormEvent::Reset { .. }));
        assert!(form.take_events().is_empty());
    }
}
