//! Submission handling
//!
//! There is no backend behind the site yet. Accepted records are logged and
//! acknowledged with the text the patient expects to see.

use axum::http::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use thotw_forms::catalog::{
    BOOK_APPOINTMENT, CHANGE_PASSWORD, DONATION, EDIT_PROFILE, LOGIN, NOTIFICATION_PREFERENCES,
    REFUND_REQUEST, SIGN_UP,
};
use thotw_forms::{
    Acknowledgement, FormController, FormEvent, FormState, FormValues, HandlerError,
    RecordSchema, SubmitHandler, SubmitOutcome, ValidatedRecord,
};

use crate::error::Result;
use crate::forms::bind;

pub const ACCOUNT_DELETION_MESSAGE: &str = "Account deletion request has been submitted.";

pub fn acknowledgement_text(form: &str) -> &'static str {
    match form {
        SIGN_UP => "Account created successfully! Please check your email for verification.",
        LOGIN => "Login successful! Welcome back to THOTW.",
        BOOK_APPOINTMENT => {
            "Appointment request submitted successfully! We will contact you shortly to confirm."
        }
        DONATION => {
            "Thank you for your generous donation! We will process your contribution and send you a confirmation."
        }
        REFUND_REQUEST => {
            "Refund request submitted successfully! We will review your request and contact you within 3-5 business days."
        }
        EDIT_PROFILE => "Your profile has been successfully updated.",
        CHANGE_PASSWORD => "Your password has been successfully changed.",
        NOTIFICATION_PREFERENCES => "Your notification preferences have been saved.",
        _ => "Thank you! Your submission has been received.",
    }
}

/// Logs the record and returns the form's acknowledgement text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderHandler;

impl SubmitHandler for PlaceholderHandler {
    fn on_submit(
        &self,
        record: &ValidatedRecord,
    ) -> std::result::Result<Acknowledgement, HandlerError> {
        let filled = record.iter().filter(|(_, v)| !v.is_empty()).count();
        tracing::info!(form = record.form(), fields = filled, "submission accepted");
        Ok(Acknowledgement::new(acknowledgement_text(record.form())))
    }
}

/// Open a form at `baseline`, apply a posted body, submit it through
/// `handler` and hand back the resulting state.
pub fn process<H: SubmitHandler>(
    schema: Arc<RecordSchema>,
    handler: H,
    baseline: &FormValues,
    posted: &HashMap<String, String>,
) -> Result<(FormState, SubmitOutcome)> {
    let values = bind(&schema, posted);
    let mut controller = FormController::with_values(schema, handler, baseline);
    for (name, value) in values.iter() {
        controller.set_field_value(name, value.clone())?;
    }
    let outcome = controller.submit();
    log_events(&controller.take_events());
    Ok((controller.into_state(), outcome))
}

pub fn status_for(outcome: &SubmitOutcome) -> StatusCode {
    match outcome {
        SubmitOutcome::Accepted(_) => StatusCode::OK,
        SubmitOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(HandlerError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(HandlerError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn log_events(events: &[FormEvent]) {
    for event in events {
        match event {
            FormEvent::Submitted { form, reference, submitted_at } => {
                tracing::info!(%form, %reference, %submitted_at, "form submitted");
            }
            FormEvent::Rejected { form, error_count, fields } => {
                tracing::debug!(%form, error_count, ?fields, "form rejected");
            }
            FormEvent::Failed { form, reason } => {
                tracing::warn!(%form, %reason, "submission handler failed");
            }
            FormEvent::Reset { form } => {
                tracing::debug!(%form, "form reset");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thotw_forms::Catalog;

    fn posted(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_accepted_login_resets_state() {
        let catalog = Catalog::load().unwrap();
        let body = posted(&[("email", "john.doe@example.com"), ("password", "secret")]);
        let (state, outcome) =
            process(catalog.login.clone(), PlaceholderHandler, &FormValues::new(), &body).unwrap();

        assert_eq!(status_for(&outcome), StatusCode::OK);
        assert_eq!(
            state.acknowledgement().map(|a| a.message.as_str()),
            Some("Login successful! Welcome back to THOTW.")
        );
        assert_eq!(state.values().text("email"), "");
    }

    #[test]
    fn test_rejected_login_keeps_values() {
        let catalog = Catalog::load().unwrap();
        let body = posted(&[("email", "not-an-email")]);
        let (state, outcome) =
            process(catalog.login.clone(), PlaceholderHandler, &FormValues::new(), &body).unwrap();

        assert_eq!(status_for(&outcome), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.values().text("email"), "not-an-email");
        assert_eq!(state.error("password"), Some("Password is required"));
        assert!(state.acknowledgement().is_none());
    }

    #[test]
    fn test_handler_failure_status() {
        let catalog = Catalog::load().unwrap();
        let offline = |_: &ValidatedRecord| -> std::result::Result<Acknowledgement, HandlerError> {
            Err(HandlerError::Unavailable("mailer down".into()))
        };
        let body = posted(&[("email", "john.doe@example.com"), ("password", "secret")]);
        let (state, outcome) = process(catalog.login.clone(), offline, &FormValues::new(), &body).unwrap();

        assert_eq!(status_for(&outcome), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(state.form_error(), Some("service unavailable: mailer down"));
        assert_eq!(state.values().text("email"), "john.doe@example.com");
    }

    #[test]
    fn test_accepted_submit_returns_to_baseline() {
        let catalog = Catalog::load().unwrap();
        let body = posted(&[("promotions", "on")]);
        let (state, outcome) = process(
            catalog.notification_preferences.clone(),
            PlaceholderHandler,
            &crate::forms::notification_defaults(),
            &body,
        )
        .unwrap();

        assert!(outcome.is_accepted());
        assert!(state.values().flag("email"));
        assert!(!state.values().flag("promotions"));
    }

    #[test]
    fn test_every_form_has_its_own_acknowledgement() {
        let catalog = Catalog::load().unwrap();
        for form in [SIGN_UP, LOGIN, BOOK_APPOINTMENT, DONATION, REFUND_REQUEST, EDIT_PROFILE, CHANGE_PASSWORD, NOTIFICATION_PREFERENCES] {
            assert!(catalog.get(form).is_some());
            assert_ne!(acknowledgement_text(form), acknowledgement_text("unknown"));
        }
    }
}
