//! Outbound ports
//!
//! Whatever receives an accepted submission (a backend service, a mailer,
//! a placeholder acknowledgement) implements [`SubmitHandler`].

use crate::domain::schema::ValidatedRecord;
use serde::Serialize;
use uuid::Uuid;

/// Success handler port. Invoked once per accepted submission.
pub trait SubmitHandler {
    fn on_submit(&self, record: &ValidatedRecord) -> Result<Acknowledgement, HandlerError>;
}

impl<F> SubmitHandler for F
where
    F: Fn(&ValidatedRecord) -> Result<Acknowledgement, HandlerError>,
{
    fn on_submit(&self, record: &ValidatedRecord) -> Result<Acknowledgement, HandlerError> {
        self(record)
    }
}

/// Receipt returned by a handler for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub reference: Uuid,
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            message: message.into(),
        }
    }
}

/// Record-level failure reported by a handler. Shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Rejected(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}
