//! THOTW Forms
//!
//! Declarative validation for the patient-facing forms of the THOTW
//! healthcare site.
//!
//! ## Architecture
//!
//! - **Domain Layer**: field and record schemas, form state, form events
//! - **Ports Layer**: the submission handler a form hands valid records to
//! - **Catalog**: the concrete schemas used by the site
//!
//! ## Validation model
//!
//! - Values are raw text or flags until a record is submitted
//! - Every field is checked, then every cross-field refinement
//! - All failures are reported, never only the first

pub mod catalog;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use catalog::Catalog;
pub use domain::aggregates::{FormController, FormState, SubmitOutcome};
pub use domain::events::FormEvent;
pub use domain::schema::{
    ErrorKind, FieldError, FieldSchema, RecordSchema, RecordSchemaBuilder, Refinement,
    ValidatedRecord, ValidationErrors, DATE_FORMAT,
};
pub use domain::value_objects::{
    Email, EmailError, FieldKind, FieldValue, FormValues, Phone, PhoneError, TypedValue,
};
pub use ports::outbound::{Acknowledgement, HandlerError, SubmitHandler};

use thiserror::Error;

/// Schema construction and form mutation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormsError {
    #[error("form '{form}' has no field named '{field}'")]
    FieldNotFound { form: String, field: String },

    #[error("form '{form}' declares field '{field}' twice")]
    DuplicateField { form: String, field: String },

    #[error("form '{form}' has a refinement on unknown field '{field}'")]
    UnknownRefinementTarget { form: String, field: String },

    #[error("invalid pattern for field '{field}': {reason}")]
    InvalidPattern { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FormsError>;
