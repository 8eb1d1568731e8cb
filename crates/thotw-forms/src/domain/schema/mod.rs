//! Field and record schemas

pub mod field;
pub mod record;

pub use field::{ErrorKind, FieldError, FieldSchema, DATE_FORMAT};
pub use record::{RecordSchema, RecordSchemaBuilder, Refinement, ValidatedRecord, ValidationErrors};
