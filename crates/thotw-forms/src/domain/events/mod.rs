//! Form events
//!
//! Raised by the form controller and drained by the caller for logging.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submitted {
        form: String,
        reference: Uuid,
        submitted_at: DateTime<Utc>,
    },
    Rejected {
        form: String,
        error_count: usize,
        fields: Vec<String>,
    },
    Failed {
        form: String,
        reason: String,
    },
    Reset {
        form: String,
    },
}

