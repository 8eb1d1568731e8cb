//! Record schema
//!
//! An ordered set of field schemas plus cross-field refinements for one
//! form. Built once through [`RecordSchemaBuilder`] and immutable afterwards.

use super::field::{ErrorKind, FieldError, FieldSchema};
use crate::domain::value_objects::{FieldValue, FormValues, TypedValue};
use crate::{FormsError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// Cross-field rule. A failure is attributed to `field`.
#[derive(Clone)]
pub struct Refinement {
    field: String,
    message: String,
    predicate: Predicate,
}

impl Refinement {
    pub fn new<F>(field: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn holds(&self, values: &FormValues) -> bool {
        (self.predicate)(values)
    }
}

impl fmt::Debug for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refinement")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Field and refinement rules for one form.
#[derive(Clone, Debug)]
pub struct RecordSchema {
    form: String,
    fields: Vec<FieldSchema>,
    refinements: Vec<Refinement>,
}

impl RecordSchema {
    pub fn builder(form: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            form: form.into(),
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Form identifier, e.g. `sign_up`
    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    /// Default raw values for every field.
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.kind().default_value()))
            .collect()
    }

    /// Validate a single field by name.
    pub fn validate_field(
        &self,
        name: &str,
        value: &FieldValue,
    ) -> std::result::Result<TypedValue, FieldError> {
        match self.field(name) {
            Some(field) => field.validate(value),
            None => Err(FieldError::new(name, ErrorKind::UnknownField, "Unknown field")),
        }
    }

    /// Validate every field, then every refinement. Never stops at the
    /// first failure.
    pub fn validate_record(
        &self,
        values: &FormValues,
    ) -> std::result::Result<ValidatedRecord, ValidationErrors> {
        let mut typed = Vec::with_capacity(self.fields.len());
        let mut errors = ValidationErrors::default();

        for field in &self.fields {
            let default = field.kind().default_value();
            let value = values.get(field.name()).unwrap_or(&default);
            match field.validate(value) {
                Ok(v) => typed.push((field.name().to_string(), v)),
                Err(e) => errors.push(e),
            }
        }

        for refinement in &self.refinements {
            if !refinement.holds(values) {
                errors.push(FieldError::new(
                    refinement.field(),
                    ErrorKind::CrossField,
                    refinement.message(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(ValidatedRecord {
                form: self.form.clone(),
                values: typed,
            })
        } else {
            Err(errors)
        }
    }
}

/// Builder for [`RecordSchema`].
pub struct RecordSchemaBuilder {
    form: String,
    fields: Vec<FieldSchema>,
    refinements: Vec<Refinement>,
}

impl RecordSchemaBuilder {
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn refine<F>(mut self, field: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement::new(field, message, predicate));
        self
    }

    /// `confirm` must equal `original`; the error lands on `confirm`.
    pub fn must_match(
        self,
        original: impl Into<String>,
        confirm: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let original = original.into();
        let confirm = confirm.into();
        let target = confirm.clone();
        self.refine(target, message, move |v| v.text(&original) == v.text(&confirm))
    }

    pub fn build(self) -> Result<RecordSchema> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(FormsError::DuplicateField {
                    form: self.form.clone(),
                    field: field.name().to_string(),
                });
            }
        }

        for refinement in &self.refinements {
            if !seen.contains(refinement.field()) {
                return Err(FormsError::UnknownRefinementTarget {
                    form: self.form.clone(),
                    field: refinement.field().to_string(),
                });
            }
        }

        Ok(RecordSchema {
            form: self.form,
            fields: self.fields,
            refinements: self.refinements,
        })
    }
}

/// All failures found in one record, in schema order followed by
/// refinement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} field error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn for_field<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == name)
    }

    /// Every message attributed to `name`.
    pub fn messages<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        self.for_field(name).map(|e| e.message.as_str()).collect()
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.for_field(name).next().is_some()
    }

    /// Names of failing fields, first occurrence order, no repeats.
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.errors
            .iter()
            .map(|e| e.field.as_str())
            .filter(|f| seen.insert(*f))
            .collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Record that passed every rule of its schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedRecord {
    form: String,
    values: Vec<(String, TypedValue)>,
}

impl ValidatedRecord {
    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text form of any non-empty value.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).filter(|v| !v.is_empty()).map(ToString::to_string)
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(TypedValue::Flag(true)))
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name) {
            Some(TypedValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<Decimal> {
        match self.get(name) {
            Some(TypedValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}
