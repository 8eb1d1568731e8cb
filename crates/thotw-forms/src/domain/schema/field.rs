//! Field schema
//!
//! Declarative constraints for a single input. Rules run in a fixed order:
//! type check, required check, then length, pattern, choice and numeric
//! minimum checks. The first failing rule wins.

use crate::domain::value_objects::{Email, FieldKind, FieldValue, Phone, TypedValue};
use crate::{FormsError, Result};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Date format produced by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which rule a field violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    TypeMismatch,
    TooShort,
    PatternMismatch,
    NotAllowed,
    BelowMinimum,
    CrossField,
    UnknownField,
}

/// A validation failure attributed to one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Constraints for one form field.
#[derive(Clone, Debug)]
pub struct FieldSchema {
    name: String,
    kind: FieldKind,
    required: bool,
    min_length: Option<usize>,
    pattern: Option<Regex>,
    choices: Option<Vec<String>>,
    min_value: Option<Decimal>,
    custom_message: Option<String>,
    type_message: Option<String>,
    verbatim: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            min_length: None,
            pattern: None,
            choices: None,
            min_value: None,
            custom_message: None,
            type_message: None,
            verbatim: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn phone(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Phone)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Blank input is rejected. For boolean fields the flag must be set.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Minimum length in characters. Implies `required`.
    pub fn min_length(mut self, len: usize) -> Self {
        self.required = true;
        self.min_length = Some(len);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compile `pattern` and attach it.
    pub fn try_pattern(self, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| FormsError::InvalidPattern {
            field: self.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.pattern(re))
    }

    /// Restrict the value to a fixed list.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Keep surrounding whitespace. Blank input still counts as empty.
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    pub fn min_value(mut self, min: Decimal) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Message reported for every rule this field fails.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Message for a type mismatch only; takes precedence over `message`.
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_len(&self) -> Option<usize> {
        self.min_length
    }

    pub fn allowed_choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    pub fn custom_message(&self) -> Option<&str> {
        self.custom_message.as_deref()
    }

    /// Validate one raw value against this field's rules.
    pub fn validate(&self, value: &FieldValue) -> std::result::Result<TypedValue, FieldError> {
        if self.kind == FieldKind::Boolean {
            return self.validate_flag(value);
        }

        let raw = match value {
            FieldValue::Text(s) if self.verbatim => s.as_str(),
            FieldValue::Text(s) => s.trim(),
            FieldValue::Flag(_) => return Err(self.fail(ErrorKind::TypeMismatch)),
        };

        if raw.trim().is_empty() {
            return if self.required {
                Err(self.fail(ErrorKind::Required))
            } else {
                Ok(TypedValue::Empty)
            };
        }

        let typed = self.check_type(raw)?;

        if let Some(min) = self.min_length {
            if raw.chars().count() < min {
                return Err(self.fail(ErrorKind::TooShort));
            }
        }

        if let Some(re) = &self.pattern {
            if !re.is_match(raw) {
                return Err(self.fail(ErrorKind::PatternMismatch));
            }
        }

        if let Some(choices) = &self.choices {
            if !choices.iter().any(|c| c == raw) {
                return Err(self.fail(ErrorKind::NotAllowed));
            }
        }

        if let (Some(min), TypedValue::Number(n)) = (self.min_value, &typed) {
            if *n < min {
                return Err(self.fail(ErrorKind::BelowMinimum));
            }
        }

        Ok(typed)
    }

    fn validate_flag(&self, value: &FieldValue) -> std::result::Result<TypedValue, FieldError> {
        let flag = match value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => true,
                "" | "false" | "off" | "no" | "0" => false,
                _ => return Err(self.fail(ErrorKind::TypeMismatch)),
            },
        };

        if self.required && !flag {
            return Err(self.fail(ErrorKind::Required));
        }
        Ok(TypedValue::Flag(flag))
    }

    fn check_type(&self, raw: &str) -> std::result::Result<TypedValue, FieldError> {
        let typed = match self.kind {
            FieldKind::Text => Some(TypedValue::Text(raw.to_string())),
            FieldKind::Email => Email::new(raw).ok().map(TypedValue::Email),
            FieldKind::Phone => Phone::new(raw).ok().map(TypedValue::Phone),
            FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(TypedValue::Date),
            FieldKind::Number => Decimal::from_str(raw).ok().map(TypedValue::Number),
            FieldKind::Boolean => None,
        };
        typed.ok_or_else(|| self.fail(ErrorKind::TypeMismatch))
    }

    fn fail(&self, kind: ErrorKind) -> FieldError {
        let specific = match kind {
            ErrorKind::TypeMismatch => self.type_message.as_ref(),
            _ => None,
        };
        let message = match specific.or(self.custom_message.as_ref()) {
            Some(m) => m.clone(),
            None => self.default_message(kind),
        };
        FieldError::new(&self.name, kind, message)
    }

    fn default_message(&self, kind: ErrorKind) -> String {
        match kind {
            ErrorKind::Required if self.kind == FieldKind::Boolean => {
                "This box must be checked".to_string()
            }
            ErrorKind::Required => "This field is required".to_string(),
            ErrorKind::TypeMismatch => match self.kind {
                FieldKind::Email => "Please enter a valid email address".to_string(),
                FieldKind::Phone => "Please enter a valid phone number".to_string(),
                FieldKind::Date => "Please enter a valid date".to_string(),
                FieldKind::Number => "Please enter a valid number".to_string(),
                FieldKind::Text | FieldKind::Boolean => format!("Invalid {} value", self.kind),
            },
            ErrorKind::TooShort => format!(
                "Must be at least {} characters",
                self.min_length.unwrap_or_default()
            ),
            ErrorKind::PatternMismatch => "Invalid format".to_string(),
            ErrorKind::NotAllowed => "Please select a valid option".to_string(),
            ErrorKind::BelowMinimum => format!(
                "Must be at least {}",
                self.min_value.unwrap_or_default()
            ),
            ErrorKind::CrossField | ErrorKind::UnknownField => "Invalid value".to_string(),
        }
    }
}

impl fmt::Display for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
