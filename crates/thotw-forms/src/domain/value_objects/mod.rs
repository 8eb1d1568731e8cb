//! Form value objects
//!
//! Raw input values as they arrive from a page, and the typed values a
//! field produces once it passes validation.

pub mod email;
pub mod phone;

pub use email::{Email, EmailError};
pub use phone::{Phone, PhoneError};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Closed set of input kinds a field can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Number,
    Boolean,
}

impl FieldKind {
    /// Value a field of this kind holds before the user touches it.
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::Boolean => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value held by an input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content, or `""` for flags.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Flag(_) => "",
        }
    }

    /// Flag content, or `false` for text.
    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    /// Empty text (after trimming) or an unset flag.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Flag(b) => !b,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Current raw values of one form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(HashMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text value of `name`; missing or flag entries read as `""`.
    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Flag value of `name`; missing or text entries read as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.0.get(name).map(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Value produced by a field that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// Optional field left blank.
    Empty,
    Text(String),
    Email(Email),
    Phone(Phone),
    Date(NaiveDate),
    Number(Decimal),
    Flag(bool),
}

impl TypedValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Email(e) => write!(f, "{}", e),
            Self::Phone(p) => write!(f, "{}", p),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Number(n) => write!(f, "{}", n),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_kind() {
        assert_eq!(FieldKind::Boolean.default_value(), FieldValue::Flag(false));
        assert_eq!(FieldKind::Email.default_value(), FieldValue::text(""));
        assert!(FieldKind::Date.default_value().is_blank());
    }

    #[test]
    fn test_missing_values_read_as_defaults() {
        let values = FormValues::new().with("firstName", "Maria");
        assert_eq!(values.text("firstName"), "Maria");
        assert_eq!(values.text("lastName"), "");
        assert!(!values.flag("termsAccepted"));
    }

    #[test]
    fn test_whitespace_is_blank() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
        assert!(!FieldValue::Flag(true).is_blank());
    }
}
