//! Phone Value Object
//!
//! Phone numbers as typed by patients, e.g. `+63 917 123 4567` or
//! `+1 (555) 123-4567`. The entered formatting is kept for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phone number value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone {
    display: String,
    digits: String,
}

impl Phone {
    /// Parse a phone number made of digits and common separators.
    pub fn new(value: impl Into<String>) -> Result<Self, PhoneError> {
        let display = value.into().trim().to_string();

        if display.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !display.chars().all(Self::is_allowed) {
            return Err(PhoneError::InvalidCharacters);
        }

        let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(PhoneError::NoDigits);
        }

        Ok(Self { display, digits })
    }

    /// Number as entered, trimmed
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Digits only
    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn is_allowed(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.')
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("Phone number cannot be empty")]
    Empty,
    #[error("Phone number contains invalid characters")]
    InvalidCharacters,
    #[error("Phone number contains no digits")]
    NoDigits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_keeps_formatting() {
        let phone = Phone::new(" +1 (555) 123-4567 ").unwrap();
        assert_eq!(phone.as_str(), "+1 (555) 123-4567");
        assert_eq!(phone.digits(), "15551234567");
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(Phone::new(""), Err(PhoneError::Empty));
    }

    #[test]
    fn test_letters_rejected() {
        assert_eq!(Phone::new("+63 9XX XXX XXXX"), Err(PhoneError::InvalidCharacters));
    }

    #[test]
    fn test_separators_only() {
        assert_eq!(Phone::new("--- ---"), Err(PhoneError::NoDigits));
    }
}
