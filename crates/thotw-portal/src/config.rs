//! Portal Configuration

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub bind_addr: String,
    pub site_name: String,
    pub emergency_phone: String,
    pub contact_email: String,
    /// Name shown on the demo dashboard.
    pub patient_name: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            site_name: "THOTW".to_string(),
            emergency_phone: "+1 (555) 123-4567".to_string(),
            contact_email: "info@thotw.com".to_string(),
            patient_name: "John Doe".to_string(),
        }
    }
}

impl PortalConfig {
    /// Load from `path`, else from `~/.thotw/config.toml`, else defaults.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".thotw").join("config.toml"))
    }

    /// First name of the patient, used in the dashboard greeting.
    pub fn patient_first_name(&self) -> &str {
        self.patient_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.patient_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PortalConfig::from_toml(r#"site_name = "THOTW Clinic""#).unwrap();
        assert_eq!(config.site_name, "THOTW Clinic");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.contact_email, "info@thotw.com");
    }

    #[test]
    fn test_invalid_toml() {
        let err = PortalConfig::from_toml("bind_addr = ").unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = PortalConfig::load(Some(Path::new("/nonexistent/thotw.toml"))).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_patient_first_name() {
        assert_eq!(PortalConfig::default().patient_first_name(), "John");
    }
}
