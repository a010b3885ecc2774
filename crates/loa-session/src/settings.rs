#![forbid(unsafe_code)]

//! Settings-as-data: load the starting [`Config`] from TOML or JSON.
//!
//! Every [`Config`] field has a default matching a fresh session, so a
//! settings file only names what it overrides:
//!
//! ```toml
//! # loa-settings.toml
//! hurdle_level = 3.0
//! target_revenue = 8000.0
//! ```
//!
//! Parsed configs are validated before they are handed out; a file that
//! parses but carries out-of-range values is still an error here, so the
//! session never starts from a state the engine would flag on every
//! recomputation.

use std::path::Path;

use loa_engine::Config;

/// Errors from loading a settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O error reading the file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// The parsed config failed range validation.
    Validation(Vec<String>),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load a validated config from a TOML string.
pub fn from_toml_str(s: &str) -> Result<Config, SettingsError> {
    validated(toml::from_str(s).map_err(SettingsError::Toml)?)
}

/// Load a validated config from a TOML file on disk.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Config, SettingsError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

/// Load a validated config from a JSON string.
pub fn from_json_str(s: &str) -> Result<Config, SettingsError> {
    validated(serde_json::from_str(s).map_err(SettingsError::Json)?)
}

/// Load a validated config from a JSON file on disk.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Config, SettingsError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_json_str(&content)
}

fn validated(config: Config) -> Result<Config, SettingsError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(SettingsError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_overrides_merge_with_defaults() {
        let config = from_toml_str("hurdle_level = 3.0\ntarget_revenue = 8000.0\n").unwrap();
        assert_eq!(config.hurdle_level, 3.0);
        assert_eq!(config.target_revenue, 8000.0);
        assert_eq!(config.avg_gift_cost, 75.0);
        assert_eq!(config.closing_ratio_percent, 25.0);
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let config = from_json_str(r#"{"closing_ratio_percent": 40.0}"#).unwrap();
        assert_eq!(config.closing_ratio_percent, 40.0);
        assert_eq!(config.hurdle_level, 2.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = from_toml_str("hurdle_level = ").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let err = from_toml_str("closing_ratio_percent = 0.0\n").unwrap_err();
        match err {
            SettingsError::Validation(errors) => {
                assert!(errors[0].contains("closing_ratio_percent"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = from_toml_file("/nonexistent/loa-settings.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn error_source_chain() {
        use std::error::Error as _;
        let err = from_toml_str("hurdle_level = \"high\"").unwrap_err();
        assert!(err.source().is_some());
    }
}
