use crate::error::ConfigError;
use crate::logging::parse_log_level;
use http::StatusCode;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "default_log_filename")]
    pub filename: String,
}

/// Defaults applied by [`AssertHtml`](crate::AssertHtml) hosts when a query
/// leaves them unset.
#[derive(Debug, Clone, Deserialize)]
pub struct AssertConfig {
    #[serde(default = "default_status_code")]
    pub status_code: u16,

    #[serde(default)]
    pub require_html_content_type: bool,

    #[serde(default)]
    pub logging: LogConfig,
}

// Default implementations
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            filename: default_log_filename(),
        }
    }
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            status_code: default_status_code(),
            require_html_content_type: false,
            logging: LogConfig::default(),
        }
    }
}

impl AssertConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        // Read the whole file, then parse it like any other TOML source
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AssertConfig = toml::from_str(content)?;

        config.validate()?;
        info!(
            status_code = config.status_code,
            require_html_content_type = config.require_html_content_type,
            "Configuration loaded successfully"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Validate the default expected status
        if StatusCode::from_u16(self.status_code).is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "status_code is not a valid HTTP status: {}",
                self.status_code
            )));
        }

        // Validate logging settings
        parse_log_level(&self.logging.level)?;

        if self.logging.filename.is_empty() {
            return Err(ConfigError::InvalidValue(
                "logging.filename cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_status_code() -> u16 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_filename() -> String {
    "html-asserts.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AssertConfig::from_toml_str("").unwrap();
        assert_eq!(config.status_code, 200);
        assert!(!config.require_html_content_type);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.directory, None);
        assert_eq!(config.logging.filename, "html-asserts.log");
    }

    #[test]
    fn overrides_are_read() {
        let config = AssertConfig::from_toml_str(
            r#"
            status_code = 201
            require_html_content_type = true

            [logging]
            level = "debug"
            directory = "target/test-logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.status_code, 201);
        assert!(config.require_html_content_type);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory.as_deref(), Some("target/test-logs"));
    }

    #[test]
    fn rejects_invalid_status() {
        let err = AssertConfig::from_toml_str("status_code = 42").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = AssertConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AssertConfig::from_toml_str("status_code = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AssertConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
