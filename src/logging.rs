use crate::config::LogConfig;
use crate::error::ConfigError;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    EnvFilter, Layer, Registry,
};

#[derive(Debug)]
pub struct LoggerConfig {
    /// When unset only the test-writer layer is installed.
    pub directory: Option<String>,
    pub file_name: String,
    pub rotation: Rotation,
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "html-asserts.log".to_string(),
            rotation: Rotation::DAILY,
            level: Level::INFO,
        }
    }
}

impl LoggerConfig {
    pub fn from_log_config(config: &LogConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            directory: config.directory.clone(),
            file_name: config.filename.clone(),
            rotation: Rotation::DAILY,
            level: parse_log_level(&config.level)?,
        })
    }
}

/// Install the global subscriber. Fails if one is already set, so call it
/// once per test binary.
pub fn init_logging(config: LoggerConfig) -> Result<(), ConfigError> {
    let file_layer = match config.directory {
        Some(directory) => {
            // Create the log directory if it doesn't exist
            std::fs::create_dir_all(&directory).map_err(|e| {
                ConfigError::Logging(format!("Failed to create log directory: {}", e))
            })?;

            // Set up file appender
            let file_appender =
                RollingFileAppender::new(config.rotation, directory, config.file_name);

            // Create a formatting layer for files
            Some(
                fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false)
                    .with_filter(LevelFilter::from_level(config.level)),
            )
        }
        None => None,
    };

    // RUST_LOG wins over the configured level for the captured test output
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    // Create a formatting layer captured by the test harness
    let test_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .with_filter(env_filter);

    // Combine both layers
    let subscriber = Registry::default().with(file_layer).with(test_layer);

    // Set the subscriber as the default
    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        ConfigError::Logging(format!("Failed to set global subscriber: {}", e))
    })?;

    Ok(())
}

// Helper function to parse log level from string
pub fn parse_log_level(level: &str) -> Result<Level, ConfigError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidValue(format!(
            "Invalid log level: {}",
            level
        ))),
    }
}

// Crate-internal shorthands
macro_rules! log_warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*);
    };
}

macro_rules! log_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn logger_config_from_log_config() {
        let log_config = LogConfig {
            level: "debug".to_string(),
            directory: Some("target/logs".to_string()),
            filename: "asserts.log".to_string(),
        };
        let logger = LoggerConfig::from_log_config(&log_config).unwrap();
        assert_eq!(logger.level, Level::DEBUG);
        assert_eq!(logger.directory.as_deref(), Some("target/logs"));
        assert_eq!(logger.file_name, "asserts.log");
    }
}
