use thiserror::Error;

/// Raised when a selector or element id lookup finds nothing.
///
/// Kept apart from the other failures so that `assert_not_html` can treat
/// absence as success while still propagating everything else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlNotPresent {
    #[error("No selector matches found for {0}")]
    SelectorNotFound(String),

    #[error("Element with id, {0}, not present")]
    ElementIdNotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertError {
    #[error("{left} != {right}")]
    NotEqual { left: String, right: String },

    #[error(
        "Expected HTML content from {response}, got content type {}",
        .found.as_deref().unwrap_or("<none>")
    )]
    ContentType {
        response: String,
        found: Option<String>,
    },

    #[error(transparent)]
    NotPresent(#[from] HtmlNotPresent),

    #[error("{0}")]
    Parse(String),

    #[error("Invalid selector {selector}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("{0}")]
    Failure(String),
}

impl AssertError {
    pub fn is_not_present(&self) -> bool {
        matches!(self, AssertError::NotPresent(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

pub type Result<T, E = AssertError> = std::result::Result<T, E>;
