use crate::config::AssertConfig;
use crate::error::{ConfigError, Result};
use crate::mixin::{AssertHtml, TestHost};
use crate::response::HtmlResponse;
use std::path::Path;

/// A ready-made host with [`AssertHtml`] already mixed in.
#[derive(Debug, Clone, Default)]
pub struct HtmlTestCase {
    config: AssertConfig,
}

impl HtmlTestCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssertConfig) -> Self {
        Self { config }
    }

    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::with_config(AssertConfig::from_file(path)?))
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Checks the status code, then that `text` occurs in the decoded body.
    pub fn assert_contains<R>(&self, response: &R, text: &str) -> Result<()>
    where
        R: HtmlResponse + ?Sized,
    {
        self.assert_equal(response.status_code(), self.config.status_code)?;

        let content = String::from_utf8_lossy(response.body());
        if content.contains(text) {
            Ok(())
        } else {
            Err(self.failure(format!("Couldn't find '{}' in response", text)))
        }
    }
}

impl TestHost for HtmlTestCase {}

impl AssertHtml for HtmlTestCase {
    fn html_config(&self) -> AssertConfig {
        self.config.clone()
    }
}
