use crate::config::AssertConfig;
use crate::context::{AssertHtmlContext, HtmlQuery};
use crate::error::{AssertError, Result};
use crate::response::HtmlResponse;
use std::fmt;

/// The assertion primitives a test case offers. Both methods have defaults,
/// so `impl TestHost for MyCase {}` is enough.
pub trait TestHost {
    fn assert_equal<T>(&self, left: T, right: T) -> Result<()>
    where
        T: PartialEq + fmt::Display,
    {
        if left == right {
            Ok(())
        } else {
            Err(AssertError::NotEqual {
                left: left.to_string(),
                right: right.to_string(),
            })
        }
    }

    fn failure(&self, message: String) -> AssertError {
        AssertError::Failure(message)
    }
}

/// HTML assertions for any [`TestHost`]. Adopt with
/// `impl AssertHtml for MyCase {}` and override [`html_config`] to change
/// the defaults.
///
/// [`html_config`]: AssertHtml::html_config
pub trait AssertHtml: TestHost {
    fn html_config(&self) -> AssertConfig {
        AssertConfig::default()
    }

    fn assert_html<'a, R>(
        &'a self,
        response: &'a R,
        query: impl Into<HtmlQuery>,
    ) -> AssertHtmlContext<'a, Self, R>
    where
        R: HtmlResponse + ?Sized,
    {
        AssertHtmlContext::new(response, self, query.into(), &self.html_config())
    }

    /// Succeeds only when the lookup finds nothing. A wrong status code or a
    /// bad selector is still a failure.
    fn assert_not_html<R>(&self, response: &R, query: impl Into<HtmlQuery>) -> Result<()>
    where
        R: HtmlResponse + ?Sized,
    {
        match self.assert_html(response, query).enter() {
            Ok(found) => Err(self.failure(format!("Found unexpected content: {}", found))),
            Err(AssertError::NotPresent(absent)) => {
                log_debug!(%absent, "Content absent as expected");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
