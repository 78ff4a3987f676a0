use crate::config::AssertConfig;
use crate::error::{AssertError, HtmlNotPresent, Result};
use crate::html::{self, HtmlMatch, MatchKind};
use crate::mixin::TestHost;
use crate::response::HtmlResponse;

const HTML_CONTENT_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// What to look for in a response.
///
/// A selector wins over an element id when both are set. Unset status and
/// content type options fall back to the host's [`AssertConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlQuery {
    selector: Option<String>,
    element_id: Option<String>,
    status_code: Option<u16>,
    require_html_content_type: Option<bool>,
    msg: Option<String>,
}

impl HtmlQuery {
    /// No filter: the whole document is returned.
    pub fn document() -> Self {
        Self::default()
    }

    pub fn by_selector(selector: impl Into<String>) -> Self {
        Self::default().selector(selector)
    }

    pub fn by_id(element_id: impl Into<String>) -> Self {
        Self::default().element_id(element_id)
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn require_html_content_type(mut self, required: bool) -> Self {
        self.require_html_content_type = Some(required);
        self
    }

    /// Reserved; recorded on the assertion's tracing span but not part of
    /// any failure message.
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }
}

impl From<&str> for HtmlQuery {
    fn from(selector: &str) -> Self {
        HtmlQuery::by_selector(selector)
    }
}

impl From<String> for HtmlQuery {
    fn from(selector: String) -> Self {
        HtmlQuery::by_selector(selector)
    }
}

/// One `assert_html` call: validates the status, parses the body and runs
/// the lookup when entered. Holds nothing that needs releasing.
pub struct AssertHtmlContext<'a, H: ?Sized, R: ?Sized> {
    response: &'a R,
    test_case: &'a H,
    query: HtmlQuery,
    status_code: u16,
    require_html_content_type: bool,
}

impl<'a, H, R> AssertHtmlContext<'a, H, R>
where
    H: TestHost + ?Sized,
    R: HtmlResponse + ?Sized,
{
    pub(crate) fn new(
        response: &'a R,
        test_case: &'a H,
        query: HtmlQuery,
        config: &AssertConfig,
    ) -> Self {
        let status_code = query.status_code.unwrap_or(config.status_code);
        let require_html_content_type = query
            .require_html_content_type
            .unwrap_or(config.require_html_content_type);

        Self {
            response,
            test_case,
            query,
            status_code,
            require_html_content_type,
        }
    }

    pub fn query(&self) -> &HtmlQuery {
        &self.query
    }

    pub fn expected_status_code(&self) -> u16 {
        self.status_code
    }

    pub fn enter(&self) -> Result<HtmlMatch> {
        let span = tracing::debug_span!(
            "assert_html",
            response = %self.response.describe(),
            selector = ?self.query.selector,
            element_id = ?self.query.element_id,
            msg = ?self.query.msg
        );
        let _entered = span.enter();

        // The status is checked before the body is even parsed
        if let Err(err) = self
            .test_case
            .assert_equal(self.response.status_code(), self.status_code)
        {
            log_warn!(error = %err, "Unexpected status code");
            return Err(err);
        }

        if self.require_html_content_type {
            self.check_content_type()?;
        }

        let document = html::parse_body(self.response.body())?;

        if let Some(selector) = &self.query.selector {
            let nodes = html::select_all(&document, selector)?;
            if nodes.is_empty() {
                log_debug!("No selector matches");
                return Err(HtmlNotPresent::SelectorNotFound(selector.clone()).into());
            }

            log_debug!(matches = nodes.len(), "Selector matched");
            return Ok(HtmlMatch::new(document, MatchKind::Selector, nodes));
        }

        if let Some(element_id) = &self.query.element_id {
            return match html::find_by_id(&document, element_id) {
                Some(node) => Ok(HtmlMatch::new(document, MatchKind::ElementId, vec![node])),
                None => {
                    log_debug!("Element id not present");
                    Err(HtmlNotPresent::ElementIdNotFound(element_id.clone()).into())
                }
            };
        }

        Ok(HtmlMatch::document_root(document))
    }

    /// Enter, then run `block` against the match.
    pub fn with<T, F>(self, block: F) -> Result<T>
    where
        F: FnOnce(&HtmlMatch) -> T,
    {
        let found = self.enter()?;
        Ok(block(&found))
    }

    fn check_content_type(&self) -> Result<()> {
        let found = self.response.content_type();
        let is_html = found.is_some_and(is_html_media_type);

        if is_html {
            Ok(())
        } else {
            Err(AssertError::ContentType {
                response: self.response.describe(),
                found: found.map(str::to_string),
            })
        }
    }
}

/// Compares the media type, ignoring parameters such as `charset`.
fn is_html_media_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    HTML_CONTENT_TYPES.contains(&media_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_must_match_exactly() {
        assert!(is_html_media_type("text/html"));
        assert!(is_html_media_type("Text/HTML; charset=utf-8"));
        assert!(is_html_media_type(" application/xhtml+xml ;charset=utf-8"));
        assert!(!is_html_media_type("text/htmlfoo"));
        assert!(!is_html_media_type("text/html-fragment; charset=utf-8"));
        assert!(!is_html_media_type("text/plain"));
        assert!(!is_html_media_type(""));
    }

    #[test]
    fn str_converts_to_selector_query() {
        let query: HtmlQuery = ".product".into();
        assert_eq!(query, HtmlQuery::by_selector(".product"));
        assert_eq!(query.element_id, None);
    }

    #[test]
    fn builder_sets_every_option() {
        let query = HtmlQuery::by_id("main")
            .status_code(404)
            .require_html_content_type(true)
            .msg("landing page");

        assert_eq!(query.element_id.as_deref(), Some("main"));
        assert_eq!(query.status_code, Some(404));
        assert_eq!(query.require_html_content_type, Some(true));
        assert_eq!(query.msg.as_deref(), Some("landing page"));
        assert_eq!(HtmlQuery::document(), HtmlQuery::default());
    }
}
