mod builder;

pub use builder::TestResponseBuilder;
use http::header::{HeaderMap, CONTENT_TYPE};
use http::StatusCode;
use std::fmt;

/// What the assertions need from an HTTP response.
pub trait HtmlResponse {
    fn status_code(&self) -> u16;

    fn body(&self) -> &[u8];

    fn content_type(&self) -> Option<&str> {
        None
    }

    /// Textual representation used in failure messages.
    fn describe(&self) -> String {
        format!("<Response status_code={}>", self.status_code())
    }
}

impl<B: AsRef<[u8]>> HtmlResponse for http::Response<B> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    fn body(&self) -> &[u8] {
        http::Response::body(self).as_ref()
    }

    fn content_type(&self) -> Option<&str> {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}

/// An in-memory response for driving views from tests.
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    content: Vec<u8>,
}

impl TestResponse {
    pub fn builder() -> TestResponseBuilder {
        TestResponseBuilder::new()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl HtmlResponse for TestResponse {
    fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    fn body(&self) -> &[u8] {
        &self.content
    }

    fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.content_type() {
            Some(content_type) => write!(
                f,
                "<TestResponse status_code={}, \"{}\">",
                self.status.as_u16(),
                content_type
            ),
            None => write!(f, "<TestResponse status_code={}>", self.status.as_u16()),
        }
    }
}
