use super::TestResponse;
use crate::error::ResponseError;
use http::{
    header::{HeaderMap, HeaderName, CONTENT_TYPE},
    HeaderValue, StatusCode,
};
use std::str::FromStr;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug)]
pub struct TestResponseBuilder {
    status: u16,
    headers: HeaderMap,
    content: Vec<u8>,
}

impl Default for TestResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestResponseBuilder {
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            content: Vec::new(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self, ResponseError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let header_name = HeaderName::from_str(key.as_ref()).map_err(|e| {
            ResponseError::InvalidHeader(format!("Invalid header name: {}", e))
        })?;

        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            ResponseError::InvalidHeader(format!("Invalid header value: {}", e))
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn body(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the body and marks it as `text/html`.
    pub fn html(mut self, content: impl Into<String>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
        self.content = content.into().into_bytes();
        self
    }

    pub fn build(self) -> Result<TestResponse, ResponseError> {
        let status =
            StatusCode::from_u16(self.status).map_err(|_| ResponseError::InvalidStatus(self.status))?;

        Ok(TestResponse {
            status,
            headers: self.headers,
            content: self.content,
        })
    }
}
