//! Assertions over the HTML returned by web responses.
//!
//! ```
//! use html_asserts::{AssertHtml, HtmlTestCase, TestResponse};
//!
//! let case = HtmlTestCase::new();
//! let response = TestResponse::builder()
//!     .html(r#"<ul><li class="product">Subpage 3</li><li class="product">Subpage 4</li></ul>"#)
//!     .build()
//!     .unwrap();
//!
//! let texts = case.assert_html(&response, ".product").with(|found| found.texts()).unwrap();
//! assert_eq!(texts, ["Subpage 3", "Subpage 4"]);
//!
//! case.assert_not_html(&response, ".not-real").unwrap();
//! ```

#[macro_use]
pub mod logging;

pub mod case;
pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod mixin;
pub mod response;

pub use case::HtmlTestCase;
pub use config::{AssertConfig, LogConfig};
pub use context::{AssertHtmlContext, HtmlQuery};
pub use error::{AssertError, ConfigError, HtmlNotPresent, ResponseError, Result};
pub use html::{element_text, HtmlMatch, MatchKind};
pub use mixin::{AssertHtml, TestHost};
pub use response::{HtmlResponse, TestResponse, TestResponseBuilder};
