#![allow(dead_code)]

use html_asserts::TestResponse;

const SELECTORS: &str = include_str!("../fixtures/selectors.html");

/// Render one of the HTML fixtures as a 200 response.
pub fn template(name: &str) -> TestResponse {
    let content = match name {
        "selectors" => SELECTORS,
        _ => panic!("no fixture named {name}"),
    };

    TestResponse::builder().html(content).build().unwrap()
}

/// Echo `body` back with the given status, like a bare POST handler.
pub fn echo(body: &str, status: u16) -> TestResponse {
    TestResponse::builder()
        .status(status)
        .body(body)
        .build()
        .unwrap()
}

pub fn not_found() -> TestResponse {
    echo("", 404)
}
