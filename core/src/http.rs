//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the executor (blocking or async) is only
//! responsible for the round-trip in between. This separation keeps the
//! envelope and decode logic deterministic, easy to test, and shared
//! verbatim between both execution modes.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across threads and task boundaries.

/// HTTP method for a request.
///
/// Every GrowStocks API endpoint is a POST; `Get` exists for the browser
/// redirect targets, which are never executed by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by the `Auth` / `Pay` `build_*` methods. POST bodies are
/// `application/x-www-form-urlencoded` strings — the GrowStocks API does not
/// accept JSON request bodies.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after the round-trip, then passed to the
/// matching `parse_*` method for envelope checking and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl HttpRequest {
    /// A POST request with a form-encoded body.
    pub(crate) fn post_form(url: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        }
    }
}
