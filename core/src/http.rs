//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; a `Transport` (or the caller directly) executes the
//! round trip in between.
//!
//! Every operation is a `POST` with a multipart content type, so the request
//! carries no method field.

/// Content type sent with every operation, whether or not a file is attached.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// A pre-encoded multipart body.
///
/// The core never inspects or re-encodes `data`; the boundary is only copied
/// into the content-type header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody {
    pub boundary: String,
    pub data: Vec<u8>,
}

/// An HTTP request described as plain data.
///
/// Built by `BotClient::build_request`. `url` already contains the serialized
/// query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `BotClient::parse_response`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
