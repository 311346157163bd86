//! Executing an `HttpRequest` against the network.
//!
//! The core never performs I/O itself. `Transport` is the single seam where
//! a built request turns into a response; `BotClient::invoke` wraps it with
//! the request and response pipelines. Any closure with the right signature
//! is a transport, which keeps tests free of sockets.

use crate::error::BoxError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
///
/// Error statuses must come back as `Ok(HttpResponse)`; only failures that
/// produced no response at all are `Err`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, BoxError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        self(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[cfg(feature = "ureq")]
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "ureq")]
impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data here; the response pipeline interprets them.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

#[cfg(feature = "ureq")]
impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ureq")]
impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self.agent.post(request.url.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = match &request.body {
            Some(body) => builder.send(body.as_slice())?,
            None => builder.send_empty()?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (key.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_transports() {
        let transport = |request: &HttpRequest| -> Result<HttpResponse, BoxError> {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: request.url.clone(),
            })
        };
        let request = HttpRequest {
            url: "http://localhost/botT/getMe".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let response = transport.execute(&request).unwrap();
        assert_eq!(response.body, "http://localhost/botT/getMe");
    }
}
