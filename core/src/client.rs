//! Stateless request builder and response parser for the bot API.
//!
//! # Design
//! `BotClient` holds only its configuration and carries no mutable state
//! between calls. Every operation has the same shape, so there is a single
//! `build_request` (outbound pipeline) and a single `parse_response`
//! (inbound pipeline); `invoke` runs a `Transport` between the two and is the
//! primitive that per-operation wrappers call.
//!
//! Outbound: query options are wire-cased and serialized onto
//! `{base_url}/bot{token}/{operation}`; the body payload is forwarded as-is
//! under a multipart content type.
//!
//! Inbound: a success status must carry `ok: true`, and its `result` is
//! host-cased. An error status is rejected with `ApiError::Api` when its body
//! is an `ok: false` envelope and with `ApiError::HttpError` otherwise, unless
//! `legacy_swallow_errors` is set, in which case it resolves to `null`.

use serde_json::Value;

use crate::case::{object_to_wire_case, to_host_case};
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, MULTIPART_FORM_DATA};
use crate::options::CallOptions;
use crate::query;
use crate::transport::Transport;
use crate::update::Update;

/// Synchronous, stateless client for the bot API.
#[derive(Debug, Clone)]
pub struct BotClient {
    config: ClientConfig,
}

impl BotClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::from_config(ClientConfig::new(token).base_url(base_url))
    }

    pub fn from_config(mut config: ClientConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base_url}/bot{token}/{operation}`, without a query string.
    pub fn endpoint(&self, operation: &str) -> String {
        format!("{}/bot{}/{operation}", self.config.base_url, self.config.token)
    }

    pub fn build_request(&self, operation: &str, options: &CallOptions) -> HttpRequest {
        let query = object_to_wire_case(&options.query);

        let mut url = self.endpoint(operation);
        if self.config.legacy_raw_query {
            url.push('?');
            url.push_str(&query::serialize_raw(&query));
        } else {
            let qs = query::serialize(&query);
            if !qs.is_empty() {
                url.push('?');
                url.push_str(&qs);
            }
        }

        let content_type = match &options.body {
            Some(body) => format!("{MULTIPART_FORM_DATA}; boundary={}", body.boundary),
            None => MULTIPART_FORM_DATA.to_string(),
        };

        tracing::debug!(
            operation,
            params = query.len(),
            has_body = options.body.is_some(),
            "built request"
        );

        HttpRequest {
            url,
            headers: vec![("content-type".to_string(), content_type)],
            body: options.body.as_ref().map(|b| b.data.clone()),
        }
    }

    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if response.is_success() {
            let envelope: Envelope = serde_json::from_str(&response.body)
                .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
            if envelope.ok == Some(true) {
                return Ok(envelope.result.as_ref().map(to_host_case).unwrap_or(Value::Null));
            }
            return Err(rejection(envelope));
        }

        if let Ok(envelope) = serde_json::from_str::<Envelope>(&response.body) {
            if envelope.ok == Some(false) {
                return Err(rejection(envelope));
            }
        }

        if self.config.legacy_swallow_errors {
            tracing::warn!(status = response.status, "swallowing error response without envelope");
            return Ok(Value::Null);
        }
        Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        })
    }

    /// Build, execute and parse one operation.
    pub fn invoke(
        &self,
        transport: &dyn Transport,
        operation: &str,
        options: &CallOptions,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(operation, options);
        match transport.execute(&request) {
            Ok(response) => self.parse_response(response),
            Err(e) if self.config.legacy_swallow_errors => {
                tracing::warn!(operation, error = %e, "swallowing transport failure");
                Ok(Value::Null)
            }
            Err(e) => Err(ApiError::Transport(e)),
        }
    }

    /// Parse a `getUpdates` response into host-cased updates.
    pub fn parse_updates(&self, response: HttpResponse) -> Result<Vec<Update>, ApiError> {
        match self.parse_response(response)? {
            Value::Array(items) => items.into_iter().map(Update::from_host).collect(),
            Value::Null => Ok(Vec::new()),
            other => Err(ApiError::DeserializationError(format!(
                "expected a list of updates, got {other}"
            ))),
        }
    }
}

fn rejection(envelope: Envelope) -> ApiError {
    ApiError::Api {
        description: envelope.description.unwrap_or_default(),
        error_code: envelope.error_code,
        parameters: envelope.parameters,
    }
}
