//! Per-call options: an opaque body payload plus host-cased query parameters.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::FormBody;

/// Options handed to `BotClient::build_request` / `BotClient::invoke`.
///
/// `query` holds host-cased (`camelCase`) parameters; they are wire-cased
/// when the request is built. `body` is forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub body: Option<FormBody>,
    pub query: Map<String, Value>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build query options from any value that serializes to a JSON object.
    pub fn with_query<T: Serialize>(params: &T) -> Result<Self, ApiError> {
        match serde_json::to_value(params) {
            Ok(Value::Object(query)) => Ok(Self { body: None, query }),
            Ok(other) => Err(ApiError::SerializationError(format!(
                "query options must be an object, got {other}"
            ))),
            Err(e) => Err(ApiError::SerializationError(e.to_string())),
        }
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: FormBody) -> Self {
        self.body = Some(body);
        self
    }
}
