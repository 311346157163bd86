//! Synchronous client core for a JSON/HTTP chat-bot API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` executes the
//! round trip; `BotClient::invoke` chains build, execute and parse and is the
//! single primitive that per-operation wrappers are written against.
//!
//! # Design
//! - The platform speaks `snake_case`; callers see `camelCase`. `case` holds
//!   the recursive transform applied to outgoing query options and incoming
//!   results.
//! - `BotClient` is stateless. Every operation is a `POST` to
//!   `{base_url}/bot{token}/{operation}` with parameters in the query string
//!   and an optional pre-encoded multipart body.
//! - Responses are `{ok, result, description}` envelopes; `ok: false` turns
//!   into `ApiError::Api` whose message is the description.
//! - Incoming updates are classified into named events by `dispatch`.
//!   Updates fetched through `getUpdates` are already host-cased when they
//!   reach the dispatcher.

pub mod case;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod http;
pub mod options;
pub mod query;
pub mod transport;
pub mod update;

pub use client::BotClient;
pub use config::ClientConfig;
pub use dispatch::{events, Dispatcher, Event, Topic};
pub use envelope::{Envelope, ResponseParameters};
pub use error::{ApiError, BoxError};
pub use http::{FormBody, HttpRequest, HttpResponse};
pub use options::CallOptions;
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use update::{MessageKind, Update, UpdateKind};
