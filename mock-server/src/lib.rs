use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_TOKEN: &str = "123456:mock-token";

/// Shared state of one mock bot.
#[derive(Clone)]
pub struct Bot {
    token: Arc<str>,
    updates: Arc<RwLock<Vec<Value>>>,
    next_message_id: Arc<AtomicI64>,
}

type Reply = (StatusCode, Json<Value>);

pub fn app(token: &str) -> Router {
    app_with_updates(token, Vec::new())
}

/// Router whose `getUpdates` serves `updates` (wire-cased update objects).
pub fn app_with_updates(token: &str, updates: Vec<Value>) -> Router {
    let bot = Bot {
        token: Arc::from(token),
        updates: Arc::new(RwLock::new(updates)),
        next_message_id: Arc::new(AtomicI64::new(1)),
    };
    Router::new()
        .route("/{bot}/{method}", post(call))
        .with_state(bot)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

pub async fn run_with_updates(
    listener: TcpListener,
    token: &str,
    updates: Vec<Value>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_updates(token, updates)).await
}

fn ok(result: Value) -> Reply {
    (StatusCode::OK, Json(json!({"ok": true, "result": result})))
}

fn reject(status: StatusCode, description: &str) -> Reply {
    (
        status,
        Json(json!({
            "ok": false,
            "error_code": status.as_u16(),
            "description": description,
        })),
    )
}

async fn call(
    State(bot): State<Bot>,
    Path((prefix, method)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    if prefix.strip_prefix("bot") != Some(&*bot.token) {
        return reject(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let multipart = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));
    if !multipart {
        return reject(StatusCode::BAD_REQUEST, "Bad Request: unsupported content type");
    }

    match method.as_str() {
        "getMe" => ok(json!({
            "id": 123456,
            "is_bot": true,
            "first_name": "Mock",
            "username": "mock_bot",
            "can_join_groups": true,
        })),
        "sendMessage" => send_message(&bot, &params),
        "sendPhoto" => send_photo(&bot, &params, &body),
        "getUpdates" => get_updates(&bot, &params).await,
        _ => reject(StatusCode::NOT_FOUND, "Not Found: method not found"),
    }
}

fn chat_id(params: &HashMap<String, String>) -> Result<i64, Reply> {
    params
        .get("chat_id")
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "Bad Request: chat not found"))
}

fn send_message(bot: &Bot, params: &HashMap<String, String>) -> Reply {
    let chat_id = match chat_id(params) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    let text = match params.get("text").filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => return reject(StatusCode::BAD_REQUEST, "Bad Request: message text is empty"),
    };
    let mut message = json!({
        "message_id": bot.next_message_id.fetch_add(1, Ordering::Relaxed),
        "date": 0,
        "chat": {"id": chat_id, "type": "private"},
        "text": text,
    });
    if let Some(markup) = params.get("reply_markup") {
        match serde_json::from_str::<Value>(markup) {
            Ok(markup) => message["reply_markup"] = markup,
            Err(_) => return reject(StatusCode::BAD_REQUEST, "Bad Request: can't parse reply keyboard markup JSON object"),
        }
    }
    ok(message)
}

fn send_photo(bot: &Bot, params: &HashMap<String, String>, body: &Bytes) -> Reply {
    let chat_id = match chat_id(params) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    if body.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "Bad Request: there is no photo in the request");
    }
    let mut message = json!({
        "message_id": bot.next_message_id.fetch_add(1, Ordering::Relaxed),
        "date": 0,
        "chat": {"id": chat_id, "type": "private"},
        "photo": [{"file_id": "mock-photo", "file_unique_id": "u1", "file_size": body.len()}],
    });
    if let Some(caption) = params.get("caption") {
        message["caption"] = Value::from(caption.as_str());
    }
    ok(message)
}

async fn get_updates(bot: &Bot, params: &HashMap<String, String>) -> Reply {
    let offset: i64 = params.get("offset").and_then(|o| o.parse().ok()).unwrap_or(0);
    let mut updates = bot.updates.write().await;
    // A positive offset confirms every earlier update.
    updates.retain(|u| u["update_id"].as_i64().unwrap_or(0) >= offset);
    ok(Value::Array(updates.clone()))
}
