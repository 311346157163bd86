use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_updates, DEFAULT_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn bot_request(method: &str, query: &str, body: &str) -> Request<String> {
    let uri = if query.is_empty() {
        format!("/bot{DEFAULT_TOKEN}/{method}")
    } else {
        format!("/bot{DEFAULT_TOKEN}/{method}?{query}")
    };
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "multipart/form-data")
        .body(body.to_string())
        .unwrap()
}

// --- getMe ---

#[tokio::test]
async fn get_me_returns_bot_user() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("getMe", "", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["result"]["is_bot"], true);
    assert_eq!(body["result"]["username"], "mock_bot");
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let resp = app("other:token")
        .oneshot(bot_request("getMe", "", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"ok": false, "error_code": 401, "description": "Unauthorized"}));
}

#[tokio::test]
async fn json_content_type_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri(format!("/bot{DEFAULT_TOKEN}/getMe"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(String::new())
        .unwrap();
    let resp = app(DEFAULT_TOKEN).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_method_is_not_found_envelope() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("sendTelepathy", "", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["description"], "Not Found: method not found");
}

#[tokio::test]
async fn unrouted_path_has_empty_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/nowhere/at/all")
        .body(String::new())
        .unwrap();
    let resp = app(DEFAULT_TOKEN).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- sendMessage ---

#[tokio::test]
async fn send_message_echoes_text() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("sendMessage", "chat_id=42&text=hello%20there", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["message_id"], 1);
    assert_eq!(body["result"]["chat"]["id"], 42);
    assert_eq!(body["result"]["text"], "hello there");
}

#[tokio::test]
async fn send_message_parses_reply_markup() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request(
            "sendMessage",
            "chat_id=1&text=x&reply_markup=%7B%22force_reply%22%3Atrue%7D",
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["reply_markup"], json!({"force_reply": true}));
}

#[tokio::test]
async fn send_message_without_text_is_bad_request() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("sendMessage", "chat_id=42", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["description"], "Bad Request: message text is empty");
}

// --- sendPhoto ---

#[tokio::test]
async fn send_photo_reports_body_size() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("sendPhoto", "chat_id=7&caption=cat", "0123456789"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["photo"][0]["file_size"], 10);
    assert_eq!(body["result"]["caption"], "cat");
}

#[tokio::test]
async fn send_photo_without_body_is_bad_request() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(bot_request("sendPhoto", "chat_id=7", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- getUpdates ---

#[tokio::test]
async fn get_updates_honors_offset() {
    use tower::Service;

    let updates = vec![
        json!({"update_id": 1, "message": {"message_id": 1, "text": "a"}}),
        json!({"update_id": 2, "poll": {"id": "p"}}),
    ];
    let mut svc = app_with_updates(DEFAULT_TOKEN, updates).into_service();

    // all pending
    let resp = ServiceExt::ready(&mut svc)
        .await
        .unwrap()
        .call(bot_request("getUpdates", "", ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["result"].as_array().unwrap().len(), 2);

    // confirm the first
    let resp = ServiceExt::ready(&mut svc)
        .await
        .unwrap()
        .call(bot_request("getUpdates", "offset=2", ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["result"], json!([{"update_id": 2, "poll": {"id": "p"}}]));

    // confirmed updates are gone
    let resp = ServiceExt::ready(&mut svc)
        .await
        .unwrap()
        .call(bot_request("getUpdates", "", ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["result"].as_array().unwrap().len(), 1);
}
