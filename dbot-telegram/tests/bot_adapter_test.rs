//! Integration tests for [`dbot_telegram::TelegramBotAdapter`] against a mock Bot API server.
//!
//! Teloxide request path format is `/bot<token>/<method>`.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use dbot_core::{Bot, Chat, Choice, Message, User};
use dbot_telegram::{TelegramBotAdapter, TelegramConfig};
use serde_json::{json, Value};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

const SENT_MESSAGE_BODY: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 2,
        "date": 1706529600,
        "chat": {"id": 123, "type": "private", "first_name": "Test"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "FilterBot", "username": "filterbot"},
        "text": "ok"
    }
}"#;

fn adapter_for(server: &mockito::ServerGuard) -> TelegramBotAdapter {
    let config = TelegramConfig {
        bot_token: TEST_BOT_TOKEN.to_string(),
        telegram_api_url: Some(server.url()),
    };
    TelegramBotAdapter::new(config.build_bot().expect("valid mock url"))
}

fn chat() -> Chat {
    Chat {
        id: 123,
        chat_type: "private".to_string(),
    }
}

fn send_message_path() -> String {
    format!("/bot{}/SendMessage", TEST_BOT_TOKEN)
}

/// Mocks `sendMessage` with a successful response and keeps the last request body as JSON.
async fn record_send_message(
    server: &mut mockito::ServerGuard,
) -> (mockito::Mock, Arc<Mutex<Option<Value>>>) {
    let recorded = Arc::new(Mutex::new(None));
    let sink = recorded.clone();
    let mock = server
        .mock("POST", send_message_path().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |request| {
            let body = request
                .body()
                .ok()
                .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());
            *sink.lock().unwrap() = body;
            SENT_MESSAGE_BODY.as_bytes().to_vec()
        })
        .create_async()
        .await;
    (mock, recorded)
}

/// **Test: send_choices posts one inline keyboard row per choice, carrying the tokens.**
#[tokio::test]
async fn test_send_choices_sends_inline_keyboard() {
    let mut server = mockito::Server::new_async().await;
    let (mock, recorded) = record_send_message(&mut server).await;

    let adapter = adapter_for(&server);
    adapter
        .send_choices(
            &chat(),
            "Choose an option:",
            &[
                Choice::new("Show messages with filter word", "show_with_filter"),
                Choice::new("Show messages without filter word", "show_without_filter"),
            ],
        )
        .await
        .expect("send_choices must succeed");

    mock.assert_async().await;
    let body = recorded.lock().unwrap().clone().expect("request body is JSON");
    assert_eq!(body["chat_id"], json!(123));
    assert_eq!(body["text"], json!("Choose an option:"));
    assert_eq!(
        body["reply_markup"]["inline_keyboard"],
        json!([
            [{"text": "Show messages with filter word", "callback_data": "show_with_filter"}],
            [{"text": "Show messages without filter word", "callback_data": "show_without_filter"}]
        ])
    );
}

/// **Test: reply_to threads the reply onto the original message id.**
#[tokio::test]
async fn test_reply_to_sets_reply_parameters() {
    let mut server = mockito::Server::new_async().await;
    let (mock, recorded) = record_send_message(&mut server).await;

    let message = Message {
        id: "42".to_string(),
        user: User::anonymous(),
        chat: chat(),
        content: "I saw a cat today".to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    };

    let adapter = adapter_for(&server);
    adapter
        .reply_to(&message, "The sentence contains the word!")
        .await
        .expect("reply_to must succeed");

    mock.assert_async().await;
    let body = recorded.lock().unwrap().clone().expect("request body is JSON");
    assert_eq!(body["chat_id"], json!(123));
    assert_eq!(body["text"], json!("The sentence contains the word!"));
    assert_eq!(body["reply_parameters"]["message_id"], json!(42));
    assert!(body.get("reply_markup").is_none());
}

/// **Test: send_message sends plain text without threading or keyboard.**
#[tokio::test]
async fn test_send_message_plain_text() {
    let mut server = mockito::Server::new_async().await;
    let (mock, recorded) = record_send_message(&mut server).await;

    let adapter = adapter_for(&server);
    adapter
        .send_message(&chat(), "No messages found.")
        .await
        .expect("send_message must succeed");

    mock.assert_async().await;
    let body = recorded.lock().unwrap().clone().expect("request body is JSON");
    assert_eq!(body["text"], json!("No messages found."));
    assert!(body.get("reply_parameters").is_none());
    assert!(body.get("reply_markup").is_none());
}

/// **Test: an API error surfaces as DbotError::Bot instead of panicking.**
#[tokio::test]
async fn test_send_message_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", send_message_path().as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let adapter = adapter_for(&server);
    let result = adapter.send_message(&chat(), "hello").await;

    assert!(matches!(result, Err(dbot_core::DbotError::Bot(_))));
}
