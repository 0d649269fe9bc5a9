//! Test data helpers for creating test objects
//!
//! Telegram objects are built from their Bot API JSON so the tests do not
//! depend on teloxide's struct layout.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use teloxide::types::{InlineQuery, Me, Message, Update};

/// Parse through text; teloxide's custom deserializers reject an in-memory `Value`
fn parse<T: DeserializeOwned>(json: Value) -> T {
    serde_json::from_str(&json.to_string()).expect("valid Telegram JSON")
}

fn test_user_json(user_id: i64) -> Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "TestUser",
        "username": "testuser",
        "language_code": "ru"
    })
}

fn base_message(user_id: i64, chat_id: i64) -> Value {
    json!({
        "message_id": 1,
        "date": 1640995200,
        "from": test_user_json(user_id),
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "TestUser",
            "username": "testuser"
        }
    })
}

/// Helper function to create a test text message
pub fn create_test_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    parse(text_message(user_id, chat_id, text))
}

fn text_message(user_id: i64, chat_id: i64, text: &str) -> Value {
    let mut message = base_message(user_id, chat_id);
    message["text"] = json!(text);
    if text.starts_with('/') {
        let length = text.split_whitespace().next().map_or(0, |c| c.chars().count());
        message["entities"] = json!([{ "type": "bot_command", "offset": 0, "length": length }]);
    }
    message
}

fn web_app_message(user_id: i64, chat_id: i64, data: &str) -> Value {
    let mut message = base_message(user_id, chat_id);
    message["web_app_data"] = json!({
        "data": data,
        "button_text": "Открыть инструменты"
    });
    message
}

/// Helper function to create a `web_app_data` service message
pub fn create_web_app_message(user_id: i64, chat_id: i64, data: &str) -> Message {
    parse(web_app_message(user_id, chat_id, data))
}

/// Helper function to create a test inline query
pub fn create_inline_query(user_id: i64, query: &str) -> InlineQuery {
    parse(json!({
        "id": "inline-1",
        "from": test_user_json(user_id),
        "query": query,
        "offset": ""
    }))
}

/// Web-app payload for a menu action
pub fn menu_payload(action: &str, tool: Option<&str>) -> String {
    match tool {
        Some(tool) => json!({ "action": action, "tool": tool }).to_string(),
        None => json!({ "action": action }).to_string(),
    }
}

fn message_update(message: Value) -> Update {
    parse(json!({ "update_id": 1, "message": message }))
}

/// Whole update carrying a text message, as the dispatcher receives it
pub fn create_text_update(user_id: i64, chat_id: i64, text: &str) -> Update {
    message_update(text_message(user_id, chat_id, text))
}

/// Whole update carrying a `web_app_data` service message
pub fn create_web_app_update(user_id: i64, chat_id: i64, data: &str) -> Update {
    message_update(web_app_message(user_id, chat_id, data))
}

/// Identity of the bot under test
pub fn create_test_me() -> Me {
    parse(json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "AIFactoryBot",
        "username": "aifactory_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": true,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
}
