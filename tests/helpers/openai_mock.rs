//! Mock completion API server
//!
//! Simulates the chat-completions and assistants endpoints with wiremock.

use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const THREAD_ID: &str = "thread_test";
pub const RUN_ID: &str = "run_test";

/// Mock completion API server for testing
pub struct OpenAiMockServer {
    pub server: MockServer,
}

impl OpenAiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to put into `completion.base_url`
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Answer chat completions with `content`
    pub async fn mock_chat_completion(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Fail chat completions with the given HTTP status
    pub async fn mock_chat_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "message": "upstream failure", "type": "server_error" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount thread creation, message creation and run creation
    ///
    /// The run starts `queued`; every poll answers with `final_status`.
    pub async fn mock_assistant_run(&self, final_status: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/threads"))
            .and(header("openai-beta", "assistants=v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": THREAD_ID,
                "object": "thread"
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/v1/threads/{}/messages", THREAD_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_user",
                "object": "thread.message",
                "role": "user"
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/v1/threads/{}/runs", THREAD_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": RUN_ID,
                "object": "thread.run",
                "status": "queued"
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/v1/threads/{}/runs/{}", THREAD_ID, RUN_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": RUN_ID,
                "object": "thread.run",
                "status": final_status,
                "last_error": if final_status == "failed" {
                    json!({ "code": "server_error", "message": "run crashed" })
                } else {
                    json!(null)
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Newest-first message list whose first assistant message carries `answer`
    pub async fn mock_thread_messages(&self, answer: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/threads/{}/messages", THREAD_ID)))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [
                    {
                        "id": "msg_answer",
                        "role": "assistant",
                        "content": [{ "type": "text", "text": { "value": answer, "annotations": [] } }]
                    },
                    {
                        "id": "msg_user",
                        "role": "user",
                        "content": [{ "type": "text", "text": { "value": "question", "annotations": [] } }]
                    }
                ]
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of run status polls received so far
    pub async fn run_polls(&self) -> usize {
        let run_path = format!("/v1/threads/{}/runs/{}", THREAD_ID, RUN_ID);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.method.as_str() == "GET" && req.url.path() == run_path)
            .count()
    }
}
