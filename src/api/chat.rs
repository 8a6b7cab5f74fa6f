use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::ChatBackend;

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

/// Session used by the backend when the caller does not name one.
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetReply {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetRequest<'a> {
    session_id: &'a str,
}

/// Client for the assistant endpoints.
#[derive(Debug, Clone)]
pub struct ChatClient {
    requests: RequestClient,
}

impl ChatClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    pub async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, RequestError> {
        let reply: ChatReply = self.requests.post_json(endpoints::CHAT, request).await?;
        if !reply.success {
            return Err(RequestError::Rejected(
                "Failed to get response from Clancy AI".to_string(),
            ));
        }
        Ok(reply)
    }

    pub async fn reset(&self, session_id: &str) -> Result<ResetReply, RequestError> {
        let session_id = if session_id.is_empty() {
            DEFAULT_SESSION_ID
        } else {
            session_id
        };
        let reply: ResetReply = self
            .requests
            .post_json(endpoints::CHAT_RESET, &ResetRequest { session_id })
            .await?;
        if !reply.success {
            return Err(RequestError::Rejected(reply.message));
        }
        log::info!("Chat session {session_id} reset");
        Ok(reply)
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, RequestError> {
        ChatClient::send_message(self, request).await
    }

    async fn reset(&self, session_id: &str) -> Result<ResetReply, RequestError> {
        ChatClient::reset(self, session_id).await
    }
}
