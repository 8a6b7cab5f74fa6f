use crate::api::ChatRequest;

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone)]
pub enum ChatCommand {
    /// Request produced by `ChatSession::begin_send`.
    SendMessage(ChatRequest),
    ResetSession {
        session_id: String,
    },
}
