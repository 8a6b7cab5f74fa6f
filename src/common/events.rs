use crate::api::{ChatReply, RequestError, ResetReply};

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug)]
pub enum ChatEvent {
    ReplyReceived(Result<ChatReply, RequestError>),
    ResetCompleted(Result<ResetReply, RequestError>),
}
