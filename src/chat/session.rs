use async_trait::async_trait;
use uuid::Uuid;

use crate::api::{ChatReply, ChatRequest, RequestError, ResetReply};
use crate::common::{Message, Notification, Sender};

pub const WELCOME_TEXT: &str =
    "Hi! I'm Clancy AI, your Cleanzy assistant. How can I help you today? 🌱";
pub const RESET_WELCOME_TEXT: &str = "Chat reset! How can I help you today? 🌱";
pub const APOLOGY_TEXT: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again in a moment.";

pub const SEND_FAILED_NOTICE: &str = "Failed to get response from Clancy AI";
pub const RESET_DONE_NOTICE: &str = "Chat conversation reset";
pub const RESET_FAILED_NOTICE: &str = "Failed to reset chat";

const WELCOME_ID: &str = "welcome";
const RESET_WELCOME_ID: &str = "welcome-reset";

/// Remote side of a chat session.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, RequestError>;
    async fn reset(&self, session_id: &str) -> Result<ResetReply, RequestError>;
}

/// What a call to [`ChatSession::send`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or another request was still outstanding.
    Ignored,
    Replied,
    /// The apology message was appended; the notification should be shown.
    Failed(Notification),
}

/// Conversation state of one chat widget.
///
/// The log only grows by `user` then `bot` pairs: `pending` is raised when
/// the user message is appended and lowered when its answer (or the apology
/// replacing it) is appended, and no new send is accepted in between.
#[derive(Debug, Clone)]
pub struct ChatSession {
    session_id: String,
    messages: Vec<Message>,
    pending: bool,
    open: bool,
    next_seq: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_session_id(format!("session-{}", Uuid::new_v4()))
    }

    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: vec![Message::new(WELCOME_ID, WELCOME_TEXT, Sender::Bot)],
            pending: false,
            open: false,
            next_seq: 1,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_seq);
        self.next_seq += 1;
        id
    }

    fn push(&mut self, prefix: &str, text: impl Into<String>, sender: Sender) {
        let id = self.next_id(prefix);
        self.messages.push(Message::new(id, text, sender));
    }

    /// Appends the user's message and returns the request to dispatch, or
    /// `None` when the text is blank or a reply is still outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        if text.trim().is_empty() {
            return None;
        }
        if self.pending {
            log::debug!("Ignoring send while a reply is pending");
            return None;
        }

        self.push("user", text, Sender::User);
        self.pending = true;
        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Appends the answer to the outstanding request and lowers `pending`.
    /// An answer with no outstanding request is dropped.
    pub fn complete_send(
        &mut self,
        outcome: Result<ChatReply, RequestError>,
    ) -> Option<Notification> {
        if !self.pending {
            log::debug!("Dropping chat reply for {}: nothing pending", self.session_id);
            return None;
        }

        let notification = match outcome {
            Ok(reply) => {
                self.push("bot", reply.response, Sender::Bot);
                None
            }
            Err(err) => {
                log::warn!(
                    "Chat request for {} failed (status {:?}): {err}",
                    self.session_id,
                    err.status()
                );
                self.push("error", APOLOGY_TEXT, Sender::Bot);
                Some(Notification::Error(SEND_FAILED_NOTICE.to_string()))
            }
        };
        self.pending = false;
        notification
    }

    /// Clears the log only when the backend confirmed the reset.
    pub fn complete_reset(&mut self, outcome: Result<ResetReply, RequestError>) -> Notification {
        match outcome {
            Ok(_) => {
                self.messages = vec![Message::new(
                    RESET_WELCOME_ID,
                    RESET_WELCOME_TEXT,
                    Sender::Bot,
                )];
                Notification::Success(RESET_DONE_NOTICE.to_string())
            }
            Err(err) => {
                log::warn!("Chat reset for {} failed: {err}", self.session_id);
                Notification::Error(RESET_FAILED_NOTICE.to_string())
            }
        }
    }

    /// One full exchange. Failures end up in the log and the returned
    /// outcome, never as an error.
    pub async fn send<B>(&mut self, backend: &B, text: &str) -> SendOutcome
    where
        B: ChatBackend + ?Sized,
    {
        let Some(request) = self.begin_send(text) else {
            return SendOutcome::Ignored;
        };
        let outcome = backend.send_message(&request).await;
        match self.complete_send(outcome) {
            Some(notification) => SendOutcome::Failed(notification),
            None => SendOutcome::Replied,
        }
    }

    pub async fn reset<B>(&mut self, backend: &B) -> Notification
    where
        B: ChatBackend + ?Sized,
    {
        let outcome = backend.reset(&self.session_id).await;
        self.complete_reset(outcome)
    }
}
