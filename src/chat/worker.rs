use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent};

use super::session::ChatBackend;

/// Background task running chat calls for the UI thread.
///
/// Each command is served on its own task so that a slow reply never blocks
/// a reset; ordering of the log is kept by the session's `pending` guard on
/// the UI side, not here.
pub struct ChatWorker<B: ?Sized> {
    backend: Arc<B>,
    event_sender: mpsc::Sender<ChatEvent>,
    command_receiver: mpsc::Receiver<ChatCommand>,
}

impl<B> ChatWorker<B>
where
    B: ChatBackend + ?Sized + 'static,
{
    pub fn new(
        backend: Arc<B>,
        event_sender: mpsc::Sender<ChatEvent>,
        command_receiver: mpsc::Receiver<ChatCommand>,
    ) -> Self {
        Self {
            backend,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until every command sender is dropped. In-flight calls are not
    /// cancelled and still report back.
    pub async fn run(mut self) {
        log::info!("Chat worker started");
        while let Some(command) = self.command_receiver.recv().await {
            let backend = Arc::clone(&self.backend);
            let event_sender = self.event_sender.clone();
            tokio::spawn(async move {
                let event = handle_command(backend.as_ref(), command).await;
                if let Err(err) = event_sender.send(event).await {
                    log::warn!("Failed to notify UI about chat result: {err}");
                }
            });
        }
        log::info!("Chat worker stopped");
    }
}

async fn handle_command<B>(backend: &B, command: ChatCommand) -> ChatEvent
where
    B: ChatBackend + ?Sized,
{
    match command {
        ChatCommand::SendMessage(request) => {
            ChatEvent::ReplyReceived(backend.send_message(&request).await)
        }
        ChatCommand::ResetSession { session_id } => {
            ChatEvent::ResetCompleted(backend.reset(&session_id).await)
        }
    }
}
