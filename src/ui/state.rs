use chrono::{DateTime, Utc};

use crate::common::Notification;

/// How long a toast stays on screen.
const TOAST_SECONDS: i64 = 4;
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: DateTime<Utc>,
}

/// Trạng thái cục bộ của UI.
///
/// Conversation state lives in `ChatSession`; this only holds what the
/// widget itself needs between frames.
pub struct UiState {
    pub input_text: String,
    /// Last in-app path a chat link navigated to.
    pub route: String,
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            route: "/".to_string(),
            toasts: Vec::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(Toast {
            notification,
            shown_at: Utc::now(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    pub fn navigate(&mut self, path: String) {
        log::info!("Navigating to {path}");
        self.route = path;
    }

    /// Drops toasts older than `TOAST_SECONDS`.
    pub fn expire_toasts(&mut self, now: DateTime<Utc>) {
        self.toasts
            .retain(|toast| now.signed_duration_since(toast.shown_at).num_seconds() < TOAST_SECONDS);
    }
}
