use chrono::Utc;
use eframe::egui;
use tokio::sync::mpsc;

use crate::api::RequestError;
use crate::chat::{ChatSession, LinkRenderer};
use crate::common::{ChatCommand, ChatEvent};

use super::components::{chat_area, header, input_bar};
use super::state::UiState;

/// Floating chat widget: a toggle button, and the chat window when open.
pub struct ChatApp {
    session: ChatSession,
    state: UiState,
    renderer: LinkRenderer,
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::Receiver<ChatEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        renderer: LinkRenderer,
        command_sender: mpsc::Sender<ChatCommand>,
        event_receiver: mpsc::Receiver<ChatEvent>,
    ) -> Self {
        let session = ChatSession::new();
        log::info!("Chat session {} created", session.session_id());
        Self {
            session,
            state: UiState::new(),
            renderer,
            command_sender,
            event_receiver,
        }
    }

    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ChatEvent::ReplyReceived(outcome) => {
                    if let Some(notification) = self.session.complete_send(outcome) {
                        self.state.notify(notification);
                    }
                }
                ChatEvent::ResetCompleted(outcome) => {
                    let notification = self.session.complete_reset(outcome);
                    self.state.notify(notification);
                }
            }
        }
    }

    fn send_message(&mut self, text: String) {
        let Some(request) = self.session.begin_send(&text) else {
            return;
        };
        if let Err(err) = self
            .command_sender
            .try_send(ChatCommand::SendMessage(request))
        {
            log::warn!("Failed to send command to chat worker: {err}");
            let failure = RequestError::InvalidRequest("chat worker unavailable".to_string());
            if let Some(notification) = self.session.complete_send(Err(failure)) {
                self.state.notify(notification);
            }
        }
    }

    fn reset_session(&mut self) {
        let command = ChatCommand::ResetSession {
            session_id: self.session.session_id().to_string(),
        };
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send reset command to chat worker: {err}");
            let failure = RequestError::InvalidRequest("chat worker unavailable".to_string());
            let notification = self.session.complete_reset(Err(failure));
            self.state.notify(notification);
        }
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        self.state.expire_toasts(Utc::now());
        if self.state.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("chat_toasts"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .show(ctx, |ui| {
                for toast in &self.state.toasts {
                    let color = if toast.notification.is_error() {
                        egui::Color32::LIGHT_RED
                    } else {
                        egui::Color32::LIGHT_GREEN
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.colored_label(color, toast.notification.text());
                    });
                }
            });
    }

    fn show_chat_window(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut outgoing = None;
        let mut actions = header::HeaderActions::default();
        let mut navigate_to = None;

        egui::Window::new("Clancy AI")
            .title_bar(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .fixed_size([380.0, 560.0])
            .collapsible(false)
            .show(ctx, |ui| {
                actions = header::render(ui, &self.state.route);
                ui.separator();

                egui::TopBottomPanel::bottom("chat_input")
                    .frame(egui::Frame::NONE)
                    .show_inside(ui, |ui| {
                        ui.separator();
                        outgoing = input_bar::render(
                            ui,
                            &mut self.state.input_text,
                            !self.session.is_pending(),
                        );
                        ui.label(egui::RichText::new("Powered by Gemini AI").weak().small());
                    });

                navigate_to = chat_area::render(
                    ui,
                    self.session.messages(),
                    &self.renderer,
                    self.session.is_pending(),
                );
            });

        if actions.close {
            open = false;
        }
        if actions.reset {
            self.reset_session();
        }
        if let Some(text) = outgoing {
            self.send_message(text);
        }
        if let Some(path) = navigate_to {
            self.state.navigate(path);
        }
        self.session.set_open(open);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_chat_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Cleanzy");
            ui.label(format!("Current page: {}", self.state.route));
        });

        if self.session.is_open() {
            self.show_chat_window(ctx);
        } else {
            egui::Area::new(egui::Id::new("chat_toggle"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
                .show(ctx, |ui| {
                    if ui
                        .add(egui::Button::new("💬").min_size(egui::vec2(56.0, 56.0)))
                        .on_hover_text("Chat with Clancy AI")
                        .clicked()
                    {
                        self.session.set_open(true);
                    }
                });
        }

        self.show_toasts(ctx);
        ctx.request_repaint();
    }
}
