use eframe::egui;

use crate::chat::{LinkRenderer, RenderSpan, SpanKind};
use crate::common::{Message, Sender};

/// Draws the conversation. Returns the in-app path of a clicked internal link.
pub fn render(
    ui: &mut egui::Ui,
    messages: &[Message],
    renderer: &LinkRenderer,
    pending: bool,
) -> Option<String> {
    let mut navigate_to = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let layout = match message.sender {
                    Sender::User => egui::Layout::top_down(egui::Align::Max),
                    Sender::Bot => egui::Layout::top_down(egui::Align::Min),
                };
                ui.with_layout(layout, |ui| {
                    let fill = match message.sender {
                        Sender::User => ui.visuals().selection.bg_fill,
                        Sender::Bot => ui.visuals().faint_bg_color,
                    };
                    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_max_width(ui.available_width() * 0.8);
                        if message.is_from_bot() {
                            if let Some(path) = render_spans(ui, &renderer.render(&message.text)) {
                                navigate_to = Some(path);
                            }
                        } else {
                            ui.label(&message.text);
                        }
                        let local = message.timestamp.with_timezone(&chrono::Local);
                        ui.label(egui::RichText::new(local.format("%H:%M").to_string()).weak().small());
                    });
                });
                ui.add_space(6.0);
            }

            if pending {
                ui.spinner();
            }
        });

    navigate_to
}

fn render_spans(ui: &mut egui::Ui, spans: &[RenderSpan]) -> Option<String> {
    let mut navigate_to = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            match (span.kind, span.target.as_deref()) {
                (SpanKind::InternalLink, Some(path)) => {
                    if ui.link(&span.content).on_hover_text(path).clicked() {
                        navigate_to = Some(path.to_string());
                    }
                }
                (SpanKind::ExternalLink, Some(url)) => {
                    let response = ui.add(
                        egui::Hyperlink::from_label_and_url(&span.content, url)
                            .open_in_new_tab(true),
                    );
                    if let Some(rel) = span.rel() {
                        response.on_hover_text(format!("{url} (opens in new tab, rel=\"{rel}\")"));
                    }
                }
                _ => {
                    ui.label(&span.content);
                }
            }
        }
    });
    navigate_to
}
