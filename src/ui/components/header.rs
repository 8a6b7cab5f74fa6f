use eframe::egui;

#[derive(Default)]
pub struct HeaderActions {
    pub reset: bool,
    pub close: bool,
}

pub fn render(ui: &mut egui::Ui, route: &str) -> HeaderActions {
    let mut actions = HeaderActions::default();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong("Clancy AI");
            ui.label(egui::RichText::new("Your Cleanzy Assistant").weak().small());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                actions.close = true;
            }
            if ui.button("⟳").on_hover_text("Reset conversation").clicked() {
                actions.reset = true;
            }
        });
    });
    ui.label(egui::RichText::new(format!("Page: {route}")).weak().small());

    actions
}
