use crate::app::{AppIntent, MessageLevel, UiState};

/// Zeigt die älteste offene Meldung; weitere warten in der Queue.
pub fn show_message_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.current_message() else {
        return events;
    };

    let color = match message.level {
        MessageLevel::Info => ctx.style().visuals.text_color(),
        MessageLevel::Warning => egui::Color32::from_rgb(220, 160, 30),
        MessageLevel::Error => egui::Color32::LIGHT_RED,
    };

    egui::Window::new(message.level.title())
        .id(egui::Id::new("message_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.colored_label(color, &message.text);
            ui.add_space(8.0);
            if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(AppIntent::MessageDismissed);
            }
        });

    events
}
