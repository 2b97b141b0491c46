use crate::app::{AppIntent, UiState};

/// Zeigt den Hilfetext.
pub fn show_help_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(text) = &ui_state.help_text else {
        return events;
    };
    let mut open = true;

    egui::Window::new("Help")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([520.0, 420.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(egui::Label::new(text).wrap());
            });
            ui.separator();
            if ui.button("Close").clicked() {
                events.push(AppIntent::HelpClosed);
            }
        });

    if !open {
        events.push(AppIntent::HelpClosed);
    }

    events
}
