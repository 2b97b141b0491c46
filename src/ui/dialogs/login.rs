use super::password_field;
use crate::app::{AppIntent, UiState};

/// Zeigt den Login-Dialog als modales Fenster.
pub fn show_login_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.login.visible {
        return events;
    }
    let dialog = &mut ui_state.login;

    let mut submit = false;

    egui::Window::new("Log in")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            egui::Grid::new("login_grid").num_columns(2).show(ui, |ui| {
                ui.label("User:");
                ui.text_edit_singleline(&mut dialog.nick);
                ui.end_row();

                ui.label("Password:");
                let response = password_field(ui, &mut dialog.password, &mut dialog.show_password);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.end_row();
            });

            if let Some(error) = &dialog.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Log in").clicked() {
                    submit = true;
                }
                if ui.button("Register...").clicked() {
                    events.push(AppIntent::RegisterRequested);
                }
                if ui.button("Cancel").clicked() {
                    events.push(AppIntent::LoginCancelled);
                }
            });
        });

    if submit {
        events.push(AppIntent::LoginSubmitted {
            nick: dialog.nick.clone(),
            password: dialog.password.clone(),
        });
    }

    events
}
