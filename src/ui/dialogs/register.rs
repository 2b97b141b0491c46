use super::file_dialogs::pick_avatar;
use super::{avatar_preview, issue_list, password_field};
use crate::app::{AppIntent, RegistrationForm, UiState};

/// Zeigt den Registrierungsdialog.
pub fn show_register_dialog(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.register.visible {
        return events;
    }
    let dialog = &mut ui_state.register;

    egui::Window::new("Register")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(340.0);

            egui::Grid::new("register_grid").num_columns(2).show(ui, |ui| {
                ui.label("User:");
                ui.text_edit_singleline(&mut dialog.nick);
                ui.end_row();

                ui.label("Password:");
                password_field(ui, &mut dialog.password, &mut dialog.show_password);
                ui.end_row();

                ui.label("E-mail:");
                ui.text_edit_singleline(&mut dialog.email);
                ui.end_row();

                ui.label("Birth date:");
                ui.add(
                    egui_extras::DatePickerButton::new(&mut dialog.birth_date)
                        .id_salt("register_birth_date"),
                );
                ui.end_row();

                ui.label("Avatar:");
                ui.horizontal(|ui| {
                    avatar_preview(ui, dialog.avatar.as_deref());
                    if ui.button("Choose...").clicked() {
                        match pick_avatar() {
                            Some(Ok(png)) => dialog.avatar = Some(png),
                            Some(Err(message)) => dialog.issues = vec![message],
                            None => {}
                        }
                    }
                });
                ui.end_row();
            });

            if !dialog.issues.is_empty() {
                ui.add_space(6.0);
                issue_list(ui, &dialog.issues);
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Register").clicked() {
                    events.push(AppIntent::RegisterSubmitted {
                        form: RegistrationForm {
                            nick: dialog.nick.clone(),
                            password: dialog.password.clone(),
                            email: dialog.email.clone(),
                            birth_date: dialog.birth_date,
                            avatar: dialog.avatar.clone(),
                        },
                    });
                }
                if ui.button("Cancel").clicked() {
                    events.push(AppIntent::RegisterCancelled);
                }
            });
        });

    events
}
