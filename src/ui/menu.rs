//! Top-Menü (File, Edit, View, Navigation, User, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let logged_in = state.account.is_logged_in();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open chart... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenChartRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        state.annotation_count() > 0,
                        egui::Button::new("Clear annotations"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearAnnotationsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset view").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Zoom in (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Navigation", |ui| {
                if ui
                    .add_enabled(logged_in, egui::Button::new("Question bank..."))
                    .clicked()
                {
                    events.push(AppIntent::QuestionBankRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(logged_in, egui::Button::new("History..."))
                    .clicked()
                {
                    events.push(AppIntent::HistoryRequested);
                    ui.close();
                }
            });

            ui.menu_button("User", |ui| {
                let label = if logged_in { "Profile..." } else { "Log in..." };
                if ui.button(label).clicked() {
                    events.push(AppIntent::UserMenuRequested);
                    ui.close();
                }

                if !logged_in && ui.button("Register...").clicked() {
                    events.push(AppIntent::RegisterRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(logged_in, egui::Button::new("Log out"))
                    .clicked()
                {
                    events.push(AppIntent::LogoutRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Help...").clicked() {
                    events.push(AppIntent::HelpRequested);
                    ui.close();
                }

                if ui.button("About").clicked() {
                    log::info!("Carta Náutica v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
