use egui_extras::{Column, TableBuilder};

use crate::app::use_cases::history::{filter_sessions, totals};
use crate::app::{AppIntent, UiState};
use crate::nav::User;

const NO_SESSIONS: &str = "No sessions recorded yet.";
const NO_SESSIONS_IN_RANGE: &str = "No sessions in the selected range.";

/// Zeigt den Sitzungsverlauf des angemeldeten Benutzers.
pub fn show_history_dialog(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    user: Option<&User>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.history.visible {
        return events;
    }
    let Some(user) = user else {
        return events;
    };
    let dialog = &mut ui_state.history;
    let mut open = true;

    egui::Window::new(format!("History of {}", user.nick_name))
        .id(egui::Id::new("history_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("From:");
                ui.add(egui_extras::DatePickerButton::new(&mut dialog.from).id_salt("history_from"));
                ui.label("To:");
                ui.add(egui_extras::DatePickerButton::new(&mut dialog.to).id_salt("history_to"));
            });

            ui.separator();

            if user.sessions.iter().all(|s| s.time_stamp.is_none()) {
                ui.label(NO_SESSIONS);
                return;
            }

            let rows = filter_sessions(&user.sessions, dialog.from, dialog.to);
            if rows.is_empty() {
                ui.label(NO_SESSIONS_IN_RANGE);
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(320.0)
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Date");
                    });
                    header.col(|ui| {
                        ui.strong("Hits");
                    });
                    header.col(|ui| {
                        ui.strong("Faults");
                    });
                })
                .body(|mut body| {
                    for session in &rows {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                if let Some(ts) = session.time_stamp {
                                    ui.label(ts.format("%Y-%m-%d %H:%M").to_string());
                                }
                            });
                            row.col(|ui| {
                                ui.label(session.hits.to_string());
                            });
                            row.col(|ui| {
                                ui.label(session.faults.to_string());
                            });
                        });
                    }
                });

            let sum = totals(&rows);
            ui.separator();
            ui.label(format!(
                "Sessions: {} | Hits: {} | Faults: {}",
                sum.sessions, sum.hits, sum.faults
            ));
        });

    if !open {
        events.push(AppIntent::HistoryClosed);
    }

    events
}
