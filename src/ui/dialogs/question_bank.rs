use crate::app::{AppIntent, UiState};
use crate::nav::Problem;

/// Zeigt den Fragenkatalog; Doppelklick öffnet eine Frage.
pub fn show_question_bank(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    problems: &[Problem],
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.question_bank.visible {
        return events;
    }
    let dialog = &mut ui_state.question_bank;
    let mut open = true;

    egui::Window::new("Question bank")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(460.0)
        .show(ctx, |ui| {
            if problems.is_empty() {
                ui.label("No questions available. Import a JSON file.");
            } else {
                egui::ScrollArea::vertical()
                    .max_height(360.0)
                    .show(ui, |ui| {
                        for (index, problem) in problems.iter().enumerate() {
                            let response = ui.selectable_label(
                                dialog.selected == Some(index),
                                format!("{}. {}", index + 1, problem.text),
                            );
                            if response.clicked() {
                                dialog.selected = Some(index);
                            }
                            if response.double_clicked() {
                                events.push(AppIntent::ProblemOpenRequested { index });
                            }
                        }
                    });
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(dialog.selected.is_some(), egui::Button::new("Open question"))
                    .clicked()
                {
                    if let Some(index) = dialog.selected {
                        events.push(AppIntent::ProblemOpenRequested { index });
                    }
                }
                if ui.button("Import...").clicked() {
                    events.push(AppIntent::ImportProblemsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::QuestionBankClosed);
                }
            });
        });

    if !open {
        events.push(AppIntent::QuestionBankClosed);
    }

    events
}
