use crate::app::state::{AnswerMark, QuizState};
use crate::app::AppIntent;
use crate::nav::Problem;

const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 160, 60);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 50, 50);

/// Zeigt die offene Frage als nicht-modales Fenster.
///
/// Nur die Antwort-Auswahl und der Fokus-Wunsch werden hier direkt
/// geschrieben; alles andere läuft über Intents.
pub fn show_problem_window(
    ctx: &egui::Context,
    quiz: &mut QuizState,
    problems: &[Problem],
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(view) = quiz.current.as_mut() else {
        return events;
    };
    let Some(problem) = problems.get(view.problem_index) else {
        return events;
    };
    let mut open = true;

    egui::Window::new(format!(
        "Question {} of {}",
        view.problem_index + 1,
        problems.len()
    ))
    .id(egui::Id::new("problem_window"))
    .open(&mut open)
    .collapsible(false)
    .resizable(true)
    .default_width(440.0)
    .show(ctx, |ui| {
        ui.horizontal(|ui| {
            let arrow = if view.collapsed { "▶" } else { "▼" };
            if ui.small_button(arrow).clicked() {
                events.push(AppIntent::ProblemCollapseToggled);
            }
            ui.strong("Question");
        });
        if !view.collapsed {
            ui.add(egui::Label::new(&problem.text).wrap());
        }

        ui.separator();

        for (display, &original) in view.order.iter().enumerate() {
            let Some(answer) = problem.answers.get(original) else {
                continue;
            };
            let text = match view.marks.get(display).copied().flatten() {
                Some(AnswerMark::Ok) => egui::RichText::new(&answer.text).color(OK_COLOR),
                Some(AnswerMark::Error) => egui::RichText::new(&answer.text).color(ERROR_COLOR),
                None => egui::RichText::new(&answer.text),
            };
            let response = ui.add_enabled(
                !view.checked,
                egui::RadioButton::new(view.selected == Some(display), text),
            );
            if response.clicked() {
                view.selected = Some(display);
            }
            if display == 0 && view.focus_first_answer {
                response.request_focus();
                view.focus_first_answer = false;
            }
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!view.checked, egui::Button::new("Check"))
                .clicked()
            {
                events.push(AppIntent::ProblemCheckRequested {
                    selected: view.selected,
                });
            }
            if ui
                .add_enabled(view.checked, egui::Button::new("Next"))
                .clicked()
            {
                events.push(AppIntent::ProblemNextRequested);
            }
        });
    });

    if !open {
        events.push(AppIntent::ProblemClosed);
    }

    events
}
