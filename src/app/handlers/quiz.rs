//! Handler für Verlauf, Fragenkatalog und Quiz.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Sitzungsverlauf.
pub fn open_history(state: &mut AppState) {
    use_cases::history::open_history(state);
}

/// Schließt den Sitzungsverlauf.
pub fn close_history(state: &mut AppState) {
    use_cases::history::close_history(state);
}

/// Öffnet den Fragenkatalog.
pub fn open_question_bank(state: &mut AppState) {
    use_cases::quiz::open_question_bank(state);
}

/// Schließt den Fragenkatalog.
pub fn close_question_bank(state: &mut AppState) {
    use_cases::quiz::close_question_bank(state);
}

/// Fordert den Import-Dialog an.
pub fn request_import(state: &mut AppState) {
    use_cases::quiz::request_import_dialog(state);
}

/// Importiert Fragen aus JSON.
pub fn import(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::quiz::import_problems(state, path)
}

/// Zeigt eine Frage.
pub fn open_problem(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::quiz::open_problem(state, index)
}

/// Prüft eine Antwort.
pub fn check(state: &mut AppState, selected: Option<usize>) {
    use_cases::quiz::check_answer(state, selected);
}

/// Nächste Frage.
pub fn next(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::quiz::next_problem(state)
}

/// Klappt den Fragetext um.
pub fn toggle_collapsed(state: &mut AppState) {
    use_cases::quiz::toggle_collapsed(state);
}

/// Schließt die Frage.
pub fn close_problem(state: &mut AppState) {
    use_cases::quiz::close_problem(state);
}
