//! Use-Cases für Fragenkatalog und Quiz-Sitzungen.

use crate::app::state::{AnswerMark, MessageLevel, ProblemView};
use crate::app::AppState;
use crate::nav::{Problem, Session};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;

/// Öffnet den Fragenkatalog (nur angemeldet).
pub fn open_question_bank(state: &mut AppState) {
    if !state.account.is_logged_in() {
        log::warn!("Fragenkatalog ohne Anmeldung angefordert");
        return;
    }
    state.ui.question_bank.visible = true;
    state.ui.question_bank.selected = None;
}

/// Schließt den Fragenkatalog.
pub fn close_question_bank(state: &mut AppState) {
    state.ui.question_bank.visible = false;
}

/// Fordert den Dateidialog für den Import an.
pub fn request_import_dialog(state: &mut AppState) {
    state.ui.show_problems_import_dialog = true;
}

/// Ersetzt alle Fragen durch den Inhalt einer JSON-Datei.
pub fn import_problems(state: &mut AppState, path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Fragen-Datei nicht lesbar: {}", path))?;
    let problems: Vec<Problem> = serde_json::from_str(&content)
        .with_context(|| format!("Fragen-Datei fehlerhaft: {}", path))?;
    let navigation = state
        .account
        .navigation
        .as_mut()
        .context("Keine Datenbank geöffnet")?;
    let stored = navigation
        .replace_problems(&problems)
        .context("Fragen konnten nicht gespeichert werden")?;
    log::info!("{} von {} Fragen importiert aus {}", stored, problems.len(), path);
    state.quiz.current = None;
    state.ui.question_bank.selected = None;
    state
        .ui
        .push_message(MessageLevel::Info, format!("{} questions imported.", stored));
    Ok(())
}

fn problems(state: &AppState) -> &[Problem] {
    state
        .account
        .navigation
        .as_ref()
        .map_or(&[], |nav| nav.problems())
}

/// Zeigt eine Frage mit neu gemischten Antworten.
pub fn open_problem(state: &mut AppState, index: usize) -> Result<()> {
    let answer_count = problems(state)
        .get(index)
        .map(|p| p.answers.len())
        .with_context(|| format!("Frage {} existiert nicht", index))?;
    let mut order: Vec<usize> = (0..answer_count).collect();
    order.shuffle(&mut rand::thread_rng());
    state.quiz.current = Some(ProblemView::new(index, order));
    Ok(())
}

/// Prüft die gewählte Antwort (Anzeige-Index).
///
/// Ohne Auswahl wird nur die erste Antwort fokussiert. Jede Prüfung zählt
/// einen Treffer oder Fehler.
pub fn check_answer(state: &mut AppState, selected: Option<usize>) {
    let Some(view) = state.quiz.current.as_ref() else {
        return;
    };
    if view.checked {
        return;
    }
    let Some(display) = selected else {
        if let Some(view) = state.quiz.current.as_mut() {
            view.focus_first_answer = true;
        }
        return;
    };
    let Some(problem) = problems(state).get(view.problem_index) else {
        return;
    };
    let valid: Vec<bool> = view
        .order
        .iter()
        .map(|&original| problem.answers.get(original).is_some_and(|a| a.valid))
        .collect();
    let Some(&is_hit) = valid.get(display) else {
        return;
    };

    let Some(view) = state.quiz.current.as_mut() else {
        return;
    };
    view.marks[display] = Some(if is_hit {
        AnswerMark::Ok
    } else {
        AnswerMark::Error
    });
    if !is_hit {
        if let Some(correct) = valid.iter().position(|&v| v) {
            view.marks[correct] = Some(AnswerMark::Ok);
        }
    }
    view.checked = true;
    view.focus_first_answer = false;

    if is_hit {
        state.quiz.hits += 1;
    } else {
        state.quiz.faults += 1;
    }
    log::debug!(
        "Antwort geprüft: {} (Treffer {}, Fehler {})",
        if is_hit { "richtig" } else { "falsch" },
        state.quiz.hits,
        state.quiz.faults
    );
}

/// Nächste Frage (zyklisch).
pub fn next_problem(state: &mut AppState) -> Result<()> {
    let count = problems(state).len();
    let Some(view) = state.quiz.current.as_ref() else {
        return Ok(());
    };
    if count == 0 {
        state.quiz.current = None;
        return Ok(());
    }
    let next = (view.problem_index + 1) % count;
    open_problem(state, next)
}

/// Klappt den Fragetext ein oder aus.
pub fn toggle_collapsed(state: &mut AppState) {
    if let Some(view) = state.quiz.current.as_mut() {
        view.collapsed = !view.collapsed;
    }
}

/// Schließt das Fragenfenster.
pub fn close_problem(state: &mut AppState) {
    state.quiz.current = None;
}

/// Speichert Treffer/Fehler seit der Anmeldung als Sitzung.
///
/// Ohne Antworten oder ohne Anmeldung passiert nichts.
pub fn flush_session(state: &mut AppState) -> Result<()> {
    if !state.quiz.has_results() {
        return Ok(());
    }
    let Some(nick) = state.account.current_nick().map(str::to_string) else {
        return Ok(());
    };
    let session = Session::new(
        chrono::Local::now().naive_local(),
        state.quiz.hits,
        state.quiz.faults,
    );
    let navigation = state
        .account
        .navigation
        .as_mut()
        .context("Keine Datenbank geöffnet")?;
    navigation
        .add_session(&nick, session)
        .with_context(|| format!("Sitzung für {} konnte nicht gespeichert werden", nick))?;
    log::info!(
        "Sitzung gespeichert für {}: {} Treffer, {} Fehler",
        nick,
        state.quiz.hits,
        state.quiz.faults
    );
    state.quiz.reset_counters();
    Ok(())
}
