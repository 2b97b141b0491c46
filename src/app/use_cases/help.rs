//! Use-Case: Hilfetext laden.

use crate::app::state::MessageLevel;
use crate::app::AppState;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Meldung, wenn der Hilfetext nicht verfügbar ist.
pub const HELP_UNAVAILABLE_MESSAGE: &str = "Help could not be loaded.";

/// Mitgelieferter Hilfetext.
const BUNDLED_HELP: &str = include_str!("../../../assets/help.md");

/// Optionale Hilfedatei neben der Executable (ersetzt den mitgelieferten Text).
pub fn help_override_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("help.md")))
}

/// Lädt den Hilfetext aus `override_path` oder den mitgelieferten Text.
pub fn load_help_text(override_path: Option<&Path>) -> Result<String> {
    let text = match override_path.filter(|p| p.exists()) {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Hilfedatei nicht lesbar: {}", path.display()))?,
        None => BUNDLED_HELP.to_string(),
    };
    anyhow::ensure!(!text.trim().is_empty(), "Hilfetext ist leer");
    Ok(text)
}

/// Öffnet die Hilfe; ist der Text nicht ladbar, erscheint eine Meldung.
pub fn open_help(state: &mut AppState) {
    match load_help_text(help_override_path().as_deref()) {
        Ok(text) => state.ui.help_text = Some(text),
        Err(e) => {
            log::warn!("Hilfe nicht verfügbar: {:#}", e);
            state
                .ui
                .push_message(MessageLevel::Error, HELP_UNAVAILABLE_MESSAGE);
        }
    }
}

/// Schließt die Hilfe.
pub fn close_help(state: &mut AppState) {
    state.ui.help_text = None;
}
