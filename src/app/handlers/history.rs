//! Handler für Undo/Redo der Annotationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den letzten Annotations-Stand wieder her.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            log::info!("Undo: {} Annotationen", state.annotations.len());
        }
        None => log::debug!("Undo: nichts zu tun"),
    }
}

/// Wiederholt den zuletzt rückgängig gemachten Schritt.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            log::info!("Redo: {} Annotationen", state.annotations.len());
        }
        None => log::debug!("Redo: nichts zu tun"),
    }
}
