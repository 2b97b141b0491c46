//! Handler für Hilfe, Meldungen, Optionen und Beenden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoCalibration;
use crate::shared::ChartOptions;

/// Öffnet die Hilfe.
pub fn open_help(state: &mut AppState) {
    use_cases::help::open_help(state);
}

/// Schließt die Hilfe.
pub fn close_help(state: &mut AppState) {
    use_cases::help::close_help(state);
}

/// Entfernt die angezeigte Meldung.
pub fn dismiss_message(state: &mut AppState) {
    state.ui.messages.pop_front();
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: ChartOptions) -> anyhow::Result<()> {
    state.options = options;
    sync_with_options(state);
    let path = ChartOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    let keep_chart = state.options.last_chart_path.take();
    let keep_database = state.options.database_path.take();
    state.options = ChartOptions {
        last_chart_path: keep_chart,
        database_path: keep_database,
        ..ChartOptions::default()
    };
    sync_with_options(state);
    let path = ChartOptions::config_path();
    state.options.save_to_file(&path)
}

/// Überträgt Kalibrierung und Zoom-Grenzen aus den Optionen.
fn sync_with_options(state: &mut AppState) {
    state.view.calibration = GeoCalibration::from_options_or_default(
        &state.options.geo_reference_a,
        &state.options.geo_reference_b,
    );
    state.view.camera.zoom = state.options.clamp_zoom(state.view.camera.zoom);
}

/// Sichert die Quiz-Sitzung und signalisiert das Beenden.
pub fn request_exit(state: &mut AppState) -> anyhow::Result<()> {
    let flushed = use_cases::quiz::flush_session(state);
    state.should_exit = true;
    flushed
}
