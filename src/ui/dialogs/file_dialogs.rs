use crate::app::{AppIntent, UiState};
use crate::nav::avatar::avatar_png_from_file;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Karte öffnen
    if ui_state.show_chart_dialog {
        ui_state.show_chart_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Chart image", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::ChartFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Fragen-Import
    if ui_state.show_problems_import_dialog {
        ui_state.show_problems_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Questions (JSON)", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ProblemsFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Wählt ein Avatar-Bild und kodiert es als PNG.
///
/// `None` bei Abbruch, sonst das PNG oder eine anzeigbare Fehlermeldung.
pub(super) fn pick_avatar() -> Option<Result<Vec<u8>, String>> {
    let path = rfd::FileDialog::new()
        .add_filter("Image", &["png", "jpg", "jpeg"])
        .pick_file()?;
    Some(avatar_png_from_file(&path).map_err(|e| {
        log::warn!("Avatar nicht lesbar: {}", e);
        format!("Avatar could not be loaded: {}", e)
    }))
}
