use crate::app::history::{EditHistory, Snapshot};
use crate::core::AnnotationStore;
use crate::shared::ChartOptions;
use std::sync::Arc;

use super::{AccountState, EditorState, QuizState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Annotationen auf der Karte (Arc für O(1)-Snapshots)
    pub annotations: Arc<AnnotationStore>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Zeichen-Editor und Instrumente
    pub editor: EditorState,
    /// Datenbank und Anmeldung
    pub account: AccountState,
    /// Quiz-Zähler und offene Frage
    pub quiz: QuizState,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Kalibrierung)
    pub options: ChartOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(ChartOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: ChartOptions) -> Self {
        let mut view = ViewState::new();
        view.camera.zoom = options.clamp_zoom(options.camera_zoom_default);
        view.calibration = crate::core::GeoCalibration::from_options_or_default(
            &options.geo_reference_a,
            &options.geo_reference_b,
        );
        let mut editor = EditorState::new();
        editor.line_color = options.line_color;

        Self {
            annotations: Arc::new(AnnotationStore::new(options.point_color)),
            view,
            ui: UiState::new(),
            editor,
            account: AccountState::new(),
            quiz: QuizState::new(),
            history: EditHistory::new_with_capacity(200),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Annotationen zurück (für UI-Anzeige)
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
