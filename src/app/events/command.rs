use crate::app::state::{DrawMode, ProfileForm, RegistrationForm};
use crate::core::InstrumentKind;
use crate::shared::ChartOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datei & Anwendung ===
    /// Seekarten-Dialog anfordern
    RequestOpenChartDialog,
    /// Seekarte laden
    LoadChart { path: String },
    /// Quiz-Sitzung sichern und Anwendung beenden
    RequestExit,

    // === Kamera & Viewport ===
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Ansicht zurücksetzen
    ResetView,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Cursor-Position für Statuszeile merken
    SetCursorWorld { world_pos: Option<glam::Vec2> },

    // === Zeichnen ===
    /// Zeichen-Modus setzen (bricht laufende Gesten ab)
    SetDrawMode { mode: DrawMode },
    /// Rechte Taste gedrückt: an aktives Werkzeug
    ToolPress { world_pos: glam::Vec2 },
    /// Rechte Taste gezogen: an aktives Werkzeug
    ToolDrag { world_pos: glam::Vec2 },
    /// Rechte Taste losgelassen: an aktives Werkzeug
    ToolRelease { world_pos: glam::Vec2 },
    /// Mausbewegung ohne Taste: an aktives Werkzeug (Bogen-Vorschau)
    ToolHover { world_pos: glam::Vec2 },
    /// Text der offenen Eingabe übernehmen
    ConfirmTextEntry { text: String },
    /// Offene Text-Eingabe verwerfen
    CancelTextEntry,
    /// Linienfarbe setzen
    SetLineColor { color: [f32; 4] },
    /// Punktfarbe setzen (färbt alle Punkte um)
    SetPointColor { color: [f32; 4] },
    /// Alle Annotationen entfernen und Modi zurücksetzen
    ClearAnnotations,
    /// Undo
    Undo,
    /// Redo
    Redo,

    // === Instrumente ===
    /// Instrument ein-/ausblenden (erzeugt es beim ersten Einblenden)
    ToggleInstrument { kind: InstrumentKind, visible: bool },
    /// Aktuell gezogenes Instrument setzen
    SetInstrumentDrag { kind: Option<InstrumentKind> },
    /// Instrument um Screen-Delta verschieben
    MoveInstrument {
        kind: InstrumentKind,
        delta_screen: glam::Vec2,
    },
    /// Instrument drehen
    RotateInstrument { kind: InstrumentKind, degrees: f32 },
    /// Zirkel-Öffnung um Rasten ändern
    AdjustCompassOpening { steps: i32 },

    // === Benutzerkonto ===
    /// Login-Dialog öffnen
    OpenLoginDialog,
    /// Login-Dialog schließen
    CloseLoginDialog,
    /// Anmelden
    Login { nick: String, password: String },
    /// Registrierungsdialog öffnen
    OpenRegisterDialog,
    /// Registrierungsdialog schließen
    CloseRegisterDialog,
    /// Benutzer anlegen und anmelden
    Register { form: RegistrationForm },
    /// Profildialog öffnen
    OpenProfileDialog,
    /// Profildialog schließen
    CloseProfileDialog,
    /// Profil speichern
    UpdateProfile { form: ProfileForm },
    /// Quiz-Sitzung sichern und abmelden
    Logout,

    // === Statistik & Fragen ===
    /// Sitzungsverlauf öffnen
    OpenHistory,
    /// Sitzungsverlauf schließen
    CloseHistory,
    /// Fragenkatalog öffnen
    OpenQuestionBank,
    /// Fragenkatalog schließen
    CloseQuestionBank,
    /// Dateidialog für den Fragen-Import anfordern
    RequestImportProblemsDialog,
    /// Fragen aus JSON-Datei importieren (ersetzt alle)
    ImportProblems { path: String },
    /// Frage anzeigen (Antworten neu gemischt)
    OpenProblem { index: usize },
    /// Antwort prüfen
    CheckAnswer { selected: Option<usize> },
    /// Nächste Frage (zyklisch)
    NextProblem,
    /// Fragetext ein-/ausklappen
    ToggleProblemCollapsed,
    /// Fragenfenster schließen
    CloseProblem,

    // === Hilfe, Meldungen, Optionen ===
    /// Hilfe öffnen
    OpenHelp,
    /// Hilfe schließen
    CloseHelp,
    /// Aktuelle Meldung entfernen
    DismissMessage,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: Box<ChartOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
